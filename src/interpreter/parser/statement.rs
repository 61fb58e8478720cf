use crate::{
    ast::{Assign, Compound, Statement},
    error::SyntaxError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses `BEGIN statement_list END`.
    pub(in crate::interpreter::parser) fn compound_statement(&mut self) -> ParseResult<Compound> {
        self.eat(TokenKind::Begin)?;
        let children = self.statement_list()?;
        self.eat(TokenKind::End)?;

        Ok(Compound { children })
    }

    /// Parses `statement (; statement)*`.
    ///
    /// # Errors
    /// `SyntaxError::MissingSemicolon` when the list is followed directly by
    /// the start of another statement.
    fn statement_list(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = vec![self.statement()?];

        while self.peek() == TokenKind::Semi {
            self.eat(TokenKind::Semi)?;
            statements.push(self.statement()?);
        }

        if matches!(self.peek(), TokenKind::Id | TokenKind::Begin) {
            let token = self.current();
            return Err(SyntaxError::MissingSemicolon { found:  token.kind,
                                                       line:   token.line,
                                                       column: token.column, }.into());
        }

        Ok(statements)
    }

    /// Parses a nested compound statement, an assignment, or nothing.
    fn statement(&mut self) -> ParseResult<Statement> {
        match self.peek() {
            TokenKind::Begin => Ok(Statement::Compound(self.compound_statement()?)),
            TokenKind::Id => Ok(Statement::Assign(self.assignment()?)),
            _ => Ok(Statement::Empty),
        }
    }

    /// Parses `ID := expr`.
    fn assignment(&mut self) -> ParseResult<Assign> {
        let target = self.variable()?;
        let token = self.eat(TokenKind::Assign)?;
        let value = self.expr()?;

        Ok(Assign { target,
                    token,
                    value })
    }
}
