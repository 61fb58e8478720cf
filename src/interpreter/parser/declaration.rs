use crate::{
    ast::{Block, Program, TypeSpec, Var, VarDecl, VarType},
    error::SyntaxError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses `PROGRAM ID ; block .`
    pub(in crate::interpreter::parser) fn program(&mut self) -> ParseResult<Program> {
        self.eat(TokenKind::Program)?;
        let name = self.eat(TokenKind::Id)?.text;
        self.eat(TokenKind::Semi)?;

        let block = self.block()?;
        self.eat(TokenKind::Dot)?;

        Ok(Program { name, block })
    }

    /// Parses the declarations followed by the main compound statement.
    fn block(&mut self) -> ParseResult<Block> {
        let declarations = self.declarations()?;
        let compound = self.compound_statement()?;

        Ok(Block { declarations,
                   compound })
    }

    /// Parses an optional `VAR` section with one or more declaration lists.
    fn declarations(&mut self) -> ParseResult<Vec<VarDecl>> {
        let mut declarations = Vec::new();

        if self.peek() == TokenKind::Var {
            self.eat(TokenKind::Var)?;
            while self.peek() == TokenKind::Id {
                declarations.extend(self.variable_declaration()?);
            }
        }

        Ok(declarations)
    }

    /// Parses `ID (, ID)* : type_spec ;`, producing one declaration per name.
    fn variable_declaration(&mut self) -> ParseResult<Vec<VarDecl>> {
        let mut vars = vec![self.variable()?];
        while self.peek() == TokenKind::Comma {
            self.eat(TokenKind::Comma)?;
            vars.push(self.variable()?);
        }

        self.eat(TokenKind::Colon)?;
        let type_spec = self.type_spec()?;
        self.eat(TokenKind::Semi)?;

        Ok(vars.into_iter()
               .map(|var| VarDecl { var,
                                    type_spec: type_spec.clone() })
               .collect())
    }

    /// Parses one of the four type keywords.
    ///
    /// # Errors
    /// `SyntaxError::UnknownType` for any other token.
    fn type_spec(&mut self) -> ParseResult<TypeSpec> {
        let var_type = match self.peek() {
            TokenKind::IntegerType => VarType::Integer,
            TokenKind::RealType => VarType::Real,
            TokenKind::StringType => VarType::String,
            TokenKind::BooleanType => VarType::Boolean,
            found => {
                let token = self.current();
                return Err(SyntaxError::UnknownType { found,
                                                      line: token.line,
                                                      column: token.column }.into());
            },
        };

        let token = self.eat(self.peek())?;
        Ok(TypeSpec { token, var_type })
    }

    /// Parses an identifier into a variable node.
    pub(in crate::interpreter::parser) fn variable(&mut self) -> ParseResult<Var> {
        let token = self.eat(TokenKind::Id)?;
        Ok(Var { name: token.text.clone(),
                 token })
    }
}
