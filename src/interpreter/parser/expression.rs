use crate::{
    ast::{
        BinOp, BinaryOperator, BooleanLiteral, Expr, Num, StringLiteral, UnaryOp, UnaryOperator,
    },
    error::SyntaxError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses additive expressions, the lowest precedence level.
    ///
    /// Grammar: `expr := term ((PLUS | MINUS) term)*`
    ///
    /// Operators are left-associative: `a - b - c` is `(a - b) - c`.
    pub(in crate::interpreter::parser) fn expr(&mut self) -> ParseResult<Expr> {
        let mut node = self.term()?;

        loop {
            let op = match self.peek() {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Sub,
                _ => break,
            };
            let token = self.eat(self.peek())?;
            let right = self.term()?;
            node = Expr::BinOp(BinOp { left: Box::new(node),
                                       op,
                                       token,
                                       right: Box::new(right) });
        }

        Ok(node)
    }

    /// Parses multiplicative expressions.
    ///
    /// Grammar: `term := factor ((MUL | DIV) factor)*`
    fn term(&mut self) -> ParseResult<Expr> {
        let mut node = self.factor()?;

        loop {
            let op = match self.peek() {
                TokenKind::Mul => BinaryOperator::Mul,
                TokenKind::Div => BinaryOperator::Div,
                _ => break,
            };
            let token = self.eat(self.peek())?;
            let right = self.factor()?;
            node = Expr::BinOp(BinOp { left: Box::new(node),
                                       op,
                                       token,
                                       right: Box::new(right) });
        }

        Ok(node)
    }

    /// Parses a single operand, possibly prefixed by unary signs.
    ///
    /// Grammar:
    /// ```text
    /// factor := (PLUS | MINUS) factor | INTEGER | STRING_LITERAL
    ///         | BOOLEAN_CONST | LPAREN expr RPAREN | ID
    /// ```
    ///
    /// Anything else is reported as an unexpected token where an identifier
    /// was expected.
    fn factor(&mut self) -> ParseResult<Expr> {
        match self.peek() {
            TokenKind::Plus | TokenKind::Minus => {
                let op = if self.peek() == TokenKind::Plus {
                    UnaryOperator::Plus
                } else {
                    UnaryOperator::Minus
                };
                let token = self.eat(self.peek())?;
                let operand = self.factor()?;
                Ok(Expr::UnaryOp(UnaryOp { op,
                                           token,
                                           operand: Box::new(operand) }))
            },
            TokenKind::Integer => {
                let token = self.eat(TokenKind::Integer)?;
                let value =
                    token.text
                         .parse::<f64>()
                         .map_err(|_| SyntaxError::InvalidNumber { text:   token.text.clone(),
                                                                   line:   token.line,
                                                                   column: token.column, })?;
                Ok(Expr::Num(Num { token, value }))
            },
            TokenKind::StringLiteral => {
                let token = self.eat(TokenKind::StringLiteral)?;
                Ok(Expr::StringLiteral(StringLiteral { value: token.text.clone(),
                                                       token }))
            },
            TokenKind::BooleanConst => {
                let token = self.eat(TokenKind::BooleanConst)?;
                Ok(Expr::BooleanLiteral(BooleanLiteral { value: token.text == "TRUE",
                                                         token }))
            },
            TokenKind::LParen => {
                self.eat(TokenKind::LParen)?;
                let node = self.expr()?;
                self.eat(TokenKind::RParen)?;
                Ok(node)
            },
            _ => Ok(Expr::Var(self.variable()?)),
        }
    }
}
