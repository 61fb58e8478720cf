use tracing::debug;

use crate::{
    ast::Program,
    error::{Error, SyntaxError},
    interpreter::{
        lexer::Lexer,
        token::{Token, TokenKind},
    },
};

/// Result type used by the parser.
///
/// Parsing pulls tokens on demand, so a parse may fail with either a
/// lexical or a syntax error.
pub type ParseResult<T> = Result<T, Error>;

/// Recursive-descent parser with a single token of lookahead.
///
/// Tokens are pulled from the [`Lexer`] one at a time. The tree is assembled
/// bottom-up; every node owns its children.
///
/// Grammar:
/// ```text
/// program        := PROGRAM ID SEMI block DOT
/// block          := declarations compound_stmt
/// declarations   := ( VAR var_decl+ )?
/// var_decl       := ID (COMMA ID)* COLON type_spec SEMI
/// type_spec      := INTEGER_TYPE | REAL_TYPE | STRING_TYPE | BOOLEAN_TYPE
/// compound_stmt  := BEGIN statement_list END
/// statement_list := statement (SEMI statement)*
/// statement      := compound_stmt | assignment | /* empty */
/// assignment     := ID ASSIGN expr
/// expr           := term ((PLUS | MINUS) term)*
/// term           := factor ((MUL | DIV) factor)*
/// factor         := (PLUS | MINUS) factor | INTEGER | STRING_LITERAL
///                 | BOOLEAN_CONST | LPAREN expr RPAREN | ID
/// ```
///
/// ## Example
/// ```
/// use minipas::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let source = "PROGRAM Demo; VAR a, b: INTEGER; BEGIN a := 1 END.";
/// let program = Parser::new(Lexer::new(source)).unwrap().parse().unwrap();
///
/// assert_eq!(program.name, "DEMO");
/// assert_eq!(program.block.declarations.len(), 2);
/// ```
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser and scans its first lookahead token.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be scanned.
    pub fn new(mut lexer: Lexer<'src>) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses a complete program.
    ///
    /// # Errors
    /// - Any lexical or syntax error found while parsing.
    /// - `SyntaxError::TrailingTokens` if anything follows the final `.`.
    pub fn parse(mut self) -> ParseResult<Program> {
        let program = self.program()?;

        if self.current.kind != TokenKind::Eof {
            return Err(SyntaxError::TrailingTokens { token:  self.current.kind.to_string(),
                                                     line:   self.current.line,
                                                     column: self.current.column, }.into());
        }

        debug!(program = %program.name,
               declarations = program.block.declarations.len(),
               statements = program.block.compound.children.len(),
               "parsed program");
        Ok(program)
    }

    /// Consumes the current token if it has the `expected` kind and returns
    /// it, scanning the next lookahead token.
    ///
    /// # Errors
    /// - `SyntaxError::UnexpectedToken` naming the expected and actual kinds.
    /// - A lexical error from scanning the next token.
    pub(in crate::interpreter::parser) fn eat(&mut self,
                                              expected: TokenKind)
                                              -> ParseResult<Token> {
        if self.current.kind != expected {
            return Err(SyntaxError::UnexpectedToken { expected,
                                                      found: self.current.kind,
                                                      line: self.current.line,
                                                      column: self.current.column }.into());
        }

        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// The kind of the lookahead token.
    pub(in crate::interpreter::parser) const fn peek(&self) -> TokenKind {
        self.current.kind
    }

    /// The lookahead token itself.
    pub(in crate::interpreter::parser) const fn current(&self) -> &Token {
        &self.current
    }
}
