use crate::interpreter::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum SyntaxError {
    /// The current token is not the one the grammar requires.
    UnexpectedToken {
        /// The kind the parser expected.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// A new statement starts without a `;` separating it from the previous
    /// one.
    MissingSemicolon {
        /// The kind of the token that starts the dangling statement.
        found:  TokenKind,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Tokens remain after the `.` that ends the program.
    TrailingTokens {
        /// The first extra token.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A declaration names something other than a known type.
    UnknownType {
        /// The kind found where a type was expected.
        found:  TokenKind,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A numeric literal could not be converted to a number.
    InvalidNumber {
        /// The literal text.
        text:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line,
                                    column, } => write!(f,
                                                        "Error on line {line}, column {column}: Syntax error: expected {expected}, got {found}."),
            Self::MissingSemicolon { found, line, column } => write!(f,
                                                                     "Error on line {line}, column {column}: Unexpected {found} in statement list (missing semicolon?)."),
            Self::TrailingTokens { token, line, column } => write!(f,
                                                                   "Error on line {line}, column {column}: Unexpected token after end of program: {token}."),
            Self::UnknownType { found, line, column } => write!(f,
                                                                "Error on line {line}, column {column}: Unknown type specification: {found}."),
            Self::InvalidNumber { text, line, column } => {
                write!(f, "Error on line {line}, column {column}: Invalid numeric literal '{text}'.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
