#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
    /// Reached the end of input inside a string literal.
    UnterminatedString {
        /// The source line of the opening quote.
        line:   usize,
        /// The source column of the opening quote.
        column: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character,
                                        line,
                                        column, } => write!(f,
                                                            "Error on line {line}, column {column}: Unknown character '{character}'."),
            Self::UnterminatedString { line, column } => {
                write!(f, "Error on line {line}, column {column}: Unterminated string literal.")
            },
        }
    }
}

impl std::error::Error for LexError {}
