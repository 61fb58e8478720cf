/// Lexical errors.
///
/// Raised by the scanner for characters that start no token and for string
/// literals that are never closed.
pub mod lex_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the interpreter executes
/// a program: type mismatches on assignment, non-numeric operands, division by
/// zero and unresolved variables.
pub mod runtime_error;
/// Semantic errors.
///
/// Raised by the pre-execution analysis pass for duplicate declarations and
/// references to undeclared variables.
pub mod semantic_error;
/// Syntax errors.
///
/// Raised by the parser when the token stream does not follow the grammar.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;
pub use syntax_error::SyntaxError;

/// The single error reported for a failed run.
///
/// Every phase aborts on the first failure it detects; the pipeline collapses
/// that failure into one of these variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The scanner rejected the source text.
    Lex(LexError),
    /// The token stream does not follow the grammar.
    Syntax(SyntaxError),
    /// Declarations or variable references are not well-formed.
    Semantic(SemanticError),
    /// Execution failed.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<SemanticError> for Error {
    fn from(e: SemanticError) -> Self {
        Self::Semantic(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Semantic(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Semantic(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
