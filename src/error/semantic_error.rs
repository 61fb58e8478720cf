#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors detected by semantic analysis, before execution.
pub enum SemanticError {
    /// A name was declared twice in the same scope.
    DuplicateDeclaration {
        /// The name of the variable.
        name:   String,
        /// The source line of the second declaration.
        line:   usize,
        /// The source column of the second declaration.
        column: usize,
    },
    /// A variable is used but never declared.
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateDeclaration { name, line, column } => write!(f,
                                                                        "Error on line {line}, column {column}: Duplicate declaration of identifier '{name}'."),
            Self::UndefinedVariable { name, line, column } => write!(f,
                                                                     "Error on line {line}, column {column}: Semantic error: Undefined variable '{name}'."),
        }
    }
}

impl std::error::Error for SemanticError {}
