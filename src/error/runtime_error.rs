use crate::interpreter::value::kind::ValueKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read or assign a variable that is not declared.
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The assigned value cannot be stored in the declared type of the
    /// variable.
    TypeMismatch {
        /// The kind currently stored in the variable.
        expected: ValueKind,
        /// The kind of the assigned value.
        found:    ValueKind,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// A numeric value was expected, but not found.
    UnsupportedOperand {
        /// The kind of the offending operand.
        found:  ValueKind,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line, column } => {
                write!(f, "Error on line {line}, column {column}: Undefined variable '{name}'.")
            },
            Self::TypeMismatch { expected,
                                 found,
                                 line,
                                 column, } => write!(f,
                                                     "Error on line {line}, column {column}: Type mismatch in assignment. Expected {expected}, got {found}."),
            Self::UnsupportedOperand { found, line, column } => {
                write!(f, "Error on line {line}, column {column}: Expected number, got {found}.")
            },
            Self::DivisionByZero { line, column } => {
                write!(f, "Error on line {line}, column {column}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
