use serde::{Serialize, Serializer};

use crate::{
    ast::VarType,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::kind::ValueKind},
    util::num::widen_to_real,
};

/// Represents a runtime value in the interpreter.
///
/// Every declared variable holds one of these, and every expression evaluates
/// to one. Numeric literals always evaluate to `Real`; `Integer` values only
/// arise from declaration defaults and from assignment into an
/// `INTEGER` variable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Nothing stored yet.
    #[default]
    Absent,
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A boolean value (`TRUE` or `FALSE`).
    Boolean(bool),
    /// A text value.
    Text(String),
}

impl Value {
    /// Returns the value a freshly declared variable of `var_type` holds.
    ///
    /// # Example
    /// ```
    /// use minipas::{ast::VarType, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::default_for(VarType::Integer), Value::Integer(0));
    /// assert_eq!(Value::default_for(VarType::Real), Value::Real(0.0));
    /// assert_eq!(Value::default_for(VarType::String), Value::Text(String::new()));
    /// assert_eq!(Value::default_for(VarType::Boolean), Value::Boolean(false));
    /// ```
    #[must_use]
    pub const fn default_for(var_type: VarType) -> Self {
        match var_type {
            VarType::Integer => Self::Integer(0),
            VarType::Real => Self::Real(0.0),
            VarType::String => Self::Text(String::new()),
            VarType::Boolean => Self::Boolean(false),
        }
    }

    /// Returns the kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Absent => ValueKind::Absent,
            Self::Integer(_) => ValueKind::Integer,
            Self::Real(_) => ValueKind::Real,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`.
    ///
    /// # Parameters
    /// - `line`, `column`: Source position for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is real or integer.
    /// - `Err(RuntimeError::UnsupportedOperand)`: For any other kind.
    ///
    /// # Example
    /// ```
    /// use minipas::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(1, 1).unwrap(), 10.0);
    /// assert!(Value::Boolean(true).as_real(1, 1).is_err());
    /// ```
    pub fn as_real(&self, line: usize, column: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(widen_to_real(*n)),
            _ => Err(RuntimeError::UnsupportedOperand { found: self.kind(),
                                                        line,
                                                        column }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => write!(f, "None"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Self::Text(s) => write!(f, "'{s}'"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Real(r) => serializer.serialize_f64(*r),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}
