/// The tag of a runtime [`Value`](super::core::Value), without its payload.
///
/// Displayed with the names used in diagnostics: `None`, `Integer`, `Real`,
/// `Boolean` and `String`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// No value has been stored yet.
    Absent,
    /// A 64-bit signed integer.
    Integer,
    /// A 64-bit floating-point number.
    Real,
    /// `TRUE` or `FALSE`.
    Boolean,
    /// Text.
    Text,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Absent => "None",
            Self::Integer => "Integer",
            Self::Real => "Real",
            Self::Boolean => "Boolean",
            Self::Text => "String",
        };
        write!(f, "{name}")
    }
}
