/// Assignment and the integer/real coercion rules.
pub mod assign;
/// Binary operator evaluation.
///
/// Implements text concatenation and the four arithmetic operators over the
/// floating-point representation, including the division-by-zero check.
pub mod binary;
/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter` struct, its entry point and the `Visitor`
/// implementation that dispatches each node to the evaluation routines.
pub mod core;
/// Unary operator evaluation.
///
/// Implements identity and negation on numeric operands.
pub mod unary;
