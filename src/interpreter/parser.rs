/// Parser state and the token-level primitives.
///
/// Holds the `Parser` struct with its single token of lookahead, the `eat`
/// primitive, and the `parse` entry point that rejects trailing input.
pub mod core;
/// Program header, declarations and type specifications.
pub mod declaration;
/// Arithmetic, text and boolean expressions.
///
/// Implements the `expr`/`term`/`factor` precedence levels.
pub mod expression;
/// Compound statements, statement lists and assignments.
pub mod statement;
