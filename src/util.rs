/// Numeric conversion helpers.
///
/// This module holds the two conversions the assignment rules rely on:
/// lossless widening from integer to real, and truncation toward zero from
/// real to integer.
pub mod num;
