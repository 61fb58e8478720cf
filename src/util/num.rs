/// Widens an integer to a real.
///
/// Exact for every magnitude up to `2^53`; integers stored by the interpreter
/// always originate from a truncated `f64`, so they stay within that range
/// unless the source real was already larger.
///
/// ## Example
/// ```
/// use minipas::util::num::widen_to_real;
///
/// assert_eq!(widen_to_real(42), 42.0);
/// assert_eq!(widen_to_real(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn widen_to_real(value: i64) -> f64 {
    value as f64
}

/// Truncates a real toward zero.
///
/// The fractional part is discarded, never rounded. Values outside the `i64`
/// range saturate at its bounds and `NaN` becomes `0`.
///
/// ## Example
/// ```
/// use minipas::util::num::truncate_to_integer;
///
/// assert_eq!(truncate_to_integer(7.9), 7);
/// assert_eq!(truncate_to_integer(-7.9), -7);
/// assert_eq!(truncate_to_integer(0.5), 0);
/// assert_eq!(truncate_to_integer(f64::INFINITY), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn truncate_to_integer(value: f64) -> i64 {
    value as i64
}
