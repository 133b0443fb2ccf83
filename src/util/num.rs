/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// Loop bounds in the language are floats, but loop counters step through
/// integers, so the fractional part is dropped the same way an integer
/// assignment would drop it.
///
/// ## Errors
/// Returns `Err(error)` if the value is NaN, infinite, or its magnitude is
/// larger than [`MAX_SAFE_I64_INT`].
///
/// ## Example
/// ```
/// use turtle_logo::util::num::truncate_to_i64;
///
/// assert_eq!(truncate_to_i64(3.9, "bad bound"), Ok(3));
/// assert_eq!(truncate_to_i64(-2.5, "bad bound"), Ok(-2));
/// assert_eq!(truncate_to_i64(f64::NAN, "bad bound"), Err("bad bound"));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn truncate_to_i64<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() || value.abs() > MAX_SAFE_I64_INT as f64 {
        return Err(error);
    }
    Ok(value.trunc() as i64)
}

/// Converts an `i64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns `Err(error)` if the magnitude exceeds [`MAX_SAFE_I64_INT`].
///
/// ## Example
/// ```
/// use turtle_logo::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big"), Ok(42.0));
/// assert!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1, "too big").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts a `usize` to `f64`, saturating at [`MAX_SAFE_I64_INT`].
///
/// Only used for counts (number of turtles, number of points) where a value
/// that large cannot occur in practice.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    let capped = i64::try_from(value).map_or(MAX_SAFE_I64_INT, |v| v.min(MAX_SAFE_I64_INT));
    capped as f64
}
