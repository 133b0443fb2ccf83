/// Numeric conversion helpers.
///
/// This module provides the conversions between `f64`, `i64` and `usize`
/// that the parser and the path builder need, refusing values that would be
/// silently rounded or that are not finite.
pub mod num;
