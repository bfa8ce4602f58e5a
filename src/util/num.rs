/// Promotes an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` in magnitude are rounded to the closest
/// representable float, so mixed arithmetic never fails on large operands.
///
/// ## Example
/// ```
/// use cinder::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Integer modulo whose result takes the sign of the divisor.
///
/// Returns `None` when `divisor` is zero or the remainder overflows
/// (`i64::MIN % -1`).
///
/// ## Example
/// ```
/// use cinder::util::num::floor_mod_i64;
///
/// assert_eq!(floor_mod_i64(-7, 3), Some(2));
/// assert_eq!(floor_mod_i64(7, -3), Some(-2));
/// assert_eq!(floor_mod_i64(7, 3), Some(1));
/// assert_eq!(floor_mod_i64(7, 0), None);
/// ```
#[must_use]
pub const fn floor_mod_i64(dividend: i64, divisor: i64) -> Option<i64> {
    let Some(rem) = dividend.checked_rem(divisor) else {
        return None;
    };
    if rem != 0 && (rem < 0) != (divisor < 0) {
        Some(rem + divisor)
    } else {
        Some(rem)
    }
}

/// Floating-point modulo whose result takes the sign of the divisor.
///
/// The caller is responsible for rejecting a zero divisor.
///
/// ## Example
/// ```
/// use cinder::util::num::floor_mod_f64;
///
/// assert_eq!(floor_mod_f64(-7.5, 2.0), 0.5);
/// assert_eq!(floor_mod_f64(7.5, -2.0), -0.5);
/// ```
#[must_use]
pub fn floor_mod_f64(dividend: f64, divisor: f64) -> f64 {
    let rem = dividend % divisor;
    if rem != 0.0 && (rem < 0.0) != (divisor < 0.0) {
        rem + divisor
    } else {
        rem
    }
}
