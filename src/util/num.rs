/// Divides two integers, rounding the quotient toward negative infinity.
///
/// Rust's `/` truncates toward zero; this differs from it whenever the
/// operands have opposite signs and the division is inexact.
///
/// ## Returns
/// - `Some(i64)`: The floored quotient.
/// - `None`: If `divisor` is zero or the quotient overflows
///   (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use exprcalc::util::num::checked_floor_div;
///
/// assert_eq!(checked_floor_div(7, 2), Some(3));
/// assert_eq!(checked_floor_div(-7, 2), Some(-4));
/// assert_eq!(checked_floor_div(7, -2), Some(-4));
/// assert_eq!(checked_floor_div(-7, -2), Some(3));
/// assert_eq!(checked_floor_div(-6, 2), Some(-3));
/// assert_eq!(checked_floor_div(1, 0), None);
/// assert_eq!(checked_floor_div(i64::MIN, -1), None);
/// ```
#[must_use]
pub const fn checked_floor_div(dividend: i64, divisor: i64) -> Option<i64> {
    let Some(quotient) = dividend.checked_div(divisor) else {
        return None;
    };

    // Truncation rounded up when the signs differ and there is a remainder.
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}
