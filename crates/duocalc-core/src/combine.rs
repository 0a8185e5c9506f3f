//! The short-circuiting binary operation over two optional results.

use crate::constants::OP_ZERO;

/// Whether `value` is a known absorbing element.
#[inline]
#[must_use]
pub fn is_absorbing(value: Option<i32>) -> bool {
    value == Some(OP_ZERO)
}

/// Combine the results of `f` and `g`.
///
/// A known zero on either side wins, even when the other side is unknown.
/// Otherwise an unknown operand makes the result unknown, and two known
/// operands multiply with 32-bit wrapping.
///
/// # Example
/// ```
/// use duocalc_core::combine::binary_operation;
///
/// assert_eq!(binary_operation(Some(3), Some(4)), Some(12));
/// assert_eq!(binary_operation(Some(0), None), Some(0));
/// assert_eq!(binary_operation(None, Some(5)), None);
/// ```
#[must_use]
pub fn binary_operation(f: Option<i32>, g: Option<i32>) -> Option<i32> {
    if is_absorbing(f) || is_absorbing(g) {
        return Some(OP_ZERO);
    }
    Some(f?.wrapping_mul(g?))
}
