use crate::int::Signed;

/// Returns the absolute value of `n` without branching.
///
/// The absolute value of `V::MIN` cannot be represented, so
/// `abs(V::MIN)` wraps around and returns `V::MIN`.
///
/// See "Compute the integer absolute value (abs) without
/// branching" from Sean Eron Anderson's "Bit Twiddling Hacks".
///
/// # Example
///
/// ```
/// assert_eq!(intmath::abs(-42i32), 42);
/// assert_eq!(intmath::abs(i8::MIN), i8::MIN);
/// ```
pub fn abs<V: Signed>(n: V) -> V {
    // All ones if `n` is negative, zero otherwise.
    let mask = n >> (V::BITS - 1);
    n.wrapping_add(mask) ^ mask
}
