use crate::int::Unsigned;

/// Returns `⌊√n⌋`.
///
/// This uses the hardware floating point square root, which is
/// faster than [`sqrt_exact`] on most machines. `n` is rounded
/// to the nearest `f64` first, so the result may be one too
/// large when `n` is just below a perfect square greater than
/// `2^53`. Use [`sqrt_exact`] when every bit matters.
///
/// # Example
///
/// ```
/// assert_eq!(intmath::sqrt(99u32), 9);
/// assert_eq!(intmath::sqrt(100u32), 10);
/// ```
#[cfg(feature = "std")]
pub fn sqrt<V: Unsigned>(n: V) -> V {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "The square root of a `u64` is a non-negative `f64` no larger than 2^32."
    )]
    let r = (n.to_u64() as f64).sqrt() as u64;
    V::wrapping_from_u64(r)
}

/// Returns `⌊√n⌋`.
///
/// `f64::sqrt` is not available without the `std` feature, so
/// this is the same as [`sqrt_exact`].
#[cfg(not(feature = "std"))]
pub fn sqrt<V: Unsigned>(n: V) -> V {
    sqrt_exact(n)
}

/// Returns `⌊√n⌋` using only integer arithmetic.
///
/// The result is exact for every input.
///
/// # Example
///
/// ```
/// assert_eq!(intmath::sqrt_exact(u64::MAX), u64::from(u32::MAX));
/// assert_eq!(intmath::sqrt_exact(0u8), 0);
/// ```
pub fn sqrt_exact<V: Unsigned>(n: V) -> V {
    V::wrapping_from_u64(isqrt(n.to_u64()))
}

const fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    // Shift `n` left by an even amount so that one of its top
    // two bits is set, then undo half of it afterward.
    let c = 31 - (63 - n.leading_zeros()) / 2;
    let mut u = estimate(n << (2 * c)) >> c;
    // The estimate is either exact or one too large.
    if u.wrapping_mul(u).wrapping_sub(1) >= n {
        u -= 1;
    }
    u
}

/// Estimates `√n` one digit group at a time, refining 2, 4,
/// 8, 16, then 32 bits of the root.
///
/// `n` must have one of its top two bits set.
const fn estimate(n: u64) -> u64 {
    let u = 1 + (n >> 62);
    let u = (u << 1) + (n >> 59) / u;
    let u = (u << 3) + (n >> 53) / u;
    let u = (u << 7) + (n >> 41) / u;
    (u << 15) + (n >> 17) / u
}
