//! Double-width arithmetic on `(hi, lo)` pairs of 64-bit
//! words.

/// Returns `(hi, lo) = x * y`.
pub(crate) const fn mul64(x: u64, y: u64) -> (u64, u64) {
    let z = (x as u128) * (y as u128);
    ((z >> 64) as u64, z as u64)
}

/// Returns the quotient and remainder `(q, r)` such that
///
/// ```text
/// q = (hi, lo) / d
/// r = (hi, lo) % d
/// ```
///
/// `hi` must be less than `d` so that `q` fits in a word.
pub(crate) const fn div64(hi: u64, lo: u64, d: u64) -> (u64, u64) {
    debug_assert!(hi < d);

    let u = pack(hi, lo);
    let d = d as u128;
    ((u / d) as u64, (u % d) as u64)
}

/// Returns `(sum, carry) = x + y`.
pub(crate) const fn add64(x: u64, y: u64) -> (u64, bool) {
    x.overflowing_add(y)
}

const fn pack(hi: u64, lo: u64) -> u128 {
    ((hi as u128) << 64) | (lo as u128)
}
