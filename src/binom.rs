use core::cmp;

use crate::{error::OverflowError, int::Unsigned, wide};

/// Returns `(C(n, k), false)`, the number of ways to choose `k`
/// items from `n`, or `(0, true)` if it does not fit in a `u64`.
///
/// `C(n, k)` is zero when `k > n`.
///
/// # Example
///
/// ```
/// assert_eq!(intmath::binomial(5u8, 2), (10, false));
/// assert_eq!(intmath::binomial(2u8, 5), (0, false));
/// assert_eq!(intmath::binomial(68u8, 34), (0, true));
/// ```
pub fn binomial<V: Unsigned>(n: V, k: V) -> (u64, bool) {
    if k > n {
        return (0, false);
    }
    if k == V::ZERO || k == n {
        return (1, false);
    }
    let k = cmp::min(k, n.wrapping_sub(k)).to_u64();
    let mut n = n.to_u64();

    // Invariant: `c == C(n0, i-1)` where `n0` is the original
    // `n`. `C(n0, i) = C(n0, i-1) * n / i` is exact, but the
    // product may not fit in a word, so divide first and fold
    // the remainder back in.
    let mut c = 1u64;
    for i in 1..=k {
        let (q, r) = wide::div64(0, c, i);
        let (hi, a) = wide::mul64(q, n);
        if hi != 0 {
            return (0, true);
        }
        // `r < i`, so `r*n / i < n` fits in a word.
        let (hi, lo) = wide::mul64(r, n);
        let (b, _) = wide::div64(hi, lo, i);
        let (sum, carry) = wide::add64(a, b);
        if carry {
            return (0, true);
        }
        c = sum;
        n -= 1;
    }
    (c, false)
}

/// Returns `C(n, k)`, or an error if it does not fit in
/// a `u64`.
///
/// # Errors
///
/// Returns [`OverflowError`] exactly when [`binomial`] reports
/// overflow.
pub fn try_binomial<V: Unsigned>(n: V, k: V) -> Result<u64, OverflowError> {
    match binomial(n, k) {
        (c, false) => Ok(c),
        (_, true) => Err(OverflowError::binomial()),
    }
}
