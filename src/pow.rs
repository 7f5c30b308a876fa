use crate::{error::OverflowError, int::Unsigned, wide};

/// Returns `base^exp`, wrapping around at the boundary of the
/// type.
///
/// `pow(0, 0) == 1`.
///
/// This is the right-to-left binary method from TAOCP vol. 2,
/// §4.6.3.
///
/// # Example
///
/// ```
/// assert_eq!(intmath::pow(3u32, 4), 81);
/// assert_eq!(intmath::pow(2u8, 8), 0);
/// ```
pub fn pow<V: Unsigned>(mut base: V, mut exp: V) -> V {
    let mut pow = V::ONE;
    while exp > V::ZERO {
        if exp & V::ONE == V::ONE {
            pow = pow.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exp = exp >> 1;
    }
    pow
}

/// Returns `(base^exp, false)` if the power fits in a `u64`,
/// or `(0, true)` otherwise.
///
/// Every multiplication is checked, so overflow is reported as
/// soon as it happens. The base is not squared once the
/// exponent is exhausted, so a result that fits is never
/// flagged. This differs from squaring on every iteration,
/// which would report `pow_x(1 << 32, 1)` as an overflow.
///
/// # Example
///
/// ```
/// assert_eq!(intmath::pow_x(10u8, 19), (10_000_000_000_000_000_000, false));
/// assert_eq!(intmath::pow_x(10u8, 20), (0, true));
/// ```
pub fn pow_x<V: Unsigned>(base: V, mut exp: V) -> (u64, bool) {
    let mut base = base.to_u64();
    let mut pow = 1u64;
    while exp > V::ZERO {
        if exp & V::ONE == V::ONE {
            let (hi, lo) = wide::mul64(pow, base);
            if hi != 0 {
                return (0, true);
            }
            pow = lo;
        }
        exp = exp >> 1;
        if exp == V::ZERO {
            break;
        }
        let (hi, lo) = wide::mul64(base, base);
        if hi != 0 {
            return (0, true);
        }
        base = lo;
    }
    (pow, false)
}

/// Returns `base^exp`, or an error if the power does not fit in
/// a `u64`.
///
/// # Errors
///
/// Returns [`OverflowError`] exactly when [`pow_x`] reports
/// overflow.
pub fn try_pow<V: Unsigned>(base: V, exp: V) -> Result<u64, OverflowError> {
    match pow_x(base, exp) {
        (pow, false) => Ok(pow),
        (_, true) => Err(OverflowError::pow()),
    }
}

#[cfg(test)]
mod tests {
    use rand::{random, thread_rng, Rng};

    use super::*;

    /// Returns a random `u64` with a random bit length.
    fn rand_base() -> u64 {
        let bits = thread_rng().gen_range(0..=64);
        random::<u64>().checked_shr(64 - bits).unwrap_or(0)
    }

    #[test]
    fn test_pow_basic() {
        for (exp, want) in [(0u64, 1u64), (1, 2), (2, 4), (10, 1024)] {
            assert_eq!(pow(2, exp), want, "2^{exp}");
        }
        assert_eq!(pow(0u64, 0), 1);
        assert_eq!(pow(0u64, 1), 0);
        assert_eq!(pow(1u64, u64::MAX), 1);
    }

    #[test]
    fn test_pow_zero_exp() {
        for _ in 0..10_000 {
            assert_eq!(pow(random::<u8>(), 0), 1);
            assert_eq!(pow(random::<u16>(), 0), 1);
            assert_eq!(pow(random::<u32>(), 0), 1);
            assert_eq!(pow(random::<u64>(), 0), 1);
            assert_eq!(pow(random::<usize>(), 0), 1);
        }
    }

    #[test]
    fn test_pow_powers_of_two() {
        for k in 0..8u8 {
            assert_eq!(pow(2u8, k), 1u8 << k, "{k}");
        }
        for k in 0..16u16 {
            assert_eq!(pow(2u16, k), 1u16 << k, "{k}");
        }
        for k in 0..32u32 {
            assert_eq!(pow(2u32, k), 1u32 << k, "{k}");
        }
        for k in 0..64u64 {
            assert_eq!(pow(2u64, k), 1u64 << k, "{k}");
        }
        assert_eq!(pow(2u64, 64), 0);
    }

    #[test]
    fn test_pow_wrapping() {
        for i in 0..100_000 {
            let base = rand_base();
            let exp = thread_rng().gen_range(0..200u32);
            let got = pow(base, u64::from(exp));
            let want = base.wrapping_pow(exp);
            assert_eq!(got, want, "#{i}: {base}^{exp}");
        }
        for base in 0..=u8::MAX {
            for exp in 0..=u8::MAX {
                let want = base.wrapping_pow(u32::from(exp));
                assert_eq!(pow(base, exp), want, "{base}^{exp}");
            }
        }
    }

    #[test]
    fn test_pow_x_boundary() {
        let tests = [
            (0u64, 0u64, (1, false)),
            (0, u64::MAX, (0, false)),
            (1, u64::MAX, (1, false)),
            (2, 63, (1 << 63, false)),
            (2, 64, (0, true)),
            (1 << 32, 1, (1 << 32, false)),
            (1 << 32, 2, (0, true)),
            ((1 << 32) - 1, 2, (u64::MAX - (1 << 33) + 2, false)),
            (u64::MAX, 1, (u64::MAX, false)),
            (u64::MAX, 2, (0, true)),
            (3, 40, (12157665459056928801, false)),
            (3, 41, (0, true)),
        ];
        for (i, (base, exp, want)) in tests.into_iter().enumerate() {
            let got = pow_x(base, exp);
            assert_eq!(got, want, "#{i}: {base}^{exp}");
        }
    }

    #[test]
    fn test_pow_x() {
        for i in 0..100_000 {
            let base = rand_base();
            let exp = thread_rng().gen_range(0..200u32);
            let got = pow_x(base, u64::from(exp));
            let want = match base.checked_pow(exp) {
                Some(p) => (p, false),
                None => (0, true),
            };
            assert_eq!(got, want, "#{i}: {base}^{exp}");
        }
    }

    #[test]
    fn test_pow_x_large_exp() {
        for i in 0..10_000 {
            let base = rand_base();
            let exp = random::<u64>() | (1 << 32);
            let want = match base {
                0 => (0, false),
                1 => (1, false),
                _ => (0, true),
            };
            assert_eq!(pow_x(base, exp), want, "#{i}: {base}^{exp}");
        }
    }

    #[test]
    fn test_pow_x_narrow() {
        // The result is 64 bits wide regardless of the input width.
        assert_eq!(pow_x(255u8, 8), (17878103347812890625, false));
        assert_eq!(pow_x(255u8, 9), (0, true));
        assert_eq!(pow_x(u16::MAX, 4), (u64::from(u16::MAX).pow(4), false));
        assert_eq!(pow_x(u32::MAX, 2), (u64::from(u32::MAX).pow(2), false));
        assert_eq!(pow_x(u32::MAX, 3), (0, true));
    }

    #[test]
    fn test_pow_x_unused_square() {
        // The last squaring would overflow, but its result is
        // never multiplied in.
        let tests = [
            (3u64, 40u64, 12157665459056928801),
            (2, 63, 1 << 63),
            (1 << 32, 1, 1 << 32),
            (u64::MAX, 1, u64::MAX),
            ((1 << 16) + 1, 2, ((1 << 16) + 1) * ((1 << 16) + 1)),
        ];
        for (i, (base, exp, want)) in tests.into_iter().enumerate() {
            assert_eq!(pow_x(base, exp), (want, false), "#{i}: {base}^{exp}");
            assert_eq!(try_pow(base, exp), Ok(want), "#{i}: {base}^{exp}");
        }
    }

    #[test]
    fn test_try_pow() {
        assert_eq!(try_pow(7u32, 3), Ok(343));
        assert_eq!(try_pow(7u32, 30), Err(OverflowError::pow()));
    }
}
