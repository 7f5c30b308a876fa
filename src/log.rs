//! Integer logarithms and decimal lengths.
//!
//! None of the logarithms are defined for zero. Passing zero
//! returns an unspecified (but deterministic) value.

use crate::{
    int::{Integer, Unsigned},
    util::{bitlen, const_assert},
};

/// The de Bruijn-like multiplier for [`floor_log2_u64`].
const DEBRUIJN: u64 = 0x07ED_D5E5_9A4E_28C2;

/// Maps the top six bits of `2^m * DEBRUIJN` to `m`.
const LOG2_TABLE: [u8; 64] = [
    63, 0, 58, 1, 59, 47, 53, 2, //
    60, 39, 48, 27, 54, 33, 42, 3, //
    61, 51, 37, 40, 49, 18, 28, 20, //
    55, 30, 34, 11, 43, 14, 22, 4, //
    62, 57, 46, 52, 38, 26, 32, 41, //
    50, 36, 17, 19, 29, 10, 13, 21, //
    56, 45, 25, 31, 35, 16, 9, 12, //
    44, 24, 15, 8, 23, 7, 6, 5, //
];

/// The decimal length of integers with a particular bit length.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Digits {
    /// The number of decimal digits in the largest integer with
    /// this bit length.
    len: u64,
    /// `10^(len-1)` if some integer with this bit length is
    /// less than or equal to it, otherwise zero.
    threshold: u64,
}

/// Indexed by bit length.
#[allow(
    clippy::indexing_slicing,
    reason = "This is a const initializer, so panicking is okay."
)]
const LOG10_TABLE: [Digits; 65] = {
    let mut table = [Digits {
        len: 1,
        threshold: 0,
    }; 65];
    let mut b = 1;
    while b < table.len() {
        let min = 1u64 << (b - 1);
        let max = u64::MAX >> (64 - b);

        let mut len = 1;
        let mut p = 1u64;
        while max / p >= 10 {
            p *= 10;
            len += 1;
        }
        table[b] = Digits {
            len,
            threshold: if p >= min { p } else { 0 },
        };
        b += 1;
    }
    table
};
const_assert!(LOG10_TABLE[64].len == 20);
const_assert!(LOG10_TABLE[64].threshold == 10_000_000_000_000_000_000);

/// The length of `i64::MIN` formatted in base 10.
const MIN_I64_LEN: u64 = 20;

/// Returns `⌊log₂u⌋`.
///
/// The highest set bit is smeared into every lower bit, the
/// top bit is isolated, and the bit position is found with
/// a multiply and a table lookup. See "Find the log base 2 of an
/// N-bit integer in O(lg(N)) operations with multiply and
/// lookup" from Sean Eron Anderson's "Bit Twiddling Hacks".
const fn floor_log2_u64(mut u: u64) -> u32 {
    u |= u >> 1;
    u |= u >> 2;
    u |= u >> 4;
    u |= u >> 8;
    u |= u >> 16;
    u |= u >> 32;

    let i = (u - (u >> 1)).wrapping_mul(DEBRUIJN) >> 58;
    #[allow(
        clippy::indexing_slicing,
        reason = "`i` is six bits, so it cannot panic."
    )]
    let log = LOG2_TABLE[i as usize];
    log as u32
}

/// Returns the number of base-10 digits in `v`.
///
/// `len_u64(0) == 1`.
const fn len_u64(v: u64) -> u64 {
    #[allow(
        clippy::indexing_slicing,
        reason = "`bitlen` is in [0, 64], so it cannot panic."
    )]
    let Digits { len, threshold } = LOG10_TABLE[bitlen(v) as usize];
    len - (threshold > v) as u64
}

/// Returns `⌈log₁₀v⌉`.
const fn ceil_log10_u64(v: u64) -> u64 {
    #[allow(
        clippy::indexing_slicing,
        reason = "`bitlen` is in [0, 64], so it cannot panic."
    )]
    let Digits { len, threshold } = LOG10_TABLE[bitlen(v) as usize];
    len - (threshold >= v) as u64
}

/// Returns `⌊log₂u⌋`.
///
/// The result is unspecified if `u` is zero.
///
/// # Example
///
/// ```
/// assert_eq!(intmath::floor_log2(1u32), 0);
/// assert_eq!(intmath::floor_log2(1000u32), 9);
/// assert_eq!(intmath::floor_log2(1024u32), 10);
/// ```
pub fn floor_log2<V: Unsigned>(u: V) -> V {
    V::wrapping_from_u64(u64::from(floor_log2_u64(u.to_u64())))
}

/// Returns `⌈log₂u⌉`, the smallest `k` such that `2^k >= u`.
///
/// The result is unspecified if `u` is zero.
///
/// # Example
///
/// ```
/// assert_eq!(intmath::ceil_log2(1u32), 0);
/// assert_eq!(intmath::ceil_log2(1000u32), 10);
/// assert_eq!(intmath::ceil_log2(1024u32), 10);
/// ```
pub fn ceil_log2<V: Unsigned>(u: V) -> V {
    V::wrapping_from_u64(u64::from(bitlen(u.wrapping_sub(V::ONE).to_u64())))
}

/// Returns `⌊log₁₀u⌋`.
///
/// The result is unspecified if `u` is zero.
///
/// # Example
///
/// ```
/// assert_eq!(intmath::floor_log10(999u32), 2);
/// assert_eq!(intmath::floor_log10(1000u32), 3);
/// ```
pub fn floor_log10<V: Unsigned>(u: V) -> V {
    len(u).wrapping_sub(V::ONE)
}

/// Returns `⌈log₁₀u⌉`.
///
/// The result is unspecified if `u` is zero.
///
/// # Example
///
/// ```
/// assert_eq!(intmath::ceil_log10(999u32), 3);
/// assert_eq!(intmath::ceil_log10(1000u32), 3);
/// ```
pub fn ceil_log10<V: Unsigned>(u: V) -> V {
    V::wrapping_from_u64(ceil_log10_u64(u.to_u64()))
}

/// Returns the length of `n` formatted in base 10, including
/// the minus sign if `n` is negative.
///
/// # Example
///
/// ```
/// assert_eq!(intmath::len(0u8), 1);
/// assert_eq!(intmath::len(-128i8), 4);
/// assert_eq!(intmath::len(u64::MAX), 20);
/// ```
pub fn len<V: Integer>(n: V) -> V {
    let (neg, v) = n.split_sign();
    if neg && v == i64::MIN.unsigned_abs() {
        return V::wrapping_from_u64(MIN_I64_LEN);
    }
    V::wrapping_from_u64(len_u64(v) + u64::from(neg))
}
