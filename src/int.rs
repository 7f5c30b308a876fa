use core::{
    fmt,
    ops::{BitAnd, BitXor, Shr},
};

mod private {
    pub trait Sealed {}
}
use private::Sealed;

/// A primitive integer type that fits in 64 bits.
///
/// This trait is sealed and implemented for `u8`, `u16`, `u32`,
/// `u64`, `usize`, `i8`, `i16`, `i32`, `i64`, and `isize`.
pub trait Integer: Sealed + Copy + Ord + fmt::Debug {
    /// The number of bits in the integer.
    const BITS: u32;
    /// The value `0`.
    const ZERO: Self;
    /// The value `1`.
    const ONE: Self;

    /// Converts `v` to `Self`, keeping only the low
    /// [`BITS`][Self::BITS] bits.
    fn wrapping_from_u64(v: u64) -> Self;

    /// Returns `(negative, magnitude)` where `magnitude` is the
    /// absolute value of `self` widened to 64 bits.
    ///
    /// The magnitude of the minimum signed value is exact, so
    /// `i64::MIN` returns `(true, 1 << 63)`.
    fn split_sign(self) -> (bool, u64);
}

/// An unsigned primitive integer.
pub trait Unsigned: Integer + Shr<u32, Output = Self> + BitAnd<Output = Self> {
    /// Widens `self` to a `u64`.
    fn to_u64(self) -> u64;

    /// Computes `self * rhs`, wrapping around at the boundary of
    /// the type.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Computes `self - rhs`, wrapping around at the boundary of
    /// the type.
    fn wrapping_sub(self, rhs: Self) -> Self;
}

/// A signed primitive integer.
///
/// Shifting right is arithmetic: the sign bit is replicated.
pub trait Signed: Integer + Shr<u32, Output = Self> + BitXor<Output = Self> {
    /// Computes `self + rhs`, wrapping around at the boundary of
    /// the type.
    fn wrapping_add(self, rhs: Self) -> Self;
}

macro_rules! impl_integer {
    (@split unsigned, $x:expr) => {
        (false, $x as u64)
    };
    (@split signed, $x:expr) => {{
        let x = $x as i64;
        (x < 0, x.unsigned_abs())
    }};
    ($sign:ident: $($ty:ty),* $(,)?) => {
        $(
            impl Sealed for $ty {}

            #[allow(
                clippy::cast_lossless,
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::unnecessary_cast,
                reason = "Truncation is the documented behavior."
            )]
            impl Integer for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn wrapping_from_u64(v: u64) -> Self {
                    v as $ty
                }

                #[inline]
                fn split_sign(self) -> (bool, u64) {
                    impl_integer!(@split $sign, self)
                }
            }
        )*
    };
}
impl_integer!(unsigned: u8, u16, u32, u64, usize);
impl_integer!(signed: i8, i16, i32, i64, isize);

macro_rules! impl_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            #[allow(clippy::cast_lossless, reason = "`From` is not implemented for `usize`.")]
            impl Unsigned for $ty {
                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }
            }
        )*
    };
}
impl_unsigned!(u8, u16, u32, u64, usize);

macro_rules! impl_signed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Signed for $ty {
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }
            }
        )*
    };
}
impl_signed!(i8, i16, i32, i64, isize);
