//! `intmath` provides exact, overflow-aware integer arithmetic
//! primitives for every primitive integer type up to 64 bits.
//!
//! # Functions
//!
//! - [`abs`]: branch-free absolute value.
//! - [`pow`], [`pow_x`], [`try_pow`]: integer powers by
//! repeated squaring.
//! - [`binomial`], [`try_binomial`]: exact binomial
//! coefficients.
//! - [`floor_log2`], [`ceil_log2`], [`floor_log10`],
//! [`ceil_log10`]: O(1) integer logarithms.
//! - [`len`]: the length of an integer formatted in base 10.
//! - [`sqrt`], [`sqrt_exact`]: integer square roots.
//!
//! Functions that can overflow a `u64` return `(value,
//! overflowed)`, like [`u64::overflowing_add`]. The value is
//! always 0 when `overflowed` is true.
//!
//! # Cargo Features
//!
//! - `std`: Include [`std`] support. Enabled by default. This
//! makes [`sqrt`] use the hardware floating point square root
//! and implements [`std::error::Error`] for [`OverflowError`].
//!
//! [`std`]: https://doc.rust-lang.org/std/

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_precision_loss)]
#![deny(clippy::cast_sign_loss)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]

mod abs;
mod binom;
mod error;
mod int;
mod log;
mod pow;
mod sqrt;
mod util;
mod wide;

pub use abs::abs;
pub use binom::{binomial, try_binomial};
pub use error::OverflowError;
pub use int::{Integer, Signed, Unsigned};
pub use log::{ceil_log10, ceil_log2, floor_log10, floor_log2, len};
pub use pow::{pow, pow_x, try_pow};
pub use sqrt::{sqrt, sqrt_exact};
