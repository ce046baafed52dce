//! Arbitrary-precision signed integers over base-10^9 digits.
//!
//! The core type is [`BigInt`]: a sign plus a little-endian sequence of
//! 9-decimal-digit groups, kept in canonical form so equality and hashing
//! are structural. Short values live inline without heap allocation.
//!
//! ```
//! use longint::BigInt;
//!
//! let a: BigInt = "-12345678901234567890".parse()?;
//! let b = BigInt::from(987_654_321_i64);
//!
//! let (quotient, remainder) = a.div_rem(&b)?;
//! assert_eq!(&quotient * &b + &remainder, a);
//! assert_eq!(quotient.to_string(), "-12499999887");
//! # Ok::<(), longint::Error>(())
//! ```
//!
//! Arithmetic is available through the standard operator traits for owned
//! and borrowed operands alike, with `i64` fast paths for scalar operands.
//! Division truncates toward zero and the remainder takes the dividend's
//! sign; the `/` and `%` operators panic on a zero divisor, while
//! [`BigInt::div_rem`] reports it as an [`Error`].
//!
//! The crate is `no_std`-compatible: disable the default `std` feature and
//! the library only requires `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

extern crate alloc;

mod arith;
mod bigint;
mod digits;
mod error;
mod operator;
#[cfg(feature = "serde")]
mod ser;

pub use crate::bigint::BigInt;
pub use crate::error::{Category, Error, ErrorCode, Result};
