#![cfg_attr(not(test), no_std)]
//! This crate provides a bit-exact software implementation of
//! [Posit arithmetic](https://posithub.org/docs/posit_standard-2.pdf) for 8, 16, 32, and 64-bit
//! posits, with any reasonable number of exponent bits.
//!
//! # Introduction
//!
//! Posits are an alternative floating point format proposed by John Gustafson in 2017. A posit
//! has a sign bit, a variable-length *regime* (a run of identical bits giving a coarse scale), a
//! fixed-width exponent, and a fraction; numbers close to 1 get more fraction bits and numbers
//! far from it fewer. There is a single zero and a single exceptional value, NaR (not-a-real),
//! which is what every invalid operation returns. Results never overflow to infinity or
//! underflow to zero: they saturate at the largest and smallest representable magnitudes.
//!
//! Every operation here rounds exactly as the posit definition says (to nearest, ties to even
//! bit pattern), and is checked against an exact rational oracle, exhaustively for 8-bit posits
//! and with randomised testing for the rest.
//!
//! # Usage
//!
//! ```
//! // Use standard posit types, or define your own.
//! # use posit_arith::Posit;
//! use posit_arith::{p8, p16, p32, p64};  // Standard: n bits, 2 exponent bits
//! type MyPosit = Posit<u16, 1>;  // Non-standard: 16 bits, 1 exponent bit
//!
//! // Create posits from IEEE floats, constants, or a raw bit representation.
//! # use posit_arith::{RoundFrom, RoundInto};
//! let a = p32::round_from(2.71_f64);
//! let b = p32::from_bits(0x7f001337);
//! let c = p32::MIN_POSITIVE;
//! let d = MyPosit::ONE;
//!
//! // Perform basic arithmetic and comparisons with the usual operators.
//! assert!(p16::round_from(2.25_f32) + p16::ONE == 3.25_f32.round_into());
//! assert!(p16::MIN_POSITIVE < 1e-15_f32.round_into());
//! assert!(p64::NAR.less_than(p64::ZERO) && !p64::NAR.equal(p64::NAR));
//!
//! // Convert posits back to IEEE floats, or a raw bit representation.
//! assert_eq!(p8::ONE.to_bits(), 0b01000000);
//! assert_eq!(f64::round_from(p64::from_bits(0xc000_0000_0000_0000)), -1.0);
//! assert_eq!(format!("{:#x}", p16::MINUS_ONE), "0xc000");
//! ```
//!
//! # Features
//!
//!   - `exact`: an [`Exact`] wrapper, which tags a posit with whether it is known to be exact
//!     and propagates that through multiplication and division.
//!   - `bench`: re-exports some internals for the benchmarks; run them with
//!     `cargo bench -F bench`.

mod posit;
mod underlying;

pub use posit::Posit;
pub use underlying::Uint;

/// Standard-defined 8-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p8 = Posit<u8, 2>;

/// Standard-defined 16-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p16 = Posit<u16, 2>;

/// Standard-defined 32-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p32 = Posit<u32, 2>;

/// Standard-defined 64-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p64 = Posit<u64, 2>;

pub use posit::convert::{RoundFrom, RoundInto, Quad};

#[cfg(feature = "exact")]
pub use posit::exact::Exact;

#[cfg(feature = "bench")]
pub mod bench;

/// Number of cases each randomised test runs.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x4000} else {0x10_0000};
