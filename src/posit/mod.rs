//! This module and its submodules contain a bit-exact software implementation of posit
//! arithmetic for 8, 16, 32, and 64-bit posits with any (reasonable) number of exponent bits.
//!
//! Every nontrivial operation goes through the same pipeline:
//!
//!   1. Special-case 0 and NaR on the raw bit patterns.
//!   2. [Decompose](Posit::decompose) the operands into sign, regime, exponent, and significand.
//!   3. Compute on the decomposed fields, in an integer type twice as wide as the posit, so that
//!      nothing is lost until the very end.
//!   4. [Pack](Decomposed::pack_round) the result back into a bit pattern, rounding to nearest,
//!      ties to even, with a sticky bit carrying everything that didn't fit.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit W-1**: numbered least significant to most significant, starts at 0.
//!   - **Scale**: the binary exponent of a number, `regime × 2^ES + exponent`.

/// A posit stored in the unsigned machine word `U` (`u8`, `u16`, `u32`, or `u64`; the posit is
/// exactly as wide as `U`), with `ES` exponent bits.
///
/// The raw bit pattern is the posit's own wire format: `0b0000…` is zero, `0b1000…` is NaR
/// (not-a-real), and everything else is a real number, with negative numbers being the two's
/// complement of their absolute value.
///
/// Examples:
///
/// ```
/// # use posit_arith::Posit;
/// type Foo = Posit<u32, 2>;  // A 32-bit posit with 2-bit exponent field (same as `p32`)
/// type Bar = Posit<u16, 1>;  // A 16-bit posit with 1-bit exponent field
/// ```
pub struct Posit<
  U: crate::Uint,
  const ES: u32,
> (U);

/// A posit that is neither 0 nor NaR, broken up into its fields.
///
/// The value represented is
///
/// ```text
/// (-1)^sign × 2^(regime × 2^ES + exponent) × significand / 2^(W-1)
/// ```
///
/// where `W` is the width of `U`. In other words `significand` is a fixed-point number in
/// `[1, 2[` with the decimal point right after the msb, which is the *hidden bit* and is always
/// set; the fraction bits of the posit follow it, aligned to the left.
///
/// Decomposed values are also produced by the arithmetic kernels, in which case `regime` may be
/// out of the range representable by a posit; [`Decomposed::pack_round`] takes care of
/// saturating.
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Decomposed<
  U: crate::Uint,
  const ES: u32,
> {
  /// `true` for negative numbers.
  pub sign: bool,
  /// The regime value `k`: a run of `n` 1s encodes `n - 1`, a run of `n` 0s encodes `-n`.
  pub regime: i32,
  /// The `ES` exponent bits, as an unsigned number. Bits cut off by a long regime read as 0.
  pub exponent: u32,
  /// `1.fff…`, with the hidden bit in the msb.
  pub significand: U,
}

/// Basics
mod basics;

/// Constants (zero, min, min_positive, etc)
mod consts;

/// Manual impls of `Clone`, `Eq`, `Ord`, `Hash`, etc.
mod traits;

/// Field codec: bit pattern → fields.
mod decode;

/// Field codec: fields → bit pattern, including the rounding step.
mod encode;

/// Round-to-nearest-even decisions on (round, sticky) pairs.
mod round;

/// Named comparison operations.
mod cmp;

/// Negation, absolute value, and neighbours.
mod unary;

/// Rounding to integral values.
mod round_int;

/// Debug and hex formatting.
mod fmt;

/// Conversions to and from IEEE floats.
pub mod convert;

/// Arithmetic operators.
mod ops;

/// Square root.
mod math;

/// Values tagged with whether they are known to be exact.
#[cfg(feature = "exact")]
pub mod exact;

/// Exact rational oracle, for checking the correctness of results.
#[cfg(test)]
mod rational;
