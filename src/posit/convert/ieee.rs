//! A tiny model of IEEE 754 binary formats: enough to take a float apart into sign, binary
//! exponent, and significand, and to put one back together with correct rounding. Every format
//! goes through `u128` bit patterns, so the same code serves `f32`, `f64`, and [`Quad`].

use super::Quad;
use crate::posit::round::round_nearest_even;

/// An IEEE 754 binary interchange format.
pub(crate) trait IeeeFormat: Copy {
  /// Number of *explicit* mantissa bits (excluding the hidden bit).
  const MANTISSA_BITS: u32;
  /// Number of biased exponent bits.
  const EXPONENT_BITS: u32;

  fn to_raw(self) -> u128;
  fn from_raw(raw: u128) -> Self;

  /// The exponent bias, e.g. 1023 for `f64`.
  const BIAS: i32 = (1 << (Self::EXPONENT_BITS - 1)) - 1;
  /// The all-ones biased exponent, which marks infinities and NaNs.
  const EXPONENT_MAX: u128 = (1 << Self::EXPONENT_BITS) - 1;
  const SIGN_SHIFT: u32 = Self::MANTISSA_BITS + Self::EXPONENT_BITS;
}

impl IeeeFormat for f32 {
  const MANTISSA_BITS: u32 = f32::MANTISSA_DIGITS - 1;
  const EXPONENT_BITS: u32 = 8;
  #[inline]
  fn to_raw(self) -> u128 { self.to_bits().into() }
  #[inline]
  fn from_raw(raw: u128) -> Self { f32::from_bits(raw as u32) }
}

impl IeeeFormat for f64 {
  const MANTISSA_BITS: u32 = f64::MANTISSA_DIGITS - 1;
  const EXPONENT_BITS: u32 = 11;
  #[inline]
  fn to_raw(self) -> u128 { self.to_bits().into() }
  #[inline]
  fn from_raw(raw: u128) -> Self { f64::from_bits(raw as u64) }
}

impl IeeeFormat for Quad {
  const MANTISSA_BITS: u32 = 112;
  const EXPONENT_BITS: u32 = 15;
  #[inline]
  fn to_raw(self) -> u128 { self.to_bits() }
  #[inline]
  fn from_raw(raw: u128) -> Self { Quad::from_bits(raw) }
}

/// A float, taken apart.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub(crate) enum Unpacked {
  Zero { sign: bool },
  Infinite { sign: bool },
  NaN,
  /// The value `(-1)^sign × 2^exponent × significand / 2^127`, with the msb of `significand`
  /// always set. Subnormals are normalised too, so they end up with exponents below the
  /// format's minimum.
  Finite { sign: bool, exponent: i32, significand: u128 },
}

/// Take apart a float.
pub(crate) fn unpack<F: IeeeFormat>(x: F) -> Unpacked {
  let raw = x.to_raw();
  let sign = (raw >> F::SIGN_SHIFT) & 1 == 1;
  let biased = (raw >> F::MANTISSA_BITS) & F::EXPONENT_MAX;
  let mantissa = raw & ((1 << F::MANTISSA_BITS) - 1);

  if biased == F::EXPONENT_MAX {
    if mantissa == 0 { Unpacked::Infinite { sign } } else { Unpacked::NaN }
  } else if biased == 0 {
    if mantissa == 0 { return Unpacked::Zero { sign } }
    // Subnormal: `mantissa × 2^(1 - BIAS - MANTISSA_BITS)`, with no hidden bit. Shift the
    // leading 1 up to the msb and account for it in the exponent.
    let lz = mantissa.leading_zeros();
    Unpacked::Finite {
      sign,
      exponent: (127 - lz) as i32 + 1 - F::BIAS - F::MANTISSA_BITS as i32,
      significand: mantissa << lz,
    }
  } else {
    Unpacked::Finite {
      sign,
      exponent: biased as i32 - F::BIAS,
      significand: (mantissa | 1 << F::MANTISSA_BITS) << (127 - F::MANTISSA_BITS),
    }
  }
}

/// `x >> shift`, plus the round bit (the last bit shifted out) and the sticky bit (whether any
/// other bit shifted out was set, or `sticky` was already set). `shift` must be at least 1 and
/// may be 128 or more.
fn shr_round(x: u128, shift: u32, sticky: bool) -> (u128, bool, bool) {
  debug_assert!(shift >= 1);
  let kept = x.checked_shr(shift).unwrap_or(0);
  let round = x.checked_shr(shift - 1).unwrap_or(0) & 1 == 1;
  let rest = x.checked_shl(129 - shift.min(129)).unwrap_or(0);
  (kept, round, sticky || rest != 0)
}

/// Build the float nearest to `(-1)^sign × 2^exponent × significand / 2^127`, ties to even.
/// `sticky` marks that the exact value is a hair larger in magnitude than that.
///
/// The significand must have its msb set. Results too large for the format become ±∞; results
/// too small go through the subnormals, and may round to ±0.
pub(crate) fn pack<F: IeeeFormat>(sign: bool, exponent: i32, significand: u128, sticky: bool) -> F {
  debug_assert!(significand >> 127 == 1, "significand {significand:#x} is not normalised");
  let sign_bit = (sign as u128) << F::SIGN_SHIFT;
  let infinity = F::EXPONENT_MAX << F::MANTISSA_BITS;

  let biased = exponent.saturating_add(F::BIAS);
  if biased >= F::EXPONENT_MAX as i32 {
    return F::from_raw(sign_bit | infinity)
  }

  let raw = if biased >= 1 {
    // Normal: keep the hidden bit plus MANTISSA_BITS. Writing the exponent as `biased - 1` and
    // *adding* the significand with its hidden bit adds the missing 1 back to the exponent, and
    // lets a rounding carry ripple into it (even up to the infinity pattern, which is correct).
    let (kept, round, more) = shr_round(significand, 127 - F::MANTISSA_BITS, sticky);
    let inc = round_nearest_even(kept & 1 == 1, round, more) as u128;
    ((biased as u128 - 1) << F::MANTISSA_BITS) + kept + inc
  } else {
    // Subnormal: the significand is shifted further right by how far the exponent is below
    // the minimum. A carry out of the top makes it the smallest normal, which is again correct.
    let shift = (128 - F::MANTISSA_BITS as i64 - biased as i64).min(256) as u32;
    let (kept, round, more) = shr_round(significand, shift, sticky);
    kept + round_nearest_even(kept & 1 == 1, round, more) as u128
  };
  F::from_raw(sign_bit | raw)
}

/// Convert between two IEEE formats, rounding to nearest, ties to even, if the destination is
/// narrower.
pub(crate) fn convert<F: IeeeFormat, G: IeeeFormat>(x: F) -> G {
  let sign_bit = |sign: bool| (sign as u128) << G::SIGN_SHIFT;
  match unpack(x) {
    Unpacked::Zero { sign } => G::from_raw(sign_bit(sign)),
    Unpacked::Infinite { sign } => G::from_raw(sign_bit(sign) | G::EXPONENT_MAX << G::MANTISSA_BITS),
    Unpacked::NaN => G::from_raw(nan_raw::<G>()),
    Unpacked::Finite { sign, exponent, significand } => pack(sign, exponent, significand, false),
  }
}

/// The canonical quiet NaN: all exponent bits and the top mantissa bit set.
pub(crate) fn nan_raw<F: IeeeFormat>() -> u128 {
  F::EXPONENT_MAX << F::MANTISSA_BITS | 1 << (F::MANTISSA_BITS - 1)
}
