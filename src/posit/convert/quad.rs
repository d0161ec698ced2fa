use super::RoundFrom;
use super::ieee::{self, IeeeFormat, Unpacked};

/// An IEEE 754 quadruple precision (binary128) floating point number, held as its raw bit
/// pattern: 1 sign bit, 15 exponent bits, 112 explicit mantissa bits.
///
/// There is no arithmetic on `Quad`s; they exist as a wide interchange type, wide enough to hold
/// every 64-bit posit with 2 exponent bits exactly. Equality is on the bit pattern, so `+0` and
/// `-0` are different, and a NaN equals itself.
///
/// ```
/// # use posit_arith::*;
/// let x = Quad::from(1.5f64);
/// assert_eq!(x.to_bits(), 0x3fff_8000_0000_0000_0000_0000_0000_0000);
/// assert_eq!(f64::round_from(x), 1.5);
/// assert_eq!(p64::round_from(x), p64::round_from(1.5f64));
/// ```
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct Quad(u128);

impl Quad {
  /// Positive zero.
  pub const ZERO: Self = Self(0);

  /// One.
  pub const ONE: Self = Self(0x3fff << 112);

  /// A quiet NaN.
  pub const NAN: Self = Self(0x7fff_8000 << 96);

  /// Construct a `Quad` from its raw bit representation.
  #[inline]
  pub const fn from_bits(bits: u128) -> Self {
    Self(bits)
  }

  /// Return the raw bit representation of `self`.
  #[inline]
  pub const fn to_bits(self) -> u128 {
    self.0
  }

  /// Whether `self` is a NaN.
  #[inline]
  pub fn is_nan(self) -> bool {
    matches!(ieee::unpack(self), Unpacked::NaN)
  }

  /// Whether `self` is neither infinite nor NaN.
  #[inline]
  pub fn is_finite(self) -> bool {
    matches!(ieee::unpack(self), Unpacked::Zero { .. } | Unpacked::Finite { .. })
  }

  /// Whether the sign bit is set (this includes `-0` and NaNs with the sign bit set).
  #[inline]
  pub fn is_sign_negative(self) -> bool {
    self.0 >> (Self::MANTISSA_BITS + Self::EXPONENT_BITS) == 1
  }
}

impl core::fmt::Debug for Quad {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("Quad")
      .field(&format_args!("0x{:032x}", self.0))
      .finish()
  }
}

/// Exact: every `f32` is representable as a `Quad`.
impl From<f32> for Quad {
  fn from(value: f32) -> Self {
    ieee::convert(value)
  }
}

/// Exact: every `f64` is representable as a `Quad`.
impl From<f64> for Quad {
  fn from(value: f64) -> Self {
    ieee::convert(value)
  }
}

/// Round to the nearest `f64`, ties to even; overflows to ±∞ and underflows through the
/// subnormals to ±0.
impl RoundFrom<Quad> for f64 {
  fn round_from(value: Quad) -> Self {
    ieee::convert(value)
  }
}

/// Round to the nearest `f32`, ties to even; overflows to ±∞ and underflows through the
/// subnormals to ±0.
impl RoundFrom<Quad> for f32 {
  fn round_from(value: Quad) -> Self {
    ieee::convert(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn consts() {
    assert_eq!(Quad::from(0.0f64), Quad::ZERO);
    assert_eq!(Quad::from(1.0f32), Quad::ONE);
    assert!(Quad::NAN.is_nan());
    assert!(Quad::from(f64::NAN).is_nan());
    assert!(!Quad::ONE.is_nan());
    assert!(Quad::ONE.is_finite());
    assert!(!Quad::from(f32::INFINITY).is_finite());
    assert!(Quad::from(-0.0f64).is_sign_negative());
  }

  #[test]
  fn examples() {
    assert_eq!(Quad::from(-2.0f64).to_bits(), 0xc000 << 112);
    assert_eq!(Quad::from(0.5f64).to_bits(), 0x3ffe << 112);
    assert_eq!(Quad::from(f64::INFINITY).to_bits(), 0x7fff << 112);
    // The smallest f64 subnormal is a normal number in binary128.
    assert_eq!(Quad::from(f64::from_bits(1)).to_bits(), ((0x3fff - 1074) as u128) << 112);
  }

  #[test]
  fn narrowing() {
    // 1 + 2^-60 doesn't fit in an f64: ties and non-ties.
    assert_eq!(f64::round_from(Quad::from_bits(0x3fff << 112 | 1 << 52)), 1.0);
    assert_eq!(f64::round_from(Quad::from_bits(0x3fff << 112 | 1 << 59)), 1.0);
    assert_eq!(f64::round_from(Quad::from_bits(0x3fff << 112 | 1 << 59 | 1)), 1.0 + f64::EPSILON);
    assert_eq!(f64::round_from(Quad::from_bits(0x4fff << 112)), f64::INFINITY);
    assert_eq!(f64::round_from(Quad::from_bits(0xafff << 112)), -0.0);
    assert_eq!(f32::round_from(Quad::from(1e-40f64)), 1e-40f32);
  }

  #[test]
  fn debug() {
    assert_eq!(format!("{:?}", Quad::ONE), "Quad(0x3fff0000000000000000000000000000)");
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn f64_roundtrip(x: f64) {
      prop_assume!(!x.is_nan());
      prop_assert_eq!(f64::round_from(Quad::from(x)).to_bits(), x.to_bits());
    }

    #[test]
    fn f32_roundtrip(x: f32) {
      prop_assume!(!x.is_nan());
      prop_assert_eq!(f32::round_from(Quad::from(x)).to_bits(), x.to_bits());
      prop_assert_eq!(f64::round_from(Quad::from(x)), x as f64);
    }
  }
}
