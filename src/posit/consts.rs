use super::*;
use crate::underlying::const_as;

impl<
  U: crate::Uint,
  const ES: u32,
> Posit<U, ES> {
  /// The `0b1000…` bit pattern, as a `u128`.
  const MSB_U128: u128 = 1 << (U::BITS - 1);

  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self(U::ZERO);

  /// Not-a-real (`NaR`).
  //
  // Represented by the bit pattern `0b1000...0`.
  pub const NAR: Self = Self(U::MSB);

  /// Largest representable value, equal to `-MIN`, `2` <sup>[`Self::MAX_SCALE`]</sup>.
  //
  // Represented by the bit pattern `0b0111...1`.
  pub const MAX: Self = Self(const_as(Self::MSB_U128 - 1));

  /// Smallest representable value, equal to `-MAX`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::MIN_POSITIVE`]!
  //
  // Represented by the bit pattern `0b100...01`.
  pub const MIN: Self = Self(const_as(Self::MSB_U128 + 1));

  /// Smallest *positive* value, equal to `-MAX_NEGATIVE`, `2` <sup>[`Self::MIN_SCALE`]</sup>.
  //
  // Represented by the bit pattern `0b000...01`.
  pub const MIN_POSITIVE: Self = Self(U::ONE);

  /// Largest *negative* value, equal to `-MIN_POSITIVE`.
  //
  // Represented by the bit pattern `0b1111...1`.
  pub const MAX_NEGATIVE: Self = Self(U::MAX);

  /// One (`1`), the multiplicative identity element.
  //
  // Represented by the bit pattern `0b0100...0`.
  pub const ONE: Self = Self(const_as(Self::MSB_U128 >> 1));

  /// Negative one (`-1`).
  //
  // Represented by the bit pattern `0b1100...0`.
  pub const MINUS_ONE: Self = Self(const_as(Self::MSB_U128 | Self::MSB_U128 >> 1));

  /// The largest regime, that of [`Self::MAX`]: a run of `BITS - 1` ones, encoding
  /// `BITS - 2`. The smallest is its negation, that of [`Self::MIN_POSITIVE`].
  pub const MAX_REGIME: i32 = Self::BITS as i32 - 2;

  /// The scale (binary exponent) of [`Self::MAX`], i.e. `log2(useed) × (BITS - 2)`, or
  /// `(BITS - 2) × 2^ES`. Every real number at least as large as `2^MAX_SCALE` rounds to `MAX`.
  ///
  /// For example this is 248 for a 64-bit posit with 2 exponent bits, so the threshold is
  /// `2^248 ≈ 4.523128485832664e74`.
  pub const MAX_SCALE: i32 = Self::MAX_REGIME << Self::ES;

  /// The scale (binary exponent) of [`Self::MIN_POSITIVE`], equal to `-MAX_SCALE`. Every nonzero
  /// real number smaller in magnitude than `2^MIN_SCALE` rounds to `MIN_POSITIVE` (or
  /// `MAX_NEGATIVE`); posits never underflow to zero.
  pub const MIN_SCALE: i32 = -Self::MAX_SCALE;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero() {
    assert_eq!(Posit::<u8, 2>::ZERO.to_bits(), 0);
    assert_eq!(Posit::<u64, 3>::ZERO.to_bits(), 0);
  }

  #[test]
  fn nar() {
    assert_eq!(Posit::<u8, 2>::NAR.to_bits(), 0x80);
    assert_eq!(Posit::<u16, 1>::NAR.to_bits(), 0x8000);
    assert_eq!(Posit::<u64, 2>::NAR.to_bits(), 0x8000_0000_0000_0000);
  }

  #[test]
  fn extremes() {
    assert_eq!(Posit::<u16, 2>::MAX.to_bits(), 0x7fff);
    assert_eq!(Posit::<u16, 2>::MIN.to_bits(), 0x8001);
    assert_eq!(Posit::<u16, 2>::MIN_POSITIVE.to_bits(), 0x0001);
    assert_eq!(Posit::<u16, 2>::MAX_NEGATIVE.to_bits(), 0xffff);
    assert_eq!(Posit::<u64, 2>::MAX.to_bits(), 0x7fff_ffff_ffff_ffff);
    assert_eq!(Posit::<u64, 2>::MIN.to_bits(), 0x8000_0000_0000_0001);
  }

  #[test]
  fn one() {
    assert_eq!(Posit::<u8, 0>::ONE.to_bits(), 0x40);
    assert_eq!(Posit::<u32, 2>::ONE.to_bits(), 0x4000_0000);
    assert_eq!(Posit::<u64, 2>::ONE.to_bits(), 0x4000_0000_0000_0000);
    assert_eq!(Posit::<u8, 0>::MINUS_ONE.to_bits(), 0xc0);
    assert_eq!(Posit::<u32, 2>::MINUS_ONE.to_bits(), 0xc000_0000);
    assert_eq!(Posit::<u64, 2>::MINUS_ONE.to_bits(), 0xc000_0000_0000_0000);
  }

  #[test]
  fn scales() {
    assert_eq!(Posit::<u64, 2>::MAX_SCALE, 248);
    assert_eq!(Posit::<u64, 2>::MIN_SCALE, -248);
    assert_eq!(Posit::<u32, 2>::MAX_SCALE, 120);
    assert_eq!(Posit::<u16, 1>::MAX_SCALE, 28);
    assert_eq!(Posit::<u8, 0>::MAX_SCALE, 6);
    assert_eq!(Posit::<u8, 2>::MAX_REGIME, 6);
  }
}
