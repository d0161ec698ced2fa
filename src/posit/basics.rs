use super::*;

/// The widest exponent field we accept. Scales are kept in an `i32`, and multiplication and
/// square root need headroom for twice the maximum scale.
const MAX_ES: u32 = 20;

impl<
  U: crate::Uint,
  const ES: u32,
> Posit<U, ES> {
  /// The size of this posit type in bits, i.e. the width of `U`.
  pub const BITS: u32 = {
    assert!(
      U::BITS >= 8 && U::BITS <= 64,
      "Posits are only supported in 8, 16, 32, or 64-bit words",
    );
    U::BITS
  };

  /// The number of exponent bits (i.e. parameter `ES`).
  pub const ES: u32 = {
    // The sign bit and the shortest regime (2 bits) always take up 3 bits. An exponent wider
    // than what's left could never be stored in full, not even for numbers close to 1.
    assert!(
      ES + 3 <= Self::BITS,
      "Cannot use a number of exponent bits ES larger than the number of total bits minus 3",
    );
    assert!(
      ES <= MAX_ES,
      "The chosen ES is too big: scales up to (BITS - 2) << ES must fit comfortably in an i32",
    );
    ES
  };

  /// Construct a posit from its raw bit representation. Every bit pattern is a valid posit, so
  /// this never fails and `Self::from_bits(x).to_bits() == x` for all `x`.
  #[inline]
  pub const fn from_bits(bits: U) -> Self {
    Self(bits)
  }

  /// Return the underlying bit representation of `self`.
  #[inline]
  pub const fn to_bits(self) -> U {
    self.0
  }

  /// Checks whether `self` is an exception ([0](Self::ZERO) or [NaR](Self::NAR)), that is, the
  /// same as `self == Self::ZERO || self == Self::NAR`, but faster.
  #[inline]
  pub(crate) fn is_special(&self) -> bool {
    self.0 << 1 == U::ZERO
  }

  /// Checks whether `self` is [NaR](Self::NAR).
  #[inline]
  pub fn is_nar(self) -> bool {
    self.0 == U::MSB
  }

  /// Checks whether `self` is [0](Self::ZERO).
  #[inline]
  pub fn is_zero(self) -> bool {
    self.0 == U::ZERO
  }

  /// Checks whether `self` is a negative real number (NaR is not).
  #[inline]
  pub fn is_negative(self) -> bool {
    self.0.get_msb() && !self.is_nar()
  }
}

impl<
  U: crate::Uint,
  const ES: u32,
> Decomposed<U, ES> {
  /// As [`Posit::BITS`].
  pub const BITS: u32 = Posit::<U, ES>::BITS;

  /// As [`Posit::ES`].
  pub const ES: u32 = Posit::<U, ES>::ES;

  /// The scale, i.e. the binary exponent, of the number: `regime × 2^ES + exponent`.
  #[inline]
  pub fn scale(self) -> i32 {
    (self.regime << Self::ES) + self.exponent as i32
  }

  /// Whether the regime is a run of 1s (`regime ≥ 0`) rather than of 0s.
  #[inline]
  pub fn regime_sign(self) -> bool {
    self.regime >= 0
  }

  /// Build a `Decomposed` from a sign, a scale, and a significand; the scale is split into
  /// regime and exponent, i.e. `regime = ⌊scale / 2^ES⌋`, `exponent = scale mod 2^ES`.
  ///
  /// `significand` must have its msb set.
  #[inline]
  pub fn from_scale(sign: bool, scale: i32, significand: U) -> Self {
    debug_assert!(significand.get_msb(), "significand {significand:?} is not normalised");
    Self {
      sign,
      regime: scale >> Self::ES,
      exponent: (scale & ((1 << Self::ES) - 1)) as u32,
      significand,
    }
  }
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use posit_arith::Posit;
  /// pub fn foo() -> u32 { Posit::<u8, 6>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_8_many() {}

  /// ```compile_fail
  /// use posit_arith::Posit;
  /// pub fn foo() -> u32 { Posit::<u16, 14>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_16_many() {}

  /// ```compile_fail
  /// use posit_arith::Posit;
  /// pub fn foo() -> u32 { Posit::<u32, 21>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_32_many() {}

  /// ```compile_fail
  /// use posit_arith::Posit;
  /// pub fn foo() -> u32 { Posit::<u64, 21>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_64_many() {}

  /// ```compile_fail
  /// use posit_arith::{Posit, RoundFrom};
  /// pub fn foo() -> Posit<u8, 7> { Posit::<u8, 7>::round_from(1.0f64) }
  /// fn main() { let _ = foo(); }
  /// ```
  #[allow(dead_code)]
  fn conversion_fail_8_many() {}
}
