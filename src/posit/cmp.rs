use super::*;

impl<
  U: crate::Uint,
  const ES: u32,
> Posit<U, ES> {
  /// The bit pattern, remapped so that comparing keys as *unsigned* integers gives the same
  /// answer as comparing the original patterns as two's complement *signed* integers. Flipping
  /// the sign bit does exactly this: NaR (`0b1000…`) becomes the smallest key, `MIN`
  /// (`0b100…01`) the next one, and so on up to `MAX`.
  #[inline]
  pub(crate) fn ordering_key(self) -> U {
    self.0 ^ U::MSB
  }

  /// Whether `self` and `other` are the same real number. Unlike `==`, this is false whenever
  /// either side is NaR, including `NaR` compared to itself.
  ///
  /// ```
  /// # use posit_arith::p32;
  /// assert!(p32::ONE.equal(p32::ONE));
  /// assert!(!p32::NAR.equal(p32::NAR));
  /// assert!(p32::NAR == p32::NAR);
  /// ```
  #[inline]
  pub fn equal(self, other: Self) -> bool {
    self.0 == other.0 && !self.is_nar()
  }

  /// Whether `self < other`, in the order where NaR is below every real number.
  #[inline]
  pub fn less_than(self, other: Self) -> bool {
    self.ordering_key() < other.ordering_key()
  }

  /// Whether `self ≤ other`, in the order where NaR is below every real number, except that
  /// the diagonal requires [`Self::equal`]: `NaR.less_or_equal(NaR)` is false.
  #[inline]
  pub fn less_or_equal(self, other: Self) -> bool {
    self.less_than(other) || self.equal(other)
  }

  /// Whether `self > other`; as `other.less_than(self)`.
  #[inline]
  pub fn greater_than(self, other: Self) -> bool {
    other.less_than(self)
  }

  /// Whether `self ≥ other`; as `other.less_or_equal(self)`.
  #[inline]
  pub fn greater_or_equal(self, other: Self) -> bool {
    other.less_or_equal(self)
  }
}
