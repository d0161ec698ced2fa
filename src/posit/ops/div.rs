use super::*;

impl<
  U: crate::Uint,
  const ES: u32,
> Posit<U, ES> {
  /// Return the `Decomposed` result of dividing `x` by `y`, plus the sticky bit.
  #[inline]
  pub(crate) fn div_kernel(x: Decomposed<U, ES>, y: Decomposed<U, ES>) -> (Decomposed<U, ES>, bool) {
    // Let's use ÷ to denote true mathematical division, and / denote integer division (rounding
    // down). To divide two numbers in the form `significand / 2^(W-1) × 2^scale`, we have
    //
    //   (x.sig ÷ 2^(W-1) × 2^x.scale) ÷ (y.sig ÷ 2^(W-1) × 2^y.scale)
    //   = (x.sig ÷ y.sig) × 2^(x.scale - y.scale)
    //   = ((x.sig × 2^W) ÷ y.sig) ÷ 2^W × 2^(x.scale - y.scale)
    //
    // So we divide the double width `x.sig << W` by `y.sig`, and get a quotient with W or W+1
    // significant bits (since `x.sig ÷ y.sig` is in ]1/2, 2[) and a remainder. A nonzero
    // remainder means the exact quotient has more bits, all of which go into `sticky`.
    //
    //   - If the quotient has W+1 bits, the significand is its top W bits and its lsb goes into
    //     `sticky` too; the scale is `x.scale - y.scale`.
    //   - If it has W bits, the significand is the whole quotient, but we have to take 1 from
    //     the scale, since we've effectively multiplied by 2 to get the leading bit in place.
    let dividend = x.significand.widen() << Self::BITS;
    let divisor = y.significand.widen();
    let quotient = dividend / divisor;
    let remainder = dividend % divisor;

    let carry = quotient.get_bit(Self::BITS);
    let (significand, lost) = if carry {
      ((quotient >> 1).hi_lo().1, quotient.get_bit(0))
    } else {
      (quotient.hi_lo().1, false)
    };
    let scale = x.scale() - y.scale() - !carry as i32;
    let sticky = lost || remainder != <U::Double as Double>::ZERO;

    (Decomposed::from_scale(x.sign ^ y.sign, scale, significand), sticky)
  }

  /// Divide `self` by `other`, rounding the result.
  ///
  /// If either is NaR, or if `other` is 0, the result is NaR. Otherwise, if `self` is 0, the
  /// result is 0.
  ///
  /// ```
  /// # use posit_arith::*;
  /// assert_eq!(p64::MINUS_ONE.divide(p64::MINUS_ONE), p64::ONE);
  /// assert_eq!(p16::ONE / p16::ZERO, p16::NAR);
  /// assert_eq!(p32::round_from(3.0f64) / p32::round_from(4.0f64), p32::round_from(0.75f64));
  /// ```
  pub fn divide(self, other: Self) -> Self {
    if self.is_nar() || other.is_nar() || other.is_zero() {
      Self::NAR
    } else if self.is_zero() {
      Self::ZERO
    } else {
      let (result, sticky) = Self::div_kernel(self.decompose(), other.decompose());
      result.pack_round(sticky)
    }
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign, divide}
