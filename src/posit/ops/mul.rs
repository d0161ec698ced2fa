use super::*;

impl<
  U: crate::Uint,
  const ES: u32,
> Posit<U, ES> {
  /// Return the `Decomposed` result of multiplying `x` and `y`, plus the sticky bit.
  #[inline]
  pub(crate) fn mul_kernel(x: Decomposed<U, ES>, y: Decomposed<U, ES>) -> (Decomposed<U, ES>, bool) {
    // Multiplying two numbers in the form `significand / 2^(W-1) × 2^scale` is easy: scales add,
    // and significands multiply.
    //
    //   (x.sig / 2^(W-1) × 2^x.scale) × (y.sig / 2^(W-1) × 2^y.scale)
    //   = (x.sig × y.sig) / 2^(2W-2) × 2^(x.scale + y.scale)
    //
    // The product of the significands takes up to 2W bits, so it's computed in the double width
    // type, where it is exact. Both significands are in [1, 2[, so their product is in [1, 4[:
    // its leading bit is either bit 2W-1 or bit 2W-2. In the first case the result is ≥ 2, so
    // it goes one place further right, and the scale goes up by 1 to compensate. For example,
    // 1.5 × 1.5 = 2.25 = 1.125 × 2^1.
    //
    // The top W bits are the result's significand; the bottom W bits are lost, and accumulated
    // onto `sticky`.
    let product = x.significand.widen() * y.significand.widen();
    let carry = product.get_bit(2 * Self::BITS - 1);
    let product = if carry { product } else { product << 1 };
    let (significand, lost) = product.hi_lo();
    let scale = x.scale() + y.scale() + carry as i32;

    (Decomposed::from_scale(x.sign ^ y.sign, scale, significand), lost != U::ZERO)
  }

  /// Multiply two posits, rounding the result.
  ///
  /// If either is NaR, the result is NaR. Otherwise, if either is 0, the result is 0. The result
  /// is never 0 otherwise, since posits don't underflow; nor NaR, since they don't overflow.
  ///
  /// ```
  /// # use posit_arith::*;
  /// assert_eq!(p64::ONE.multiply(p64::MINUS_ONE), p64::MINUS_ONE);
  /// assert_eq!(p16::round_from(1.5f64) * p16::round_from(1.5f64), p16::round_from(2.25f64));
  /// assert_eq!(p32::MAX * p32::MAX, p32::MAX);
  /// assert_eq!(p8::NAR * p8::ZERO, p8::NAR);
  /// ```
  pub fn multiply(self, other: Self) -> Self {
    if self.is_nar() || other.is_nar() {
      Self::NAR
    } else if self.is_zero() || other.is_zero() {
      Self::ZERO
    } else {
      let (result, sticky) = Self::mul_kernel(self.decompose(), other.decompose());
      result.pack_round(sticky)
    }
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign, multiply}
