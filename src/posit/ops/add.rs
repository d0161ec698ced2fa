use super::*;

impl<
  U: crate::Uint,
  const ES: u32,
> Posit<U, ES> {
  /// Return the `Decomposed` result of adding `x` and `y`, plus the sticky bit.
  ///
  /// `x` and `y` cannot be symmetrical (i.e. their sum cannot be 0); callers check for that.
  #[inline]
  pub(crate) fn add_kernel(x: Decomposed<U, ES>, y: Decomposed<U, ES>) -> (Decomposed<U, ES>, bool) {
    // First, order the operands by magnitude: both significands are normalised, so comparing
    // scales and then significands does it.
    let (big, small) =
      if (x.scale(), x.significand) >= (y.scale(), y.significand) { (x, y) } else { (y, x) };
    let shift = (big.scale() - small.scale()) as u32;

    // Place both significands in the double width type, with the leading bit at bit 2W-2. That
    // leaves one bit on the left for the carry of an addition, and W-1 bits on the right below
    // the significand of `big`.
    //
    //   big   = 0_1xxxxxxx_0000000
    //   small = 0_0001yyyy_yyyy000|yy   (shift = 3, bits after | are lost)
    //
    // Then `small` is shifted right to align it with `big`. Any bits shifted out are "jammed"
    // into the lsb: they're so far below the W bits of the result that all they can affect is
    // the sticky bit, which this keeps correct, for sums and differences alike.
    let a = big.significand.widen() << (Self::BITS - 1);
    let b = small.significand.widen() << (Self::BITS - 1);
    let b = if shift >= 2 * Self::BITS - 1 {
      <U::Double as Double>::ONE
    } else {
      let lost = b.mask_lsb(shift) != <U::Double as Double>::ZERO;
      (b >> shift) | if lost { <U::Double as Double>::ONE } else { <U::Double as Double>::ZERO }
    };

    // Add or subtract the magnitudes. The result can't be 0 (the operands aren't symmetrical),
    // and it's positive since `a ≥ b`; the sign is that of `big`.
    //
    // Adding may carry one place to the left, and subtracting may cancel any number of leading
    // bits. Either way, find the new leading bit and shift it to the top: the value is then
    // `sum / 2^(2W-1) × 2^(big.scale + 1 - leading_zeros)`.
    let sum = if x.sign == y.sign { a + b } else { a - b };
    let leading_zeros = sum.leading_zeros();
    let sum = sum << leading_zeros;
    let (significand, lost) = sum.hi_lo();
    let scale = big.scale() + 1 - leading_zeros as i32;

    (Decomposed::from_scale(big.sign, scale, significand), lost != U::ZERO)
  }

  /// Add two posits, rounding the result.
  ///
  /// If either is NaR, the result is NaR. `x + 0` is `x`, and `x + (-x)` is 0; otherwise, the
  /// result is never 0, since posits don't underflow.
  ///
  /// ```
  /// # use posit_arith::*;
  /// assert_eq!(p32::ONE.plus(p32::ONE), p32::round_from(2.0f64));
  /// assert_eq!(p16::ONE + p16::MINUS_ONE, p16::ZERO);
  /// assert_eq!(p8::MAX + p8::MAX, p8::MAX);
  /// assert_eq!(p64::NAR + p64::ONE, p64::NAR);
  /// ```
  pub fn plus(self, other: Self) -> Self {
    if self.is_nar() || other.is_nar() {
      Self::NAR
    } else if self.is_zero() {
      other
    } else if other.is_zero() {
      self
    } else if self.0.wrapping_add(other.0) == U::ZERO {
      Self::ZERO
    } else {
      let (result, sticky) = Self::add_kernel(self.decompose(), other.decompose());
      result.pack_round(sticky)
    }
  }

  /// Subtract `other` from `self`, rounding the result. This is the same as `self + (-other)`.
  ///
  /// ```
  /// # use posit_arith::*;
  /// assert_eq!(p32::ONE.minus(p32::ONE), p32::ZERO);
  /// assert_eq!(p16::ZERO - p16::ONE, p16::MINUS_ONE);
  /// ```
  #[inline]
  pub fn minus(self, other: Self) -> Self {
    self.plus(-other)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign, plus}
super::mk_ops!{Sub, SubAssign, sub, sub_assign, minus}

#[cfg(test)]
mod tests {
  mod add {
    super::super::super::mk_tests!{+, +=}
  }

  mod sub {
    super::super::super::mk_tests!{-, -=}
  }

  mod properties {
    use crate::{p8, p64, RoundFrom};
    use proptest::prelude::*;

    #[test]
    fn demo_values() {
      let a = p64::from_bits(0x5000_0664_656a_dc55);
      let b = p64::from_bits(0x5681_6564_6133_1664);
      assert_eq!(a + b, p64::from_bits(0x5b40_b5e4_634e_f95c));
      assert_eq!(a - b, p64::from_bits(0xb2fd_4200_086f_8be2));
    }

    #[test]
    fn cancellation() {
      // 1.125 - 1 = 0.125: 3 leading bits cancel, exactly.
      let x = p8::from_bits(0b0_10_00_001);
      assert_eq!(x - p8::ONE, p8::round_from(0.125f64));
      assert_eq!(p8::ONE - x, p8::round_from(-0.125f64));
    }

    #[test]
    fn far_apart() {
      // The small operand is far below the last bit of the big one.
      assert_eq!(p64::ONE + p64::MIN_POSITIVE, p64::ONE);
      assert_eq!(p64::ONE - p64::MIN_POSITIVE, p64::ONE);
      assert_eq!(p64::MAX - p64::ONE, p64::MAX);
      // 2^-247 sits between 2^-248 and the next posit, 2^-244, and is geometrically closer to the
      // former.
      assert_eq!(p64::MIN_POSITIVE + p64::MIN_POSITIVE, p64::MIN_POSITIVE);
    }

    proptest!{
      #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

      #[test]
      fn commutative(a in p64::cases_proptest_all(), b in p64::cases_proptest_all()) {
        prop_assert_eq!(a + b, b + a);
      }

      #[test]
      fn zero_is_identity(a in p64::cases_proptest_all()) {
        prop_assert_eq!(a + p64::ZERO, a);
        prop_assert_eq!(a - p64::ZERO, a);
        prop_assert_eq!(p64::ZERO - a, -a);
      }

      #[test]
      fn self_subtraction(a in p64::cases_proptest()) {
        prop_assert_eq!(a - a, p64::ZERO);
        prop_assert_eq!(a + -a, p64::ZERO);
      }

      #[test]
      fn sub_is_add_neg(a in p64::cases_proptest_all(), b in p64::cases_proptest_all()) {
        prop_assert_eq!(a - b, a + (-b));
      }
    }
  }
}
