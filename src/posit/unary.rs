use super::*;

impl<
  U: crate::Uint,
  const ES: u32,
> Posit<U, ES> {
  /// Returns the posit value of the lexicographic successor of `self`'s representation.
  ///
  /// Note that, unlike every other function of a posit, `next` and `prior` do not produce a
  /// [NaR](Posit::NAR) output on a [NaR](Posit::NAR) input: the bit patterns simply wrap
  /// around, so `MAX.next()` is NaR and `NAR.next()` is `MIN`.
  #[inline]
  pub fn next(self) -> Self {
    Self::from_bits(self.0.wrapping_add(U::ONE))
  }

  /// Returns the posit value of the lexicographic predecessor of `self`'s representation.
  ///
  /// See [`Self::next`] about NaR.
  #[inline]
  pub fn prior(self) -> Self {
    Self::from_bits(self.0.wrapping_sub(U::ONE))
  }

  /// Return the absolute value of `self`. Exact, and NaR is mapped to NaR.
  #[inline]
  pub fn abs(self) -> Self {
    if self.0.get_msb() { -self } else { self }
  }
}

/// Negation is the two's complement of the bit pattern. This is always exact, and 0 and NaR are
/// mapped to themselves.
impl<U: crate::Uint, const ES: u32>
core::ops::Neg for Posit<U, ES> {
  type Output = Posit<U, ES>;

  #[inline]
  fn neg(self) -> Self::Output {
    Posit::from_bits(self.0.wrapping_neg())
  }
}

impl<U: crate::Uint, const ES: u32>
core::ops::Neg for &Posit<U, ES> {
  type Output = Posit<U, ES>;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::rational::Rational;

  mod neg {
    use super::*;

    #[test]
    fn p8() {
      assert_eq!(-crate::p8::ZERO, crate::p8::ZERO);
      assert_eq!(-crate::p8::NAR, crate::p8::NAR);
      assert_eq!(-crate::p8::ONE, crate::p8::MINUS_ONE);
      assert_eq!(-&crate::p8::MAX, crate::p8::MIN);
      for p in crate::p8::cases_exhaustive() {
        assert_eq!(Rational::try_from(-p).unwrap(), -Rational::try_from(p).unwrap())
      }
    }

    #[test]
    fn posit_16_0() {
      type P = Posit<u16, 0>;
      assert_eq!(-P::ZERO, P::ZERO);
      assert_eq!(-P::NAR, P::NAR);
      for p in P::cases_exhaustive() {
        assert_eq!(Rational::try_from(-p).unwrap(), -Rational::try_from(p).unwrap())
      }
    }
  }

  mod abs {
    use super::*;
    use malachite::base::num::arithmetic::traits::Abs;

    #[test]
    fn p8() {
      assert_eq!(crate::p8::ZERO.abs(), crate::p8::ZERO);
      assert_eq!(crate::p8::NAR.abs(), crate::p8::NAR);
      assert_eq!(crate::p8::MIN.abs(), crate::p8::MAX);
      for p in crate::p8::cases_exhaustive() {
        assert_eq!(Rational::try_from(p.abs()).unwrap(), Rational::try_from(p).unwrap().abs())
      }
    }

    #[test]
    fn posit_16_3() {
      type P = Posit<u16, 3>;
      for p in P::cases_exhaustive() {
        assert_eq!(Rational::try_from(p.abs()).unwrap(), Rational::try_from(p).unwrap().abs())
      }
    }
  }

  mod next_prior {
    use super::*;

    #[test]
    fn wraps() {
      assert_eq!(crate::p32::MAX.next(), crate::p32::NAR);
      assert_eq!(crate::p32::NAR.next(), crate::p32::MIN);
      assert_eq!(crate::p32::MAX_NEGATIVE.next(), crate::p32::ZERO);
      assert_eq!(crate::p32::ZERO.next(), crate::p32::MIN_POSITIVE);
      assert_eq!(crate::p32::ZERO.prior(), crate::p32::MAX_NEGATIVE);
      assert_eq!(crate::p32::MIN.prior(), crate::p32::NAR);
    }

    #[test]
    fn increasing() {
      for p in crate::p8::cases_exhaustive() {
        if p != crate::p8::MAX {
          assert!(Rational::try_from(p).unwrap() < Rational::try_from(p.next()).unwrap());
          assert_eq!(p.next().prior(), p);
        }
      }
    }
  }
}
