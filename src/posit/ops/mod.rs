use super::*;
use crate::underlying::Double;

/// Addition and subtraction (both use the same addition algorithm, and `a - b` is simply
/// `a + (-b)`).
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Helper macro for implementing operators for all combinations of value and reference, on top
/// of an inherent method `$inherent`.
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $inherent:ident) => {
    impl<U: crate::Uint, const ES: u32>
    $trait<Posit<U, ES>> for Posit<U, ES> {
      type Output = Posit<U, ES>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$inherent(rhs) }
    }

    impl<U: crate::Uint, const ES: u32>
    $trait<&Posit<U, ES>> for Posit<U, ES> {
      type Output = Posit<U, ES>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$inherent(*rhs) }
    }

    impl<U: crate::Uint, const ES: u32>
    $trait<Posit<U, ES>> for &Posit<U, ES> {
      type Output = Posit<U, ES>;

      #[inline]
      fn $name(self, rhs: Posit<U, ES>) -> Self::Output { (*self).$inherent(rhs) }
    }

    impl<U: crate::Uint, const ES: u32>
    $trait<&Posit<U, ES>> for &Posit<U, ES> {
      type Output = Posit<U, ES>;

      #[inline]
      fn $name(self, rhs: &Posit<U, ES>) -> Self::Output { (*self).$inherent(*rhs) }
    }

    impl<U: crate::Uint, const ES: u32>
    $trait_assign<Posit<U, ES>> for Posit<U, ES> {
      #[inline]
      fn $name_assign(&mut self, rhs: Posit<U, ES>) { *self = self.$inherent(rhs) }
    }

    impl<U: crate::Uint, const ES: u32>
    $trait_assign<&Posit<U, ES>> for Posit<U, ES> {
      #[inline]
      fn $name_assign(&mut self, rhs: &Posit<U, ES>) { *self = self.$inherent(*rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantating the suite of tests for a binary operator of posits.
#[cfg(test)]
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt) => {
    use crate::Posit;
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = crate::p32::ONE;
      let mut b = crate::p32::MINUS_ONE;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Aux function: check that `a $op b` is rounded correctly.
    fn is_correct_rounded<U: crate::Uint, const ES: u32>(
      a: Posit<U, ES>,
      b: Posit<U, ES>,
    ) -> bool {
      let posit = a $op b;
      if let (Ok(a), Ok(b)) = (Rational::try_from(a), Rational::try_from(b)) {
        if stringify!($op) == "/" && b == Rational::from(0) {
          return posit == Posit::NAR
        }
        let exact = a $op b;
        crate::posit::rational::is_correct_rounded(exact, posit)
      } else {
        posit == Posit::NAR
      }
    }

    macro_rules! test_exhaustive {
      ($name:ident, $posit:ty) => {
        #[test]
        fn $name() {
          for a in <$posit>::cases_exhaustive_all() {
            for b in <$posit>::cases_exhaustive_all() {
              assert!(is_correct_rounded(a, b), "{:?} {} {:?}", a, stringify!($op), b)
            }
          }
        }
      };
    }

    macro_rules! test_proptest {
      ($name:ident, $posit:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in <$posit>::cases_proptest_all(),
            b in <$posit>::cases_proptest_all(),
          ) {
            prop_assert!(is_correct_rounded(a, b), "{:?} {} {:?}", a, stringify!($op), b)
          }
        }
      };
    }

    // Every pair of 8-bit posits is 2^16 operations, which is quick. Above that, it's
    // infeasible to test binary operations exhaustively.
    test_exhaustive!{p8_exhaustive, crate::p8}
    test_exhaustive!{posit_8_0_exhaustive, Posit::<u8, 0>}
    test_exhaustive!{posit_8_1_exhaustive, Posit::<u8, 1>}
    test_exhaustive!{posit_8_3_exhaustive, Posit::<u8, 3>}
    test_exhaustive!{posit_8_5_exhaustive, Posit::<u8, 5>}

    test_proptest!{p16_proptest, crate::p16}
    test_proptest!{p32_proptest, crate::p32}
    test_proptest!{p64_proptest, crate::p64}
    test_proptest!{posit_16_1_proptest, Posit::<u16, 1>}
    test_proptest!{posit_32_3_proptest, Posit::<u32, 3>}
    test_proptest!{posit_64_0_proptest, Posit::<u64, 0>}
    test_proptest!{posit_64_4_proptest, Posit::<u64, 4>}
  }
}

#[cfg(test)]
pub(crate) use mk_tests;
