use super::*;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{PowerOf2, Pow, Abs, Reciprocal};

/// The error type returned when a [Posit] cannot be converted to a [Rational] because it is
/// [NaR](Posit::NAR).
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct IsNaR;

impl<
  U: crate::Uint,
  const ES: u32,
> Posit<U, ES> {
  /// Convert a posit **which is not 0 or NaR** into a [Rational] value. Panics if `self` is 0 or
  /// NaR.
  ///
  /// This is a **super-explicit** and **super-obvious** rendition of the algorithm for decoding a
  /// posit, walking the bits one by one, since this is what the optimised codec is checked
  /// against!
  fn into_rational_regular(self) -> Rational {
    let bits: u128 = self.0.into();
    let width = Self::BITS;
    let bit = |x: u128, i: u32| (x >> i) & 1 == 1;

    if bits << (128 - width) << 1 == 0 { panic!("Should not pass {self:?} to into_rational_regular") }

    // Sign, then the two's complement absolute value.
    let sign = bit(bits, width - 1);
    let mask = u128::MAX >> (128 - width);
    let abs = if sign { bits.wrapping_neg() & mask } else { bits };

    // Walk the regime, from bit `width - 2` down.
    let mut i = width - 2;
    let regime_bit = bit(abs, i);
    let mut run = 0i64;
    loop {
      if bit(abs, i) != regime_bit { break }
      run += 1;
      if i == 0 { break }
      i -= 1;
    }
    let regime = if regime_bit { run - 1 } else { -run };

    // `i` now points at the terminating bit (or at bit 0, if the run reached the end). Everything
    // after it is exponent and then fraction; missing exponent bits are 0.
    let mut remaining = (width - 2) as i64 - run;  // bits after the terminating bit
    let mut exponent = 0i64;
    for _ in 0 .. ES {
      exponent <<= 1;
      if remaining > 0 {
        remaining -= 1;
        exponent |= bit(abs, remaining as u32) as i64;
      }
    }
    let fraction_len = remaining.max(0);
    let fraction = abs & !(u128::MAX << fraction_len);

    let useed = Rational::power_of_2(1i64 << ES);
    let sign = Rational::from(if sign {-1} else {1});
    let regime = useed.pow(regime);
    let exponent = Rational::power_of_2(exponent);
    let fraction = Rational::from(1) + Rational::from(fraction) / Rational::power_of_2(fraction_len);

    sign * regime * exponent * fraction
  }
}

impl<
  U: crate::Uint,
  const ES: u32,
> TryFrom<Posit<U, ES>> for Rational {
  type Error = IsNaR;

  fn try_from(value: Posit<U, ES>) -> Result<Self, Self::Error> {
    if value == Posit::ZERO {
      Ok(Rational::from(0))
    } else if value == Posit::NAR {
      Err(IsNaR)
    } else {
      Ok(value.into_rational_regular())
    }
  }
}

impl<
  U: crate::Uint,
  const ES: u32,
> From<Decomposed<U, ES>> for Rational {
  fn from(value: Decomposed<U, ES>) -> Self {
    let significand: u128 = value.significand.into();
    let significand = Rational::from(significand) / Rational::power_of_2(U::BITS as i64 - 1);
    let scale = Rational::power_of_2(value.scale() as i64);
    let sign = Rational::from(if value.sign {-1} else {1});
    sign * significand * scale
  }
}

/// Check whether the rational number `exact` should be rounded to `posit`.
///
///   - Over- or under-flow (magnitude ≥ [Posit::MAX] or ≤ [Posit::MIN_POSITIVE]): round to
///     the extreme with the right sign, never to 0 or NaR.
///   - Geometric case (exponent bits are cut off by the regime): round to nearest posit in terms
///     of absolute **ratio**, ties to even.
///   - Normal case (remaining domain): round to nearest posit in terms of absolute **difference**,
///     ties to even.
pub fn is_correct_rounded<U: crate::Uint, const ES: u32>(
  exact: Rational,
  posit: Posit<U, ES>,
) -> bool {
  // Only the exact number 0 is rounded to posit 0.
  if posit == Posit::<U, ES>::ZERO { return exact == Rational::from(0) }
  // No number is rounded to posit NaR.
  if posit == Posit::<U, ES>::NAR { return false }

  // Overflow case: if exact is > MAX, < MIN, > 0 and < MIN_POSITIVE, or < 0 and > MAX_NEGATIVE
  if exact > Rational::from(0) {
    if exact >= Rational::try_from(Posit::<U, ES>::MAX).unwrap() {
      return posit == Posit::<U, ES>::MAX
    }
    else if exact <= Rational::try_from(Posit::<U, ES>::MIN_POSITIVE).unwrap() {
      return posit == Posit::<U, ES>::MIN_POSITIVE
    }
  } else if exact < Rational::from(0) {
    if exact <= Rational::try_from(Posit::<U, ES>::MIN).unwrap() {
      return posit == Posit::<U, ES>::MIN
    }
    else if exact >= Rational::try_from(Posit::<U, ES>::MAX_NEGATIVE).unwrap() {
      return posit == Posit::<U, ES>::MAX_NEGATIVE
    }
  } else {
    // exact is 0 but posit isn't
    return false
  }

  // Remaining cases: round to nearest (arithmetic nearest, or geometric nearest *only if* exponent
  // bits are cut). `distance` uses arithmetic or geometric distance accordingly.
  let distance = {
    // If `1 + regime_len + 1 + ES > BITS`, i.e. on the edges of the posit's dynamic range, some
    // exponent bits are chopped and hence we are in a region of geometric rounding. The regime
    // of length `BITS - 2 - ES` corresponds to a scale of `(BITS - 2 - ES) << ES`.
    let geometric_cutoff = Rational::power_of_2(((U::BITS - 2 - ES) as i64) << ES);
    let arithmetic_range = (&geometric_cutoff).reciprocal() ..= geometric_cutoff;
    let is_arithmetic_rounding = arithmetic_range.contains(&(&exact).abs());

    move |x: &Rational, y: &Rational| {
      if is_arithmetic_rounding {
        x - y
      } else {
        if x.abs() >= y.abs() {x / y} else {y / x}
      }
    }
  };

  // `posit` represents exactly the number `curr`, while the immediately previous and next posits
  // represent exactly the numbers `prev` and `next`, respectively.
  let prev = Rational::try_from(posit.prior());
  let curr = Rational::try_from(posit).unwrap();
  let next = Rational::try_from(posit.next());
  let posit_is_even = !posit.to_bits().get_lsb();

  if exact == curr {
    // `exact` is exactly represented by `posit`
    true
  } else if let Ok(prev) = prev && prev < exact && exact < curr {
    // `exact` lies in interval `]posit.prior(), posit[`: needs to be closer to `posit` than to
    // `posit.prior()`, or same distance if `posit` is even.
    let distance_curr = distance(&curr, &exact);
    let distance_prev = distance(&exact, &prev);
    distance_curr < distance_prev || distance_curr == distance_prev && posit_is_even
  } else if let Ok(next) = next && curr < exact && exact < next {
    // `exact` lies in interval `]posit, posit.next()[`: needs to be closer to `posit` than to
    // `posit.next()`, or same distance if `posit` is even.
    let distance_curr = distance(&exact, &curr);
    let distance_next = distance(&next, &exact);
    distance_curr < distance_next || distance_curr == distance_next && posit_is_even
  } else {
    // Not in interval
    false
  }
}

/// As [`is_correct_rounded`], but `exact` may be "NaR", in which case `posit` must be NaR.
pub fn try_is_correct_rounded<U: crate::Uint, const ES: u32>(
  exact: Result<Rational, IsNaR>,
  posit: Posit<U, ES>,
) -> bool {
  match exact {
    Ok(exact) => is_correct_rounded(exact, posit),
    Err(IsNaR) => posit == Posit::NAR,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Manually test all positive bit patterns for an 8-bit posit with 2-bit exponent, at the
  /// boundaries of the dynamic range where the exponent is cut short.
  #[test]
  fn p8_extremes() {
    type P = crate::p8;
    assert_eq!(Rational::try_from(P::ZERO), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(P::NAR), Err(IsNaR));

    for (bits, (num, den)) in [
      (0b0000_0001, (1, 1 << 24)),
      (0b0000_0010, (1, 1 << 20)),
      (0b0000_0011, (1, 1 << 18)),
      (0b0000_0100, (1, 1 << 16)),
      (0b0000_0101, (1, 1 << 15)),
      (0b0000_0110, (1, 1 << 14)),
      (0b0000_0111, (1, 1 << 13)),
      (0b0100_0000, (1, 1)),
      (0b0100_0001, (9, 8)),
      (0b0101_1111, (15, 1)),
      (0b0111_1100, (1 << 16, 1)),
      (0b0111_1101, (1 << 18, 1)),
      (0b0111_1110, (1 << 20, 1)),
      (0b0111_1111, (1 << 24, 1)),
    ] {
      let p = P::from_bits(bits);
      assert_eq!(Rational::try_from(p), Ok(Rational::from_signeds(num, den)), "{p:?}");
      assert_eq!(Rational::try_from(-p), Ok(Rational::from_signeds(-num, den)), "{p:?}");
    }
  }

  /// More manual examples.
  #[test]
  fn examples() {
    type P16 = Posit<u16, 2>;
    assert_eq!(P16::from_bits(0b0_01_00_10000001000).try_into(), Ok(Rational::from_signeds(3080, 1 << 15)));
    assert_eq!(P16::from_bits(0b0_01_11_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 12)));
    assert_eq!(P16::from_bits(0b0_11110_10_11001000).try_into(), Ok(Rational::from(456 << 6)));
    assert_eq!(P16::from_bits(0b1_00001_10_00111000).try_into(), Ok(Rational::from(-456 << 5)));
    assert_eq!(P16::from_bits(0b1_1110_10_100111000).try_into(), Ok(Rational::from_signeds(-712, 1 << 20)));
    assert_eq!(P16::MAX.try_into(), Ok(Rational::from(1i64 << 56)));
    assert_eq!(P16::MIN_POSITIVE.try_into(), Ok(Rational::from_signeds(1, 1i64 << 56)));

    type P6 = Posit<u8, 1>;
    assert_eq!(P6::from_bits(0b0000_0001).try_into(), Ok(Rational::from_signeds(1, 1i64 << 12)));
    assert_eq!(P6::from_bits(0b0110_0000).try_into(), Ok(Rational::from(4)));

    assert_eq!(crate::p64::ONE.try_into(), Ok(Rational::from(1)));
    assert_eq!(crate::p64::MINUS_ONE.try_into(), Ok(Rational::from(-1)));
    assert_eq!(crate::p64::MAX.try_into(), Ok(Rational::power_of_2(248i64)));
  }

  #[test]
  fn correct_rounded_basics() {
    type P = crate::p8;
    assert!(is_correct_rounded(Rational::from(1), P::ONE));
    assert!(!is_correct_rounded(Rational::from(1), P::ONE.next()));
    assert!(is_correct_rounded(Rational::power_of_2(100i64), P::MAX));
    assert!(is_correct_rounded(Rational::from_signeds(-1, 1i64 << 40), P::MAX_NEGATIVE));
    assert!(!is_correct_rounded(Rational::from(1), P::NAR));
    assert!(try_is_correct_rounded(Err(IsNaR), P::NAR));
  }
}
