use super::*;

/// Which way [`Posit::round_int`] breaks away from the integral part.
#[derive(Clone, Copy)]
enum Direction {
  /// To nearest, ties to even.
  Nearest,
  /// Towards -∞.
  Floor,
  /// Towards +∞.
  Ceil,
}

impl<
  U: crate::Uint,
  const ES: u32,
> Posit<U, ES> {
  /// Common code for [`Self::round_to_int`], [`Self::floor`], and [`Self::ceil`].
  fn round_int(self, direction: Direction) -> Self {
    if self.is_special() { return self }
    let x = self.decompose();
    let scale = x.scale();

    // A posit with scale `s ≥ W-1` has no bits below the decimal dot: it's already an integer.
    if scale >= Self::BITS as i32 - 1 {
      return self
    }

    // Otherwise, split the significand into an `integral` part (left of the decimal dot) and a
    // `fractional` part (right of it, aligned to the left). With scale 0 the dot is right after
    // the hidden bit; each unit of scale moves it one place right.
    //
    // Examples (8 bits):
    //
    //   significand: 0b1_1010000  scale: 0   ⇒  integral: 0b1      fractional: 0b1010000_0
    //   significand: 0b1_1010000  scale: 2   ⇒  integral: 0b110    fractional: 0b10000_000
    //   significand: 0b1_1010000  scale: -1  ⇒  integral: 0b0      fractional: 0b11010000
    //
    // Below scale -1 the number is less than 1/2 in magnitude, so it's some way below the first
    // bit of the fractional part: all that matters is that it's nonzero, i.e. "sticky".
    let (integral, round, sticky) = if scale < -1 {
      (U::ZERO, false, true)
    } else {
      // Number of integral bits, in `0 ..= W-1`.
      let dot = (scale + 1) as u32;
      let integral = x.significand.shr_or_zero(Self::BITS - dot);
      let fractional = x.significand.shl_or_zero(dot);
      (integral, fractional.get_msb(), fractional << 1 != U::ZERO)
    };

    // Then decide whether to add 1 to the magnitude of `integral`. Floor and ceil round the
    // magnitude up when the fraction is nonzero and the sign points in their direction.
    let inexact = round || sticky;
    let round_up = match direction {
      Direction::Nearest => round && (integral.get_lsb() || sticky),
      Direction::Floor => inexact && x.sign,
      Direction::Ceil => inexact && !x.sign,
    };
    let integral = integral + U::from(round_up);
    if integral == U::ZERO {
      return Self::ZERO
    }

    // Rounding up may have carried into a new bit (e.g. 0b11 + 1 = 0b100), so normalise again.
    // The result is always representable exactly: it has no more significant bits than `self`,
    // or it's a power of two.
    let shift = integral.leading_zeros();
    let scale = (Self::BITS - 1 - shift) as i32;
    Decomposed::from_scale(x.sign, scale, integral << shift).pack_round(false)
  }

  /// Return the integral posit nearest to `self`, or the even one if two are equally near.
  /// NaR stays NaR.
  ///
  /// ```
  /// # use posit_arith::*;
  /// assert_eq!(p32::round_from(3.1f64).round_to_int(), p32::round_from(3f64));
  /// assert_eq!(p32::round_from(3.5f64).round_to_int(), p32::round_from(4f64));
  /// assert_eq!(p32::round_from(2.5f64).round_to_int(), p32::round_from(2f64));
  /// assert_eq!(p32::round_from(-0.7f64).round_to_int(), p32::MINUS_ONE);
  /// ```
  pub fn round_to_int(self) -> Self {
    self.round_int(Direction::Nearest)
  }

  /// Return the largest integral posit less than or equal to `self`. NaR stays NaR.
  ///
  /// ```
  /// # use posit_arith::*;
  /// assert_eq!(p32::round_from(3.9f64).floor(), p32::round_from(3f64));
  /// assert_eq!(p32::round_from(-3.1f64).floor(), p32::round_from(-4f64));
  /// assert_eq!(p32::round_from(0.001f64).floor(), p32::ZERO);
  /// ```
  pub fn floor(self) -> Self {
    self.round_int(Direction::Floor)
  }

  /// Return the smallest integral posit greater than or equal to `self`. NaR stays NaR.
  ///
  /// ```
  /// # use posit_arith::*;
  /// assert_eq!(p32::round_from(3.1f64).ceil(), p32::round_from(4f64));
  /// assert_eq!(p32::round_from(-3.9f64).ceil(), p32::round_from(-3f64));
  /// assert_eq!(p32::round_from(0.001f64).ceil(), p32::ONE);
  /// ```
  pub fn ceil(self) -> Self {
    self.round_int(Direction::Ceil)
  }
}
