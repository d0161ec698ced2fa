use super::*;

impl<
  U: crate::Uint,
  const ES: u32,
> Posit<U, ES> {
  /// Return the `Decomposed` result of √x, plus the sticky bit. `x` must be positive.
  #[inline]
  pub(crate) fn sqrt_kernel(x: Decomposed<U, ES>) -> (Decomposed<U, ES>, bool) {
    debug_assert!(!x.sign, "cannot take the square root of negative {x:?}");

    // Taking the square root of a number in the form `significand / 2^(W-1) × 2^scale` has two
    // steps.
    //
    // First, make the scale even. If it's odd, take 1 from the scale and multiply the
    // significand by 2 instead:
    //
    //   √(sig / 2^(W-1) × 2^scale)       = √(sig × 2^(W-1)) / 2^(W-1) × 2^(scale / 2)
    //   √(sig / 2^(W-1) × 2 × 2^(scale-1)) = √(sig × 2^W) / 2^(W-1) × 2^((scale-1) / 2)
    //
    // So the new significand is the integer square root of `sig` shifted left by W-1 or W places,
    // computed in the double width type. Either way the root has exactly W significant bits:
    // `sig × 2^(W-1)` is in [2^(2W-2), 2^(2W-1)[ and `sig × 2^W` in [2^(2W-1), 2^2W[.
    //
    // The new scale is `scale >> 1`, which is both `scale / 2` and `(scale - 1) / 2` for even and
    // odd `scale` respectively (`>>` rounds towards -∞ for negative numbers too). If the root
    // isn't exact, there are more bits after it, and they go into `sticky`.
    let scale = x.scale();
    let odd = scale & 1 == 1;
    let radicand = x.significand.widen() << (Self::BITS - 1 + odd as u32);
    let root = radicand.isqrt();
    let sticky = root * root != radicand;
    let (_, significand) = root.hi_lo();

    (Decomposed::from_scale(false, scale >> 1, significand), sticky)
  }

  /// Return the square root of `self`, rounded. If `self` is negative or NaR, the result is NaR.
  ///
  /// ```
  /// # use posit_arith::*;
  /// assert_eq!(p32::round_from(6.25f64).sqrt(), p32::round_from(2.5f64));
  /// assert_eq!(p16::round_from(2f64).sqrt(), p16::round_from(1.41421356f64));
  /// assert_eq!(p64::MINUS_ONE.sqrt(), p64::NAR);
  /// ```
  pub fn sqrt(self) -> Self {
    if self.is_nar() || self.is_negative() {
      Self::NAR
    } else if self.is_zero() {
      Self::ZERO
    } else {
      let (result, sticky) = Self::sqrt_kernel(self.decompose());
      result.pack_round(sticky)
    }
  }
}
