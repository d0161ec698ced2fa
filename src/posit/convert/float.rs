use super::*;
use super::ieee::{self, IeeeFormat, Unpacked};
use super::super::decode::TryDecomposed;

impl<
  U: crate::Uint,
  const ES: u32,
> Posit<U, ES> {
  /// Round an IEEE float to the nearest posit. Also returns whether the conversion was exact.
  ///
  /// The float's significand is already normalised, and its binary exponent is exactly a posit
  /// scale, so all that's left to do is to cut the significand down to `BITS` (accumulating the
  /// rest in the sticky bit) and pack.
  pub(crate) fn round_from_ieee<F: IeeeFormat>(value: F) -> (Self, bool) {
    let (sign, exponent, significand) = match ieee::unpack(value) {
      Unpacked::NaN | Unpacked::Infinite { .. } => return (Self::NAR, false),
      Unpacked::Zero { .. } => return (Self::ZERO, true),
      Unpacked::Finite { sign, exponent, significand } => (sign, exponent, significand),
    };

    // ±1 is by far the most common value, and it's exact in every format.
    if exponent == 0 && significand == 1 << 127 {
      return (if sign { Self::MINUS_ONE } else { Self::ONE }, true)
    }
    // Beyond the posit's dynamic range: saturate. Note that `MAX_SCALE` itself (as well as
    // `MIN_SCALE`) may still be exact; that's left to the packing step to decide.
    if exponent > Self::MAX_SCALE {
      return (if sign { Self::MIN } else { Self::MAX }, false)
    }
    if exponent < Self::MIN_SCALE {
      return (if sign { Self::MAX_NEGATIVE } else { Self::MIN_POSITIVE }, false)
    }

    let kept = U::of_u128(significand >> (128 - Self::BITS));
    let sticky = significand << Self::BITS != 0;
    let (bits, lost, _) = Decomposed::<U, ES>::from_scale(sign, exponent, kept).pack_round_bits(sticky);
    (Self(bits), lost.is_exact())
  }

  /// Round a posit to the nearest IEEE float, ties to even. NaR becomes NaN.
  pub(crate) fn round_to_ieee<F: IeeeFormat>(self) -> F {
    match self.try_decompose() {
      TryDecomposed::NaR => F::from_raw(ieee::nan_raw::<F>()),
      TryDecomposed::Zero => F::from_raw(0),
      TryDecomposed::Regular(d) => {
        let significand: u128 = d.significand.into();
        ieee::pack(d.sign, d.scale(), significand << (128 - Self::BITS), false)
      }
    }
  }
}

macro_rules! impl_float {
  ($float:ty) => {
    impl<
      U: crate::Uint,
      const ES: u32,
    > RoundFrom<$float> for Posit<U, ES> {
      /// Convert a float into a posit, rounding if needed: values beyond the posit's range
      /// saturate to [`MAX`](Posit::MAX) or [`MIN_POSITIVE`](Posit::MIN_POSITIVE) (with the
      /// sign), and NaN and ±∞ become [NaR](Posit::NAR). ±0 both become 0.
      #[inline]
      fn round_from(value: $float) -> Self {
        Self::round_from_ieee(value).0
      }
    }

    impl<
      U: crate::Uint,
      const ES: u32,
    > RoundFrom<Posit<U, ES>> for $float {
      /// Convert a posit into a float, rounding to nearest if the float doesn't have enough
      /// precision, and to ±∞ or ±0 if it doesn't have enough range. NaR becomes NaN.
      #[inline]
      fn round_from(value: Posit<U, ES>) -> Self {
        value.round_to_ieee()
      }
    }
  };
}

impl_float!{f32}
impl_float!{f64}
impl_float!{Quad}
