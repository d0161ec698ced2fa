use super::*;

/// The result of [`Posit::try_decompose`].
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum TryDecomposed<
  U: crate::Uint,
  const ES: u32,
> {
  Zero,
  NaR,
  Regular(Decomposed<U, ES>),
}

/// Scan the regime of a posit whose sign bit has already been shifted out, i.e. `x` is
/// `raw << 1`. Returns the regime sign (`true` for a run of 1s) and the run length.
///
/// The run ends at the first opposite bit, or at the end of the word: the boundary counts as an
/// implicit terminator. Because the sign was shifted out, the lsb of `x` is always 0, so a run of
/// 1s is at most `BITS - 1` long; and since `raw` is not 0 or NaR, a run of 0s is at most
/// `BITS - 2` long.
#[inline]
pub(crate) fn regime_run<U: crate::Uint>(x: U) -> (bool, u32) {
  if x.get_msb() {
    (true, x.leading_ones())
  } else {
    (false, x.leading_zeros())
  }
}

impl<
  U: crate::Uint,
  const ES: u32,
> Posit<U, ES> {
  /// Decompose a posit. The core logic lives in [`Self::decompose`].
  pub(crate) fn try_decompose(self) -> TryDecomposed<U, ES> {
    if self == Self::ZERO {
      TryDecomposed::Zero
    } else if self == Self::NAR {
      TryDecomposed::NaR
    } else {
      TryDecomposed::Regular(self.decompose())
    }
  }

  /// Decompose a posit **which is not 0 or NaR** into sign, regime, exponent, and significand.
  ///
  /// Passing 0 or NaR is a logic error: it trips a debug assertion, and gives a meaningless
  /// (but harmless) result in release builds.
  pub(crate) fn decompose(self) -> Decomposed<U, ES> {
    debug_assert!(!self.is_special(), "{self:?} cannot be 0 or NaR");

    // Negative posits are the two's complement of their absolute value, so take the absolute
    // value first; the rest is done on a positive number.
    let sign = self.0.get_msb();
    let abs = if sign { self.0.wrapping_neg() } else { self.0 };

    // Shift out the sign bit (always 0 now) and scan the regime.
    //
    // Example (8 bits, ES = 2):
    //   abs            = 0b0_110_01_01
    //   x              = 0b110_01_01_0
    //   run            = 2 ones, so regime = 1
    //   rest           = 0b01_01_0000
    //   exponent       = 0b01
    //   fraction       = 0b01_000000
    //   significand    = 0b1_01_00000
    let x = abs << 1;
    let (regime_sign, run) = regime_run(x);
    let regime = if regime_sign { run as i32 - 1 } else { -(run as i32) };

    // Shift out the regime and its terminating bit. A run of 1s all the way to the end has no
    // terminating bit, in which case the shift is by `BITS` and leaves nothing, as it should.
    let rest = x.shl_or_zero(run + 1);

    // The leftmost ES bits are the exponent. If a long regime cut them short, the missing bits
    // are the 0s that the shift filled in from the right.
    let exponent = rest.shr_or_zero(Self::BITS - Self::ES);
    let exponent: u128 = exponent.into();

    // Then the fraction, to which we prepend the hidden bit.
    let fraction = rest.shl_or_zero(Self::ES);
    let significand = U::MSB | (fraction >> 1);

    Decomposed {
      sign,
      regime,
      exponent: exponent as u32,
      significand,
    }
  }
}
