use super::*;
use super::round::RoundBits;
use crate::underlying::Double;

/// How the bits of a posit are shared out between its fields, for a given regime.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct FieldWidths {
  /// Regime run plus its terminating bit (no terminating bit if the run fills the word).
  pub regime: u32,
  /// Exponent bits actually present; the rest are cut off.
  pub exponent: u32,
  /// Fraction bits actually present.
  pub fraction: u32,
}

impl<
  U: crate::Uint,
  const ES: u32,
> Posit<U, ES> {
  /// The widths of the regime, exponent, and fraction fields of a posit with a given `regime`,
  /// which must be in `-MAX_REGIME ..= MAX_REGIME`.
  ///
  /// The field that loses out when bits are short is always the rightmost one: the regime takes
  /// what it needs first, then the exponent, and the fraction gets whatever is left.
  pub fn field_widths(regime: i32) -> FieldWidths {
    debug_assert!(regime.abs() <= Self::MAX_REGIME);
    let run = if regime >= 0 { regime as u32 + 1 } else { regime.unsigned_abs() };
    // 1 sign bit, then the run, then the terminating bit if there's room for it.
    let regime_len = (run + 1).min(Self::BITS - 1);
    let rest = Self::BITS - 1 - regime_len;
    let exponent = rest.min(Self::ES);
    FieldWidths {
      regime: regime_len,
      exponent,
      fraction: rest - exponent,
    }
  }
}

impl<
  U: crate::Uint,
  const ES: u32,
> Decomposed<U, ES> {
  /// Pack into a posit, rounding if necessary. The rounding rule is always the same: "round to
  /// nearest, round ties to even bit pattern, never round to 0 or NaR (i.e. never over- or
  /// under-flow)".
  ///
  /// `sticky` must be `true` **if and only if** some nonzero bits of the exact result were lost
  /// before getting here, i.e. if the exact value is strictly bigger in magnitude than the one in
  /// `self`. Accumulate any lost bits to `sticky`, then pass it to `pack_round` to get a correctly
  /// rounded posit.
  pub(crate) fn pack_round(self, sticky: bool) -> Posit<U, ES> {
    Posit(self.pack_round_bits(sticky).0)
  }

  /// As [`Self::pack_round`], but also returns whether any bits were lost, and whether rounding
  /// carried over into the regime.
  pub(crate) fn pack_round_bits(self, sticky: bool) -> (U, RoundBits, bool) {
    debug_assert!(self.significand.get_msb(), "{self:?} is not normalised");
    let max_regime = Posit::<U, ES>::MAX_REGIME;

    // Saturation. If the regime run would fill the whole word (or more), the fields after it
    // don't fit at all: the result is the largest or smallest magnitude, whatever the exponent
    // and fraction say. Every number ≥ MAX rounds to MAX, every number < MIN_POSITIVE rounds to
    // MIN_POSITIVE.
    let (magnitude, lost, carried) = if self.regime >= max_regime {
      let exact = self.regime == max_regime && self.exponent == 0
        && self.significand == U::MSB && !sticky;
      let lost = if exact { RoundBits::EXACT } else { RoundBits { n_plus_one: false, more: true } };
      (Posit::<U, ES>::MAX.0, lost, false)
    } else if self.regime < -max_regime {
      (U::ONE, RoundBits { n_plus_one: false, more: true }, false)
    } else {
      self.pack_regular(sticky)
    };

    // Negative posits are the two's complement of their absolute value.
    let bits = if self.sign { magnitude.wrapping_neg() } else { magnitude };
    (bits, lost, carried)
  }

  /// The general case of [`Self::pack_round_bits`], for a regime that leaves at least the
  /// terminating bit in the word. Returns the (positive) rounded bit pattern.
  fn pack_regular(self, sticky: bool) -> (U, RoundBits, bool) {
    let widths = Posit::<U, ES>::field_widths(self.regime);

    // The regime bits: a run of `regime + 1` 1s followed by a 0, or a run of `-regime` 0s
    // followed by a 1.
    //
    // Example (8 bits):
    //   regime = 2     → 0b1110
    //   regime = -3    → 0b0001
    let regime_bits = if self.regime_sign() {
      U::MAX.mask_lsb(widths.regime - 1) << 1
    } else {
      U::ONE
    };

    // Now the exponent and the fraction (the significand without its hidden bit), which we put
    // side by side in a double-width register, as the infinite-precision bit string that has to
    // be cut down to fit in the bits that the regime leaves over:
    //
    //   tail = eeee_ffffffff…ffff
    //          ^ES ^BITS-1
    //
    // If there's fewer bits available than ES, this is what cuts the exponent short, from the
    // right; and when that happens the round and sticky bits come from the exponent rather than
    // the fraction, with the fraction bits all going into the sticky bit.
    let tail_len = Self::ES + Self::BITS - 1;
    let exponent = U::of_u128(self.exponent as u128).widen();
    let fraction = self.significand.mask_lsb(Self::BITS - 1).widen();
    let tail = (exponent << (Self::BITS - 1)) | fraction;

    let available = widths.exponent + widths.fraction;
    let cut = tail_len - available;  // ≥ ES + 2, since available ≤ BITS - 3
    let (_, kept) = (tail >> cut).hi_lo();
    let lost = RoundBits {
      n_plus_one: tail.get_bit(cut - 1),
      more: sticky || tail.mask_lsb(cut - 1) != <U::Double as Double>::ZERO,
    };

    // Assemble the bits of the (unrounded) result and round. The increment goes to the whole bit
    // pattern: if the exponent and fraction are all 1s, it carries into the regime (which grows
    // by 1), and this is correct. It can never carry into the sign bit: the largest pattern we
    // build here is `0b0111…10`, one below MAX.
    let packed = (regime_bits << available) | kept;
    let (rounded, carried) = lost.apply(packed, available);
    (rounded, lost, carried)
  }
}
