/// The bits that are lost when a result is cut down to fit in a posit.
///
/// The rounding rules of posits translate to a very simple rule in terms of bit patterns: just
/// "represent as an infinite-precision bit string, then round to nearest, if tied round to even
/// bit pattern". So all we need to remember about the bits that don't fit is the first of them
/// (`n_plus_one`, the "round" bit) and whether any of the rest is set (`more`, the "sticky" bit).
///
/// Some examples: let's say we have a bit string that we want to round at the |
///
/// ```text
///   0b010101|011011 -> round to nearest = down    -> 0b010101
///   0b010101|111011 -> round to nearest = up      -> 0b010110
///   0b010101|100000 -> tied, round to even = up   -> 0b010110
///   0b010100|100000 -> tied, round to even = down -> 0b010100
/// ```
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub(crate) struct RoundBits {
  /// The first bit that was cut off.
  pub n_plus_one: bool,
  /// Whether any bit after the first one that was cut off is set.
  pub more: bool,
}

/// Round to nearest, ties to even: whether to add 1 to a bit pattern whose lsb is `low_bit`,
/// given the bits that were cut off after it.
///
/// ```text
///   low_bit | n_plus_one | more | result
///   ..x     | 0          | x    | round down (+0)
///   ..0     | 1          | 0    | round down to even (+0)
///   ..1     | 1          | 0    | round up to even (+1)
///   ..x     | 1          | 1    | round up (+1)
/// ```
#[inline]
pub(crate) fn round_nearest_even(low_bit: bool, n_plus_one: bool, more: bool) -> bool {
  n_plus_one && (low_bit || more)
}

impl RoundBits {
  /// Nothing was lost: the value is exact.
  pub const EXACT: Self = Self { n_plus_one: false, more: false };

  /// Whether no bits were lost.
  #[inline]
  pub fn is_exact(self) -> bool {
    !self.n_plus_one && !self.more
  }

  /// Round `packed`, a bit pattern whose lowest `field_len` bits hold the exponent and fraction
  /// (i.e. everything after the regime). Returns the rounded pattern, and whether the increment
  /// carried out of those bits into the regime.
  ///
  /// The increment is applied to the whole pattern, not just to the fraction, precisely so that a
  /// carry can ripple from the fraction into the exponent and from the exponent into the regime.
  #[inline]
  pub fn apply<U: crate::Uint>(self, packed: U, field_len: u32) -> (U, bool) {
    if round_nearest_even(packed.get_lsb(), self.n_plus_one, self.more) {
      let rounded = packed + U::ONE;
      let carried = rounded.mask_lsb(field_len) == U::ZERO;
      (rounded, carried)
    } else {
      (packed, false)
    }
  }
}
