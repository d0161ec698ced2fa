use super::*;

use core::fmt::{Debug, LowerHex, UpperHex};

/// Number of hex digits that cover a `bits`-wide word.
const fn hex_width(bits: u32) -> usize {
  bits.div_ceil(4) as usize
}

impl<
  U: crate::Uint,
  const ES: u32,
> Debug for Posit<U, ES> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = self.0;
    f.debug_tuple("Posit")
      .field(&format_args!("0x{bits:0w$x}", w=hex_width(U::BITS)))
      .finish()
  }
}

/// Render the raw bit pattern as exactly `⌈BITS / 4⌉` zero-padded hex digits; `{:#x}` prefixes
/// `0x`.
///
/// ```
/// # use posit_arith::{p8, p64};
/// assert_eq!(format!("{:x}", p64::ONE), "4000000000000000");
/// assert_eq!(format!("{:#x}", p8::MIN_POSITIVE), "0x01");
/// ```
impl<
  U: crate::Uint,
  const ES: u32,
> LowerHex for Posit<U, ES> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = self.0;
    if f.alternate() { f.write_str("0x")?; }
    write!(f, "{bits:0w$x}", w=hex_width(U::BITS))
  }
}

/// As the [`LowerHex`] impl, in upper case (the `0x` prefix stays lower case).
impl<
  U: crate::Uint,
  const ES: u32,
> UpperHex for Posit<U, ES> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = self.0;
    if f.alternate() { f.write_str("0x")?; }
    write!(f, "{bits:0w$X}", w=hex_width(U::BITS))
  }
}

impl<
  U: crate::Uint,
  const ES: u32,
> Debug for Decomposed<U, ES> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let significand = self.significand;
    let hidden = significand >> (U::BITS - 1);
    let fraction = significand.mask_lsb(U::BITS - 1);
    f.debug_struct("Decomposed")
      .field("sign", &self.sign)
      .field("regime", &self.regime)
      .field("exponent", &format_args!("0b{:0w$b}", self.exponent, w=ES as usize))
      .field("significand", &format_args!("0b{hidden:b}_{fraction:0w$b}", w=(U::BITS - 1) as usize))
      .field("scale", &self.scale())
      .finish()
  }
}
