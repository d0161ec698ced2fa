use super::*;

/// One line of the [`const_as`] function.
macro_rules! const_as_line {
  ($x:ident, $u:ty) => {
    if const { U::BITS == <$u>::BITS } {
      let u = $x as $u;
      // SAFETY: `U` is sealed to the `uX` types and has the same width as `$u`, so it *is* `$u`
      // and the transmute_copy is a no-op.
      return unsafe { ::core::mem::transmute_copy::<$u, U>(&u) }
    }
  }
}

/// A type-generic and `const` version of `x as U`, for narrowing a `u128` into any [`Uint`].
/// This is what lets the posit constants (`ONE`, `MAX`, …) be written once for every width.
///
/// ```ignore
/// assert_eq!(const_as::<u16>(0x1_0042), 0x0042_u16);
/// ```
pub const fn const_as<U: Uint>(x: u128) -> U {
  const_as_line!(x, u8);
  const_as_line!(x, u16);
  const_as_line!(x, u32);
  const_as_line!(x, u64);
  unreachable!() // cannot be const { unreachable!() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn identity() {
    const VALUE: u32 = const_as(0xdeadbeef);
    assert_eq!(VALUE, 0xdeadbeef_u32);
  }

  #[test]
  fn truncates() {
    const VALUE: u16 = const_as(0x1_0042);
    assert_eq!(VALUE, 0x0042_u16);
    const BYTE: u8 = const_as(0x1ff);
    assert_eq!(BYTE, 0xff_u8);
  }

  #[test]
  fn wide() {
    const VALUE: u64 = const_as((1 << 63) + 1);
    assert_eq!(VALUE, 0x8000_0000_0000_0001_u64);
  }
}
