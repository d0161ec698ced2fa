use super::{Uint, Sealed};

macro_rules! impl_uint {
  ($uint:ty, $double:ty) => {
    impl Uint for $uint {}

    impl Sealed for $uint {
      type Double = $double;

      const ZERO: Self = 0;
      const ONE: Self = 1;
      const MSB: Self = 1 << (<$uint>::BITS - 1);
      const MAX: Self = <$uint>::MAX;
      const BITS: u32 = <$uint>::BITS;

      #[inline]
      fn of_u128(x: u128) -> Self { x as $uint }

      #[inline]
      fn get_lsb(self) -> bool { self & 1 == 1 }

      #[inline]
      fn get_msb(self) -> bool { self >> (Self::BITS - 1) == 1 }

      #[inline]
      fn mask_lsb(self, n: u32) -> Self {
        let mask = <$uint>::MAX.checked_shr(Self::BITS - n).unwrap_or(0);
        self & mask
      }

      #[inline]
      fn shl_or_zero(self, n: u32) -> Self { self.checked_shl(n).unwrap_or(0) }

      #[inline]
      fn shr_or_zero(self, n: u32) -> Self { self.checked_shr(n).unwrap_or(0) }

      #[inline]
      fn leading_zeros(self) -> u32 { self.leading_zeros() }

      #[inline]
      fn leading_ones(self) -> u32 { self.leading_ones() }

      #[inline]
      fn wrapping_add(self, other: Self) -> Self { self.wrapping_add(other) }

      #[inline]
      fn wrapping_sub(self, other: Self) -> Self { self.wrapping_sub(other) }

      #[inline]
      fn wrapping_neg(self) -> Self { self.wrapping_neg() }

      #[inline]
      fn widen(self) -> $double { self as $double }
    }
  };
}

impl_uint!{u8, u16}
impl_uint!{u16, u32}
impl_uint!{u32, u64}
impl_uint!{u64, u128}
