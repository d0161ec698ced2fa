use super::Double;

macro_rules! impl_double {
  ($double:ty, $single:ty) => {
    impl Double for $double {
      type Single = $single;

      const ZERO: Self = 0;
      const ONE: Self = 1;
      const BITS: u32 = <$double>::BITS;

      #[inline]
      fn hi_lo(self) -> ($single, $single) {
        let hi = (self >> <$single>::BITS) as $single;
        let lo = self as $single;
        (hi, lo)
      }

      #[inline]
      fn leading_zeros(self) -> u32 { self.leading_zeros() }

      #[inline]
      fn get_bit(self, n: u32) -> bool { (self >> n) & 1 == 1 }

      #[inline]
      fn mask_lsb(self, n: u32) -> Self {
        let mask = <$double>::MAX.checked_shr(Self::BITS - n).unwrap_or(0);
        self & mask
      }

      #[inline]
      fn isqrt(self) -> Self { self.isqrt() }
    }
  };
}

impl_double!{u16, u8}
impl_double!{u32, u16}
impl_double!{u64, u32}
impl_double!{u128, u64}
