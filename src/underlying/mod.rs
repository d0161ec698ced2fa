//! The unsigned machine words a posit is stored in, and the handful of bit-level operations the
//! codec and the arithmetic kernels need from them. End-users only see the sealed [`Uint`]
//! trait, implemented for `u8`, `u16`, `u32`, and `u64`.

/// The trait for the unsigned machine integer types that can hold a posit's raw bit pattern
/// (only satisfied by `u8`, `u16`, `u32`, and `u64`).
///
/// This is a *sealed* type.
pub trait Uint: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  core::fmt::Debug + core::fmt::Binary + core::fmt::LowerHex + core::fmt::UpperHex +
  Copy + Clone +
  Eq + Ord +
  core::hash::Hash + Default +
  core::ops::Add<Self, Output=Self> +
  core::ops::Sub<Self, Output=Self> +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
  core::ops::BitAnd<Output=Self> +
  core::ops::BitOr<Output=Self> +
  core::ops::BitXor<Output=Self> +
  core::ops::Not<Output=Self> +
  From<bool> + Into<u128>
{
  type Double: Double<Single = Self>;

  const ZERO: Self;
  const ONE: Self;
  /// Only the most significant bit set (`0b1000…`).
  const MSB: Self;
  /// All bits set.
  const MAX: Self;
  const BITS: u32;

  /// Truncating conversion from a `u128`, i.e. `x as Self`.
  fn of_u128(x: u128) -> Self;

  /// Get the lsb of `self` as a bool.
  fn get_lsb(self) -> bool;

  /// Get the msb of `self` as a bool.
  fn get_msb(self) -> bool;

  /// Set all bits more significant than `n` to 0. `n` may be anything up to and including
  /// `BITS`.
  ///
  /// ```ignore
  /// assert_eq!(0xabcd_u16.mask_lsb(4), 0x000d_u16)
  /// ```
  fn mask_lsb(self, n: u32) -> Self;

  /// `self << n`, but `0` if `n >= BITS` instead of overflowing.
  fn shl_or_zero(self, n: u32) -> Self;

  /// `self >> n`, but `0` if `n >= BITS` instead of overflowing.
  fn shr_or_zero(self, n: u32) -> Self;

  /// Number of leading (most significant) 0 bits until the first 1.
  fn leading_zeros(self) -> u32;

  /// Number of leading (most significant) 1 bits until the first 0.
  fn leading_ones(self) -> u32;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;

  /// Two's complement negation inside the fixed width, i.e. `(!self).wrapping_add(1)`. This is
  /// how posits are negated: it maps 0 to 0 and `MSB` (NaR) to itself.
  fn wrapping_neg(self) -> Self;

  /// Zero-extend into the double-width type.
  fn widen(self) -> Self::Double;
}

/// This trait models the type that is a [`Uint`] with twice the precision (e.g. `u32::Double`
/// = `u64`, `u64::Double` = `u128`). It is where all the wide intermediate arithmetic happens,
/// and none of it ever loses precision: a product of two `Single`s always fits, and so does a
/// `Single` shifted left by `Single::BITS`.
pub trait Double:
  core::fmt::Debug +
  Copy + Clone +
  Eq + Ord +
  core::ops::Add<Self, Output=Self> +
  core::ops::Sub<Self, Output=Self> +
  core::ops::Mul<Self, Output=Self> +
  core::ops::Div<Self, Output=Self> +
  core::ops::Rem<Self, Output=Self> +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
  core::ops::BitAnd<Output=Self> +
  core::ops::BitOr<Output=Self>
{
  type Single: Uint;

  const ZERO: Self;
  const ONE: Self;
  const BITS: u32;

  /// Break a `Double` down into its high and low halves, respectively.
  fn hi_lo(self) -> (Self::Single, Self::Single);

  /// Number of leading (most significant) 0 bits until the first 1.
  fn leading_zeros(self) -> u32;

  /// Whether bit `n` (counting from the lsb) is set.
  fn get_bit(self, n: u32) -> bool;

  /// Set all bits more significant than `n` to 0.
  fn mask_lsb(self, n: u32) -> Self;

  /// Floor of the square root.
  fn isqrt(self) -> Self;
}

mod uint;
mod double;
mod const_as;
pub use const_as::const_as;
