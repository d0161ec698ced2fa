//! A posit tagged with whether it is known to be the exact result of the computation that
//! produced it.

use super::*;
use super::convert::{RoundFrom, Quad};

/// A [`Posit`] plus a flag saying whether it is known to be exact.
///
/// The flag is set on values built from raw bits, or converted from a float without rounding;
/// [`multiply`](Self::multiply) and [`divide`](Self::divide) propagate it from their operands:
///
///   - A NaR result is never exact.
///   - A 0 result that comes from a 0 operand is exact if that operand is (either of them, if
///     both are 0).
///   - Otherwise, the result is exact if both operands are.
///
/// ```
/// # use posit_arith::*;
/// let third = Exact::<u32, 2>::round_from(1.0f64 / 3.);
/// let two = Exact::<u32, 2>::round_from(2.0f64);
/// assert!(two.exact && !third.exact);
/// assert!((two * two).exact);
/// assert!(!(two * third).exact);
/// assert!(!(two / Exact::from_bits(0)).exact);
/// ```
#[derive(Clone, Copy, Debug)]
#[derive(PartialEq, Eq, Hash)]
pub struct Exact<
  U: crate::Uint,
  const ES: u32,
> {
  pub posit: Posit<U, ES>,
  pub exact: bool,
}

impl<
  U: crate::Uint,
  const ES: u32,
> Exact<U, ES> {
  /// Tag `posit` with `exact`.
  #[inline]
  pub const fn new(posit: Posit<U, ES>, exact: bool) -> Self {
    Self { posit, exact }
  }

  /// Construct an exact value from a raw bit pattern (see [`Posit::from_bits`]).
  #[inline]
  pub const fn from_bits(bits: U) -> Self {
    Self::new(Posit::from_bits(bits), true)
  }

  /// The flag of a 0 result that comes from a 0 operand.
  #[inline]
  fn zero_operand_exact(self, other: Self) -> bool {
    (self.posit.is_zero() && self.exact) || (other.posit.is_zero() && other.exact)
  }

  /// Multiply two posits with [`Posit::multiply`], propagating the flags.
  pub fn multiply(self, other: Self) -> Self {
    let posit = self.posit.multiply(other.posit);
    let exact = if posit.is_nar() {
      false
    } else if self.posit.is_zero() || other.posit.is_zero() {
      self.zero_operand_exact(other)
    } else {
      self.exact && other.exact
    };
    Self::new(posit, exact)
  }

  /// Divide two posits with [`Posit::divide`], propagating the flags.
  ///
  /// A 0 divisor gives NaR, so the only 0 operand that can give a 0 result is the dividend.
  pub fn divide(self, other: Self) -> Self {
    let posit = self.posit.divide(other.posit);
    let exact = if posit.is_nar() {
      false
    } else if self.posit.is_zero() {
      self.zero_operand_exact(other)
    } else {
      self.exact && other.exact
    };
    Self::new(posit, exact)
  }
}

impl<
  U: crate::Uint,
  const ES: u32,
> From<Posit<U, ES>> for Exact<U, ES> {
  /// A posit by itself is exactly the value it represents.
  #[inline]
  fn from(posit: Posit<U, ES>) -> Self {
    Self::new(posit, true)
  }
}

macro_rules! impl_float {
  ($float:ty) => {
    impl<
      U: crate::Uint,
      const ES: u32,
    > RoundFrom<$float> for Exact<U, ES> {
      /// As the conversion into a [`Posit`], but the result is flagged exact if no rounding
      /// took place.
      #[inline]
      fn round_from(value: $float) -> Self {
        let (posit, exact) = Posit::round_from_ieee(value);
        Self::new(posit, exact)
      }
    }
  };
}

impl_float!{f32}
impl_float!{f64}
impl_float!{Quad}

impl<U: crate::Uint, const ES: u32>
core::ops::Mul for Exact<U, ES> {
  type Output = Self;

  #[inline]
  fn mul(self, rhs: Self) -> Self { self.multiply(rhs) }
}

impl<U: crate::Uint, const ES: u32>
core::ops::Div for Exact<U, ES> {
  type Output = Self;

  #[inline]
  fn div(self, rhs: Self) -> Self { self.divide(rhs) }
}
