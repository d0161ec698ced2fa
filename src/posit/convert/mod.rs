use super::*;

/// Used to do value-to-value conversions that may *round* the input (see below). It is the
/// reciprocal of [`RoundInto`].
///
/// The interface is identical to the standard [`From`], but unlike the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not necessarily lossless_.
///
/// Prefer implementing [`RoundFrom`] over [`RoundInto`], since implementing [`RoundFrom`]
/// automatically provides an implementation of [`RoundInto`]; and prefer using [`RoundInto`]
/// over [`RoundFrom`] when specifying trait bounds on a generic function. There's also a blanket
/// implementation of `RoundFrom<T> for T`.
///
/// # Rounding
///
/// Into a posit:
///
///   - If the value is greater in absolute value than the biggest posit, round to it (i.e., never
///     overflow).
///   - If the value is smaller in absolute value than the smallest positive posit, round to it
///     (i.e., never underflow).
///   - Otherwise, round to the nearest bit pattern, or in case of a tie, to the even bit pattern.
///   - NaN and ±∞ have no posit counterpart, and become NaR.
///
/// Out of a posit, into an IEEE float: round to nearest, ties to even, in the usual IEEE sense,
/// which means overflowing to ±∞ or underflowing (through subnormals) to 0 if the float's range
/// is narrower than the posit's. NaR becomes NaN.
///
/// # Examples
///
/// ```
/// # use posit_arith::*;
/// assert!(p16::round_from(1.0f64) == p16::round_from(1.00000001f64));
/// assert!(p32::round_from(1.0f64) <  p32::round_from(1.00000001f64));
///
/// assert_eq!(p32::round_from(f64::NAN), p32::NAR);
/// assert_eq!(p64::round_from(1e300f64), p64::MAX);
///
/// assert_eq!(f32::round_from(p16::MIN_POSITIVE), 1.3877788e-17);
/// assert!(f64::round_from(p32::NAR).is_nan());
/// ```
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding if needed (see
  /// [Rounding](RoundFrom#rounding)).
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round* the input. It is the reciprocal of
/// [`RoundFrom`], and is implemented for every pair of types for which that is; see there for
/// the rounding rules.
///
/// # Examples
///
/// ```
/// # use posit_arith::*;
/// assert_eq!(p16::ONE.next(), 1.0004883_f64.round_into());
/// assert_eq!(p32::NAR, f64::NAN.round_into());
///
/// assert_eq!(5.960464477539063e-8, p8::MIN_POSITIVE.round_into());
/// assert!(f64::is_nan(p32::NAR.round_into()));
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, rounding if needed.
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

/// Bit-level model of IEEE 754 binary formats.
mod ieee;

/// Posit ↔ `f32`, `f64`, `Quad`.
mod float;

/// Quadruple precision IEEE floats.
mod quad;

pub use quad::Quad;
