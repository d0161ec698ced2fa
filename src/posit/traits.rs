use super::*;

// The `Uint` trait has bounds indirectly, via `Sealed`, so the derive macros would add needless
// `U: Clone` etc. bounds. More importantly, the order of posits is *not* the order of their raw
// unsigned bit patterns: it's the order of those bit patterns read as two's complement signed
// integers. So these are written out by hand.

impl<U: crate::Uint, const ES: u32>
Clone for Posit<U, ES> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<U: crate::Uint, const ES: u32>
Copy for Posit<U, ES> {}

/// Bitwise equality. This is the posit standard's equality, under which NaR equals itself; see
/// [`Posit::equal`] for the variant where it doesn't.
impl<U: crate::Uint, const ES: u32>
PartialEq for Posit<U, ES> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0
  }
}

impl<U: crate::Uint, const ES: u32>
Eq for Posit<U, ES> {}

/// The posit standard's total order: NaR is less than every real number, and real numbers are
/// ordered by value.
impl<U: crate::Uint, const ES: u32>
PartialOrd for Posit<U, ES> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl<U: crate::Uint, const ES: u32>
Ord for Posit<U, ES> {
  #[inline]
  fn cmp(&self, other: &Self) -> core::cmp::Ordering {
    self.ordering_key().cmp(&other.ordering_key())
  }
}

impl<U: crate::Uint, const ES: u32>
core::hash::Hash for Posit<U, ES> {
  #[inline]
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.0.hash(state);
  }
}

/// The default posit is [zero](Posit::ZERO).
impl<U: crate::Uint, const ES: u32>
Default for Posit<U, ES> {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}
