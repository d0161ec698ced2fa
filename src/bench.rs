//! Re-export some internals for benchmarking purposes; available with feature = "bench".

pub use crate::posit::Decomposed;
use crate::posit::Posit;

impl<
  U: crate::Uint,
  const ES: u32,
> Posit<U, ES> {
  /// `self` must not be 0 or NaR.
  pub fn bench_decompose(self) -> Decomposed<U, ES> {
    self.decompose()
  }

  pub fn bench_mul_kernel(a: Decomposed<U, ES>, b: Decomposed<U, ES>) -> (Decomposed<U, ES>, bool) {
    Self::mul_kernel(a, b)
  }

  pub fn bench_div_kernel(a: Decomposed<U, ES>, b: Decomposed<U, ES>) -> (Decomposed<U, ES>, bool) {
    Self::div_kernel(a, b)
  }

  /// `a` and `b` must not be symmetrical.
  pub fn bench_add_kernel(a: Decomposed<U, ES>, b: Decomposed<U, ES>) -> (Decomposed<U, ES>, bool) {
    Self::add_kernel(a, b)
  }
}

impl<
  U: crate::Uint,
  const ES: u32,
> Decomposed<U, ES> {
  pub fn bench_pack_round(self, sticky: bool) -> Posit<U, ES> {
    self.pack_round(sticky)
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn decompose_32(arg: crate::p32) -> Decomposed<u32, 2> {
  arg.decompose()
}

#[unsafe(no_mangle)]
pub fn decompose_64(arg: crate::p64) -> Decomposed<u64, 2> {
  arg.decompose()
}

#[unsafe(no_mangle)]
pub fn pack_round_32(arg: Decomposed<u32, 2>, sticky: bool) -> crate::p32 {
  arg.pack_round(sticky)
}

#[unsafe(no_mangle)]
pub fn pack_round_64(arg: Decomposed<u64, 2>, sticky: bool) -> crate::p64 {
  arg.pack_round(sticky)
}

#[unsafe(no_mangle)]
pub fn mul_64(x: crate::p64, y: crate::p64) -> crate::p64 {
  x.multiply(y)
}

#[unsafe(no_mangle)]
pub fn div_64(x: crate::p64, y: crate::p64) -> crate::p64 {
  x.divide(y)
}

#[unsafe(no_mangle)]
pub fn add_64(x: crate::p64, y: crate::p64) -> crate::p64 {
  x.plus(y)
}

#[unsafe(no_mangle)]
pub fn round_f64_to_p64(num: f64) -> crate::p64 {
  crate::RoundFrom::round_from(num)
}

#[unsafe(no_mangle)]
pub fn round_p64_to_f64(num: crate::p64) -> f64 {
  crate::RoundFrom::round_from(num)
}
