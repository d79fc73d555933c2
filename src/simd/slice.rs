//! Scalar implementation used when no vector backend is compiled in.
//!
//! `u8::saturating_add` gives the same lane contract as the hardware
//! instructions, one element at a time.

use rayon::prelude::*;

use crate::simd::traits::SimdQadd;

#[inline(always)]
pub fn scalar_qadd(a: &[u8], b: &[u8]) -> Vec<u8> {
    assert!(
        !a.is_empty() & !b.is_empty(),
        "Size can't be empty (size zero)"
    );
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x.saturating_add(*y))
        .collect()
}

#[inline(always)]
pub fn parallel_scalar_qadd(a: &[u8], b: &[u8]) -> Vec<u8> {
    assert!(
        !a.is_empty() & !b.is_empty(),
        "Size can't be empty (size zero)"
    );
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");

    a.par_iter()
        .zip(b.par_iter())
        .map(|(x, y)| x.saturating_add(*y))
        .collect()
}

impl<'b> SimdQadd<&'b [u8]> for &[u8] {
    type Output = Vec<u8>;

    #[inline(always)]
    fn simd_qadd(self, rhs: &'b [u8]) -> Self::Output {
        scalar_qadd(self, rhs)
    }

    #[inline(always)]
    fn par_simd_qadd(self, rhs: &'b [u8]) -> Self::Output {
        parallel_scalar_qadd(self, rhs)
    }

    #[inline(always)]
    fn scalar_qadd(self, rhs: &'b [u8]) -> Self::Output {
        scalar_qadd(self, rhs)
    }
}
