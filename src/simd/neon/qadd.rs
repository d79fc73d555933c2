use rayon::prelude::*;

use crate::simd::{
    neon::u8x8::{self, U8x8},
    traits::{SimdQadd, SimdVec},
    utils::alloc_uninit_u8_vec,
};

#[inline(always)]
fn scalar_qadd(a: &[u8], b: &[u8]) -> Vec<u8> {
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

#[target_feature(enable = "neon")]
fn simd_qadd(a: &[u8], b: &[u8]) -> Vec<u8> {
    assert!(
        !a.is_empty() & !b.is_empty(),
        "Size can't be empty (size zero)"
    );
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");

    let size = a.len();

    let mut c = alloc_uninit_u8_vec(size, u8x8::NEON_ALIGNMENT);

    let step = u8x8::LANE_COUNT;

    let nb_lanes = size - (size % step);
    let rem_lanes = size - nb_lanes;

    for i in (0..nb_lanes).step_by(step) {
        simd_qadd_block(&a[i], &b[i], &mut c[i]);
    }

    if rem_lanes > 0 {
        simd_qadd_partial_block(
            &a[nb_lanes],
            &b[nb_lanes],
            &mut c[nb_lanes],
            rem_lanes, // number of remaining uncomplete lanes
        );
    }

    c
}

#[inline(always)]
fn simd_qadd_block(a: *const u8, b: *const u8, c: *mut u8) {
    // Assumes lengths are u8x8::LANE_COUNT
    let a_chunk_simd = unsafe { U8x8::load(a, u8x8::LANE_COUNT) };
    let b_chunk_simd = unsafe { U8x8::load(b, u8x8::LANE_COUNT) };
    unsafe { (a_chunk_simd + b_chunk_simd).store_at(c) };
}

#[inline(always)]
fn simd_qadd_partial_block(a: *const u8, b: *const u8, c: *mut u8, size: usize) {
    // Assumes lengths are < u8x8::LANE_COUNT
    let a_chunk_simd = unsafe { U8x8::load_partial(a, size) };
    let b_chunk_simd = unsafe { U8x8::load_partial(b, size) };
    unsafe { (a_chunk_simd + b_chunk_simd).store_at_partial(c) };
}

#[target_feature(enable = "neon")]
fn parallel_simd_qadd(a: &[u8], b: &[u8]) -> Vec<u8> {
    assert!(
        !a.is_empty() & !b.is_empty(),
        "Size can't be empty (size zero)"
    );
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");

    let size = a.len();

    let mut c = alloc_uninit_u8_vec(size, u8x8::NEON_ALIGNMENT);

    let step = u8x8::LANE_COUNT;

    let nb_lanes = size - (size % step);
    let rem_lanes = size - nb_lanes;

    // Use chunks_exact_mut to ensure we process full blocks of size `step`
    // and handle the remaining elements separately.
    c.par_chunks_exact_mut(step)
        .enumerate()
        .for_each(|(i, c_chunk)| {
            simd_qadd_block(&a[i * step], &b[i * step], &mut c_chunk[0]);
        });

    // Handle the remaining elements that do not fit into a full block
    if rem_lanes > 0 {
        simd_qadd_partial_block(
            &a[nb_lanes],
            &b[nb_lanes],
            &mut c[nb_lanes],
            rem_lanes, // number of remaining uncomplete lanes
        );
    }

    c
}

impl<'b> SimdQadd<&'b [u8]> for &[u8] {
    type Output = Vec<u8>;

    #[inline(always)]
    fn simd_qadd(self, rhs: &'b [u8]) -> Self::Output {
        unsafe { simd_qadd(self, rhs) }
    }

    #[inline(always)]
    fn par_simd_qadd(self, rhs: &'b [u8]) -> Self::Output {
        unsafe { parallel_simd_qadd(self, rhs) }
    }

    #[inline(always)]
    fn scalar_qadd(self, rhs: &'b [u8]) -> Self::Output {
        scalar_qadd(self, rhs)
    }
}
