#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::simd::traits::SimdVec;
use std::ops::{Add, AddAssign};

pub const NEON_ALIGNMENT: usize = 8;

pub const LANE_COUNT: usize = 8;

/// A SIMD vector of 8 unsigned 8-bit values in one NEON d-register.
///
/// The `+` operator on this type is *saturating*: lane sums above 255 clamp
/// to 255 (`vqadd_u8`) instead of wrapping.
#[derive(Copy, Clone, Debug)]
pub struct U8x8 {
    size: usize,
    elements: uint8x8_t,
}

impl SimdVec<u8> for U8x8 {
    #[inline(always)]
    fn new(slice: &[u8]) -> Self {
        assert!(!slice.is_empty(), "Size can't be empty (size zero)");

        // If the slice length is less than LANE_COUNT, load a partial vector
        // zero-filled up to the register width. Otherwise, load a full vector.
        match slice.len().cmp(&LANE_COUNT) {
            std::cmp::Ordering::Less => unsafe { Self::load_partial(slice.as_ptr(), slice.len()) },
            std::cmp::Ordering::Equal | std::cmp::Ordering::Greater => unsafe {
                Self::load(slice.as_ptr(), LANE_COUNT)
            },
        }
    }

    /// Creates a new vector with all lanes set to the same value.
    #[inline(always)]
    unsafe fn splat(value: u8) -> Self {
        Self {
            elements: unsafe { vdup_n_u8(value) },
            size: LANE_COUNT,
        }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const u8, size: usize) -> Self {
        assert!(!ptr.is_null(), "Pointer must not be null");
        assert!(size == LANE_COUNT, "Size must be == {LANE_COUNT}");

        Self {
            elements: unsafe { vld1_u8(ptr) },
            size,
        }
    }

    #[inline(always)]
    unsafe fn load_partial(ptr: *const u8, size: usize) -> Self {
        assert!(
            size < LANE_COUNT,
            "{}",
            format!("Size must be < {LANE_COUNT}")
        );
        assert!(!ptr.is_null(), "Pointer must not be null");

        // NEON has no masked byte loads, so stage the partial lanes through a
        // zeroed stack buffer and load the full register from there.
        let mut buf = [0u8; LANE_COUNT];
        std::ptr::copy_nonoverlapping(ptr, buf.as_mut_ptr(), size);

        Self {
            elements: vld1_u8(buf.as_ptr()),
            size,
        }
    }

    #[inline(always)]
    unsafe fn store_in_vec(&self) -> Vec<u8> {
        assert!(
            self.size <= LANE_COUNT,
            "{}",
            format!("Size must be <= {LANE_COUNT}")
        );

        let mut vec = Vec::with_capacity(LANE_COUNT);

        unsafe {
            vst1_u8(vec.as_mut_ptr(), self.elements);
            vec.set_len(LANE_COUNT);
        }

        vec
    }

    #[inline(always)]
    unsafe fn store_in_vec_partial(&self) -> Vec<u8> {
        match self.size {
            1..LANE_COUNT => unsafe { self.store_in_vec().into_iter().take(self.size).collect() },
            _ => {
                let msg = "Size must be < LANE_COUNT";
                panic!("{}", msg);
            }
        }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut u8) {
        assert!(
            self.size <= LANE_COUNT,
            "{}",
            format!("Size must be <= {LANE_COUNT}")
        );
        assert!(!ptr.is_null(), "Pointer must not be null");

        vst1_u8(ptr, self.elements);
    }

    #[inline(always)]
    unsafe fn store_at_partial(&self, ptr: *mut u8) {
        assert!(
            self.size < LANE_COUNT,
            "{}",
            format!("Size must be < {LANE_COUNT}")
        );
        assert!(!ptr.is_null(), "Pointer must not be null");

        // Spill the register and copy only the active lanes, so no byte past
        // `ptr + size` is written.
        let mut buf = [0u8; LANE_COUNT];
        vst1_u8(buf.as_mut_ptr(), self.elements);
        std::ptr::copy_nonoverlapping(buf.as_ptr(), ptr, self.size);
    }

    #[inline(always)]
    fn to_vec(self) -> Vec<u8> {
        assert!(
            self.size <= LANE_COUNT,
            "{}",
            format!("Size must be <= {LANE_COUNT}")
        );

        if self.size == LANE_COUNT {
            unsafe { self.store_in_vec() }
        } else {
            unsafe { self.store_in_vec_partial() }
        }
    }
}

/// Saturating element-wise addition via the `+` operator.
///
/// Maps directly to `vqadd.u8`: each lane computes `min(a + b, 255)`.
impl Add for U8x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        assert!(
            self.size == rhs.size,
            "Operands must have the same size (expected {} lanes, got {} and {})",
            LANE_COUNT,
            self.size,
            rhs.size
        );

        Self {
            size: self.size,
            elements: unsafe { vqadd_u8(self.elements, rhs.elements) },
        }
    }
}

impl AddAssign for U8x8 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Eq for U8x8 {}

impl PartialEq for U8x8 {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        assert!(
            self.size == other.size,
            "Operands must have the same size (expected {} lanes, got {} and {})",
            LANE_COUNT,
            self.size,
            other.size
        );

        unsafe {
            // cmp is uint8x8_t where true lanes are 0xFF, false lanes are 0x0
            let cmp_mask: uint8x8_t = vceq_u8(self.elements, other.elements);

            // vminv_u8 returns the smallest lane; all lanes equal iff it is 0xFF
            let all_lanes_true: u8 = vminv_u8(cmp_mask);
            all_lanes_true == 0xFF
        }
    }
}
