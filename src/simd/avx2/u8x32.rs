#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::traits::SimdVec;
use std::ops::{Add, AddAssign};

pub const AVX_ALIGNMENT: usize = 32;

pub const LANE_COUNT: usize = 32;

/// A SIMD vector of 32 unsigned 8-bit values in one AVX2 256-bit register.
///
/// The `+` operator on this type is *saturating*: lane sums above 255 clamp
/// to 255 (`_mm256_adds_epu8`) instead of wrapping.
#[derive(Copy, Clone, Debug)]
pub struct U8x32 {
    size: usize,
    elements: __m256i,
}

impl SimdVec<u8> for U8x32 {
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
            elements: unsafe { _mm256_set1_epi8(value as i8) },
            size: LANE_COUNT,
        }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const u8, size: usize) -> Self {
        assert!(!ptr.is_null(), "Pointer must not be null");
        assert!(size == LANE_COUNT, "Size must be == {LANE_COUNT}");

        Self {
            elements: unsafe { _mm256_loadu_si256(ptr as *const __m256i) },
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

        // AVX2 masked loads work at 32/64-bit granularity only, so partial
        // byte lanes are staged through a zeroed stack buffer instead.
        let mut buf = [0u8; LANE_COUNT];
        std::ptr::copy_nonoverlapping(ptr, buf.as_mut_ptr(), size);

        Self {
            elements: _mm256_loadu_si256(buf.as_ptr() as *const __m256i),
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
            _mm256_storeu_si256(vec.as_mut_ptr() as *mut __m256i, self.elements);
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

        _mm256_storeu_si256(ptr as *mut __m256i, self.elements);
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
        _mm256_storeu_si256(buf.as_mut_ptr() as *mut __m256i, self.elements);
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
/// Maps directly to `_mm256_adds_epu8`: each lane computes `min(a + b, 255)`.
impl Add for U8x32 {
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
            elements: unsafe { _mm256_adds_epu8(self.elements, rhs.elements) },
        }
    }
}

impl AddAssign for U8x32 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Eq for U8x32 {}

impl PartialEq for U8x32 {
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
            // cmp is __m256i where true lanes are 0xFF, false lanes are 0x0
            let cmp_mask = _mm256_cmpeq_epi8(self.elements, other.elements);

            // movemask packs one bit per byte lane; all lanes equal iff every bit is set
            _mm256_movemask_epi8(cmp_mask) == -1i32
        }
    }
}

#[cfg(test)]
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod tests {
    use super::*;
    use crate::simd::traits::SimdVec;

    fn get_all_elements(v: U8x32) -> [u8; LANE_COUNT] {
        let mut arr = [0u8; LANE_COUNT];
        unsafe {
            _mm256_storeu_si256(arr.as_mut_ptr() as *mut __m256i, v.elements);
        }
        arr
    }

    #[test]
    fn test_new_full_slice() {
        let data: [u8; LANE_COUNT] = std::array::from_fn(|i| i as u8);
        let v = U8x32::new(&data);
        assert_eq!(v.size, LANE_COUNT);
        assert_eq!(get_all_elements(v), data);
        assert_eq!(v.to_vec(), data);
    }

    #[test]
    fn test_new_partial_slice() {
        let data = [9u8, 8, 7, 6, 5];
        let v = U8x32::new(&data);
        assert_eq!(v.size, data.len());
        let mut expected_raw = [0u8; LANE_COUNT];
        expected_raw[0..data.len()].copy_from_slice(&data);
        assert_eq!(get_all_elements(v), expected_raw);
        assert_eq!(v.to_vec(), data);
    }

    #[test]
    #[should_panic(expected = "Size can't be empty (size zero)")]
    fn test_new_empty_slice_panics() {
        U8x32::new(&[]);
    }

    #[test]
    fn test_splat() {
        let v = unsafe { U8x32::splat(0xAB) };
        assert_eq!(v.size, LANE_COUNT);
        assert_eq!(get_all_elements(v), [0xAB; LANE_COUNT]);
    }

    #[test]
    fn test_add_saturates() {
        let mut a = [0x12u8; LANE_COUNT];
        a[2] = 0xEE;
        let b = [0x34u8; LANE_COUNT];

        let c = U8x32::new(&a) + U8x32::new(&b);

        let mut expected = [0x46u8; LANE_COUNT];
        expected[2] = 0xFF;
        assert_eq!(get_all_elements(c), expected);
    }

    #[test]
    fn test_add_no_wraparound_at_max() {
        let a = unsafe { U8x32::splat(0xFF) };
        let b = unsafe { U8x32::splat(0xFF) };
        assert_eq!(get_all_elements(a + b), [0xFF; LANE_COUNT]);
    }

    #[test]
    fn test_partial_eq() {
        let data: [u8; LANE_COUNT] = std::array::from_fn(|i| i as u8);
        let mut other = data;
        other[31] = 0xFF;
        assert_eq!(U8x32::new(&data), U8x32::new(&data));
        assert_ne!(U8x32::new(&data), U8x32::new(&other));
    }

    #[test]
    fn test_store_at_partial_does_not_overwrite() {
        let v = U8x32::new(&[9, 9, 9]);
        let mut out = [7u8; LANE_COUNT];
        unsafe { v.store_at_partial(out.as_mut_ptr()) };
        assert_eq!(&out[..3], &[9, 9, 9]);
        assert!(out[3..].iter().all(|&x| x == 7));
    }
}
