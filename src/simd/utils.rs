use std::alloc::{alloc, handle_alloc_error, Layout};

/// Allocates an aligned `Vec<u8>` with uninitialized contents.
///
/// # Safety
///
/// The caller must ensure that the elements of the returned vector are
/// initialized before being read. Reading from uninitialized memory is
/// undefined behavior.
#[inline(always)]
pub fn alloc_uninit_u8_vec(len: usize, align: usize) -> Vec<u8> {
    if len == 0 {
        return Vec::new();
    }

    let layout = Layout::from_size_align(len, align).expect("Invalid layout");

    let ptr = unsafe { alloc(layout) };

    if ptr.is_null() {
        handle_alloc_error(layout);
    }

    // SAFETY: The pointer is non-null and the layout is valid for `len` elements.
    // The capacity is set to `len`, so no re-allocation will occur until it's grown.
    unsafe { Vec::from_raw_parts(ptr, len, len) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_allocation() {
        let v = alloc_uninit_u8_vec(0, 16);
        assert!(v.is_empty());
    }

    #[test]
    fn test_allocation_alignment() {
        let v = alloc_uninit_u8_vec(64, 32);
        assert_eq!(v.len(), 64);
        assert_eq!(v.as_ptr() as usize % 32, 0);
    }
}
