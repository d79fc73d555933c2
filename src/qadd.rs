//! Fixed-width entry point for saturating byte addition.
//!
//! An 8-lane unsigned byte vector is the register shape of the underlying
//! operation (one NEON d-register, `uint8x8_t`). This module validates the
//! lane count at the API boundary and dispatches to whichever backend the
//! build selected; lanes that overflow 8 bits clamp to 255.

use crate::error::{invalid_input_length, Result};
use crate::simd::traits::SimdQadd;

/// Number of lanes in a fixed-width byte vector.
pub const LANES: usize = 8;

/// Computes the lane-wise saturating sum of two 8-lane byte vectors.
///
/// For each lane `i`, the result is `min(a[i] + b[i], 255)`. The inputs are
/// not mutated and the call holds no state, so it is safe to invoke
/// concurrently from any number of threads.
///
/// # Errors
///
/// Returns [`QaddlyError::InvalidInputLength`](crate::error::QaddlyError) if
/// either slice does not contain exactly [`LANES`] elements. Malformed inputs
/// are never truncated or padded.
///
/// # Examples
///
/// ```rust
/// use qaddly::qadd::saturating_add_u8x8;
///
/// let a = [0x12, 0x12, 0xEE, 0x12, 0x12, 0x12, 0x12, 0x12];
/// let b = [0x34; 8];
///
/// let c = saturating_add_u8x8(&a, &b).unwrap();
/// assert_eq!(c, [0x46, 0x46, 0xFF, 0x46, 0x46, 0x46, 0x46, 0x46]);
/// ```
pub fn saturating_add_u8x8(a: &[u8], b: &[u8]) -> Result<[u8; LANES]> {
    if a.len() != LANES {
        return Err(invalid_input_length(LANES, a.len()));
    }
    if b.len() != LANES {
        return Err(invalid_input_length(LANES, b.len()));
    }

    let sum = a.simd_qadd(b);

    let mut out = [0u8; LANES];
    out.copy_from_slice(&sum);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QaddlyError;

    #[test]
    fn test_no_saturation() {
        let c = saturating_add_u8x8(&[0x12; LANES], &[0x34; LANES]).unwrap();
        assert_eq!(c, [0x46; LANES]);
    }

    #[test]
    fn test_saturation_boundary() {
        let a = [255, 0, 0, 0, 0, 0, 0, 0];
        let b = [1, 0, 0, 0, 0, 0, 0, 0];
        let c = saturating_add_u8x8(&a, &b).unwrap();
        assert_eq!(c, [255, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_short_input_rejected() {
        let err = saturating_add_u8x8(&[0; 7], &[0; LANES]).unwrap_err();
        assert_eq!(
            err,
            QaddlyError::InvalidInputLength {
                expected: LANES,
                actual: 7
            }
        );
    }

    #[test]
    fn test_long_input_rejected() {
        let err = saturating_add_u8x8(&[0; LANES], &[0; 9]).unwrap_err();
        assert_eq!(
            err,
            QaddlyError::InvalidInputLength {
                expected: LANES,
                actual: 9
            }
        );
    }
}
