//! Saturating unsigned byte-vector addition.
//!
//! The core contract is lane-wise `min(a[i] + b[i], 255)`: sums that exceed
//! the 8-bit range clamp to 255 instead of wrapping. The build script picks
//! one backend per build (NEON `vqadd_u8`, AVX2 `_mm256_adds_epu8`, or a
//! scalar clamp) and all backends implement the same [`simd::traits::SimdQadd`]
//! slice trait.

pub mod error;
pub mod qadd;
pub mod simd;

pub use error::{QaddlyError, Result};
pub use qadd::saturating_add_u8x8;
pub use simd::traits::SimdQadd;
