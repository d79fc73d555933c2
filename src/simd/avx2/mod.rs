//! AVX2 implementation of saturating byte addition.
//!
//! x86 has carried packed saturating byte adds since SSE2; the AVX2 form
//! (`_mm256_adds_epu8`) processes 32 unsigned byte lanes per instruction,
//! clamping any lane sum above 255. [`u8x32::U8x32`] wraps one `__m256i`
//! register.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013) and later, AMD Excavator and later
//! - **Compilation**: Must be compiled with AVX2 enabled
//!   (`-C target-feature=+avx2`); the build script detects this automatically
//!
//! This module is only compiled when the `avx2` cfg flag is set by the build
//! script.

pub mod qadd;

pub mod u8x32;
