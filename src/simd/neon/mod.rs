//! ARM NEON implementation of saturating byte addition.
//!
//! NEON's `vqadd.u8` instruction performs the whole contract in hardware:
//! eight unsigned byte lanes are summed and any lane that overflows sticks at
//! 255. [`u8x8::U8x8`] wraps one 64-bit d-register (`uint8x8_t`), the exact
//! register shape the instruction operates on.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Any AArch64 processor (Apple Silicon, AWS Graviton,
//!   modern Android devices)
//! - **Compilation**: Must be compiled with NEON enabled
//!   (`-C target-feature=+neon`); the build script detects this automatically
//!
//! This module is only compiled when the `neon` cfg flag is set by the build
//! script. When NEON is not available, the library falls back to scalar
//! saturating arithmetic.

pub mod qadd;

pub mod u8x8;
