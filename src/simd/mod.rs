#[cfg(avx2)]
pub mod avx2;

#[cfg(neon)]
pub mod neon;

#[cfg(any(sse, fallback))]
pub mod slice;

pub mod traits;

pub mod utils;
