//! Cross-checks between the scalar, SIMD, and parallel SIMD slice paths.
//!
//! All three methods of `SimdQadd` implement one contract, so for any pair of
//! equal-length byte slices they must agree byte for byte. Sizes are chosen to
//! cover exact multiples of every backend's lane count as well as ragged tails
//! that exercise the partial-block path.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use qaddly::simd::traits::SimdQadd;

/// Sizes around the 8-lane (NEON) and 32-lane (AVX2) block boundaries, plus
/// larger buffers that make the rayon path split across threads.
const TEST_SIZES: &[usize] = &[
    1, 2, 3, 7, 8, 9, 15, 16, 17, 31, 32, 33, 63, 64, 65, 100, 255, 256, 257, 1_000, 4_096, 10_000,
    65_536, 100_003,
];

fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.random()).collect()
}

#[test]
fn test_simd_matches_scalar() {
    let mut rng = StdRng::seed_from_u64(12345);

    for &size in TEST_SIZES {
        let a = random_bytes(&mut rng, size);
        let b = random_bytes(&mut rng, size);

        let scalar = a.as_slice().scalar_qadd(b.as_slice());
        let simd = a.as_slice().simd_qadd(b.as_slice());

        assert_eq!(scalar.len(), size);
        assert_eq!(simd.len(), size);
        assert_eq!(scalar, simd, "SIMD diverged from scalar at size {size}");
    }
}

#[test]
fn test_parallel_simd_matches_scalar() {
    let mut rng = StdRng::seed_from_u64(67890);

    for &size in TEST_SIZES {
        let a = random_bytes(&mut rng, size);
        let b = random_bytes(&mut rng, size);

        let scalar = a.as_slice().scalar_qadd(b.as_slice());
        let parallel = a.as_slice().par_simd_qadd(b.as_slice());

        assert_eq!(
            scalar, parallel,
            "parallel SIMD diverged from scalar at size {size}"
        );
    }
}

#[test]
fn test_scalar_reference_semantics() {
    let mut rng = StdRng::seed_from_u64(555);

    let a = random_bytes(&mut rng, 10_000);
    let b = random_bytes(&mut rng, 10_000);

    let c = a.as_slice().simd_qadd(b.as_slice());

    for i in 0..a.len() {
        let expected = (a[i] as u16 + b[i] as u16).min(255) as u8;
        assert_eq!(
            c[i], expected,
            "index {}: {} + {} gave {}, expected {}",
            i, a[i], b[i], c[i], expected
        );
    }
}

#[test]
fn test_saturation_heavy_inputs() {
    // Inputs biased toward the top of the range make most lanes saturate,
    // which is where a wrapping add would diverge hardest.
    let mut rng = StdRng::seed_from_u64(999);

    for &size in &[8usize, 33, 1_000] {
        let a: Vec<u8> = (0..size).map(|_| rng.random_range(200..=255)).collect();
        let b: Vec<u8> = (0..size).map(|_| rng.random_range(200..=255)).collect();

        let c = a.as_slice().simd_qadd(b.as_slice());

        assert!(c.iter().all(|&x| x == 255), "every lane should clamp to 255");
    }
}

#[test]
fn test_ragged_tail_boundaries() {
    // A strided ramp makes off-by-one block splits visible as value mismatches.
    for &size in TEST_SIZES {
        let a: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
        let b: Vec<u8> = (0..size).map(|i| (i % 13) as u8).collect();

        let expected: Vec<u8> = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| x.saturating_add(*y))
            .collect();

        assert_eq!(a.as_slice().simd_qadd(b.as_slice()), expected);
        assert_eq!(a.as_slice().par_simd_qadd(b.as_slice()), expected);
    }
}

#[test]
#[should_panic(expected = "Vectors must be the same length")]
fn test_mismatched_slice_lengths_panic() {
    let a = [1u8; 16];
    let b = [1u8; 17];
    let _ = a.as_slice().simd_qadd(b.as_slice());
}

#[test]
fn test_concurrent_invocations_agree() {
    // The operation is stateless, so hammering it from many threads must give
    // the same answer as a single-threaded run.
    let mut rng = StdRng::seed_from_u64(31337);

    let a = random_bytes(&mut rng, 4_096);
    let b = random_bytes(&mut rng, 4_096);
    let expected = a.as_slice().scalar_qadd(b.as_slice());

    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(a.as_slice().simd_qadd(b.as_slice()), expected);
                }
            });
        }
    });
}
