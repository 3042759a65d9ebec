//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use robust_plotpoints::FloatRange;

pub const EPSILON: f64 = 1e-9;

/// Install a test-writer subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn range(min: f64, max: f64) -> FloatRange {
    FloatRange::new(min, max).unwrap()
}

/// Deterministic noisy generator: `n` observations scattered around `x^2`
///
/// The seed is derived from `x`, so repeated calls at the same x agree.
pub fn bootstrap_like(n: usize) -> impl Fn(f64) -> Vec<f64> + Send + Sync {
    move |x: f64| {
        let mut rng = ChaCha8Rng::seed_from_u64(x.to_bits());
        (0..n).map(|_| x * x + rng.gen_range(-0.5..0.5)).collect()
    }
}

/// Assert two vectors are equal within tolerance
pub fn assert_vectors_equal(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch for {}",
        context
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= EPSILON * e.abs().max(1.0),
            "{}: index {} differs, got {} expected {}",
            context,
            i,
            a,
            e
        );
    }
}
