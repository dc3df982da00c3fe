//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;
use binstat::HistogramEngine;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Normal, Uniform};

pub const EPSILON: f64 = 1e-10;

/// Samples `[1, 2, 2, 3, 3, 3, 4, 4, 4, 4]`
pub fn staircase() -> Vec<f64> {
    (1..=4).flat_map(|k| std::iter::repeat(f64::from(k)).take(k as usize)).collect()
}

/// Integers `0..=99` as floats
pub fn zero_to_99() -> Vec<f64> {
    (0..100).map(f64::from).collect()
}

/// Reproducible samples from a few differently shaped distributions
pub fn shaped_samples(n: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let exp = Exp::new(0.5).unwrap();
    let uniform = Uniform::new(-10.0, 10.0);

    vec![
        (0..n).map(|_| normal.sample(&mut rng)).collect(),
        (0..n).map(|_| exp.sample(&mut rng)).collect(),
        (0..n).map(|_| uniform.sample(&mut rng)).collect(),
    ]
}

pub fn engine_with(values: &[f64]) -> HistogramEngine {
    let mut engine = HistogramEngine::new();
    engine.append_batch(values).expect("samples should bin under the default rule");
    engine
}

/// Check the structural invariants every published histogram must hold
pub fn assert_consistent(engine: &HistogramEngine) {
    let bins = engine.number_of_bins();
    let edges = engine.bin_edges();
    let centers = engine.bin_centers();

    assert_eq!(edges.len(), bins + 1, "edge count");
    assert_eq!(centers.len(), bins, "center count");
    assert_eq!(engine.normalized_values().len(), bins, "value count");
    assert_eq!(engine.counts().len(), bins, "raw count length");

    for (i, pair) in edges.windows(2).enumerate() {
        assert!(pair[0] < pair[1], "edges not increasing at {i}: {pair:?}");
        assert_relative_eq!(centers[i], (pair[0] + pair[1]) / 2.0, epsilon = EPSILON);
    }

    assert_eq!(Some(edges[0]), engine.lower_limit());
    assert_eq!(Some(edges[bins]), engine.upper_limit());
}
