//! Histogram binning and normalization
//!
//! This crate turns a stream of real-valued samples into a histogram whose
//! bins are chosen by one of the classical bin-width rules, and reports the
//! per-bin values under one of several normalization schemes.
//!
//! # Key Features
//!
//! - **Binning rules**: Scott, Freedman-Diaconis, Sturges, square root and
//!   integer rules, or a caller-chosen bin count or width
//! - **Normalization**: count, probability, count density, PDF, cumulative
//!   count and CDF
//! - **Stateful engine**: [`HistogramEngine`] accepts samples incrementally
//!   and keeps its histogram up to date after every call
//! - **Immutable snapshots**: [`Histogram`] series are shared slices that
//!   never change once published
//!
//! # Examples
//!
//! ## Incremental engine
//!
//! ```rust
//! use binstat_histogram::{BinningAlgorithm, HistogramEngine, NormalizationType};
//!
//! let mut engine = HistogramEngine::new();
//! engine.append_batch(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0]).unwrap();
//! engine.set_binning_algorithm(BinningAlgorithm::IntegerRule).unwrap();
//! engine.set_normalization_type(NormalizationType::Probability);
//!
//! assert_eq!(engine.bin_centers(), &[1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(engine.normalized_values(), &[0.1, 0.2, 0.3, 0.4]);
//! ```
//!
//! ## One-shot builders
//!
//! ```rust
//! use binstat_histogram::{FixedWidthBuilder, HistogramBuilder};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = FixedWidthBuilder::new(5).build(&data).unwrap();
//!
//! println!("Histogram with {} bins", histogram.len());
//! for bin in histogram.bins() {
//!     println!("  [{:.1}, {:.1}): count={}", bin.left, bin.right, bin.count);
//! }
//! ```

pub mod algorithm;
pub mod builders;
pub mod config;
pub mod engine;
pub mod layout;
pub mod normalization;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use algorithm::{BinLimitsMode, BinningAlgorithm};
pub use builders::{FixedWidthBuilder, FreedmanDiaconisRule, RuleBuilder, ScottsRule};
pub use config::BinningConfig;
pub use engine::HistogramEngine;
pub use layout::BinLayout;
pub use normalization::NormalizationType;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

// Convenience functions
/// Create a histogram with a fixed number of equal-width bins
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> crate::Result<Histogram> {
    FixedWidthBuilder::new(num_bins).build(data)
}

/// Create a PDF histogram using Scott's rule for bin width
pub fn scott_histogram(data: &[f64]) -> crate::Result<Histogram> {
    ScottsRule.build(data)
}

/// Create a histogram with any binning rule and normalization
///
/// [`BinningAlgorithm::Manual`] has no rule to apply and is rejected.
pub fn histogram_with(
    data: &[f64],
    algorithm: BinningAlgorithm,
    normalization: NormalizationType,
) -> crate::Result<Histogram> {
    RuleBuilder::new(algorithm, normalization).build(data)
}

pub use binstat_core::{Error, Result};
