//! Histogram binning engine
//!
//! This crate re-exports the binstat workspace:
//!
//! - [`stats`]: data bounds, spread statistics and finiteness checks
//! - [`histogram`]: binning rules, normalization, the incremental
//!   [`HistogramEngine`] and one-shot builders
//!
//! # Example
//!
//! ```rust
//! use binstat::prelude::*;
//!
//! let mut engine = HistogramEngine::new();
//! engine.append_batch(&(0..100).map(f64::from).collect::<Vec<_>>())?;
//! engine.set_bin_count(5)?;
//! engine.set_normalization_type(NormalizationType::Cdf);
//!
//! assert_eq!(engine.bin_edges().len(), 6);
//! assert!((engine.normalized_values()[4] - 1.0).abs() < 1e-12);
//! # Ok::<(), binstat::Error>(())
//! ```

pub use binstat_core::stats;
pub use binstat_histogram as histogram;

pub use binstat_core::{Error, Result};
pub use binstat_histogram::{
    fixed_histogram, histogram_with, scott_histogram, BinLayout, BinLimitsMode, BinningAlgorithm,
    BinningConfig, FixedWidthBuilder, FreedmanDiaconisRule, Histogram, HistogramBin,
    HistogramBuilder, HistogramEngine, NormalizationType, RuleBuilder, ScottsRule,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BinLimitsMode, BinningAlgorithm, BinningConfig, Error, Histogram, HistogramBuilder,
        HistogramEngine, NormalizationType, Result,
    };
}
