//! One-shot histogram building strategies
//!
//! These share the binning rules of [`HistogramEngine`](crate::HistogramEngine)
//! but work on a borrowed slice without keeping any state.

use crate::algorithm::BinningAlgorithm;
use crate::layout::BinLayout;
use crate::normalization::NormalizationType;
use crate::traits::HistogramBuilder;
use crate::types::Histogram;
use binstat_core::{stats, Result};

/// Fixed-count histogram builder
///
/// Creates a histogram with a specified number of equal-width bins spanning
/// the data.
pub struct FixedWidthBuilder {
    num_bins: usize,
    normalization: NormalizationType,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
            normalization: NormalizationType::Count,
        }
    }

    /// Report values under `normalization` instead of raw counts
    pub fn normalized(mut self, normalization: NormalizationType) -> Self {
        self.normalization = normalization;
        self
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        stats::ensure_finite(sample)?;
        if sample.is_empty() {
            return Ok(Histogram::empty(self.normalization));
        }

        let (min, max) = stats::bounds(sample)?;
        let layout = BinLayout::from_count(min, max, self.num_bins)?;
        Ok(Histogram::compute(sample, layout, self.normalization))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// Histogram builder driven by any data-derived [`BinningAlgorithm`]
pub struct RuleBuilder {
    algorithm: BinningAlgorithm,
    normalization: NormalizationType,
}

impl RuleBuilder {
    /// Create a builder for `algorithm`; [`BinningAlgorithm::Manual`] fails to build
    pub fn new(algorithm: BinningAlgorithm, normalization: NormalizationType) -> Self {
        Self {
            algorithm,
            normalization,
        }
    }
}

impl HistogramBuilder for RuleBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        stats::ensure_finite(sample)?;
        if sample.is_empty() {
            return Ok(Histogram::empty(self.normalization));
        }

        let layout = self.algorithm.layout(sample)?;
        Ok(Histogram::compute(sample, layout, self.normalization))
    }
}

/// Scott's rule for optimal bin width
///
/// Uses the formula: h = 3.5 * σ * n^(-1/3)
/// where σ is the sample standard deviation and n is the sample size.
pub struct ScottsRule;

impl HistogramBuilder for ScottsRule {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        RuleBuilder::new(BinningAlgorithm::ScottRule, NormalizationType::Pdf).build(sample)
    }
}

/// Freedman-Diaconis rule for optimal bin width
///
/// Uses the formula: h = 2 * IQR * n^(-1/3)
/// where IQR is the interquartile range.
pub struct FreedmanDiaconisRule;

impl HistogramBuilder for FreedmanDiaconisRule {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        RuleBuilder::new(BinningAlgorithm::FreedmanDiaconisRule, NormalizationType::Pdf)
            .build(sample)
    }
}
