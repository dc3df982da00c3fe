//! Core traits for histogram building

use crate::types::Histogram;
use binstat_core::Result;

/// Trait for building histograms from sample data in one shot
pub trait HistogramBuilder {
    /// Build a histogram from the given sample
    fn build(&self, sample: &[f64]) -> Result<Histogram>;

    /// Get the target number of bins (if known)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
