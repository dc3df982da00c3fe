//! Core types for histogram representation

use crate::layout::BinLayout;
use crate::normalization::NormalizationType;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A single bin in a histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of samples in this bin
    pub count: usize,
    /// Normalized value reported for this bin
    pub value: f64,
}

impl HistogramBin {
    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin (half-open)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, value={:.3}",
            self.left, self.right, self.count, self.value
        )
    }
}

/// Immutable snapshot of a binned and normalized sample
///
/// All series are shared slices; cloning a histogram, or renormalizing it,
/// never copies edges, centers or counts. A histogram with no bins is
/// published while there are no samples to bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    layout: Option<BinLayout>,
    edges: Arc<[f64]>,
    centers: Arc<[f64]>,
    counts: Arc<[usize]>,
    values: Arc<[f64]>,
    normalization: NormalizationType,
    total_count: usize,
}

impl Histogram {
    /// Histogram without bins
    pub fn empty(normalization: NormalizationType) -> Self {
        Self {
            layout: None,
            edges: Arc::from(Vec::new()),
            centers: Arc::from(Vec::new()),
            counts: Arc::from(Vec::new()),
            values: Arc::from(Vec::new()),
            normalization,
            total_count: 0,
        }
    }

    /// Bin `sample` with `layout` and normalize the counts
    pub fn compute(sample: &[f64], layout: BinLayout, normalization: NormalizationType) -> Self {
        let edges = layout.edges();
        let centers = BinLayout::centers(&edges);
        let counts = layout.count_samples(sample);
        let values = normalization.apply(&counts, layout.width(), sample.len());

        Self {
            layout: Some(layout),
            edges: edges.into(),
            centers: centers.into(),
            counts: counts.into(),
            values: values.into(),
            normalization,
            total_count: sample.len(),
        }
    }

    /// Same bins reported under a different normalization
    pub fn renormalize(&self, normalization: NormalizationType) -> Self {
        let width = self.layout.map_or(0.0, |l| l.width());
        let values = normalization.apply(&self.counts, width, self.total_count);

        Self {
            values: values.into(),
            normalization,
            ..self.clone()
        }
    }

    /// The layout the bins were computed with
    pub fn layout(&self) -> Option<&BinLayout> {
        self.layout.as_ref()
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Get the number of bins (same as [`Self::len`])
    pub fn number_of_bins(&self) -> usize {
        self.len()
    }

    /// Get the bin width, `None` for an empty histogram
    pub fn bin_width(&self) -> Option<f64> {
        self.layout.map(|l| l.width())
    }

    /// Get the left edge of the first bin
    pub fn lower_limit(&self) -> Option<f64> {
        self.layout.map(|l| l.lower())
    }

    /// Get the right edge of the last bin
    pub fn upper_limit(&self) -> Option<f64> {
        self.layout.map(|l| l.upper())
    }

    /// Bin edges, `number_of_bins() + 1` long
    pub fn bin_edges(&self) -> &[f64] {
        &self.edges
    }

    /// Get the bin midpoints
    pub fn bin_centers(&self) -> &[f64] {
        &self.centers
    }

    /// Raw per-bin counts
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Per-bin values under [`Self::normalization`]
    pub fn normalized_values(&self) -> &[f64] {
        &self.values
    }

    /// Get the normalization the values were computed under
    pub fn normalization(&self) -> NormalizationType {
        self.normalization
    }

    /// Number of samples the histogram was computed from, binned or not
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of samples that landed inside the bin limits
    pub fn binned_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        self.layout.and_then(|l| l.bin_index(value))
    }

    /// Iterate over the bins
    pub fn bins(&self) -> impl Iterator<Item = HistogramBin> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter().zip(self.values.iter()))
            .map(|(edge, (&count, &value))| HistogramBin {
                left: edge[0],
                right: edge[1],
                count,
                value,
            })
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.layout {
            Some(layout) => write!(
                f,
                "Histogram({} bins, n={}, range=[{:.3}, {:.3}], {})",
                self.len(),
                self.total_count,
                layout.lower(),
                layout.upper(),
                self.normalization
            ),
            None => write!(f, "Histogram(empty, {})", self.normalization),
        }
    }
}
