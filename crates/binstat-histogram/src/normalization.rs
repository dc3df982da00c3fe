//! Normalization of raw bin counts into reported bin values

use serde::{Deserialize, Serialize};
use std::fmt;

/// How raw bin counts are turned into the reported series
///
/// Normalization never changes the binning itself, only the values reported
/// per bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NormalizationType {
    /// Number of observations per bin; bar heights sum to n
    #[default]
    Count,
    /// Relative number of observations; bar heights sum to 1
    Probability,
    /// Count per unit width; bar areas sum to n
    CountDensity,
    /// Probability density estimate; bar areas sum to 1
    Pdf,
    /// Observations in each bin and all previous bins; last bar is n
    CumulativeCount,
    /// Cumulative relative number of observations; last bar is 1
    Cdf,
}

/// Per-bin formula of (count, bin width, total count)
type Formula = fn(f64, f64, f64) -> f64;

fn raw(count: f64, _width: f64, _total: f64) -> f64 {
    count
}

fn relative(count: f64, _width: f64, total: f64) -> f64 {
    count / total
}

fn per_width(count: f64, width: f64, _total: f64) -> f64 {
    count / width
}

fn density(count: f64, width: f64, total: f64) -> f64 {
    count / (total * width)
}

impl NormalizationType {
    /// Every normalization, in display order
    pub const ALL: [NormalizationType; 6] = [
        NormalizationType::Count,
        NormalizationType::Probability,
        NormalizationType::CountDensity,
        NormalizationType::Pdf,
        NormalizationType::CumulativeCount,
        NormalizationType::Cdf,
    ];

    /// Short lowercase name used in logs and displays
    pub fn name(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Probability => "probability",
            Self::CountDensity => "countdensity",
            Self::Pdf => "pdf",
            Self::CumulativeCount => "cumcount",
            Self::Cdf => "cdf",
        }
    }

    fn formula(self) -> Formula {
        match self {
            Self::Count | Self::CumulativeCount => raw,
            Self::Probability | Self::Cdf => relative,
            Self::CountDensity => per_width,
            Self::Pdf => density,
        }
    }

    /// Whether values accumulate across bins
    pub fn is_cumulative(&self) -> bool {
        matches!(self, Self::CumulativeCount | Self::Cdf)
    }

    /// Normalize raw `counts` of bins `width` wide out of `total` samples
    pub fn apply(&self, counts: &[usize], width: f64, total: usize) -> Vec<f64> {
        let formula = self.formula();
        let total = total as f64;
        let values = counts.iter().map(|&c| formula(c as f64, width, total));

        if self.is_cumulative() {
            values
                .scan(0.0, |running, v| {
                    *running += v;
                    Some(*running)
                })
                .collect()
        } else {
            values.collect()
        }
    }
}

impl fmt::Display for NormalizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
