//! Bin-width and bin-count selection rules

use crate::layout::BinLayout;
use binstat_core::{stats, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest number of unit-width bins the integer rule creates (2^16)
pub const INTEGER_RULE_MAX_BINS: f64 = 65536.0;

/// Algorithm used for determining bin width and number of bins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BinningAlgorithm {
    /// Currently Scott's rule
    #[default]
    Auto,

    /// Width, count or limits chosen by the caller
    Manual,

    /// `3.5 * std(X) * n^(-1/3)`
    ///
    /// Optimal for data close to normally distributed, and reasonable for
    /// most other distributions.
    ScottRule,

    /// `2 * IQR(X) * n^(-1/3)`
    ///
    /// Less sensitive to outliers than Scott's rule; suits heavy-tailed data.
    FreedmanDiaconisRule,

    /// One bin per integer, edges halfway between integers
    ///
    /// When the data range exceeds 65536 the width grows to the next power of
    /// ten instead.
    IntegerRule,

    /// `ceil(1 + log2(n))` bins
    SturgesRule,

    /// `ceil(sqrt(n))` bins
    SquareRootRule,
}

/// A pure rule: sample plus its bounds to a bin layout
type RuleFn = fn(&[f64], f64, f64) -> Result<BinLayout>;

impl BinningAlgorithm {
    /// Every algorithm that derives bins from the data
    pub const RULES: [BinningAlgorithm; 6] = [
        BinningAlgorithm::Auto,
        BinningAlgorithm::ScottRule,
        BinningAlgorithm::FreedmanDiaconisRule,
        BinningAlgorithm::IntegerRule,
        BinningAlgorithm::SturgesRule,
        BinningAlgorithm::SquareRootRule,
    ];

    /// Short lowercase name used in logs and displays
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
            Self::ScottRule => "scott",
            Self::FreedmanDiaconisRule => "freedman-diaconis",
            Self::IntegerRule => "integer",
            Self::SturgesRule => "sturges",
            Self::SquareRootRule => "sqrt",
        }
    }

    fn rule(self) -> Option<RuleFn> {
        match self {
            Self::Auto | Self::ScottRule => Some(scott),
            Self::FreedmanDiaconisRule => Some(freedman_diaconis),
            Self::IntegerRule => Some(integer),
            Self::SturgesRule => Some(sturges),
            Self::SquareRootRule => Some(square_root),
            Self::Manual => None,
        }
    }

    /// Whether bins are derived from the data rather than set by the caller
    pub fn is_rule(&self) -> bool {
        !matches!(self, Self::Manual)
    }

    /// Compute the layout this rule picks for `sample`
    ///
    /// Fails with [`Error::EmptyDataset`] when there are no samples and with
    /// [`Error::InvalidArgument`] when the rule would produce zero-width or
    /// zero-range bins.
    pub fn layout(&self, sample: &[f64]) -> Result<BinLayout> {
        let rule = self.rule().ok_or_else(|| {
            Error::InvalidArgument("manual binning does not derive bins from data".to_string())
        })?;
        let (min, max) = stats::bounds(sample)?;
        rule(sample, min, max)
    }
}

impl fmt::Display for BinningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether bin limits follow the data or stay where they were put
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BinLimitsMode {
    /// Limits are re-derived from the data on every recompute
    #[default]
    Auto,
    /// Limits, width and count are kept from the last layout
    Manual,
}

fn ensure_spread(min: f64, max: f64) -> Result<f64> {
    let range = max - min;
    if range > 0.0 {
        Ok(range)
    } else {
        Err(Error::degenerate("all samples are identical"))
    }
}

fn cube_root_scale(n: usize) -> f64 {
    (n as f64).powf(-1.0 / 3.0)
}

/// Layout with limits at the data bounds and `ceil(range / width)` bins
fn width_rule(min: f64, max: f64, width: f64, what: &str) -> Result<BinLayout> {
    if !width.is_finite() || width <= 0.0 {
        return Err(Error::degenerate(&format!("{what} gives bin width {width}")));
    }
    let count = stats::to_bin_count(((max - min) / width).ceil())?;
    BinLayout::new(min, max, width, count)
}

fn scott(sample: &[f64], min: f64, max: f64) -> Result<BinLayout> {
    ensure_spread(min, max)?;
    let sd = stats::std_dev(sample)?;
    let width = 3.5 * sd * cube_root_scale(sample.len());
    width_rule(min, max, width, "Scott's rule")
}

fn freedman_diaconis(sample: &[f64], min: f64, max: f64) -> Result<BinLayout> {
    ensure_spread(min, max)?;
    let iqr = stats::interquartile_range(sample)?;
    let width = 2.0 * iqr * cube_root_scale(sample.len());
    width_rule(min, max, width, "Freedman-Diaconis rule (interquartile range is zero)")
}

fn integer(_sample: &[f64], min: f64, max: f64) -> Result<BinLayout> {
    let range = max - min;
    let width = if range > INTEGER_RULE_MAX_BINS {
        10f64.powf((range / INTEGER_RULE_MAX_BINS).log10().ceil())
    } else {
        1.0
    };

    // Edges sit halfway between multiples of the width
    let lower = (min / width).round() * width - width / 2.0;
    let upper = (max / width).round() * width + width / 2.0;
    let count = stats::to_bin_count(((upper - lower) / width).round())?;
    BinLayout::new(lower, upper, width, count)
}

fn sturges(sample: &[f64], min: f64, max: f64) -> Result<BinLayout> {
    ensure_spread(min, max)?;
    let count = stats::to_bin_count((1.0 + (sample.len() as f64).log2()).ceil())?;
    BinLayout::from_count(min, max, count)
}

fn square_root(sample: &[f64], min: f64, max: f64) -> Result<BinLayout> {
    ensure_spread(min, max)?;
    let count = stats::to_bin_count((sample.len() as f64).sqrt().ceil())?;
    BinLayout::from_count(min, max, count)
}
