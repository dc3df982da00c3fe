//! Stateful histogram engine
//!
//! [`HistogramEngine`] owns a growing sample set and keeps a fully derived
//! [`Histogram`] in step with it. Every sample mutation and every
//! configuration change recomputes the histogram from scratch before the
//! call returns; readers only ever see a snapshot published after a complete
//! pass.

use crate::algorithm::{BinLimitsMode, BinningAlgorithm};
use crate::config::BinningConfig;
use crate::layout::BinLayout;
use crate::normalization::NormalizationType;
use crate::types::Histogram;
use binstat_core::{stats, Error, Result};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// What the caller pinned while the algorithm is [`BinningAlgorithm::Manual`]
#[derive(Debug, Clone, Copy, PartialEq)]
enum ManualBins {
    /// Fixed number of bins spanning the data
    Count(usize),
    /// Fixed bin width, limits padded around the data
    Width(f64),
    /// Whatever layout was last resolved
    Frozen,
}

/// Resolve the bin layout for `samples` under a configuration
///
/// `previous` is the last resolved layout; it is reused when limits are
/// manual or when a manual configuration froze it.
fn resolve_layout(
    samples: &[f64],
    config: &BinningConfig,
    manual: ManualBins,
    previous: Option<BinLayout>,
) -> Result<BinLayout> {
    if let (BinLimitsMode::Manual, Some(layout)) = (config.limits_mode, previous) {
        return Ok(layout);
    }

    if config.algorithm.is_rule() {
        return config.algorithm.layout(samples);
    }

    match manual {
        ManualBins::Count(count) => {
            let (min, max) = stats::bounds(samples)?;
            BinLayout::from_count(min, max, count)
        }
        ManualBins::Width(width) => {
            let (min, max) = stats::bounds(samples)?;
            BinLayout::from_width(min, max, width)
        }
        ManualBins::Frozen => previous.ok_or_else(|| {
            Error::InvalidArgument("manual binning has no bin count or bin width set".to_string())
        }),
    }
}

/// Histogram over an appendable sample set
///
/// Mutators take `&mut self`; share an engine across threads behind a lock.
/// [`HistogramEngine::snapshot`] hands out the current histogram as an
/// `Arc` that stays valid, and unchanged, across later mutations.
#[derive(Debug, Clone)]
pub struct HistogramEngine {
    samples: Vec<f64>,
    config: BinningConfig,
    manual: ManualBins,
    layout: Option<BinLayout>,
    histogram: Arc<Histogram>,
}

impl Default for HistogramEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HistogramEngine {
    /// Empty engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(BinningConfig::default())
    }

    /// Empty engine with the given configuration
    ///
    /// A [`BinningAlgorithm::Manual`] configuration has nothing pinned yet:
    /// recomputes fail until a bin count or width is set.
    pub fn with_config(config: BinningConfig) -> Self {
        Self {
            samples: Vec::new(),
            config,
            manual: ManualBins::Frozen,
            layout: None,
            histogram: Arc::new(Histogram::empty(config.normalization)),
        }
    }

    // ----- samples -----

    /// Append one sample and recompute
    ///
    /// NaN and infinities are rejected with [`Error::NonFiniteSample`] and
    /// leave the sample set untouched. A finite sample is always kept, even
    /// when the resulting data cannot be binned under the current
    /// configuration; that failure is returned and an empty histogram is
    /// published until the data or configuration allows a layout again.
    pub fn append(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::NonFiniteSample {
                index: self.samples.len(),
                value,
            });
        }
        self.samples.push(value);
        self.recompute()
    }

    /// Append many samples with a single recompute
    ///
    /// The batch is all-or-nothing: a non-finite value anywhere rejects it,
    /// with the error naming its position within `values`.
    pub fn append_batch(&mut self, values: &[f64]) -> Result<()> {
        stats::ensure_finite(values)?;
        self.samples.extend_from_slice(values);
        self.recompute()
    }

    /// Replace every sample and recompute
    ///
    /// Replacing with an empty slice clears the engine, including any manual
    /// bin limits; the next samples get limits derived from their own range.
    pub fn replace_all(&mut self, values: &[f64]) -> Result<()> {
        stats::ensure_finite(values)?;
        self.samples.clear();
        self.samples.extend_from_slice(values);
        self.recompute()
    }

    /// Get the samples in insertion order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Get the number of samples, binned or not
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the engine holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    // ----- configuration -----

    /// Use exactly `count` bins between the data minimum and maximum
    ///
    /// Switches the algorithm to [`BinningAlgorithm::Manual`]. Counts above
    /// [`stats::MAX_BIN_COUNT`] are rejected.
    #[instrument(level = "debug", skip(self), fields(samples = self.samples.len()))]
    pub fn set_bin_count(&mut self, count: usize) -> Result<()> {
        stats::check_bin_count(count)?;
        self.ensure_samples("set_bin_count")?;

        let config = self.config.with_algorithm(BinningAlgorithm::Manual);
        self.reconfigure(config, ManualBins::Count(count), None)
    }

    /// Use bins exactly `width` wide, centred on the data
    ///
    /// Switches the algorithm to [`BinningAlgorithm::Manual`] and the limits
    /// to [`BinLimitsMode::Manual`]; later samples outside the padded limits
    /// are not binned.
    #[instrument(level = "debug", skip(self), fields(samples = self.samples.len()))]
    pub fn set_bin_width(&mut self, width: f64) -> Result<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "bin width {width} must be positive and finite"
            )));
        }
        self.ensure_samples("set_bin_width")?;

        let config = self
            .config
            .with_algorithm(BinningAlgorithm::Manual)
            .with_limits_mode(BinLimitsMode::Manual);
        self.reconfigure(config, ManualBins::Width(width), None)
    }

    /// Pick the rule that chooses bin width and count
    ///
    /// [`BinningAlgorithm::Manual`] keeps the current bins as they are. Any
    /// other algorithm re-derives the limits from the data.
    #[instrument(level = "debug", skip(self), fields(samples = self.samples.len()))]
    pub fn set_binning_algorithm(&mut self, algorithm: BinningAlgorithm) -> Result<()> {
        if !algorithm.is_rule() {
            if self.config.algorithm.is_rule() {
                self.config.algorithm = BinningAlgorithm::Manual;
                self.manual = ManualBins::Frozen;
            }
            return Ok(());
        }
        self.ensure_samples("set_binning_algorithm")?;

        let config = self
            .config
            .with_algorithm(algorithm)
            .with_limits_mode(BinLimitsMode::Auto);
        self.reconfigure(config, self.manual, None)
    }

    /// Choose whether bin limits follow the data
    ///
    /// Switching to [`BinLimitsMode::Auto`] while bins are manual keeps the
    /// current bin width and re-centres the limits on the data.
    #[instrument(level = "debug", skip(self), fields(samples = self.samples.len()))]
    pub fn set_bin_limits_mode(&mut self, mode: BinLimitsMode) -> Result<()> {
        let config = self.config.with_limits_mode(mode);
        let manual = match (mode, self.manual, self.layout) {
            (BinLimitsMode::Auto, ManualBins::Frozen, Some(layout))
                if !config.algorithm.is_rule() =>
            {
                ManualBins::Width(layout.width())
            }
            _ => self.manual,
        };

        if self.samples.is_empty() || mode == BinLimitsMode::Manual {
            self.config = config;
            self.manual = manual;
            return Ok(());
        }
        self.reconfigure(config, manual, self.layout)
    }

    /// Change how bin values are reported; bins are left as they are
    pub fn set_normalization_type(&mut self, normalization: NormalizationType) {
        self.config.normalization = normalization;
        if self.histogram.normalization() != normalization {
            self.histogram = Arc::new(self.histogram.renormalize(normalization));
        }
    }

    /// Get the current configuration, e.g. to persist it
    pub fn config(&self) -> BinningConfig {
        self.config
    }

    /// Get the active binning algorithm
    pub fn binning_algorithm(&self) -> BinningAlgorithm {
        self.config.algorithm
    }

    /// Get whether bin limits follow the data
    pub fn bin_limits_mode(&self) -> BinLimitsMode {
        self.config.limits_mode
    }

    /// Get the normalization applied to reported values
    pub fn normalization_type(&self) -> NormalizationType {
        self.config.normalization
    }

    // ----- derived state -----

    /// The current histogram, shared
    pub fn snapshot(&self) -> Arc<Histogram> {
        Arc::clone(&self.histogram)
    }

    /// Borrow the current histogram
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Get the bin edges, `number_of_bins() + 1` long
    pub fn bin_edges(&self) -> &[f64] {
        self.histogram.bin_edges()
    }

    /// Get the bin midpoints
    pub fn bin_centers(&self) -> &[f64] {
        self.histogram.bin_centers()
    }

    /// Get the per-bin values under the current normalization
    pub fn normalized_values(&self) -> &[f64] {
        self.histogram.normalized_values()
    }

    /// Get the raw per-bin counts
    pub fn counts(&self) -> &[usize] {
        self.histogram.counts()
    }

    /// Get the number of bins; zero while nothing is binned
    pub fn number_of_bins(&self) -> usize {
        self.histogram.number_of_bins()
    }

    /// Get the bin width, if there are bins
    pub fn bin_width(&self) -> Option<f64> {
        self.histogram.bin_width()
    }

    /// Get the left edge of the first bin
    pub fn lower_limit(&self) -> Option<f64> {
        self.histogram.lower_limit()
    }

    /// Get the right edge of the last bin
    pub fn upper_limit(&self) -> Option<f64> {
        self.histogram.upper_limit()
    }

    // ----- internals -----

    fn ensure_samples(&self, operation: &str) -> Result<()> {
        if self.samples.is_empty() {
            return Err(Error::empty_dataset(operation));
        }
        Ok(())
    }

    fn publish(&mut self, layout: BinLayout) {
        let histogram = Histogram::compute(&self.samples, layout, self.config.normalization);
        trace!(counts = ?histogram.counts(), "binned samples");
        self.layout = Some(layout);
        self.histogram = Arc::new(histogram);
    }

    /// Apply a configuration change, all or nothing
    fn reconfigure(
        &mut self,
        config: BinningConfig,
        manual: ManualBins,
        previous: Option<BinLayout>,
    ) -> Result<()> {
        let layout = resolve_layout(&self.samples, &config, manual, previous)?;
        debug!(
            algorithm = %config.algorithm,
            lower = layout.lower(),
            upper = layout.upper(),
            width = layout.width(),
            bins = layout.count(),
            "reconfigured bins"
        );

        self.config = config;
        self.manual = manual;
        self.publish(layout);
        Ok(())
    }

    /// Rebuild the histogram after the samples changed
    #[instrument(level = "debug", skip(self), fields(samples = self.samples.len()))]
    fn recompute(&mut self) -> Result<()> {
        if self.samples.is_empty() {
            self.layout = None;
            self.histogram = Arc::new(Histogram::empty(self.config.normalization));
            return Ok(());
        }

        match resolve_layout(&self.samples, &self.config, self.manual, self.layout) {
            Ok(layout) => {
                debug!(
                    lower = layout.lower(),
                    upper = layout.upper(),
                    width = layout.width(),
                    bins = layout.count(),
                    "resolved bin layout"
                );
                self.publish(layout);
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, "samples cannot be binned under the current configuration");
                self.histogram = Arc::new(Histogram::empty(self.config.normalization));
                Err(err)
            }
        }
    }
}
