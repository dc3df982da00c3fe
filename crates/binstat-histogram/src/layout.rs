//! Equal-width bin layouts and raw bin counting

use binstat_core::{stats, Error, Result};
use serde::Serialize;

/// Placement of equal-width bins over `[lower, upper]`
///
/// Bin `i` covers `[lower + i * width, lower + (i + 1) * width)`. The last bin
/// starts at `lower + (count - 1) * width` and is closed at `upper`, which may
/// make it narrower than `width` when the layout comes from a width rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinLayout {
    lower: f64,
    upper: f64,
    width: f64,
    count: usize,
}

impl BinLayout {
    /// Create a validated layout
    pub fn new(lower: f64, upper: f64, width: f64, count: usize) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "bin limits [{lower}, {upper}] must be finite"
            )));
        }
        stats::check_bin_count(count)?;
        if lower >= upper {
            return Err(Error::degenerate(&format!("zero-range limits [{lower}, {upper}]")));
        }
        if !width.is_finite() || width <= 0.0 || lower + width == lower {
            return Err(Error::degenerate(&format!("bin width {width}")));
        }
        // Every edge must sit strictly below the closing edge
        let last_start = lower + (count - 1) as f64 * width;
        if last_start >= upper {
            return Err(Error::degenerate(&format!(
                "{count} bins of width {width} overrun [{lower}, {upper}]"
            )));
        }

        Ok(Self {
            lower,
            upper,
            width,
            count,
        })
    }

    /// `count` equal bins spanning exactly `[min, max]`
    pub fn from_count(min: f64, max: f64, count: usize) -> Result<Self> {
        stats::check_bin_count(count)?;
        let width = (max - min) / count as f64;
        Self::new(min, max, width, count)
    }

    /// Bins of a fixed `width` covering `[min, max]`
    ///
    /// The slack left over by rounding the bin count up is split evenly below
    /// `min` and above `max`.
    pub fn from_width(min: f64, max: f64, width: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "bin width {width} must be positive and finite"
            )));
        }
        let range = max - min;
        if range <= 0.0 {
            return Err(Error::degenerate("all samples are identical"));
        }

        let count = stats::to_bin_count((range / width).ceil())?;
        let slack = count as f64 * width - range;
        Self::new(min - slack / 2.0, max + slack / 2.0, width, count)
    }

    /// Get the left edge of the first bin
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Get the closing edge of the last bin
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Get the nominal bin width
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Get the number of bins
    pub fn count(&self) -> usize {
        self.count
    }

    /// Left edge of bin `i`
    #[inline]
    fn edge(&self, i: usize) -> f64 {
        self.lower + i as f64 * self.width
    }

    /// All `count + 1` bin edges; the last one is `upper`
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = (0..self.count).map(|i| self.edge(i)).collect();
        edges.push(self.upper);
        edges
    }

    /// Midpoints between consecutive edges
    pub fn centers(edges: &[f64]) -> Vec<f64> {
        edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }

    /// Index of the bin holding `value`, or `None` outside `[lower, upper]`
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        if !(self.lower..=self.upper).contains(&value) {
            return None;
        }

        let last = self.count - 1;
        let mut idx = ((value - self.lower) / self.width).floor() as usize;
        idx = idx.min(last);

        // The division can land one bin off at an edge; settle against the
        // edges themselves so counting agrees with the interval definition.
        while idx < last && value >= self.edge(idx + 1) {
            idx += 1;
        }
        while idx > 0 && value < self.edge(idx) {
            idx -= 1;
        }
        Some(idx)
    }

    /// Raw per-bin counts. Samples outside `[lower, upper]` are skipped.
    pub fn count_samples(&self, sample: &[f64]) -> Vec<usize> {
        let mut counts = vec![0usize; self.count];
        for idx in sample.iter().filter_map(|&x| self.bin_index(x)) {
            counts[idx] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_count_spans_data() {
        let layout = BinLayout::from_count(0.0, 99.0, 5).unwrap();
        assert_relative_eq!(layout.width(), 19.8);
        let edges = layout.edges();
        assert_eq!(edges.len(), 6);
        assert_eq!(edges[0], 0.0);
        assert_eq!(edges[5], 99.0);
    }

    #[test]
    fn test_from_width_pads_symmetrically() {
        let layout = BinLayout::from_width(0.0, 99.0, 10.0).unwrap();
        assert_eq!(layout.count(), 10);
        assert_relative_eq!(layout.lower(), -0.5);
        assert_relative_eq!(layout.upper(), 99.5);
        assert_relative_eq!(layout.upper() - layout.lower(), 100.0);
    }

    #[test]
    fn test_rejects_degenerate_layouts() {
        assert!(BinLayout::from_count(1.0, 1.0, 3).is_err());
        assert!(BinLayout::from_count(0.0, 1.0, 0).is_err());
        assert!(BinLayout::from_width(0.0, 1.0, 0.0).is_err());
        assert!(BinLayout::from_width(0.0, 1.0, -2.0).is_err());
        assert!(BinLayout::from_width(0.0, 1.0, f64::NAN).is_err());
        assert!(BinLayout::from_width(4.0, 4.0, 1.0).is_err());
        assert!(BinLayout::new(0.0, 1.0, 0.5, 3).is_err());
        assert!(BinLayout::new(0.0, f64::INFINITY, 0.5, 3).is_err());
    }

    #[test]
    fn test_rejects_oversized_layouts() {
        let err = BinLayout::from_width(0.0, 100.0, 1e-9).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)), "{err}");

        let err = BinLayout::from_count(0.0, 1.0, stats::MAX_BIN_COUNT + 1).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)), "{err}");

        let layout = BinLayout::from_count(0.0, 1.0, stats::MAX_BIN_COUNT).unwrap();
        assert_eq!(layout.count(), stats::MAX_BIN_COUNT);
    }

    #[test]
    fn test_bin_index_edges() {
        let layout = BinLayout::from_count(0.0, 3.0, 3).unwrap();
        assert_eq!(layout.bin_index(0.0), Some(0));
        assert_eq!(layout.bin_index(0.999), Some(0));
        assert_eq!(layout.bin_index(1.0), Some(1)); // left edge is inclusive
        assert_eq!(layout.bin_index(2.5), Some(2));
        assert_eq!(layout.bin_index(3.0), Some(2)); // last bin includes upper
        assert_eq!(layout.bin_index(-0.1), None);
        assert_eq!(layout.bin_index(3.1), None);
    }

    #[test]
    fn test_count_samples() {
        let layout = BinLayout::from_count(1.0, 4.0, 3).unwrap();
        let data = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0];
        assert_eq!(layout.count_samples(&data), vec![1, 2, 7]);

        // Out-of-range samples are excluded rather than clamped
        let counts = layout.count_samples(&[0.0, 1.5, 10.0]);
        assert_eq!(counts, vec![1, 0, 0]);
    }

    #[test]
    fn test_narrow_last_bin() {
        // Width rules keep [min, max] so the last bin may be short
        let layout = BinLayout::new(0.0, 2.5, 1.0, 3).unwrap();
        assert_eq!(layout.edges(), vec![0.0, 1.0, 2.0, 2.5]);
        assert_eq!(BinLayout::centers(&layout.edges()), vec![0.5, 1.5, 2.25]);
        assert_eq!(layout.bin_index(2.5), Some(2));
    }
}
