//! Descriptive statistics needed by the binning rules
//!
//! Everything here works on plain `&[f64]` slices. Callers are expected to
//! have filtered non-finite values already (see [`first_non_finite`]).

use crate::error::{Error, Result};
use num_traits::ToPrimitive;
use statrs::statistics::{Data, OrderStatistics, Statistics};

/// Locate the first NaN or infinite value in a slice
pub fn first_non_finite(sample: &[f64]) -> Option<(usize, f64)> {
    sample
        .iter()
        .copied()
        .enumerate()
        .find(|(_, x)| !x.is_finite())
}

/// Fail with [`Error::NonFiniteSample`] if any value is NaN or infinite
pub fn ensure_finite(sample: &[f64]) -> Result<()> {
    match first_non_finite(sample) {
        Some((index, value)) => Err(Error::NonFiniteSample { index, value }),
        None => Ok(()),
    }
}

/// Minimum and maximum of the sample
pub fn bounds(sample: &[f64]) -> Result<(f64, f64)> {
    if sample.is_empty() {
        return Err(Error::empty_dataset("computing data bounds"));
    }

    let bounds = sample
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    Ok(bounds)
}

/// Sample standard deviation (Bessel corrected, divides by n - 1)
pub fn std_dev(sample: &[f64]) -> Result<f64> {
    if sample.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: sample.len(),
        });
    }
    Ok(sample.iter().std_dev())
}

/// Interquartile range Q3 - Q1
///
/// Quartiles use the R-8 definition (approximately median unbiased), which is
/// what `statrs` implements for [`OrderStatistics`].
pub fn interquartile_range(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_dataset("interquartile range"));
    }
    let mut data = Data::new(sample.to_vec());
    Ok(data.interquartile_range())
}

/// Largest number of bins any layout may have (2^20)
///
/// Every published series is allocated per bin, so a width that is tiny
/// relative to the data range must fail instead of exhausting memory.
pub const MAX_BIN_COUNT: usize = 1 << 20;

/// Fail with [`Error::InvalidArgument`] unless `1 <= count <= MAX_BIN_COUNT`
pub fn check_bin_count(count: usize) -> Result<usize> {
    if count == 0 {
        return Err(Error::InvalidArgument("bin count must be at least 1".to_string()));
    }
    if count > MAX_BIN_COUNT {
        return Err(Error::InvalidArgument(format!(
            "bin count {count} exceeds the maximum of {MAX_BIN_COUNT}"
        )));
    }
    Ok(count)
}

/// Convert a real-valued bin count (already rounded up) into `usize`
///
/// Fails for NaN, infinities, values that do not fit and counts above
/// [`MAX_BIN_COUNT`].
pub fn to_bin_count(value: f64) -> Result<usize> {
    let count = value.to_usize().ok_or_else(|| {
        Error::InvalidArgument(format!("bin count {value} is not representable"))
    })?;
    if count > MAX_BIN_COUNT {
        return Err(Error::InvalidArgument(format!(
            "bin count {value} exceeds the maximum of {MAX_BIN_COUNT}"
        )));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounds() {
        assert_eq!(bounds(&[3.0, -1.5, 7.25, 0.0]).unwrap(), (-1.5, 7.25));
        assert_eq!(bounds(&[2.0]).unwrap(), (2.0, 2.0));
        assert!(matches!(bounds(&[]), Err(Error::EmptyDataset(_))));
    }

    #[test]
    fn test_std_dev_is_sample_estimate() {
        let data = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0];
        // Squared deviations around the mean (3.0) sum to 10
        assert_relative_eq!(std_dev(&data).unwrap(), (10.0_f64 / 9.0).sqrt(), epsilon = 1e-12);

        assert!(matches!(
            std_dev(&[1.0]),
            Err(Error::InsufficientData { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_interquartile_range() {
        let data: Vec<f64> = (1..=9).map(f64::from).collect();
        // R-8 quartiles of 1..=9 are 8/3 and 22/3
        assert_relative_eq!(interquartile_range(&data).unwrap(), 14.0 / 3.0, epsilon = 1e-9);

        let constant = [5.0; 8];
        assert_eq!(interquartile_range(&constant).unwrap(), 0.0);
        assert!(interquartile_range(&[]).is_err());
    }

    #[test]
    fn test_first_non_finite() {
        assert_eq!(first_non_finite(&[1.0, 2.0]), None);
        let (index, value) = first_non_finite(&[1.0, f64::NEG_INFINITY, f64::NAN]).unwrap();
        assert_eq!(index, 1);
        assert_eq!(value, f64::NEG_INFINITY);

        assert!(ensure_finite(&[0.0, 1.0]).is_ok());
        assert!(matches!(
            ensure_finite(&[0.0, f64::NAN]),
            Err(Error::NonFiniteSample { index: 1, .. })
        ));
    }

    #[test]
    fn test_to_bin_count() {
        assert_eq!(to_bin_count(12.0).unwrap(), 12);
        assert!(to_bin_count(f64::INFINITY).is_err());
        assert!(to_bin_count(f64::NAN).is_err());
        assert!(to_bin_count(-1.0).is_err());

        assert_eq!(to_bin_count(MAX_BIN_COUNT as f64).unwrap(), MAX_BIN_COUNT);
        assert!(matches!(
            to_bin_count(MAX_BIN_COUNT as f64 + 1.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(to_bin_count(1e11), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_check_bin_count() {
        assert_eq!(check_bin_count(1).unwrap(), 1);
        assert_eq!(check_bin_count(MAX_BIN_COUNT).unwrap(), MAX_BIN_COUNT);
        assert!(matches!(check_bin_count(0), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            check_bin_count(MAX_BIN_COUNT + 1),
            Err(Error::InvalidArgument(_))
        ));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_bounds_enclose_sample(data in prop::collection::vec(-1e6..1e6f64, 1..200)) {
                let (min, max) = bounds(&data).unwrap();
                prop_assert!(data.iter().all(|&x| min <= x && x <= max));
                prop_assert!(data.contains(&min) && data.contains(&max));
            }

            #[test]
            fn prop_spread_is_shift_invariant(
                data in prop::collection::vec(-100.0..100.0f64, 2..100),
                shift in -1000.0..1000.0f64,
            ) {
                let shifted: Vec<f64> = data.iter().map(|x| x + shift).collect();
                let sd = std_dev(&data).unwrap();
                prop_assert!(sd >= 0.0);
                prop_assert!((std_dev(&shifted).unwrap() - sd).abs() < 1e-6);

                let iqr = interquartile_range(&data).unwrap();
                prop_assert!(iqr >= 0.0);
                prop_assert!((interquartile_range(&shifted).unwrap() - iqr).abs() < 1e-6);
            }
        }
    }
}
