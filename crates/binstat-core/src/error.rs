//! Error types for histogram binning
//!
//! Provides a unified error type for all binstat crates.

use thiserror::Error;

/// Core error type for binning and normalization
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid argument provided to an operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A NaN or infinite value was offered as a sample
    #[error("Non-finite sample {value} at index {index}")]
    NonFiniteSample { index: usize, value: f64 },

    /// The operation needs data bounds but no samples are present
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// Insufficient data for the requested statistic
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an operation that needs min/max of an empty sample set
    pub fn empty_dataset(operation: &str) -> Self {
        Self::EmptyDataset(format!("{operation} requires at least one sample"))
    }

    /// Create an error for a layout that would produce zero-width or zero-range bins
    pub fn degenerate(context: &str) -> Self {
        Self::InvalidArgument(format!("degenerate bins: {context}"))
    }

    /// Whether this error was raised by a rejected non-finite sample
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Self::NonFiniteSample { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument("bin count must be at least 1".to_string());
        assert_eq!(err.to_string(), "Invalid argument: bin count must be at least 1");

        let err = Error::NonFiniteSample { index: 3, value: f64::INFINITY };
        assert_eq!(err.to_string(), "Non-finite sample inf at index 3");

        let err = Error::InsufficientData { expected: 2, actual: 1 };
        assert_eq!(err.to_string(), "Insufficient data: expected at least 2 samples, got 1");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_dataset("set_bin_count");
        assert_eq!(
            err.to_string(),
            "Empty dataset: set_bin_count requires at least one sample"
        );

        let err = Error::degenerate("all samples are identical");
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(err.to_string().contains("all samples are identical"));

        assert!(Error::NonFiniteSample { index: 0, value: f64::NAN }.is_non_finite());
        assert!(!err.is_non_finite());
    }

    #[test]
    fn test_error_patterns() {
        fn check_bin_count(n: usize) -> Result<usize> {
            if n == 0 {
                return Err(Error::InvalidArgument(format!("bin count {n} must be at least 1")));
            }
            Ok(n)
        }

        assert!(check_bin_count(0).is_err());
        assert_eq!(check_bin_count(4).unwrap(), 4);
    }
}
