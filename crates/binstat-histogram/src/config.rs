//! Serializable binning configuration

use crate::algorithm::{BinLimitsMode, BinningAlgorithm};
use crate::normalization::NormalizationType;
use serde::{Deserialize, Serialize};

/// User-facing histogram settings
///
/// Hosts can persist this between sessions; samples and derived bins are
/// never part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BinningConfig {
    pub algorithm: BinningAlgorithm,
    pub limits_mode: BinLimitsMode,
    pub normalization: NormalizationType,
}

impl BinningConfig {
    /// Create a config with data-derived limits
    pub fn new(algorithm: BinningAlgorithm, normalization: NormalizationType) -> Self {
        Self {
            algorithm,
            normalization,
            ..Self::default()
        }
    }

    /// Set the binning algorithm
    pub fn with_algorithm(mut self, algorithm: BinningAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set whether bin limits follow the data
    pub fn with_limits_mode(mut self, limits_mode: BinLimitsMode) -> Self {
        self.limits_mode = limits_mode;
        self
    }

    /// Set the normalization of reported values
    pub fn with_normalization(mut self, normalization: NormalizationType) -> Self {
        self.normalization = normalization;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BinningConfig::default();
        assert_eq!(config.algorithm, BinningAlgorithm::Auto);
        assert_eq!(config.limits_mode, BinLimitsMode::Auto);
        assert_eq!(config.normalization, NormalizationType::Count);
    }

    #[test]
    fn test_partial_config_from_json() {
        let config: BinningConfig =
            serde_json::from_str(r#"{ "algorithm": "SturgesRule", "normalization": "Cdf" }"#)
                .unwrap();
        assert_eq!(config.algorithm, BinningAlgorithm::SturgesRule);
        assert_eq!(config.limits_mode, BinLimitsMode::Auto);
        assert_eq!(config.normalization, NormalizationType::Cdf);
    }

    #[test]
    fn test_builder_methods() {
        let config = BinningConfig::new(BinningAlgorithm::ScottRule, NormalizationType::Pdf)
            .with_limits_mode(BinLimitsMode::Manual)
            .with_algorithm(BinningAlgorithm::IntegerRule);
        assert_eq!(config.algorithm, BinningAlgorithm::IntegerRule);
        assert_eq!(config.limits_mode, BinLimitsMode::Manual);
        assert_eq!(config.normalization, NormalizationType::Pdf);
    }
}
