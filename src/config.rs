//! Pipeline configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the training pipeline.
///
/// Every run parameter lives here with a documented default so tests can
/// override individual fields instead of relying on hard-coded constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Path to the headerless NSL-KDD CSV file
    pub data_path: PathBuf,

    /// Label value treated as benign; every other value becomes an attack
    pub normal_label: String,

    /// Fraction of rows held out for testing
    pub test_fraction: f64,

    /// Seed for the split shuffle and the per-tree RNGs
    pub seed: u64,

    /// Number of trees in the forest
    pub n_estimators: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("KDDTrain+.csv"),
            normal_label: "normal".to_string(),
            test_fraction: 0.2,
            seed: 42,
            n_estimators: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.data_path, PathBuf::from("KDDTrain+.csv"));
        assert_eq!(config.normal_label, "normal");
        assert_eq!(config.test_fraction, 0.2);
        assert_eq!(config.seed, 42);
        assert_eq!(config.n_estimators, 50);
    }

    #[test]
    fn test_config_serialize() {
        let config = PipelineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.seed, config.seed);
    }
}
