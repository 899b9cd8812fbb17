//! Configuration for the observation processor.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for dataset loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Path to the observation CSV.
    pub dataset_path: PathBuf,

    /// Optional path to a render style JSON file.
    pub style_path: Option<PathBuf>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("full_ndvi_weather.csv"),
            style_path: None,
        }
    }
}

impl ProcessorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("DATASET_PATH") {
            config.dataset_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("STYLE_PATH") {
            config.style_path = Some(PathBuf::from(val));
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.dataset_path.as_os_str().is_empty() {
            return Err("dataset_path must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        let config = ProcessorConfig::default();
        config.validate().unwrap();
        assert_eq!(config.dataset_path, PathBuf::from("full_ndvi_weather.csv"));
        assert!(config.style_path.is_none());
    }

    #[test]
    fn test_empty_path_rejected() {
        let config = ProcessorConfig {
            dataset_path: PathBuf::new(),
            style_path: None,
        };
        assert!(config.validate().is_err());
    }
}
