//! Trend transform settings, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading configuration or selecting a mode.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Mode string is not one of the known modes
    #[error("Unknown trend mode '{0}': expected value, yoy, qoq or abnormal")]
    UnknownMode(String),
}

/// Configuration for series transforms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Percent changes strictly beyond ±this value are anomalies (default: 20.0)
    pub anomaly_threshold: f64,
    /// Decimal places percent changes are rounded to (default: 2, at most 15)
    pub precision: u32,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            anomaly_threshold: 20.0,
            precision: 2,
        }
    }
}

impl TrendConfig {
    /// Parse from TOML text; missing keys take their defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Load from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
