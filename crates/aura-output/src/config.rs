//! Engine configuration.

use std::path::Path;

use aura_ratios::RatioConfig;
use aura_trend::{ConfigError, TrendConfig};
use serde::{Deserialize, Serialize};

/// Settings for one engine run, grouped by stage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ratio computation
    pub ratios: RatioConfig,
    /// Series transforms
    pub trend: TrendConfig,
}

impl EngineConfig {
    /// Parse from TOML text; missing tables and keys take their defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Load from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading engine config");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
