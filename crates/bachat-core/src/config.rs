//! Engine configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. Explicit path from the `BACHAT_CONFIG` environment variable
//! 2. Data dir (~/.local/share/bachat/config.toml)
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

/// Which prediction backend to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Artifact,
    Http,
    Mock,
}

/// Engine configuration, TOML-backed
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory holding the model and codec artifacts
    pub artifacts_dir: PathBuf,
    /// Prediction backend to use
    pub backend: BackendKind,
    /// Model-serving URL (http backend only)
    pub model_host: Option<String>,
    /// Budget for a single prediction call, in seconds
    pub prediction_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from("models"),
            backend: BackendKind::Artifact,
            model_host: None,
            prediction_timeout_secs: 10,
        }
    }
}

impl EngineConfig {
    /// Load config using the standard resolution order
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("BACHAT_CONFIG") {
            let raw = std::fs::read_to_string(&path).map_err(|e| {
                crate::error::Error::Configuration(format!(
                    "config file {} could not be read: {}",
                    path, e
                ))
            })?;
            return Self::from_toml_str(&raw);
        }

        if let Some(path) = Self::data_dir_config() {
            if path.exists() {
                let raw = std::fs::read_to_string(&path)?;
                return Self::from_toml_str(&raw);
            }
        }

        Ok(Self::default())
    }

    /// Parse a TOML config document
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn prediction_timeout(&self) -> Duration {
        Duration::from_secs(self.prediction_timeout_secs)
    }

    /// Platform config path (~/.local/share/bachat/config.toml on Linux)
    fn data_dir_config() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("bachat").join("config.toml"))
    }
}
