//! Evaluator configuration.
//!
//! Loaded from TOML. Every section is optional and falls back to its
//! defaults, environment overrides are applied last.
//!
//! ```toml
//! [trace]
//! max_value_chars = 120
//! include_inputs = true
//!
//! [logging]
//! default_level = "DEBUG"
//! ```

use crate::logging::config::LogConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Trace rendering settings
    pub trace: TraceConfig,
    /// Logging settings
    pub logging: LogConfig,
}

/// Controls how execution traces are rendered into diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Values rendered longer than this are truncated; 0 disables truncation
    pub max_value_chars: usize,
    /// Render step inputs as well as outputs
    pub include_inputs: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_value_chars: 200,
            include_inputs: true,
        }
    }
}

impl EvaluatorConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text, then apply environment overrides
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: EvaluatorConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(chars) = std::env::var("PIPELINR_TRACE_MAX_VALUE_CHARS") {
            self.trace.max_value_chars = chars
                .parse()
                .map_err(|_| ConfigError::Parse(format!("PIPELINR_TRACE_MAX_VALUE_CHARS: {}", chars)))?;
        }
        self.logging.apply_env_overrides();
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.validate()
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
    #[error("Invalid log level for feature '{0}': {1}")]
    InvalidFeatureLevel(String, String),
}
