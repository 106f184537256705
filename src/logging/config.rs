//! Configuration for the logging system
//!
//! Loaded as the `[logging]` table of the evaluator configuration, with
//! environment variable overrides applied on top.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default log level for all targets
    pub default_level: String,
    /// Feature-specific log levels, keyed by `LogFeature::name`
    pub features: HashMap<String, String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: "INFO".to_string(),
            features: Self::default_features(),
        }
    }
}

impl LogConfig {
    fn default_features() -> HashMap<String, String> {
        let mut features = HashMap::new();
        features.insert("normalize".to_string(), "INFO".to_string());
        features.insert("validate".to_string(), "INFO".to_string());
        features.insert("evaluate".to_string(), "INFO".to_string());
        features.insert("transform".to_string(), "INFO".to_string());
        features.insert("adapter".to_string(), "WARN".to_string());
        features
    }

    /// Apply environment variable overrides to the configuration
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("PIPELINR_LOG_LEVEL") {
            self.default_level = level.to_uppercase();
        }

        for (key, value) in std::env::vars() {
            if let Some(feature) = key.strip_prefix("PIPELINR_LOG_FEATURE_") {
                self.features
                    .insert(feature.to_lowercase(), value.to_uppercase());
            }
        }
    }

    /// Validate every configured level
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_level(&self.default_level)?;
        for (feature, level) in &self.features {
            parse_level(level)
                .map_err(|_| ConfigError::InvalidFeatureLevel(feature.clone(), level.clone()))?;
        }
        Ok(())
    }
}

/// Parses a level name such as `"DEBUG"` into a filter, ignoring case
pub fn parse_level(level: &str) -> Result<log::LevelFilter, ConfigError> {
    match level.to_uppercase().as_str() {
        "OFF" => Ok(log::LevelFilter::Off),
        "TRACE" => Ok(log::LevelFilter::Trace),
        "DEBUG" => Ok(log::LevelFilter::Debug),
        "INFO" => Ok(log::LevelFilter::Info),
        "WARN" => Ok(log::LevelFilter::Warn),
        "ERROR" => Ok(log::LevelFilter::Error),
        _ => Err(ConfigError::InvalidLevel(level.to_string())),
    }
}
