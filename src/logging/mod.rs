//! # Logging
//!
//! Thin setup layer over `env_logger`. Library code only ever emits through
//! the `log` facade using the feature macros in [`features`]; installing a
//! logger is up to the embedding binary.

pub mod config;
pub mod features;

use config::{parse_level, LogConfig};
use features::LogFeature;
use once_cell::sync::OnceCell;

/// Set once a logger has been installed
static LOGGER_INSTALLED: OnceCell<()> = OnceCell::new();

pub struct LoggingSystem;

impl LoggingSystem {
    /// Installs `env_logger` with the configured levels. `RUST_LOG`, when
    /// set, takes precedence over the configuration.
    pub fn init_with_config(config: &LogConfig) -> Result<(), LoggingError> {
        config
            .validate()
            .map_err(|e| LoggingError::Config(e.to_string()))?;

        LOGGER_INSTALLED
            .set(())
            .map_err(|_| LoggingError::AlreadyInitialized)?;

        let mut builder = env_logger::Builder::new();
        builder.filter_level(
            parse_level(&config.default_level).map_err(|e| LoggingError::Config(e.to_string()))?,
        );
        for (name, level) in &config.features {
            match LogFeature::from_name(name) {
                Some(feature) => {
                    let filter = parse_level(level)
                        .map_err(|e| LoggingError::Config(e.to_string()))?;
                    builder.filter_module(feature.target(), filter);
                }
                None => log::warn!("Ignoring log level for unknown feature '{}'", name),
            }
        }
        builder.parse_default_env();
        builder
            .try_init()
            .map_err(|e| LoggingError::Install(e.to_string()))?;

        Ok(())
    }
}

/// Logging system errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Logging system already initialized")]
    AlreadyInitialized,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Failed to install logger: {0}")]
    Install(String),
}
