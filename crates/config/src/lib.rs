//! Configuration for the loan advisor service.
//!
//! Settings merge TOML files under `config/` with `LOAN_ADVISOR`-prefixed
//! environment variables. The fixed loan product catalog the engine
//! suggests from is declared here as well.

use thiserror::Error;

pub mod catalog;
pub mod settings;

pub use catalog::CatalogConfig;
pub use settings::{load_settings, LlmSettings, ObservabilityConfig, ServerConfig, Settings};

/// Failures while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not parse configuration: {0}")]
    ParseError(String),

    #[error("invalid {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        Self::ParseError(err.to_string())
    }
}
