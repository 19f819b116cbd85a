//! Error types for configuration validation and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("invalid config value for `{field}`: {hint}")]
    InvalidValue { field: String, hint: String },

    // Parse or type errors surfaced by figment while extracting
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),
}
