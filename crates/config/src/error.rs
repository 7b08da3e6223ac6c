//! Configuration error types

use thiserror::Error;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying config source failed to load or deserialize
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A field holds a value outside its valid range
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
