//! Configuration errors.

use thiserror::Error;

/// Errors raised while assembling [`crate::Settings`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A config file passed with `--config` does not exist
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// A setting parsed but is unusable, e.g. a zero suggestion limit or an
    /// unparsable listen address
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// A layer could not be read or did not deserialise into `Settings`
    #[error("Configuration error: {0}")]
    ConfigCrateError(#[from] config::ConfigError),
}
