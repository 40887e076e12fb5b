//! CLI error types

use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] infra_config::ConfigError),

    /// Price list could not be loaded
    #[error("Price list error: {0}")]
    Loader(#[from] adapter_loader::LoaderError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No product with the given name
    #[error("Product not found: {0}")]
    NotFound(String),
}
