//! Settings and configuration structures.

use crate::error::ConfigError;
use catalog_core::DEFAULT_SUGGESTION_LIMIT;
use config::{Config, ConfigBuilder, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "PRICECHECK";
const CONFIG_DIR: &str = "config";

/// Main application settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerSettings,
    /// Price list configuration
    #[serde(default)]
    pub catalog: CatalogSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from configuration files and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `PRICECHECK_ENV`)
    /// 3. `explicit`, when given (must exist)
    /// 4. Environment variables such as `PRICECHECK_CATALOG__DATA_PATH`
    pub fn load_with(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from_dir(Path::new(CONFIG_DIR), explicit)
    }

    /// Same layering as [`Settings::load_with`], reading the optional files
    /// from `config_dir` instead of `config/`.
    pub fn load_from_dir(config_dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let env = std::env::var("PRICECHECK_ENV").unwrap_or_else(|_| "development".into());
        let layer = |name: &str| {
            File::with_name(&config_dir.join(name).to_string_lossy()).required(false)
        };

        let mut builder = Config::builder()
            .add_source(layer("default"))
            .add_source(layer(&env));

        if let Some(path) = explicit {
            builder = with_required_file(builder, path)?;
        }

        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Self::build(builder)
    }

    /// Load settings from the default locations and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None)
    }

    /// Load settings from a single file, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::build(with_required_file(Config::builder(), path)?)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check values the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;

        if self.catalog.suggestion_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "catalog.suggestion_limit".into(),
                message: "must be at least 1".into(),
            });
        }

        if self.catalog.data_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "catalog.data_path".into(),
                message: "must not be empty".into(),
            });
        }

        Ok(())
    }
}

fn with_required_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }
    Ok(builder.add_source(File::from(path).required(true)))
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    /// Listen address, `host:port`
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl ServerSettings {
    /// Parse the listen address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen_addr
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                key: "server.listen_addr".into(),
                message: format!("{}: {}", self.listen_addr, e),
            })
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> String {
    "127.0.0.1:5000".to_string()
}

/// Price list configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSettings {
    /// Path to the product CSV
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// Maximum suggestions per query
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data.csv")
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

/// Log output format.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
