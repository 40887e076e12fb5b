//! # infra_config
//!
//! Runtime settings for pricecheck.
//!
//! This crate loads settings from TOML files and `PRICECHECK_` environment
//! variables: where the server listens, which price list it reads, how many
//! suggestions it returns, and how it logs.
//!
//! ## Architecture Position
//!
//! Part of the **I**nfra layer in the A-I-P-R architecture.
//! Must not depend on **A**dapter or **R**untime crates.
//!
//! ## Example
//!
//! ```rust,ignore
//! use infra_config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Reading prices from {}", settings.catalog.data_path.display());
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{CatalogSettings, LogFormat, LoggingSettings, ServerSettings, Settings};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CatalogSettings, ConfigError, LogFormat, LoggingSettings, ServerSettings, Settings,
    };
}
