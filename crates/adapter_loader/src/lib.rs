//! # adapter_loader
//!
//! Flat file loader for the pricecheck price list.
//!
//! This crate reads the product CSV into `ProductRecord`s, checks that the
//! required columns are present, and exposes the `ProductSource` seam the
//! server loads through. Nothing is cached: each call re-reads the file.
//!
//! ## Architecture Position
//!
//! Part of the **A**dapter layer in the A-I-P-R architecture.
//! Depends only on `catalog_core` (for types).
//!
//! ## Example
//!
//! ```rust,ignore
//! use adapter_loader::CsvLoader;
//!
//! let products = CsvLoader::load("data.csv")?;
//! ```

mod csv_loader;
mod error;
mod source;

pub use csv_loader::CsvLoader;
pub use error::LoaderError;
pub use source::{CsvProductSource, ProductSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CsvLoader, CsvProductSource, LoaderError, ProductSource};
}
