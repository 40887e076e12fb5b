//! Record sources the server loads through.

use crate::csv_loader::CsvLoader;
use crate::error::LoaderError;
use catalog_core::ProductRecord;
use std::path::{Path, PathBuf};

/// Anything that yields a fresh price list on every call.
///
/// Implementations must not cache: two calls may observe different file
/// contents.
pub trait ProductSource: Send + Sync {
    /// Load all records, in source order.
    fn load(&self) -> Result<Vec<ProductRecord>, LoaderError>;

    /// Human-readable name of the source for logs.
    fn describe(&self) -> String;
}

/// Price list backed by a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvProductSource {
    path: PathBuf,
}

impl CsvProductSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductSource for CsvProductSource {
    fn load(&self) -> Result<Vec<ProductRecord>, LoaderError> {
        CsvLoader::load(&self.path)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}
