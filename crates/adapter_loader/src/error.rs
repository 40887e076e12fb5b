//! Loader errors.

use catalog_core::REQUIRED_COLUMNS;
use thiserror::Error;

/// Errors that can occur during price list loading.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// No data rows below the header
    #[error("CSV must contain at least one product row")]
    Empty,

    /// Header lacks one or more required columns
    #[error(
        "CSV must contain: {} (missing: {})",
        REQUIRED_COLUMNS.join(", "),
        .0.join(", ")
    )]
    MissingColumns(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_display() {
        let err = LoaderError::MissingColumns(vec!["weight".to_string()]);
        assert_eq!(
            err.to_string(),
            "CSV must contain: ProductName, LastMonthPrice, weight (missing: weight)"
        );
    }

    #[test]
    fn test_file_not_found_display() {
        let err = LoaderError::FileNotFound("data.csv".to_string());
        assert_eq!(err.to_string(), "File not found: data.csv");
    }
}
