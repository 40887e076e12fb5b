//! # catalog_core
//!
//! Product records and name matching for pricecheck.
//!
//! This crate holds the `ProductRecord` type read from the price list and the
//! two scans run against it: the substring scan behind autocomplete and the
//! exact-name lookup behind a submitted search.
//!
//! ## Architecture Position
//!
//! Bottom of the A-I-P-R layering. Depends on nothing but `serde`; the
//! **A**dapter, **I**nfra and **R**untime crates all build on it.
//!
//! ## Example
//!
//! ```
//! use catalog_core::prelude::*;
//!
//! let records = vec![ProductRecord::new("Milk", "50", "1")];
//! let hits = suggest(&records, "mi", DEFAULT_SUGGESTION_LIMIT);
//! assert_eq!(hits.len(), 1);
//! assert!(find_exact(&records, "MILK").is_some());
//! ```

pub mod search;
pub mod types;

pub use search::{find_exact, normalise_query, suggest, DEFAULT_SUGGESTION_LIMIT};
pub use types::{ProductRecord, REQUIRED_COLUMNS};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::search::{find_exact, normalise_query, suggest, DEFAULT_SUGGESTION_LIMIT};
    pub use crate::types::{ProductRecord, REQUIRED_COLUMNS};
}
