//! Name matching over a loaded price list.
//!
//! Both scans are linear, case-insensitive and preserve file order. Nothing
//! is indexed; callers hand in a freshly loaded slice each time.

mod matching;

pub use matching::{find_exact, normalise_query, suggest, DEFAULT_SUGGESTION_LIMIT};
