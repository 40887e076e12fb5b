//! Substring suggestions and exact lookup.

use crate::types::ProductRecord;

/// Maximum number of suggestions returned for one query.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Trim surrounding whitespace and lower-case a user-supplied name or query.
pub fn normalise_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Records whose name contains `query`, ignoring case.
///
/// The query is normalised first. At most `limit` records are returned, in
/// the order they appear in `records`. An empty query matches everything.
///
/// # Examples
/// ```
/// use catalog_core::{suggest, ProductRecord};
///
/// let records = vec![
///     ProductRecord::new("Milk", "50", "1"),
///     ProductRecord::new("Bread", "12", "0.5"),
///     ProductRecord::new("Almond Milk", "80", "1"),
/// ];
/// let names: Vec<_> = suggest(&records, " MILK ", 8).iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(names, ["Milk", "Almond Milk"]);
/// ```
pub fn suggest<'a>(records: &'a [ProductRecord], query: &str, limit: usize) -> Vec<&'a ProductRecord> {
    let needle = normalise_query(query);
    records
        .iter()
        .filter(|record| record.folded_name().contains(&needle))
        .take(limit)
        .collect()
}

/// First record whose name equals `name`, ignoring case and surrounding
/// whitespace in `name`.
pub fn find_exact<'a>(records: &'a [ProductRecord], name: &str) -> Option<&'a ProductRecord> {
    let wanted = normalise_query(name);
    records.iter().find(|record| record.folded_name() == wanted)
}
