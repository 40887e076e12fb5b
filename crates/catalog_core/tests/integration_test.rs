//! Integration tests for catalog_core module exports and public API.

use catalog_core::prelude::*;
use catalog_core::types::{COLUMN_NAME, COLUMN_PRICE, COLUMN_WEIGHT};

fn price_list() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new("Milk", "50", "1"),
        ProductRecord::new("Chocolate Milk", "65", "1"),
        ProductRecord::new("Bread", "12", "0.5"),
        ProductRecord::new("Mineral Water", "8", "1.5"),
    ]
}

#[test]
fn test_prelude_exports() {
    assert_eq!(DEFAULT_SUGGESTION_LIMIT, 8);
    assert_eq!(REQUIRED_COLUMNS, [COLUMN_NAME, COLUMN_PRICE, COLUMN_WEIGHT]);
    assert_eq!(normalise_query(" Mi "), "mi");
}

#[test]
fn test_every_suggestion_contains_query() {
    let records = price_list();
    for query in ["mi", "MI", "lk", "ater", "ea"] {
        let hits = suggest(&records, query, DEFAULT_SUGGESTION_LIMIT);
        assert!(hits.len() <= DEFAULT_SUGGESTION_LIMIT);
        for hit in hits {
            assert!(
                hit.name.to_lowercase().contains(&query.to_lowercase()),
                "{} does not contain {}",
                hit.name,
                query
            );
        }
    }
}

#[test]
fn test_suggestion_json_matches_wire_shape() {
    let records = vec![ProductRecord::new("Milk", "50", "1")];
    let hits = suggest(&records, "mi", DEFAULT_SUGGESTION_LIMIT);
    let json = serde_json::to_string(&hits).unwrap();
    assert_eq!(
        json,
        r#"[{"ProductName":"Milk","LastMonthPrice":"50","weight":"1"}]"#
    );
}

#[test]
fn test_exact_lookup_and_not_found() {
    let records = price_list();
    let milk = find_exact(&records, "milk").unwrap();
    assert_eq!(milk.name, "Milk");
    assert!(find_exact(&records, "bread ").is_some());
    assert!(find_exact(&records, "butter").is_none());
}
