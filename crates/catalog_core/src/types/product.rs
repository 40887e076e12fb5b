//! Product record read from the price list.

use serde::Serialize;
use std::collections::BTreeMap;

/// Header of the product name column.
pub const COLUMN_NAME: &str = "ProductName";
/// Header of the last month's price column.
pub const COLUMN_PRICE: &str = "LastMonthPrice";
/// Header of the weight column.
pub const COLUMN_WEIGHT: &str = "weight";

/// Columns every price list must carry, in display order.
pub const REQUIRED_COLUMNS: [&str; 3] = [COLUMN_NAME, COLUMN_PRICE, COLUMN_WEIGHT];

/// One row of the price list.
///
/// Price and weight stay as the text found in the file; nothing here parses
/// them as numbers. Columns beyond the required three are kept in `extra`
/// and never serialised.
///
/// # Examples
/// ```
/// use catalog_core::types::ProductRecord;
///
/// let milk = ProductRecord::new("Milk", "50", "1");
/// let json = serde_json::to_string(&milk).unwrap();
/// assert_eq!(json, r#"{"ProductName":"Milk","LastMonthPrice":"50","weight":"1"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    /// Product name as written in the file
    #[serde(rename = "ProductName")]
    pub name: String,
    /// Last month's price, uninterpreted
    #[serde(rename = "LastMonthPrice")]
    pub last_month_price: String,
    /// Weight, uninterpreted
    #[serde(rename = "weight")]
    pub weight: String,
    /// Any further columns, keyed by header
    #[serde(skip)]
    pub extra: BTreeMap<String, String>,
}

impl ProductRecord {
    /// Create a record with no extra columns.
    pub fn new(
        name: impl Into<String>,
        last_month_price: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            last_month_price: last_month_price.into(),
            weight: weight.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Attach an extra column value.
    pub fn with_extra(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(column.into(), value.into());
        self
    }

    /// Lower-cased name used by both matching scans.
    pub fn folded_name(&self) -> String {
        self.name.to_lowercase()
    }
}
