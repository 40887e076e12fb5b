//! CSV file loader.

use crate::error::LoaderError;
use catalog_core::types::{COLUMN_NAME, COLUMN_PRICE, COLUMN_WEIGHT};
use catalog_core::{ProductRecord, REQUIRED_COLUMNS};
use csv::{ReaderBuilder, StringRecord};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

const UTF8_BOM: char = '\u{feff}';

/// CSV file loader for the product price list.
pub struct CsvLoader;

impl CsvLoader {
    /// Load product records from a CSV file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    ///
    /// # Returns
    ///
    /// The records in file order, or an error if the file is missing,
    /// unreadable, empty, or lacks a required column.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<ProductRecord>, LoaderError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoaderError::FileNotFound(path.display().to_string()));
        }

        let text = std::fs::read_to_string(path)?;
        let records = Self::parse(&text)?;
        debug!(path = %path.display(), records = records.len(), "loaded price list");
        Ok(records)
    }

    /// Parse product records from CSV text.
    ///
    /// A leading byte-order mark is dropped and spaces directly after a
    /// delimiter are skipped, so ` "1,5"` still reads as one quoted field.
    /// Only the header is checked for
    /// the required columns; a later row that is too short gets empty text
    /// for the fields it lacks.
    pub fn parse(text: &str) -> Result<Vec<ProductRecord>, LoaderError> {
        let text = skip_initial_space(text.strip_prefix(UTF8_BOM).unwrap_or(text));
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let rows = reader.records().collect::<Result<Vec<_>, _>>()?;
        if rows.is_empty() {
            return Err(LoaderError::Empty);
        }

        let layout = ColumnLayout::resolve(&headers)?;
        Ok(rows.iter().map(|row| layout.record(&headers, row)).collect())
    }
}

/// Drop spaces that follow a delimiter outside quotes.
///
/// Runs before the `csv` reader sees the text, so a quoted field preceded by
/// a space keeps its embedded delimiters.
fn skip_initial_space(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_quotes = false;
    let mut after_delimiter = false;

    for ch in text.chars() {
        if after_delimiter && ch == ' ' {
            continue;
        }
        after_delimiter = false;

        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => after_delimiter = true,
            _ => {}
        }
        out.push(ch);
    }
    out
}

/// Positions of the required columns within the header.
struct ColumnLayout {
    name: usize,
    price: usize,
    weight: usize,
}

impl ColumnLayout {
    fn resolve(headers: &[String]) -> Result<Self, LoaderError> {
        let position = |column: &str| headers.iter().position(|h| h == column);

        match (position(COLUMN_NAME), position(COLUMN_PRICE), position(COLUMN_WEIGHT)) {
            (Some(name), Some(price), Some(weight)) => Ok(Self {
                name,
                price,
                weight,
            }),
            _ => Err(LoaderError::MissingColumns(
                REQUIRED_COLUMNS
                    .iter()
                    .filter(|&&column| position(column).is_none())
                    .map(|column| column.to_string())
                    .collect(),
            )),
        }
    }

    fn record(&self, headers: &[String], row: &StringRecord) -> ProductRecord {
        let field = |idx: usize| row.get(idx).map(|v| v.to_string());

        if row.len() <= self.name.max(self.price).max(self.weight) {
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            warn!(line, fields = row.len(), "short row in price list, missing fields left empty");
        }

        let extra: BTreeMap<String, String> = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| ![self.name, self.price, self.weight].contains(idx))
            .filter_map(|(idx, header)| field(idx).map(|value| (header.clone(), value)))
            .collect();

        ProductRecord {
            name: field(self.name).unwrap_or_default(),
            last_month_price: field(self.price).unwrap_or_default(),
            weight: field(self.weight).unwrap_or_default(),
            extra,
        }
    }
}
