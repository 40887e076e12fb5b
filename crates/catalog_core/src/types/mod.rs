//! Core data types.

mod product;

pub use product::{ProductRecord, COLUMN_NAME, COLUMN_PRICE, COLUMN_WEIGHT, REQUIRED_COLUMNS};
