//! Lookup command implementation
//!
//! Exact, case-insensitive lookup of one product by name.

use std::io::Write;

use adapter_loader::CsvLoader;
use catalog_core::find_exact;
use infra_config::Settings;

use crate::{CliError, Result};

/// Run the lookup command, printing the record as JSON.
pub fn run(settings: &Settings, name: &str, out: &mut impl Write) -> Result<()> {
    let records = CsvLoader::load(&settings.catalog.data_path)?;
    let product = find_exact(&records, name).ok_or_else(|| CliError::NotFound(name.to_string()))?;

    serde_json::to_writer_pretty(&mut *out, product)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::settings_for;

    #[test]
    fn test_lookup_found() {
        let (_file, settings) = settings_for("ProductName,LastMonthPrice,weight\nMilk,50,1\n");
        let mut out = Vec::new();
        run(&settings, "MILK", &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["ProductName"], "Milk");
        assert_eq!(json["LastMonthPrice"], "50");
    }

    #[test]
    fn test_lookup_not_found() {
        let (_file, settings) = settings_for("ProductName,LastMonthPrice,weight\nMilk,50,1\n");
        let err = run(&settings, "bread", &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, CliError::NotFound(ref n) if n == "bread"));
    }
}
