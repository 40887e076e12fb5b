//! Check command implementation
//!
//! Validates the configuration and the price list it points at.

use std::io::Write;

use adapter_loader::CsvLoader;
use catalog_core::REQUIRED_COLUMNS;
use infra_config::Settings;
use tracing::info;

use crate::Result;

/// Run the check command
pub fn run(settings: &Settings, out: &mut impl Write) -> Result<()> {
    info!("Checking configuration and price list");

    settings.validate()?;
    let path = &settings.catalog.data_path;
    let records = CsvLoader::load(path)?;

    writeln!(out, "Price Check")?;
    writeln!(out, "===========")?;
    writeln!(out)?;
    writeln!(out, "Configuration:")?;
    writeln!(out, "  Listen address:   {}", settings.server.listen_addr)?;
    writeln!(out, "  Suggestion limit: {}", settings.catalog.suggestion_limit)?;
    writeln!(out)?;
    writeln!(out, "Price list:")?;
    writeln!(out, "  Path:    {}", path.display())?;
    writeln!(out, "  Columns: {}", REQUIRED_COLUMNS.join(", "))?;
    writeln!(out, "  Records: {}", records.len())?;

    let short = records
        .iter()
        .filter(|r| r.name.is_empty() || r.last_month_price.is_empty() || r.weight.is_empty())
        .count();
    if short > 0 {
        writeln!(out, "  Warning: {} record(s) with empty fields", short)?;
    }
    writeln!(out)?;
    writeln!(out, "All checks passed!")?;

    Ok(())
}
