//! Suggest command implementation

use std::io::Write;

use adapter_loader::CsvLoader;
use catalog_core::suggest;
use infra_config::Settings;

use crate::Result;

/// Run the suggest command, printing the same JSON array `/search` returns.
pub fn run(settings: &Settings, query: &str, limit: Option<usize>, out: &mut impl Write) -> Result<()> {
    let records = CsvLoader::load(&settings.catalog.data_path)?;
    let limit = limit.unwrap_or(settings.catalog.suggestion_limit);
    let hits = suggest(&records, query, limit);

    serde_json::to_writer(&mut *out, &hits)?;
    writeln!(out)?;
    Ok(())
}
