//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! report to the given writer.

pub mod check;
pub mod lookup;
pub mod suggest;

#[cfg(test)]
pub(crate) mod tests {
    use infra_config::Settings;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Default settings pointed at a temporary price list.
    pub(crate) fn settings_for(csv: &str) -> (NamedTempFile, Settings) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();
        file.flush().unwrap();

        let mut settings = Settings::default();
        settings.catalog.data_path = file.path().to_path_buf();
        (file, settings)
    }
}
