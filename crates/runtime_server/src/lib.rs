//! # runtime_server
//!
//! Web front end for the pricecheck price list.
//!
//! Serves the search page, the autocomplete endpoint and the confirmation
//! endpoint over Axum. Every request reloads the price list through a
//! `ProductSource`; nothing is kept between requests.
//!
//! ## Architecture Position
//!
//! Part of the **R**untime layer in the A-I-P-R architecture.

pub mod error;
pub mod pages;
pub mod rest;
pub mod telemetry;

use adapter_loader::{CsvProductSource, ProductSource};
use catalog_core::ProductRecord;
use infra_config::Settings;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub use error::ServerError;
pub use rest::create_router;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Where each request loads the price list from
    pub source: Arc<dyn ProductSource>,
    /// Maximum suggestions per autocomplete query
    pub suggestion_limit: usize,
}

impl AppState {
    /// Create new application state
    pub fn new(source: Arc<dyn ProductSource>, suggestion_limit: usize) -> Self {
        Self {
            source,
            suggestion_limit,
        }
    }

    /// Fresh read of the price list, off the async workers.
    pub async fn load_records(&self) -> Result<Vec<ProductRecord>, ServerError> {
        let source = Arc::clone(&self.source);
        let records = tokio::task::spawn_blocking(move || source.load())
            .await
            .map_err(|e| ServerError::Internal(format!("price list load task failed: {}", e)))??;
        debug!(records = records.len(), "price list loaded");
        Ok(records)
    }

    /// State reading the CSV named in `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Arc::new(CsvProductSource::new(&settings.catalog.data_path)),
            settings.catalog.suggestion_limit,
        )
    }
}

/// Run the web server until Ctrl-C.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let addr = settings.server.socket_addr()?;
    let state = Arc::new(AppState::from_settings(settings));

    // Startup probe only; every request reloads on its own.
    match state.load_records().await {
        Ok(records) => info!(source = %state.source.describe(), records = records.len(), "price list readable"),
        Err(e) => warn!(source = %state.source.describe(), error = %e, "price list not loadable yet"),
    }

    let app = create_router(state);

    info!("Starting price checker at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
