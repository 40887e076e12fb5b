//! HTTP routes (Axum)

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::AppState;

mod handlers;

/// Create the HTTP router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Search page and submission
        .route("/", get(handlers::home).post(handlers::search))
        // Autocomplete
        .route("/search", get(handlers::suggest_products))
        .route("/confirm", post(handlers::confirm))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
