//! Request handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Query, State},
    response::Html,
    Form, Json,
};
use catalog_core::{find_exact, suggest, ProductRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ServerError;
use crate::pages::{self, SearchOutcome};
use crate::AppState;

const PRODUCT_FIELD: &str = "product_name";

/// Form posted by the search box and the Confirm button.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    product_name: Option<String>,
}

/// Name of the autocomplete query parameter.
const QUERY_PARAM: &str = "q";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn home() -> Html<String> {
    Html(pages::render(&SearchOutcome::Idle))
}

/// Exact lookup of a submitted name. Any failure, including a malformed
/// form, is reported as a server error.
pub async fn search(
    State(state): State<Arc<AppState>>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<Html<String>, ServerError> {
    let Form(form) = form.map_err(|e| ServerError::InvalidSearchForm(e.body_text()))?;
    let name = form.product_name.ok_or_else(|| {
        ServerError::InvalidSearchForm(format!("missing form field '{}'", PRODUCT_FIELD))
    })?;

    let records = state.load_records().await?;
    let outcome = match find_exact(&records, &name) {
        Some(product) => {
            info!(query = %name, product = %product.name, "product found");
            SearchOutcome::Found(product)
        }
        None => {
            info!(query = %name, "product not found");
            SearchOutcome::NotFound
        }
    };

    Ok(Html(pages::render(&outcome)))
}

/// Autocomplete. A repeated `q` uses its first value; a missing one is the
/// empty query.
pub async fn suggest_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<ProductRecord>>, ServerError> {
    let query = params
        .into_iter()
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value)
        .unwrap_or_default();

    let records = state.load_records().await?;
    let hits: Vec<ProductRecord> = suggest(&records, &query, state.suggestion_limit)
        .into_iter()
        .cloned()
        .collect();
    debug!(query = %query, hits = hits.len(), "suggestions");
    Ok(Json(hits))
}

/// Echo the submitted name back unchanged.
pub async fn confirm(
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<String, ServerError> {
    let name = form
        .ok()
        .and_then(|Form(form)| form.product_name)
        .ok_or(ServerError::MissingField(PRODUCT_FIELD))?;

    info!(product = %name, "confirmation received");
    Ok(format!("Confirmation received for: {}", name))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
