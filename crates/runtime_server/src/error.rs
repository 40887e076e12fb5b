//! Server error types

use adapter_loader::LoaderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

/// Server-specific errors
#[derive(Error, Debug)]
pub enum ServerError {
    /// Price list could not be loaded or failed validation
    #[error(transparent)]
    Load(#[from] LoaderError),

    /// Required form field absent
    #[error("missing form field '{0}'")]
    MissingField(&'static str),

    /// Search form body could not be read or lacked the product name
    #[error("invalid search form: {0}")]
    InvalidSearchForm(String),

    /// Internal error
    #[error("{0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Load(_) | ServerError::InvalidSearchForm(_) | ServerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServerError::MissingField(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }

        (status, format!("Error: {}", self)).into_response()
    }
}
