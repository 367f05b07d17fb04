//! Error types for finledger-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use finledger_core::CoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error(transparent)]
    Store(#[from] CoreError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(ref e) = self {
            log::error!("Store failure ({}): {}", e.code(), e);
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
