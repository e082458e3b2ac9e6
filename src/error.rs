//! Application error type and its HTTP mapping.

use crate::ports::extractor::ExtractError;
use crate::ports::BoxError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Transcript not found")]
    TranscriptNotFound,

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error("Failed to access the database: {0}")]
    Storage(String),

    #[error("Failed to invoke the language model: {0}")]
    Model(String),

    #[error("Language model returned an unusable reply: {0}")]
    ModelOutput(String),
}

impl ServiceError {
    pub fn storage(err: BoxError) -> Self {
        ServiceError::Storage(err.to_string())
    }

    pub fn model(err: BoxError) -> Self {
        ServiceError::Model(err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::TranscriptNotFound => StatusCode::NOT_FOUND,
            ServiceError::Extraction(e) if e.is_internal() => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Extraction(_) => StatusCode::BAD_REQUEST,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Model(_) | ServiceError::ModelOutput(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", self);
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
