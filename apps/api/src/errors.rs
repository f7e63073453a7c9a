use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::upload::ValidationError;
use crate::extraction::ExtractionError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),

    /// Client-facing message carries only the error kind; the full error (with paths) is logged.
    #[error("Failed to store upload: {}", .0.kind())]
    Storage(std::io::Error),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(e) => {
                tracing::debug!("Rejected request: {e}");
                StatusCode::BAD_REQUEST
            }
            AppError::Multipart(e) => {
                tracing::warn!("Multipart error: {e}");
                e.status()
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Extraction(e) => {
                tracing::error!("Extraction error: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
