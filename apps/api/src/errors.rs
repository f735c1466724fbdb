use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::preview::PreviewError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Render failure; the message reaches the caller verbatim.
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    /// A newer preview request in the same session replaced this one.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Preview timed out after {0}s")]
    Timeout(u64),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PreviewError> for AppError {
    fn from(err: PreviewError) -> Self {
        match err {
            PreviewError::Generation(msg) => AppError::UnprocessableEntity(msg),
            stopped @ PreviewError::ServiceStopped => AppError::ServiceUnavailable(stopped.to_string()),
            PreviewError::Fingerprint(e) => AppError::Internal(e.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "PREVIEW_GENERATION_FAILED",
                msg.clone(),
            ),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "PREVIEW_SUPERSEDED", msg.clone()),
            AppError::Timeout(_) => {
                tracing::warn!("{self}");
                (StatusCode::GATEWAY_TIMEOUT, "PREVIEW_TIMEOUT", self.to_string())
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::error!("Service unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_UNAVAILABLE",
                    msg.clone(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
