//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use thiserror::Error;

use sentinel_core::ScoringError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // Validation errors
    #[error("{0}")]
    ValidationError(String),

    // Scoring errors (carry the underlying cause)
    #[error("{0}")]
    ComputationFailed(String),

    // Reference dataset errors
    #[error("{0}")]
    HistoryUnavailable(String),

    // Generic errors
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, detail) = match &self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str(), None),
            AppError::ComputationFailed(cause) => {
                tracing::error!("Scoring failed: {}", cause);
                (StatusCode::INTERNAL_SERVER_ERROR, "Computation failed", Some(cause.as_str()))
            }
            AppError::HistoryUnavailable(msg) => {
                tracing::warn!("History unavailable: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.as_str(), None)
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", None)
            }
        };

        let mut body = json!({
            "error": error_message,
            "status": status.as_u16()
        });
        if let Some(detail) = detail {
            body["detail"] = json!(detail);
        }

        (status, Json(body)).into_response()
    }
}

impl From<ScoringError> for AppError {
    fn from(err: ScoringError) -> Self {
        match err {
            ScoringError::ComputationFailed(cause) => AppError::ComputationFailed(cause),
            ScoringError::StatsUnavailable(cause) => AppError::HistoryUnavailable(cause),
            other => AppError::InternalError(other.to_string()),
        }
    }
}
