use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractError;
use crate::video::{PollError, SubmitError};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Validation failures block an external call from being attempted at all;
/// the remaining variants each wrap the failure of one external collaborator.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Submission error: {0}")]
    Submit(#[from] SubmitError),

    #[error("Status check error: {0}")]
    Poll(#[from] PollError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Extract(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACT_ERROR",
                format!("Error processing PDF: {e}"),
            ),
            AppError::Generation(msg) => {
                tracing::error!("Script generation error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_ERROR",
                    msg.clone(),
                )
            }
            AppError::Submit(e) => {
                tracing::error!("Video submission error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SUBMIT_ERROR",
                    e.to_string(),
                )
            }
            AppError::Poll(e) => {
                tracing::error!("Status check error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "POLL_ERROR",
                    e.to_string(),
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
