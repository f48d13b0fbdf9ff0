//! Error types for the interactions endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Request-level errors. Each maps to a fixed plain-text response.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("bad request signature")]
    Unauthorized,

    #[error("invalid interaction payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Unhandled")]
    Unhandled,
}

impl IntoResponse for BotError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            BotError::Unauthorized => (StatusCode::UNAUTHORIZED, "bad request signature"),
            BotError::InvalidPayload(_) => (StatusCode::BAD_REQUEST, "invalid interaction payload"),
            BotError::Unhandled => (StatusCode::BAD_REQUEST, "Unhandled"),
        };

        (status, body).into_response()
    }
}
