//! Game Error Types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Game-specific result type alias
pub type GameResult<T> = Result<T, GameError>;

/// Game-specific error variants
///
/// Each variant maps to a stable HTTP status code. Responses carry a
/// short reason string and nothing else; storage errors are logged in
/// full but never surfaced to the client.
#[derive(Debug, Error)]
pub enum GameError {
    /// Malformed or out-of-range client input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Session not found, already ended, or expired
    #[error("Session not found")]
    SessionNotFound,

    /// Game duration outside the configured bounds (anti-cheat rejection)
    #[error("Invalid game duration: {duration_ms}ms")]
    InvalidDuration { duration_ms: i64 },

    /// No pending proof matches the supplied (session id, token) pair
    #[error("Proof not found")]
    ProofNotFound,

    /// Proof token expired before registration
    #[error("Proof expired")]
    ProofExpired,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GameError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GameError::InvalidRequest(_) | GameError::InvalidDuration { .. } => {
                StatusCode::BAD_REQUEST
            }
            GameError::SessionNotFound | GameError::ProofNotFound => StatusCode::NOT_FOUND,
            GameError::ProofExpired => StatusCode::GONE,
            GameError::Database(_) | GameError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing reason string (no internals leaked)
    pub fn public_message(&self) -> String {
        match self {
            GameError::Database(_) | GameError::Internal(_) => "Storage failure".to_string(),
            other => other.to_string(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GameError::Database(e) => {
                tracing::error!(error = %e, "Game database error");
            }
            GameError::Internal(msg) => {
                tracing::error!(message = %msg, "Game internal error");
            }
            GameError::InvalidDuration { duration_ms } => {
                tracing::warn!(duration_ms, "Rejected game duration");
            }
            _ => {
                tracing::debug!(error = %self, "Game error");
            }
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = Json(json!({ "error": self.public_message() }));
        (status, body).into_response()
    }
}
