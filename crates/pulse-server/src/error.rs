//! Server error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use pulse_core::PulseError;
use pulse_view::ViewError;

/// A specialized Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Server error type.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Dashboard content failed its load-time checks.
    #[error("Content error: {0}")]
    Content(#[from] PulseError),

    /// Request could not be turned into view events.
    #[error("{0}")]
    View(#[from] ViewError),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the problem.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Creates a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ServerError::View(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response.
#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
