//! Error types for the deploy-hooks application

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Outbound HTTP transport error (orchestrator report or endpoint probe)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Lifecycle validation failure
    #[error("Validation error: {0}")]
    Validation(String),

    /// Endpoint probe failure: non-200 status, network fault, or timeout
    #[error("Probe error: {0}")]
    Probe(String),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl IntoResponse for AppError {
    /// Faults that escape a handler still produce a well-formed JSON envelope.
    ///
    /// Hook handlers catch validation and probe faults themselves; what reaches
    /// this impl are the unguarded paths, such as a failing orchestrator
    /// report call.
    fn into_response(self) -> Response {
        tracing::error!("Unhandled handler error: {}", self);
        let body = json!({
            "error": "Internal Server Error",
            "message": self.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
