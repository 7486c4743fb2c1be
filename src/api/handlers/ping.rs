use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;
use crate::error::Result;

/// Ping endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    pub message: String,
    pub timestamp: String,
    pub version: String,
    pub environment: String,
    pub request_id: String,
}

/// GET /ping
///
/// Health check returning the service version, deployment stage, call
/// timestamp and the caller's request id ("local" when none was supplied).
/// Responses always carry permissive CORS headers.
pub async fn ping_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("local")
        .to_string();

    match build_ping_body(&state, request_id) {
        Ok(body) => {
            tracing::info!("Ping response: {}", body);
            (
                StatusCode::OK,
                [
                    ("Content-Type", "application/json"),
                    ("Access-Control-Allow-Origin", "*"),
                    ("Access-Control-Allow-Headers", "Content-Type"),
                    ("Access-Control-Allow-Methods", "GET, OPTIONS"),
                ],
                body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Error in ping handler: {}", e);
            let body = serde_json::json!({
                "error": "Internal Server Error",
                "message": "Failed to process ping request",
                "timestamp": Utc::now().to_rfc3339(),
            });
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [
                    ("Content-Type", "application/json"),
                    ("Access-Control-Allow-Origin", "*"),
                ],
                body.to_string(),
            )
                .into_response()
        }
    }
}

fn build_ping_body(state: &AppState, request_id: String) -> Result<String> {
    let response = PingResponse {
        message: format!("ping v{}", env!("CARGO_PKG_VERSION")),
        timestamp: Utc::now().to_rfc3339(),
        version: state.config.app_version.clone(),
        environment: state.config.stage.clone(),
        request_id,
    };

    Ok(serde_json::to_string(&response)?)
}
