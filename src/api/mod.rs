//! HTTP API module for the deploy-hooks service
//!
//! Exposes the ping health check and the two deployment lifecycle hooks.
//!
//! # Endpoints
//! - `GET /ping` — health check with version and stage info
//! - `POST /hooks/pre-traffic` — validation before traffic shift
//! - `POST /hooks/post-traffic` — validation after traffic shift

pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::config::Config;
use crate::lifecycle::StatusReporter;

/// Application state shared with endpoints
pub struct AppState {
    pub config: Config,
    /// Outbound client for the post-traffic probe
    pub http: reqwest::Client,
    /// Orchestrator status client; swapped out in tests
    pub reporter: Arc<dyn StatusReporter>,
}

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping_handler))
        .route("/hooks/pre-traffic", post(handlers::pre_traffic_hook))
        .route("/hooks/post-traffic", post(handlers::post_traffic_hook))
        .with_state(state)
}
