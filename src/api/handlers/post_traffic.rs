use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::HookResponse;
use crate::api::AppState;
use crate::error::Result;
use crate::lifecycle::{LifecycleEvent, LifecycleStatus, probe_endpoint};

/// POST /hooks/post-traffic
///
/// Runs validation after traffic has shifted to the new deployment. When an
/// endpoint URL is configured, a single GET probe of it must return 200 within
/// the configured timeout; any probe fault is treated as a validation failure.
/// Without a configured endpoint the probe is skipped.
pub async fn post_traffic_hook(
    State(state): State<Arc<AppState>>,
    Json(event): Json<LifecycleEvent>,
) -> Result<Response> {
    tracing::info!(deployment_id = %event.deployment_id, "Post-traffic validation started");

    match run_validations(&state).await {
        Ok(()) => {
            tracing::info!("Post-traffic validation passed");
            state
                .reporter
                .put_lifecycle_status(
                    &event.deployment_id,
                    &event.lifecycle_event_hook_execution_id,
                    LifecycleStatus::Succeeded,
                )
                .await?;

            Ok((
                StatusCode::OK,
                Json(HookResponse {
                    message: "Post-traffic validation completed successfully".to_string(),
                    error: None,
                }),
            )
                .into_response())
        }
        Err(e) => {
            tracing::error!("Post-traffic validation failed: {}", e);
            state
                .reporter
                .put_lifecycle_status(
                    &event.deployment_id,
                    &event.lifecycle_event_hook_execution_id,
                    LifecycleStatus::Failed,
                )
                .await?;

            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HookResponse {
                    message: "Post-traffic validation failed".to_string(),
                    error: Some(e.to_string()),
                }),
            )
                .into_response())
        }
    }
}

/// Post-traffic validation steps: integration tests, performance validation
/// against the live deployment. Probes the configured endpoint when present.
async fn run_validations(state: &AppState) -> Result<()> {
    if let Some(url) = &state.config.endpoint_url {
        probe_endpoint(&state.http, url, state.config.probe_timeout).await?;
    }
    Ok(())
}
