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
use crate::lifecycle::{LifecycleEvent, LifecycleStatus};

/// POST /hooks/pre-traffic
///
/// Runs validation before traffic shifts to the new deployment and reports
/// the outcome to the orchestrator. A fault in the report call itself is not
/// guarded; it propagates as a plain 500.
pub async fn pre_traffic_hook(
    State(state): State<Arc<AppState>>,
    Json(event): Json<LifecycleEvent>,
) -> Result<Response> {
    tracing::info!(deployment_id = %event.deployment_id, "Pre-traffic validation started");

    match run_validations(&state).await {
        Ok(()) => {
            tracing::info!("Pre-traffic validation passed");
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
                    message: "Pre-traffic validation completed successfully".to_string(),
                    error: None,
                }),
            )
                .into_response())
        }
        Err(e) => {
            tracing::error!("Pre-traffic validation failed: {}", e);
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
                    message: "Pre-traffic validation failed".to_string(),
                    error: Some(e.to_string()),
                }),
            )
                .into_response())
        }
    }
}

/// Pre-traffic validation steps: health checks, smoke tests against the new
/// version before it receives traffic. Currently empty; failures added here
/// route through the Failed-report path above.
async fn run_validations(_state: &AppState) -> Result<()> {
    Ok(())
}
