// SPDX-License-Identifier: MIT

//! Deployment lifecycle types and orchestrator status reporting
//!
//! The orchestrator drives traffic shifting between application versions and
//! consumes a two-valued Succeeded/Failed signal from the hook handlers. The
//! reporting client is a trait so tests can substitute a recording
//! implementation.

mod probe;

pub use probe::probe_endpoint;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Event delivered to the pre/post-traffic hooks by the orchestrator.
///
/// Field names are PascalCase on the wire, matching the orchestrator's
/// dispatch format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleEvent {
    #[serde(rename = "DeploymentId")]
    pub deployment_id: String,
    #[serde(rename = "LifecycleEventHookExecutionId")]
    pub lifecycle_event_hook_execution_id: String,
}

/// Two-valued outcome reported back to the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleStatus {
    Succeeded,
    Failed,
}

/// Body of the outbound status report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport<'a> {
    deployment_id: &'a str,
    lifecycle_event_hook_execution_id: &'a str,
    status: LifecycleStatus,
}

/// Client for the orchestrator's lifecycle status API
#[async_trait]
pub trait StatusReporter: Send + Sync {
    /// Reports the outcome of one hook execution. One shot, no retry; a fault
    /// here propagates to the caller.
    async fn put_lifecycle_status(
        &self,
        deployment_id: &str,
        execution_id: &str,
        status: LifecycleStatus,
    ) -> Result<()>;
}

/// Reports status over HTTP to the configured orchestrator URL
pub struct HttpStatusReporter {
    client: reqwest::Client,
    url: String,
}

impl HttpStatusReporter {
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl StatusReporter for HttpStatusReporter {
    async fn put_lifecycle_status(
        &self,
        deployment_id: &str,
        execution_id: &str,
        status: LifecycleStatus,
    ) -> Result<()> {
        let report = StatusReport {
            deployment_id,
            lifecycle_event_hook_execution_id: execution_id,
            status,
        };
        self.client
            .put(&self.url)
            .json(&report)
            .send()
            .await?
            .error_for_status()?;
        tracing::debug!(
            deployment_id,
            execution_id,
            ?status,
            "Reported lifecycle status"
        );
        Ok(())
    }
}

/// Fallback reporter used when no orchestrator URL is configured.
///
/// The service still starts; every report is logged instead of sent.
pub struct LogStatusReporter;

#[async_trait]
impl StatusReporter for LogStatusReporter {
    async fn put_lifecycle_status(
        &self,
        deployment_id: &str,
        execution_id: &str,
        status: LifecycleStatus,
    ) -> Result<()> {
        tracing::warn!(
            deployment_id,
            execution_id,
            ?status,
            "No orchestrator configured, status report dropped"
        );
        Ok(())
    }
}
