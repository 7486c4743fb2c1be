// SPDX-License-Identifier: MIT

//! # Deploy Hooks
//!
//! Stateless HTTP handlers for a deployment pipeline: a ping health check and
//! the pre/post-traffic lifecycle hooks that report Succeeded/Failed back to
//! the deployment orchestrator.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `config`: configuration management
//! - `error`: error types
//! - `lifecycle`: lifecycle event types, status reporting, endpoint probe
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
mod lifecycle;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Hook response body (public for tests)
pub use api::handlers::HookResponse;

/// Lifecycle event types and status reporting
pub use lifecycle::{
    HttpStatusReporter, LifecycleEvent, LifecycleStatus, LogStatusReporter, StatusReporter,
    probe_endpoint,
};
