// SPDX-License-Identifier: MIT

//! Configuration module for the deploy-hooks application
//!
//! Loads configuration from environment variables with documented defaults.

use std::time::Duration;


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8080";
    pub const APP_VERSION: &str = "1.0.0";
    pub const STAGE: &str = "unknown";
    pub const PROBE_TIMEOUT_SECONDS: u64 = 5;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const APP_VERSION: &str = "APP_VERSION";
    pub const STAGE: &str = "SERVERLESS_STAGE";
    pub const ENDPOINT_URL: &str = "ENDPOINT_URL";
    pub const ORCHESTRATOR_URL: &str = "ORCHESTRATOR_URL";
    pub const PROBE_TIMEOUT_SECONDS: &str = "PROBE_TIMEOUT_SECONDS";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address for the HTTP server
    pub server_addr: String,
    /// Application version reported by the ping endpoint
    pub app_version: String,
    /// Deployment stage name reported by the ping endpoint
    pub stage: String,
    /// Endpoint probed by the post-traffic hook; absent skips the probe
    pub endpoint_url: Option<String>,
    /// Status API of the deployment orchestrator; absent means reports are
    /// only logged
    pub orchestrator_url: Option<String>,
    /// Upper bound on the whole probe exchange
    pub probe_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            app_version: defaults::APP_VERSION.to_string(),
            stage: defaults::STAGE.to_string(),
            endpoint_url: None,
            orchestrator_url: None,
            probe_timeout: Duration::from_secs(defaults::PROBE_TIMEOUT_SECONDS),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let server_addr = std::env::var(env_vars::SERVER_ADDR)
            .unwrap_or_else(|_| defaults::SERVER_ADDR.to_string());

        let app_version = std::env::var(env_vars::APP_VERSION)
            .unwrap_or_else(|_| defaults::APP_VERSION.to_string());

        let stage =
            std::env::var(env_vars::STAGE).unwrap_or_else(|_| defaults::STAGE.to_string());

        let endpoint_url = std::env::var(env_vars::ENDPOINT_URL).ok();

        let orchestrator_url = std::env::var(env_vars::ORCHESTRATOR_URL).ok();
        if orchestrator_url.is_none() {
            tracing::warn!(
                "No orchestrator URL configured. Lifecycle status reports will only be logged."
            );
        }

        let probe_timeout = std::env::var(env_vars::PROBE_TIMEOUT_SECONDS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(defaults::PROBE_TIMEOUT_SECONDS));

        Config {
            server_addr,
            app_version,
            stage,
            endpoint_url,
            orchestrator_url,
            probe_timeout,
        }
    }
}
