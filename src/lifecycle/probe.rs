//! Outbound endpoint probe for the post-traffic hook

use std::time::Duration;

use crate::error::{AppError, Result};

/// Issues a single GET against `url` and collects the full response body.
///
/// Succeeds only if the response status is exactly 200. The timeout bounds the
/// whole exchange, headers and body included; an expired timeout aborts the
/// in-flight request. Network faults, non-200 statuses and timeouts all
/// collapse to [`AppError::Probe`].
pub async fn probe_endpoint(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<String> {
    let exchange = async {
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Probe(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Probe(format!("failed to read response body: {e}")))?;

        if status.as_u16() != 200 {
            return Err(AppError::Probe(format!(
                "endpoint test failed with status {}",
                status.as_u16()
            )));
        }

        Ok(body)
    };

    match tokio::time::timeout(timeout, exchange).await {
        Ok(result) => {
            let body = result?;
            tracing::debug!(url, bytes = body.len(), "Endpoint test successful");
            Ok(body)
        }
        Err(_) => Err(AppError::Probe("request timeout".to_string())),
    }
}
