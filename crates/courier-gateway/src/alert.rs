//! Operator error reporting.
//!
//! Handler and store failures are forwarded to a fixed external webhook so
//! operators see them without any detail leaking to the invoking user.
//! Alert delivery is strictly best-effort: a failed report is logged and
//! dropped, never propagated back into dispatch.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

/// Destination for operator-facing error reports.
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Report an error message to the operator channel.
    async fn report(&self, message: &str);
}

/// Posts error reports to a webhook endpoint as a JSON payload.
pub struct WebhookAlertSink {
    url: String,
    client: reqwest::Client,
}

impl WebhookAlertSink {
    /// Build a sink for the given webhook URL.
    ///
    /// Returns `None` if the HTTP client cannot be constructed (TLS init).
    pub fn new(url: impl Into<String>) -> Option<Self> {
        let client = match reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                warn!("failed to build HTTP client for alert webhook: {e}");
                return None;
            }
        };

        Some(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl AlertSink for WebhookAlertSink {
    async fn report(&self, message: &str) {
        let payload = serde_json::json!({
            "content": format!("An error has appeared!\n`{message}`"),
        });

        match self.client.post(&self.url).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("alert delivered");
            }
            Ok(response) => {
                warn!(status = %response.status(), "alert webhook rejected the report");
            }
            Err(e) => {
                warn!("alert webhook delivery failed: {e}");
            }
        }
    }
}

/// Discards all reports. Used when no webhook is configured.
pub struct NullAlertSink;

#[async_trait]
impl AlertSink for NullAlertSink {
    async fn report(&self, message: &str) {
        debug!(report = message, "alert dropped (no sink configured)");
    }
}
