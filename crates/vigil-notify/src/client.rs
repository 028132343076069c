//! HTTP client for the approver's local endpoints.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::envelope::NotificationEnvelope;

/// Errors from approver communication.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Transport failure or timeout reaching the approver.
    #[error("approver request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for approver operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Client for the approval front end's local HTTP surface.
#[derive(Debug, Clone)]
pub struct ApproverClient {
    client: Client,
    base_url: String,
    health_timeout: Duration,
    notify_timeout: Duration,
}

impl ApproverClient {
    /// Create a client for an approver at `base_url`
    /// (e.g. `http://localhost:19482`).
    #[must_use]
    pub fn new(base_url: &str, health_timeout: Duration, notify_timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            health_timeout,
            notify_timeout,
        }
    }

    /// The approver base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Deliver a notification envelope.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] when the approver is unreachable, times
    /// out, or answers with a non-success status.
    pub async fn notify(&self, envelope: &NotificationEnvelope) -> NotifyResult<()> {
        self.client
            .post(format!("{}/api/notify", self.base_url))
            .timeout(self.notify_timeout)
            .json(envelope)
            .send()
            .await?
            .error_for_status()?;
        debug!(tool_use_id = %envelope.tool_use_id, "notification delivered");
        Ok(())
    }

    /// Tell the approver to close the notification for `tool_use_id`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] on transport failure or a non-success
    /// status.
    pub async fn dismiss(&self, tool_use_id: &str) -> NotifyResult<()> {
        let body = serde_json::json!({ "tool_use_id": tool_use_id });
        self.client
            .post(format!("{}/api/dismiss", self.base_url))
            .timeout(self.notify_timeout)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        debug!(tool_use_id, "dismiss delivered");
        Ok(())
    }

    /// Whether the approver answers its health endpoint.
    pub async fn health(&self) -> bool {
        let result = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .timeout(self.health_timeout)
            .send()
            .await;
        match result {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "approver health check failed");
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_client() -> ApproverClient {
        // Port 9 (discard) is essentially guaranteed closed locally.
        ApproverClient::new(
            "http://127.0.0.1:9/",
            Duration::from_millis(300),
            Duration::from_millis(300),
        )
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        assert_eq!(unreachable_client().base_url(), "http://127.0.0.1:9");
    }

    #[tokio::test]
    async fn test_health_false_when_down() {
        assert!(!unreachable_client().health().await);
    }

    #[tokio::test]
    async fn test_dismiss_errors_when_down() {
        assert!(unreachable_client().dismiss("toolu_01").await.is_err());
    }
}
