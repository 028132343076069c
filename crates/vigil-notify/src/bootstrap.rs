//! Auto-start of the approver process.

use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

use crate::client::ApproverClient;

/// How many health polls to make after spawning the approver.
const START_POLL_ATTEMPTS_DEFAULT: u32 = 20;

/// Delay between health polls.
const START_POLL_INTERVAL_DEFAULT: Duration = Duration::from_millis(200);

/// Start parameters for [`ensure_running`].
#[derive(Debug, Clone)]
pub struct StartOptions {
    /// Health polls made after spawning, before giving up.
    pub poll_attempts: u32,
    /// Delay between health polls.
    pub poll_interval: Duration,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            poll_attempts: START_POLL_ATTEMPTS_DEFAULT,
            poll_interval: START_POLL_INTERVAL_DEFAULT,
        }
    }
}

/// Make sure the approver is up, spawning it if needed.
///
/// Returns `true` when the approver answers its health endpoint after the
/// attempt. Every failure mode (binary missing, spawn failure, never
/// becoming healthy) is logged and reported as `false`; callers proceed
/// regardless, since notification delivery is best-effort.
pub async fn ensure_running(
    client: &ApproverClient,
    binary: &Path,
    options: &StartOptions,
) -> bool {
    if client.health().await {
        return true;
    }

    if !binary.is_file() {
        warn!(binary = %binary.display(), "approver binary not found");
        return false;
    }

    let spawned = std::process::Command::new(binary)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn();
    if let Err(e) = spawned {
        warn!(binary = %binary.display(), error = %e, "failed to start approver");
        return false;
    }
    debug!(binary = %binary.display(), "approver spawned, waiting for health");

    for _ in 0..options.poll_attempts {
        tokio::time::sleep(options.poll_interval).await;
        if client.health().await {
            return true;
        }
    }

    warn!("approver started but never answered its health endpoint");
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_reports_not_running() {
        let client = ApproverClient::new(
            "http://127.0.0.1:9/",
            Duration::from_millis(200),
            Duration::from_millis(200),
        );
        let options = StartOptions {
            poll_attempts: 1,
            poll_interval: Duration::from_millis(10),
        };
        let up = ensure_running(
            &client,
            Path::new("/definitely/not/a/real/approver"),
            &options,
        )
        .await;
        assert!(!up);
    }
}
