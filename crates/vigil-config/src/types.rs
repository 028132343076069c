//! Configuration struct definitions.
//!
//! Every section implements [`Default`] with the same values as the
//! embedded `defaults.toml`, so a bare `[section]` header in a user file
//! produces a working configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the vigil hook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Approval front end endpoint and auto-start parameters.
    pub approver: ApproverSection,
    /// Optional paraphrase endpoint.
    pub summarizer: SummarizerSection,
    /// Context enrichment bounds.
    pub context: ContextSection,
}

/// Where the approval front end lives and how to start it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproverSection {
    /// Base URL of the approver's local HTTP surface.
    pub url: String,
    /// Approver binary, either an absolute path or a name resolved on PATH.
    pub binary: String,
    /// Health check timeout in milliseconds.
    pub health_timeout_ms: u64,
    /// Notify / dismiss request timeout in seconds.
    pub notify_timeout_secs: u64,
    /// Health polls made after spawning the approver.
    pub start_poll_attempts: u32,
    /// Delay between health polls in milliseconds.
    pub start_poll_interval_ms: u64,
}

impl Default for ApproverSection {
    fn default() -> Self {
        Self {
            url: "http://localhost:19482".to_string(),
            binary: "vigil-approver".to_string(),
            health_timeout_ms: 1000,
            notify_timeout_secs: 5,
            start_poll_attempts: 20,
            start_poll_interval_ms: 200,
        }
    }
}

impl ApproverSection {
    /// Health check timeout as a [`Duration`].
    #[must_use]
    pub fn health_timeout(&self) -> Duration {
        Duration::from_millis(self.health_timeout_ms)
    }

    /// Notify / dismiss timeout as a [`Duration`].
    #[must_use]
    pub fn notify_timeout(&self) -> Duration {
        Duration::from_secs(self.notify_timeout_secs)
    }

    /// Health poll interval as a [`Duration`].
    #[must_use]
    pub fn start_poll_interval(&self) -> Duration {
        Duration::from_millis(self.start_poll_interval_ms)
    }
}

/// The paraphrase endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerSection {
    /// Whether to attempt a model paraphrase at all.
    pub enabled: bool,
    /// Completion endpoint URL.
    pub url: String,
    /// Model name sent with each request.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SummarizerSection {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "http://localhost:11434/api/generate".to_string(),
            model: "qwen2.5:1.5b".to_string(),
            timeout_secs: 3,
        }
    }
}

impl SummarizerSection {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Bounds on context enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextSection {
    /// Whether to gather context at all.
    pub enabled: bool,
    /// Maximum commits listed.
    pub commit_limit: usize,
    /// Maximum deletion targets described.
    pub target_limit: usize,
    /// Maximum uncommitted-change lines listed.
    pub change_limit: usize,
    /// Per-query git subprocess timeout in seconds.
    pub git_timeout_secs: u64,
}

impl Default for ContextSection {
    fn default() -> Self {
        Self {
            enabled: true,
            commit_limit: 5,
            target_limit: 3,
            change_limit: 10,
            git_timeout_secs: 2,
        }
    }
}

impl ContextSection {
    /// Git subprocess timeout as a [`Duration`].
    #[must_use]
    pub fn git_timeout(&self) -> Duration {
        Duration::from_secs(self.git_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_section_headers_use_defaults() {
        let config: Config = toml::from_str("[approver]\n[summarizer]\n[context]\n").unwrap();
        assert_eq!(config.approver.url, "http://localhost:19482");
        assert_eq!(config.summarizer.model, "qwen2.5:1.5b");
        assert_eq!(config.context.commit_limit, 5);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[summarizer]\nenabled = false\n").unwrap();
        assert!(!config.summarizer.enabled);
        assert_eq!(config.summarizer.timeout_secs, 3);
        assert_eq!(config.approver.start_poll_attempts, 20);
    }

    #[test]
    fn test_duration_helpers() {
        let config = Config::default();
        assert_eq!(config.approver.health_timeout(), Duration::from_millis(1000));
        assert_eq!(config.approver.notify_timeout(), Duration::from_secs(5));
        assert_eq!(config.context.git_timeout(), Duration::from_secs(2));
    }
}
