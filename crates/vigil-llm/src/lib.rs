#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Optional paraphrase of agent intent for the vigil gating hook.
//!
//! A local Ollama-style endpoint turns the raw invocation into one short,
//! friendly line for the approver UI. This is never load-bearing: a single
//! bounded attempt is made, and any failure falls back to the rule-based
//! [`fallback_summary`]. The risk decision does not depend on this crate.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use vigil_core::{ToolInvocation, ToolKind};

/// Errors from the paraphrase endpoint.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport or HTTP-level failure (includes timeouts).
    #[error("paraphrase request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with an empty or blank completion.
    #[error("paraphrase response was empty")]
    EmptyResponse,
}

/// Result type for paraphrase operations.
pub type LlmResult<T> = Result<T, LlmError>;

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Client for a local `/api/generate` style completion endpoint.
#[derive(Debug, Clone)]
pub struct Summarizer {
    client: Client,
    url: String,
    model: String,
    timeout: Duration,
}

impl Summarizer {
    /// Create a summarizer for the given endpoint and model.
    #[must_use]
    pub fn new(url: &str, model: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
            model: model.to_string(),
            timeout,
        }
    }

    /// Ask the model for a one-line paraphrase of the invocation.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] when the endpoint is unreachable, times out,
    /// or answers with a blank completion. Callers are expected to fall
    /// back to [`fallback_summary`].
    pub async fn summarize(&self, invocation: &ToolInvocation) -> LlmResult<String> {
        let prompt = format!(
            "Summarize the following tool action in at most 12 words. \
             Output only the summary, nothing else.\nTool: {}\nDetail: {}",
            invocation.tool,
            invocation.detail()
        );
        let body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": { "num_predict": 30, "temperature": 0.1 },
        });

        let response = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let parsed: GenerateResponse = response.json().await?;

        let summary = parsed.response.trim().trim_matches(['"', '\'']).trim();
        if summary.is_empty() {
            debug!("paraphrase endpoint returned a blank completion");
            return Err(LlmError::EmptyResponse);
        }
        Ok(summary.to_string())
    }
}

/// Rule-based summary used whenever the paraphrase endpoint is unavailable.
#[must_use]
pub fn fallback_summary(invocation: &ToolInvocation) -> String {
    match &invocation.tool {
        ToolKind::Bash => {
            let command = invocation.command().unwrap_or_default();
            if command.starts_with("rm ") {
                "delete files or directories".to_string()
            } else if command.starts_with("mkdir") {
                "create a directory".to_string()
            } else if command.contains("git ") {
                "git operation".to_string()
            } else if command.contains("npm ") || command.contains("bun ") {
                "package operation".to_string()
            } else if command.starts_with("curl") {
                "http request".to_string()
            } else {
                "run a shell command".to_string()
            }
        },
        ToolKind::Write => format!(
            "create file: {}",
            invocation.file_name().unwrap_or_default()
        ),
        ToolKind::Edit => format!("edit file: {}", invocation.file_name().unwrap_or_default()),
        tool => format!("run {tool}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    fn bash(cmd: &str) -> ToolInvocation {
        let mut params = Map::new();
        params.insert("command".to_string(), json!(cmd));
        ToolInvocation::new(ToolKind::Bash, params)
    }

    #[test]
    fn test_fallback_shell_shapes() {
        assert_eq!(fallback_summary(&bash("rm -rf x")), "delete files or directories");
        assert_eq!(fallback_summary(&bash("git push")), "git operation");
        assert_eq!(fallback_summary(&bash("npm install")), "package operation");
        assert_eq!(fallback_summary(&bash("curl https://x")), "http request");
        assert_eq!(fallback_summary(&bash("ls")), "run a shell command");
    }

    #[test]
    fn test_fallback_file_tools() {
        let mut params = Map::new();
        params.insert("file_path".to_string(), json!("/a/main.rs"));
        let inv = ToolInvocation::new(ToolKind::Write, params.clone());
        assert_eq!(fallback_summary(&inv), "create file: main.rs");

        let inv = ToolInvocation::new(ToolKind::Edit, params);
        assert_eq!(fallback_summary(&inv), "edit file: main.rs");
    }

    #[test]
    fn test_fallback_other_tool() {
        let inv = ToolInvocation::new(ToolKind::Other("Task".to_string()), Map::new());
        assert_eq!(fallback_summary(&inv), "run Task");
    }

    #[tokio::test]
    async fn test_summarize_unreachable_endpoint_errors() {
        // Port 9 (discard) is essentially guaranteed closed locally.
        let summarizer = Summarizer::new(
            "http://127.0.0.1:9/api/generate",
            "test-model",
            Duration::from_millis(500),
        );
        let result = summarizer.summarize(&bash("ls")).await;
        assert!(result.is_err());
    }
}
