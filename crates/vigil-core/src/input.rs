//! Hook input parsing.
//!
//! The agent delivers one JSON document on stdin per hook fire. Malformed or
//! empty input is not an error: the hook simply has nothing to evaluate and
//! terminates silently, so every parse failure here maps to `None`.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;
use tracing::debug;

use crate::invocation::{ToolInvocation, ToolKind};

/// The pre/post tool hook input document.
#[derive(Debug, Clone, Deserialize)]
pub struct HookInput {
    /// Wire name of the tool about to run.
    #[serde(default)]
    pub tool_name: String,
    /// The tool's parameters, passed through untouched.
    #[serde(default)]
    pub tool_input: Map<String, Value>,
    /// Correlation id for this tool use.
    #[serde(default)]
    pub tool_use_id: Option<String>,
    /// The agent session id.
    #[serde(default)]
    pub session_id: Option<String>,
}

impl From<HookInput> for ToolInvocation {
    fn from(input: HookInput) -> Self {
        Self {
            tool: ToolKind::from(input.tool_name),
            params: input.tool_input,
            tool_use_id: input.tool_use_id,
            session_id: input.session_id,
        }
    }
}

/// The task-complete notification input document.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskNotice {
    /// Free-form completion message.
    #[serde(default)]
    pub message: String,
    /// Short title, when the agent provides one.
    #[serde(default)]
    pub title: String,
    /// The agent session id.
    #[serde(default)]
    pub session_id: String,
    /// Correlation id; synthesized from the session when absent.
    #[serde(default)]
    pub tool_use_id: String,
}

impl TaskNotice {
    /// The correlation id to attach to the outbound notification.
    #[must_use]
    pub fn correlation_id(&self) -> String {
        if self.tool_use_id.is_empty() {
            format!("notif-{}", self.session_id)
        } else {
            self.tool_use_id.clone()
        }
    }
}

/// Read and parse a tool-use hook input document.
///
/// Returns `None` for empty, unreadable, or malformed input.
pub fn read_hook_input<R: Read>(mut reader: R) -> Option<ToolInvocation> {
    parse_document::<HookInput, R>(&mut reader).map(ToolInvocation::from)
}

/// Read and parse a task-complete notification document.
///
/// Returns `None` for empty, unreadable, or malformed input.
pub fn read_task_notice<R: Read>(mut reader: R) -> Option<TaskNotice> {
    parse_document::<TaskNotice, R>(&mut reader)
}

fn parse_document<T: serde::de::DeserializeOwned, R: Read>(reader: &mut R) -> Option<T> {
    let mut raw = String::new();
    if let Err(e) = reader.read_to_string(&mut raw) {
        debug!(error = %e, "failed to read hook input");
        return None;
    }
    if raw.trim().is_empty() {
        debug!("empty hook input, nothing to evaluate");
        return None;
    }
    match serde_json::from_str(&raw) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!(error = %e, "malformed hook input, skipping");
            None
        },
    }
}
