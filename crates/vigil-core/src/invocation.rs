//! Tool invocation types - the unit under evaluation.
//!
//! A [`ToolInvocation`] is constructed once per decision cycle from the
//! agent's hook input and discarded after the decision is made. It is never
//! mutated.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::utils::truncate;

/// Maximum characters of command/parameter text included in summaries.
const DETAIL_MAX_CHARS: usize = 200;

/// The category of tool the agent is about to use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToolKind {
    /// Shell command execution.
    Bash,
    /// Edit of an existing file.
    Edit,
    /// Creation of a new file.
    Write,
    /// Fetch of a remote URL.
    WebFetch,
    /// Web search query.
    WebSearch,
    /// Any tool name not covered above; the original name is preserved.
    Other(String),
}

impl ToolKind {
    /// The tool's wire name, as it appears in hook input and allow-list
    /// entries.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Bash => "Bash",
            Self::Edit => "Edit",
            Self::Write => "Write",
            Self::WebFetch => "WebFetch",
            Self::WebSearch => "WebSearch",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for ToolKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Bash" => Self::Bash,
            "Edit" => Self::Edit,
            "Write" => Self::Write,
            "WebFetch" => Self::WebFetch,
            "WebSearch" => Self::WebSearch,
            _ => Self::Other(name),
        }
    }
}

impl From<ToolKind> for String {
    fn from(kind: ToolKind) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single tool invocation under evaluation.
///
/// Immutable; constructed once per decision cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// The tool being invoked.
    pub tool: ToolKind,
    /// The tool's raw parameters, forwarded verbatim to the approver.
    pub params: Map<String, Value>,
    /// Correlation id for this specific tool use, used later to dismiss
    /// the matching notification.
    pub tool_use_id: Option<String>,
    /// The agent session this invocation belongs to.
    pub session_id: Option<String>,
}

impl ToolInvocation {
    /// Create an invocation with no correlation identifiers.
    #[must_use]
    pub fn new(tool: ToolKind, params: Map<String, Value>) -> Self {
        Self {
            tool,
            params,
            tool_use_id: None,
            session_id: None,
        }
    }

    /// The shell command text, when this is a `Bash` invocation.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        self.str_param("command")
    }

    /// The target file path, for file tools.
    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        self.str_param("file_path")
    }

    /// The target URL, for web tools.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.str_param("url")
    }

    /// The final component of [`Self::file_path`], for display.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        let path = self.file_path()?;
        Some(path.rsplit('/').next().unwrap_or(path))
    }

    /// A short human-readable description of the parameters, capped at a
    /// fixed length for display and paraphrase prompts.
    #[must_use]
    pub fn detail(&self) -> String {
        match self.tool {
            ToolKind::Bash => truncate(self.command().unwrap_or_default(), DETAIL_MAX_CHARS).to_string(),
            ToolKind::Write => self.file_path().unwrap_or_default().to_string(),
            ToolKind::Edit => {
                let path = self.file_path().unwrap_or_default();
                match self.str_param("old_string") {
                    Some(old) => format!("{path} ({}...)", truncate(old, 80)),
                    None => path.to_string(),
                }
            },
            _ => {
                let raw = Value::Object(self.params.clone()).to_string();
                truncate(&raw, DETAIL_MAX_CHARS).to_string()
            },
        }
    }

    fn str_param(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }
}
