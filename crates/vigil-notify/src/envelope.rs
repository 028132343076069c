//! The wire payload sent to the approval front end.

use serde::Serialize;
use serde_json::{Map, Value};

use vigil_core::{RiskLevel, TaskNotice, ToolInvocation};

/// Payload for `POST /api/notify`.
///
/// Absent optional pieces (paraphrase, context) are serialized as empty
/// strings so the front end can treat every field as present.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationEnvelope {
    /// Tool name as it appeared on the hook input.
    pub tool_name: String,
    /// Raw tool parameters, passed through untouched.
    pub tool_input: Map<String, Value>,
    /// One-line human summary shown as the notification body.
    pub summary: String,
    /// Risk tier driving the front end's urgency treatment.
    pub risk_level: RiskLevel,
    /// Short action label, e.g. "push to remote".
    pub risk_action: String,
    /// Longer impact description for the expanded view.
    pub risk_description: String,
    /// Model paraphrase of what the agent is trying to do, or empty.
    pub agent_intent: String,
    /// Quantified impact context (unpushed commits, file counts), or empty.
    pub context: String,
    /// Correlates notify with the later dismiss.
    pub tool_use_id: String,
    /// The agent session this invocation belongs to.
    pub session_id: String,
}

impl NotificationEnvelope {
    /// Envelope for a risk-gated tool invocation.
    #[must_use]
    pub fn for_invocation(
        invocation: &ToolInvocation,
        level: RiskLevel,
        action: &str,
        description: &str,
        summary: String,
    ) -> Self {
        Self {
            tool_name: invocation.tool.to_string(),
            tool_input: invocation.params.clone(),
            summary,
            risk_level: level,
            risk_action: action.to_string(),
            risk_description: description.to_string(),
            agent_intent: String::new(),
            context: String::new(),
            tool_use_id: invocation.tool_use_id.clone().unwrap_or_default(),
            session_id: invocation.session_id.clone().unwrap_or_default(),
        }
    }

    /// Envelope for a task-complete notice (the `done` level).
    #[must_use]
    pub fn for_task_notice(notice: &TaskNotice) -> Self {
        let title = if notice.title.is_empty() {
            "Task complete".to_string()
        } else {
            notice.title.clone()
        };
        Self {
            tool_name: "Notification".to_string(),
            tool_input: Map::new(),
            summary: notice.message.clone(),
            risk_level: RiskLevel::Done,
            risk_action: title,
            risk_description: notice.message.clone(),
            agent_intent: String::new(),
            context: String::new(),
            tool_use_id: notice.correlation_id(),
            session_id: notice.session_id.clone(),
        }
    }

    /// Attach the model paraphrase.
    #[must_use]
    pub fn with_agent_intent(mut self, intent: String) -> Self {
        self.agent_intent = intent;
        self
    }

    /// Attach quantified context.
    #[must_use]
    pub fn with_context(mut self, context: String) -> Self {
        self.context = context;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vigil_core::ToolKind;

    #[test]
    fn test_envelope_serializes_all_fields() {
        let mut params = Map::new();
        params.insert("command".to_string(), json!("git push"));
        let invocation = ToolInvocation {
            tool: ToolKind::Bash,
            params,
            tool_use_id: Some("toolu_01".to_string()),
            session_id: Some("sess_9".to_string()),
        };
        let envelope = NotificationEnvelope::for_invocation(
            &invocation,
            RiskLevel::High,
            "push to remote",
            "publishes local commits",
            "push current branch".to_string(),
        )
        .with_context("2 unpushed commits".to_string());

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["tool_name"], "Bash");
        assert_eq!(value["tool_input"]["command"], "git push");
        assert_eq!(value["risk_level"], "high");
        assert_eq!(value["risk_action"], "push to remote");
        assert_eq!(value["agent_intent"], "");
        assert_eq!(value["context"], "2 unpushed commits");
        assert_eq!(value["tool_use_id"], "toolu_01");
        assert_eq!(value["session_id"], "sess_9");
    }

    #[test]
    fn test_task_notice_envelope_defaults() {
        let notice = TaskNotice {
            message: "All tests pass".to_string(),
            title: String::new(),
            session_id: "sess_9".to_string(),
            tool_use_id: String::new(),
        };
        let envelope = NotificationEnvelope::for_task_notice(&notice);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["tool_name"], "Notification");
        assert_eq!(value["risk_level"], "done");
        assert_eq!(value["risk_action"], "Task complete");
        assert_eq!(value["tool_use_id"], "notif-sess_9");
    }
}
