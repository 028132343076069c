//! Risk classification levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk level attached to a tool invocation.
///
/// `Low`, `Medium` and `High` are produced by classification. `Done` is
/// never a classification outcome: it is the pass-through level carried by
/// the task-complete notification so the approver can render it differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Read-only or otherwise expected operation - nothing to report.
    Low,
    /// State-changing but typically recoverable - notify unless pre-authorized.
    Medium,
    /// Irreversible or externally visible - always notify.
    High,
    /// Task-complete signal, forwarded unchanged to the approver.
    Done,
}

impl RiskLevel {
    /// Whether this level warrants a notification before pre-authorization
    /// is consulted.
    #[must_use]
    pub fn is_notifiable(self) -> bool {
        matches!(self, Self::Medium | Self::High | Self::Done)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Done => write!(f, "done"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
        let level: RiskLevel = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(level, RiskLevel::Done);
    }

    #[test]
    fn test_notifiable() {
        assert!(!RiskLevel::Low.is_notifiable());
        assert!(RiskLevel::Medium.is_notifiable());
        assert!(RiskLevel::High.is_notifiable());
    }
}
