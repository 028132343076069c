//! The risk classifier.
//!
//! Pure and infallible: a verdict is a function of the invocation and the
//! static rule tables alone. High tier is tested against the full original
//! command text so a dangerous operation buried mid-chain cannot hide
//! behind a benign prefix; medium tier sees only the resolved effective
//! command.

use serde::Serialize;

use vigil_core::{RiskLevel, ToolInvocation, ToolKind};

use crate::compound::resolve_command;
use crate::table::{RiskRule, RuleSet};

/// The outcome of classification.
///
/// A high verdict is never demoted, not even for allow-listed commands:
/// allow-listing only silences `Medium` notifications.
#[derive(Debug, Clone, Serialize)]
pub struct RiskVerdict {
    /// The assigned risk tier.
    pub level: RiskLevel,
    /// Short action label from the matching rule; absent for `Low`.
    pub label: Option<String>,
    /// Impact description from the matching rule; absent for `Low`.
    pub impact: Option<String>,
}

impl RiskVerdict {
    /// The "nothing to report" terminal verdict.
    #[must_use]
    pub fn low() -> Self {
        Self {
            level: RiskLevel::Low,
            label: None,
            impact: None,
        }
    }

    fn from_rule(level: RiskLevel, rule: &RiskRule) -> Self {
        Self {
            level,
            label: Some(rule.label.to_string()),
            impact: Some(rule.impact.to_string()),
        }
    }

    /// Whether this verdict terminates the pipeline silently.
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.level == RiskLevel::Low
    }
}

/// Classifier over an immutable rule set.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    rules: &'static RuleSet,
}

impl Classifier {
    /// Create a classifier over the given static rule set.
    #[must_use]
    pub fn new(rules: &'static RuleSet) -> Self {
        Self { rules }
    }

    /// Classifier over the builtin tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(RuleSet::builtin())
    }

    /// Classify a tool invocation.
    ///
    /// Shell commands are matched against the high tier on the full text,
    /// then the medium tier on the resolved effective command. All other
    /// tools are expected, reversible agent operations and classify `Low`.
    #[must_use]
    pub fn classify(&self, invocation: &ToolInvocation) -> RiskVerdict {
        if invocation.tool != ToolKind::Bash {
            return RiskVerdict::low();
        }
        let Some(command) = invocation.command() else {
            return RiskVerdict::low();
        };

        if let Some(rule) = self.rules.match_high(command) {
            return RiskVerdict::from_rule(RiskLevel::High, rule);
        }

        let effective = resolve_command(command);
        if let Some(rule) = self.rules.match_medium(effective) {
            return RiskVerdict::from_rule(RiskLevel::Medium, rule);
        }

        RiskVerdict::low()
    }
}
