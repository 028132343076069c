//! The pure decision core.
//!
//! Everything that determines *whether* to notify lives here. The allow
//! list is taken lazily so its filesystem walk runs only when a verdict
//! actually consults it; the orchestration in `commands::pre_tool` only
//! acts on the result.

use vigil_core::{RiskLevel, ToolInvocation};
use vigil_rules::{Classifier, RiskVerdict};
use vigil_settings::AllowList;

/// What the hook should do about an invocation.
#[derive(Debug, Clone)]
pub(crate) enum Decision {
    /// Nothing to report; the hook exits without side effects.
    Silent,
    /// The approver should be shown this verdict.
    Notify(RiskVerdict),
}

impl Decision {
    /// Whether this decision produces no notification.
    #[must_use]
    pub(crate) fn is_silent(&self) -> bool {
        matches!(self, Self::Silent)
    }
}

/// Combine classification with the allow list.
///
/// Low verdicts are silent without ever loading the allow list. Medium
/// verdicts are silenced when [`AllowList::preauthorizes`] accepts the
/// invocation. High verdicts always notify; no allow entry can demote them.
#[must_use]
pub(crate) fn decide(
    invocation: &ToolInvocation,
    classifier: Classifier,
    allow: impl FnOnce() -> AllowList,
) -> Decision {
    let verdict = classifier.classify(invocation);
    match verdict.level {
        RiskLevel::Low => Decision::Silent,
        RiskLevel::Medium => {
            if allow().preauthorizes(invocation) {
                Decision::Silent
            } else {
                Decision::Notify(verdict)
            }
        },
        RiskLevel::High | RiskLevel::Done => Decision::Notify(verdict),
    }
}
