//! The pre-tool gate.
//!
//! Stage order is fixed: parse, classify + allow-list, approver bootstrap,
//! paraphrase, context, dispatch. Every stage may short-circuit to a silent
//! exit; no stage may fail the hook.

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, warn};

use vigil_config::Config;
use vigil_context::{EnrichOptions, enrich};
use vigil_core::read_hook_input;
use vigil_llm::{Summarizer, fallback_summary};
use vigil_notify::{NotificationEnvelope, StartOptions, ensure_running};
use vigil_rules::Classifier;
use vigil_settings::AllowList;

use crate::decision::{Decision, decide};

use super::{approver_client, resolve_approver_binary};

/// Evaluate one tool use and notify the approver when it warrants review.
pub async fn run(config: &Config) -> Result<()> {
    let Some(invocation) = read_hook_input(std::io::stdin().lock()) else {
        return Ok(());
    };

    // Classification runs first; the allow-list walk happens only when a
    // medium verdict actually consults it.
    let load_allow = || {
        let home = directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf());
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        AllowList::load(home.as_deref(), &cwd)
    };

    let Decision::Notify(verdict) = decide(&invocation, Classifier::builtin(), load_allow) else {
        debug!(tool = %invocation.tool, "silent decision");
        return Ok(());
    };
    debug!(tool = %invocation.tool, level = ?verdict.level, "notifying approver");

    let client = approver_client(&config.approver);
    let binary = resolve_approver_binary(&config.approver.binary);
    let start = StartOptions {
        poll_attempts: config.approver.start_poll_attempts,
        poll_interval: config.approver.start_poll_interval(),
    };
    ensure_running(&client, &binary, &start).await;

    let mut envelope = NotificationEnvelope::for_invocation(
        &invocation,
        verdict.level,
        verdict.label.as_deref().unwrap_or_default(),
        verdict.impact.as_deref().unwrap_or_default(),
        fallback_summary(&invocation),
    );

    if config.summarizer.enabled {
        let summarizer = Summarizer::new(
            &config.summarizer.url,
            &config.summarizer.model,
            config.summarizer.timeout(),
        );
        match summarizer.summarize(&invocation).await {
            Ok(intent) => envelope = envelope.with_agent_intent(intent),
            Err(e) => debug!(error = %e, "paraphrase unavailable"),
        }
    }

    if config.context.enabled {
        let options = EnrichOptions {
            commit_limit: config.context.commit_limit,
            target_limit: config.context.target_limit,
            change_limit: config.context.change_limit,
            git_timeout: config.context.git_timeout(),
        };
        if let Some(context) = enrich(&invocation, &options).await {
            envelope = envelope.with_context(context);
        }
    }

    if let Err(e) = client.notify(&envelope).await {
        warn!(error = %e, "notification not delivered");
    }
    Ok(())
}
