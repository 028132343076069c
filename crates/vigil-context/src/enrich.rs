//! The enrichment entry point.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

use vigil_core::{ToolInvocation, ToolKind};

use crate::git;
use crate::shape::CommandShape;
use crate::targets::{describe_target, parse_delete_targets};

static USER_AT_HOST: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9][A-Za-z0-9.-]*").expect("pattern must compile")
});

/// Bounds on enrichment work.
#[derive(Debug, Clone)]
pub struct EnrichOptions {
    /// Maximum commits listed for push / forced branch delete contexts.
    pub commit_limit: usize,
    /// Maximum deletion targets described.
    pub target_limit: usize,
    /// Maximum uncommitted-change lines listed for hard resets.
    pub change_limit: usize,
    /// Per-query subprocess timeout.
    pub git_timeout: Duration,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self {
            commit_limit: 5,
            target_limit: 3,
            change_limit: 10,
            git_timeout: Duration::from_secs(2),
        }
    }
}

/// Produce a quantified description of what the invocation would affect.
///
/// Engaged only for shell commands matching one of the closed set of
/// [`CommandShape`]s; everything else, and every introspection failure,
/// yields `None`.
pub async fn enrich(invocation: &ToolInvocation, options: &EnrichOptions) -> Option<String> {
    if invocation.tool != ToolKind::Bash {
        return None;
    }
    let command = invocation.command()?;
    let shape = CommandShape::detect(command)?;
    debug!(?shape, "gathering context");

    match shape {
        CommandShape::Push => push_context(options).await,
        CommandShape::RecursiveDelete => Some(delete_context(command, options)),
        CommandShape::RemoteLogin => login_context(command),
        CommandShape::HardReset => hard_reset_context(options).await,
        CommandShape::ForcedBranchDelete { branch } => {
            branch_delete_context(&branch, options).await
        },
    }
}

async fn push_context(options: &EnrichOptions) -> Option<String> {
    let limit = options.git_timeout;
    let branch = git::current_branch(limit).await?;
    let mut lines = match git::upstream(limit).await {
        Some(upstream) => vec![format!("push from {branch} to {upstream}")],
        None => vec![format!("push from {branch} (no upstream tracking branch)")],
    };

    if let Some(commits) = git::unpushed_commits(limit).await {
        lines.push(format!(
            "{} unpushed {}:",
            commits.len(),
            pluralize(commits.len(), "commit", "commits")
        ));
        append_capped(&mut lines, &commits, options.commit_limit, "commits");
        if let Some(stat) = git::unpushed_shortstat(limit).await {
            lines.push(stat);
        }
    }

    Some(lines.join("\n"))
}

fn delete_context(command: &str, options: &EnrichOptions) -> String {
    let targets = parse_delete_targets(command);
    if targets.is_empty() {
        return "no deletion targets found in command".to_string();
    }
    let mut lines = vec!["would delete:".to_string()];
    for target in targets.iter().take(options.target_limit) {
        lines.push(format!("  {}", describe_target(Path::new(target))));
    }
    let remaining = targets.len().saturating_sub(options.target_limit);
    if remaining > 0 {
        lines.push(format!(
            "  ... and {remaining} more {}",
            pluralize(remaining, "target", "targets")
        ));
    }
    lines.join("\n")
}

fn login_context(command: &str) -> Option<String> {
    let target = USER_AT_HOST.find(command)?;
    Some(format!("remote login target: {}", target.as_str()))
}

async fn hard_reset_context(options: &EnrichOptions) -> Option<String> {
    let changes = git::uncommitted_changes(options.git_timeout).await?;
    if changes.is_empty() {
        return Some("no uncommitted changes to discard".to_string());
    }
    let mut lines = vec![format!(
        "{} uncommitted {} would be discarded:",
        changes.len(),
        pluralize(changes.len(), "change", "changes")
    )];
    append_capped(&mut lines, &changes, options.change_limit, "changes");
    Some(lines.join("\n"))
}

async fn branch_delete_context(branch: &str, options: &EnrichOptions) -> Option<String> {
    let limit = options.git_timeout;
    let mainline = git::main_branch(limit).await?;
    let unmerged = git::unmerged_commits(branch, &mainline, limit).await?;
    if unmerged.is_empty() {
        return Some(format!("branch '{branch}' is fully merged into {mainline}"));
    }
    let mut lines = vec![format!(
        "branch '{branch}' has {} {} not merged into {mainline}:",
        unmerged.len(),
        pluralize(unmerged.len(), "commit", "commits")
    )];
    append_capped(&mut lines, &unmerged, options.commit_limit, "commits");
    Some(lines.join("\n"))
}

/// Append up to `cap` indented items plus a truncation marker.
fn append_capped(lines: &mut Vec<String>, items: &[String], cap: usize, noun: &str) {
    for item in items.iter().take(cap) {
        lines.push(format!("  {item}"));
    }
    let remaining = items.len().saturating_sub(cap);
    if remaining > 0 {
        lines.push(format!("  ... and {remaining} more {noun}"));
    }
}

fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
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

    #[tokio::test]
    async fn test_non_shell_invocations_get_no_context() {
        let inv = ToolInvocation::new(ToolKind::Edit, Map::new());
        assert!(enrich(&inv, &EnrichOptions::default()).await.is_none());
    }

    #[tokio::test]
    async fn test_unshaped_commands_get_no_context() {
        let inv = bash("npm install");
        assert!(enrich(&inv, &EnrichOptions::default()).await.is_none());
    }

    #[tokio::test]
    async fn test_login_context_extracts_target() {
        let inv = bash("ssh -p 2222 deploy@example.com");
        let context = enrich(&inv, &EnrichOptions::default()).await.unwrap();
        assert_eq!(context, "remote login target: deploy@example.com");
    }

    #[tokio::test]
    async fn test_login_context_without_target() {
        let inv = bash("ssh myhost-alias");
        assert!(enrich(&inv, &EnrichOptions::default()).await.is_none());
    }

    #[tokio::test]
    async fn test_delete_context_describes_targets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();

        let cmd = format!("rm -rf {}", dir.path().display());
        let context = enrich(&bash(&cmd), &EnrichOptions::default()).await.unwrap();
        assert!(context.starts_with("would delete:"));
        assert!(context.contains("directory with 2 files"), "{context}");
    }

    #[tokio::test]
    async fn test_delete_context_caps_targets() {
        let options = EnrichOptions {
            target_limit: 2,
            ..EnrichOptions::default()
        };
        let context = enrich(&bash("rm -rf a b c d"), &options).await.unwrap();
        assert!(context.contains("... and 2 more targets"), "{context}");
    }

    #[test]
    fn test_append_capped_truncation_marker() {
        let mut lines = Vec::new();
        let items: Vec<String> = (0..7).map(|i| format!("c{i}")).collect();
        append_capped(&mut lines, &items, 5, "commits");
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[5], "  ... and 2 more commits");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "commit", "commits"), "commit");
        assert_eq!(pluralize(2, "commit", "commits"), "commits");
    }
}
