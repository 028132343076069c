//! Read-only git queries with explicit timeouts.
//!
//! Every query funnels through [`run_git`]: a single subprocess attempt
//! with a bounded wait. Any failure - git missing, not a repository,
//! non-zero exit, timeout - yields `None` and the caller degrades
//! gracefully.

use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// Run `git <args>` and return trimmed stdout on success.
pub async fn run_git(args: &[&str], limit: Duration) -> Option<String> {
    let mut cmd = Command::new("git");
    cmd.args(args);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::null());

    let output = match timeout(limit, async { cmd.spawn()?.wait_with_output().await }).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            debug!(args = ?args, error = %e, "git query failed to run");
            return None;
        },
        Err(_) => {
            debug!(args = ?args, timeout_ms = limit.as_millis(), "git query timed out");
            return None;
        },
    };

    if !output.status.success() {
        debug!(args = ?args, code = ?output.status.code(), "git query exited non-zero");
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// The currently checked-out branch name.
pub async fn current_branch(limit: Duration) -> Option<String> {
    run_git(&["rev-parse", "--abbrev-ref", "HEAD"], limit).await
}

/// The upstream tracking ref of the current branch, e.g. `origin/main`.
pub async fn upstream(limit: Duration) -> Option<String> {
    run_git(&["rev-parse", "--abbrev-ref", "@{u}"], limit).await
}

/// One-line subjects of commits on HEAD but not on its upstream.
pub async fn unpushed_commits(limit: Duration) -> Option<Vec<String>> {
    let log = run_git(&["log", "--oneline", "@{u}..HEAD"], limit).await?;
    Some(non_empty_lines(&log))
}

/// `git diff --shortstat` between the upstream and HEAD.
pub async fn unpushed_shortstat(limit: Duration) -> Option<String> {
    let stat = run_git(&["diff", "--shortstat", "@{u}..HEAD"], limit).await?;
    let trimmed = stat.trim().to_string();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Porcelain status lines for uncommitted changes.
pub async fn uncommitted_changes(limit: Duration) -> Option<Vec<String>> {
    let status = run_git(&["status", "--porcelain"], limit).await?;
    Some(non_empty_lines(&status))
}

/// The main-line branch: `main` when it exists, otherwise `master`.
pub async fn main_branch(limit: Duration) -> Option<String> {
    for candidate in ["main", "master"] {
        let reference = format!("refs/heads/{candidate}");
        if run_git(&["rev-parse", "--verify", "--quiet", &reference], limit)
            .await
            .is_some()
        {
            return Some(candidate.to_string());
        }
    }
    None
}

/// One-line subjects of commits on `branch` but not on `mainline`.
pub async fn unmerged_commits(
    branch: &str,
    mainline: &str,
    limit: Duration,
) -> Option<Vec<String>> {
    let range = format!("{mainline}..{branch}");
    let log = run_git(&["log", "--oneline", &range], limit).await?;
    Some(non_empty_lines(&log))
}

fn non_empty_lines(s: &str) -> Vec<String> {
    s.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_lines() {
        let lines = non_empty_lines("a\n\nb\n");
        assert_eq!(lines, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_run_git_bad_subcommand_is_none() {
        let out = run_git(
            &["definitely-not-a-subcommand"],
            Duration::from_secs(5),
        )
        .await;
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn test_run_git_version_works_when_git_present() {
        // Best-effort: if git is installed this exercises the success path;
        // if not, None is the contract anyway.
        if let Some(out) = run_git(&["--version"], Duration::from_secs(5)).await {
            assert!(out.contains("git"));
        }
    }
}
