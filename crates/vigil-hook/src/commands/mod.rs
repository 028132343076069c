//! Subcommand implementations, one per hook event.

pub(crate) mod notification;
pub(crate) mod post_tool;
pub(crate) mod pre_tool;

use std::path::{Path, PathBuf};

use vigil_config::ApproverSection;
use vigil_notify::ApproverClient;

/// Build the approver client from configuration.
pub(crate) fn approver_client(section: &ApproverSection) -> ApproverClient {
    ApproverClient::new(
        &section.url,
        section.health_timeout(),
        section.notify_timeout(),
    )
}

/// Resolve the configured approver binary to a concrete path.
///
/// Absolute paths pass through; `~/` expands against the home directory;
/// bare names are searched on PATH. An unresolvable name falls through
/// unchanged so the bootstrap can report it as missing.
pub(crate) fn resolve_approver_binary(raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(dirs) = directories::BaseDirs::new()
    {
        return dirs.home_dir().join(rest);
    }
    which::which(raw).unwrap_or_else(|_| path.to_path_buf())
}
