//! Permission document discovery and pre-authorization.
//!
//! Discovery order:
//! 1. `<home>/.claude/settings.json`, then `<home>/.claude/settings.local.json`
//! 2. For every ancestor of `cwd` from `cwd` up to the filesystem root:
//!    `.claude/settings.json`, then `.claude/settings.local.json`
//!
//! Every document is independently fallible: unreadable or malformed files
//! are skipped with a trace. The resolver reads the filesystem on every
//! call - invocation volume is one call per agent tool use, so there is no
//! caching.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use vigil_core::{ToolInvocation, ToolKind};
use vigil_rules::{has_compound_operators, resolve_command};

use crate::entry::PermissionEntry;

/// Directory holding permission documents, under home and project roots.
const AGENT_DIR: &str = ".claude";

/// Document file names, in load order within one directory.
const DOCUMENT_NAMES: &[&str] = &["settings.json", "settings.local.json"];

/// One permission document.
#[derive(Debug, Clone, Default, Deserialize)]
struct SettingsDocument {
    #[serde(default)]
    permissions: Permissions,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Permissions {
    #[serde(default)]
    allow: Vec<String>,
}

/// The union of allow entries across every loaded document, in load order.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    entries: Vec<PermissionEntry>,
}

impl AllowList {
    /// Load all permission documents for `home` and `cwd`.
    #[must_use]
    pub fn load(home: Option<&Path>, cwd: &Path) -> Self {
        let mut entries = Vec::new();
        for path in document_paths(home, cwd) {
            let Some(document) = try_load_document(&path) else {
                continue;
            };
            debug!(path = %path.display(), count = document.permissions.allow.len(),
                "loaded permission document");
            entries.extend(
                document
                    .permissions
                    .allow
                    .iter()
                    .filter_map(|raw| PermissionEntry::parse(raw)),
            );
        }
        Self { entries }
    }

    /// Build an allow list from pre-parsed entries (test seam).
    #[must_use]
    pub fn from_entries(entries: Vec<PermissionEntry>) -> Self {
        Self { entries }
    }

    /// First entry matching the tool and command authorizes it.
    #[must_use]
    pub fn authorizes(&self, tool: &str, command: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.authorizes(tool, command))
    }

    /// Whether this list pre-authorizes the invocation.
    ///
    /// Defined only for shell invocations; every other tool kind is
    /// `false`. Matching runs against the resolved effective command, so a
    /// compound command is authorized only if its trailing real command is.
    /// A standalone background `&` survives resolution and disqualifies the
    /// command: a backgrounded job must not ride in on a prefix entry.
    #[must_use]
    pub fn preauthorizes(&self, invocation: &ToolInvocation) -> bool {
        if invocation.tool != ToolKind::Bash {
            return false;
        }
        let Some(command) = invocation.command() else {
            return false;
        };
        let effective = resolve_command(command);
        if has_compound_operators(effective) {
            return false;
        }
        self.authorizes(invocation.tool.name(), effective)
    }

    /// Number of loaded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether the invocation is pre-authorized by any permission layer.
///
/// Loads every document for `home` and `cwd`, then applies
/// [`AllowList::preauthorizes`].
#[must_use]
pub fn is_preauthorized(invocation: &ToolInvocation, home: Option<&Path>, cwd: &Path) -> bool {
    AllowList::load(home, cwd).preauthorizes(invocation)
}

/// Candidate document paths in load order. Paths need not exist.
fn document_paths(home: Option<&Path>, cwd: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(home) = home {
        for name in DOCUMENT_NAMES {
            paths.push(home.join(AGENT_DIR).join(name));
        }
    }
    for dir in cwd.ancestors() {
        for name in DOCUMENT_NAMES {
            paths.push(dir.join(AGENT_DIR).join(name));
        }
    }
    paths
}

/// Read and parse one document; any failure means "no document here".
fn try_load_document(path: &Path) -> Option<SettingsDocument> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "unreadable permission document, skipping");
            return None;
        },
    };
    match serde_json::from_str(&content) {
        Ok(document) => Some(document),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "malformed permission document, skipping");
            None
        },
    }
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

    fn write_settings(dir: &Path, name: &str, allow: &[&str]) {
        let agent_dir = dir.join(AGENT_DIR);
        std::fs::create_dir_all(&agent_dir).unwrap();
        let body = serde_json::json!({ "permissions": { "allow": allow } });
        std::fs::write(agent_dir.join(name), body.to_string()).unwrap();
    }

    #[test]
    fn test_loads_project_hierarchy() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("project").join("src");
        std::fs::create_dir_all(&nested).unwrap();
        write_settings(
            &root.path().join("project"),
            "settings.json",
            &["Bash(npm install:*)"],
        );

        let inv = bash("npm install");
        assert!(is_preauthorized(&inv, None, &nested));
    }

    #[test]
    fn test_user_global_layer() {
        let home = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        write_settings(home.path(), "settings.json", &["Bash(git status:*)"]);

        let inv = bash("git status --short");
        assert!(is_preauthorized(&inv, Some(home.path()), cwd.path()));
    }

    #[test]
    fn test_local_override_document_also_loaded() {
        let home = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        write_settings(home.path(), "settings.local.json", &["Bash(npm test)"]);

        assert!(is_preauthorized(&bash("npm test"), Some(home.path()), cwd.path()));
    }

    #[test]
    fn test_no_documents_means_not_authorized() {
        let cwd = tempfile::tempdir().unwrap();
        assert!(!is_preauthorized(&bash("npm install"), None, cwd.path()));
    }

    #[test]
    fn test_malformed_document_is_skipped() {
        let home = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        let agent_dir = home.path().join(AGENT_DIR);
        std::fs::create_dir_all(&agent_dir).unwrap();
        std::fs::write(agent_dir.join("settings.json"), "{ not json").unwrap();
        write_settings(home.path(), "settings.local.json", &["Bash(npm test)"]);

        // The broken layer is skipped, the valid one still applies.
        assert!(is_preauthorized(&bash("npm test"), Some(home.path()), cwd.path()));
    }

    #[test]
    fn test_compound_command_matches_resolved_tail() {
        let home = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        write_settings(home.path(), "settings.json", &["Bash(npm install:*)"]);

        // The cd prefix is benign; the tail is what gets matched.
        let inv = bash("cd /a && npm install");
        assert!(is_preauthorized(&inv, Some(home.path()), cwd.path()));

        // A non-cd chain does not reduce to an authorized command.
        let inv = bash("npm install && rm -rf node_modules");
        assert!(!is_preauthorized(&inv, Some(home.path()), cwd.path()));
    }

    #[test]
    fn test_backgrounded_command_never_preauthorized() {
        let home = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        write_settings(home.path(), "settings.json", &["Bash(npm install:*)"]);

        // `&` is not a split point, so the prefix would otherwise match.
        let inv = bash("npm install &");
        assert!(!is_preauthorized(&inv, Some(home.path()), cwd.path()));
    }

    #[test]
    fn test_non_shell_tools_never_preauthorized() {
        let home = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        write_settings(home.path(), "settings.json", &["Edit"]);

        let inv = ToolInvocation::new(ToolKind::Edit, Map::new());
        assert!(!is_preauthorized(&inv, Some(home.path()), cwd.path()));
    }

    #[test]
    fn test_preauthorizes_on_in_memory_list() {
        let list = AllowList::from_entries(vec![
            PermissionEntry::parse("Bash(npm install:*)").unwrap(),
        ]);
        assert!(list.preauthorizes(&bash("npm install")));
        assert!(list.preauthorizes(&bash("cd /a && npm install")));
        assert!(!list.preauthorizes(&bash("npm install &")));
        assert!(!list.preauthorizes(&bash("npm install && rm -rf node_modules")));

        let edit = ToolInvocation::new(ToolKind::Edit, Map::new());
        assert!(!list.preauthorizes(&edit));
    }

    #[test]
    fn test_allowlist_len() {
        let list = AllowList::from_entries(vec![
            PermissionEntry::parse("Bash(ls:*)").unwrap(),
        ]);
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
    }
}
