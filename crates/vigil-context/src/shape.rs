//! Detection of the command shapes worth enriching.

use regex::Regex;
use std::sync::LazyLock;

// Shape patterns are compile-time constants; failures are caught by tests.
#[allow(clippy::expect_used)]
fn shape_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).expect("shape pattern must compile")
}

static FORCED_BRANCH_DELETE: LazyLock<Regex> =
    LazyLock::new(|| shape_pattern(r"\bgit\s+branch\s+-D\s+(\S+)"));
static HARD_RESET: LazyLock<Regex> = LazyLock::new(|| shape_pattern(r"\bgit\s+reset\s+--hard\b"));
static PUSH: LazyLock<Regex> = LazyLock::new(|| shape_pattern(r"\bgit\s+push\b"));
static RECURSIVE_DELETE: LazyLock<Regex> = LazyLock::new(|| shape_pattern(r"\brm\s+-[^\s]*r"));
static REMOTE_LOGIN: LazyLock<Regex> = LazyLock::new(|| shape_pattern(r"\bssh\b"));

/// The closed set of command shapes eligible for context enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandShape {
    /// `git push ...` - describe unpushed commits.
    Push,
    /// `rm -r ...` - describe the deletion targets.
    RecursiveDelete,
    /// `ssh ...` - describe the connection target.
    RemoteLogin,
    /// `git reset --hard` - describe uncommitted changes at stake.
    HardReset,
    /// `git branch -D <name>` - describe the branch's merge state.
    ForcedBranchDelete {
        /// The branch being deleted.
        branch: String,
    },
}

impl CommandShape {
    /// Detect the enrichable shape of a command, if any.
    ///
    /// More specific git shapes are tested before broader ones so a forced
    /// branch delete captures its branch name and a hard reset is not
    /// mistaken for anything else.
    #[must_use]
    pub fn detect(command: &str) -> Option<Self> {
        if let Some(caps) = FORCED_BRANCH_DELETE.captures(command) {
            return Some(Self::ForcedBranchDelete {
                branch: caps[1].to_string(),
            });
        }
        if HARD_RESET.is_match(command) {
            return Some(Self::HardReset);
        }
        if PUSH.is_match(command) {
            return Some(Self::Push);
        }
        if RECURSIVE_DELETE.is_match(command) {
            return Some(Self::RecursiveDelete);
        }
        if REMOTE_LOGIN.is_match(command) {
            return Some(Self::RemoteLogin);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_push() {
        assert_eq!(
            CommandShape::detect("git push origin main"),
            Some(CommandShape::Push)
        );
    }

    #[test]
    fn test_detect_recursive_delete() {
        assert_eq!(
            CommandShape::detect("rm -rf build/"),
            Some(CommandShape::RecursiveDelete)
        );
        // Plain rm is not in the enrichable set.
        assert_eq!(CommandShape::detect("rm file.txt"), None);
    }

    #[test]
    fn test_detect_remote_login() {
        assert_eq!(
            CommandShape::detect("ssh deploy@example.com"),
            Some(CommandShape::RemoteLogin)
        );
    }

    #[test]
    fn test_detect_hard_reset() {
        assert_eq!(
            CommandShape::detect("git reset --hard HEAD~1"),
            Some(CommandShape::HardReset)
        );
    }

    #[test]
    fn test_detect_forced_branch_delete_captures_name() {
        assert_eq!(
            CommandShape::detect("git branch -D feature/x"),
            Some(CommandShape::ForcedBranchDelete {
                branch: "feature/x".to_string()
            })
        );
    }

    #[test]
    fn test_detect_nothing() {
        assert_eq!(CommandShape::detect("git status"), None);
        assert_eq!(CommandShape::detect("npm install"), None);
    }
}
