//! Permission entry parsing and matching.

/// The argument part of a permission entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgPattern {
    /// The command must equal this string exactly.
    Exact(String),
    /// The command must start with this prefix (`prefix:*` form).
    Prefix(String),
}

/// A single allow-list rule: a tool name plus an optional argument pattern.
///
/// Wire forms: `Bash`, `Bash(npm test)`, `Bash(git status:*)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionEntry {
    /// The tool this entry applies to.
    pub tool: String,
    /// Argument constraint; `None` authorizes every invocation of the tool.
    pub arg: Option<ArgPattern>,
}

impl PermissionEntry {
    /// Parse a pattern string. Returns `None` for shapes this resolver
    /// does not understand (those entries are skipped, not errors).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let Some((tool, rest)) = raw.split_once('(') else {
            // Bare tool name.
            if raw.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return Some(Self {
                    tool: raw.to_string(),
                    arg: None,
                });
            }
            return None;
        };

        let inner = rest.strip_suffix(')')?;
        if tool.is_empty() || inner.is_empty() {
            return None;
        }
        let arg = match inner.strip_suffix(":*") {
            Some(prefix) => ArgPattern::Prefix(prefix.to_string()),
            None => ArgPattern::Exact(inner.to_string()),
        };
        Some(Self {
            tool: tool.to_string(),
            arg: Some(arg),
        })
    }

    /// Whether this entry authorizes `command` for the named tool.
    ///
    /// Prefix entries match on an argument boundary: the command must equal
    /// the prefix or continue with whitespace after it, so
    /// `Bash(git status:*)` covers `git status --short` but not
    /// `git status-like-command`.
    #[must_use]
    pub fn authorizes(&self, tool: &str, command: &str) -> bool {
        if self.tool != tool {
            return false;
        }
        match &self.arg {
            None => true,
            Some(ArgPattern::Exact(exact)) => command == exact,
            Some(ArgPattern::Prefix(prefix)) => match command.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
                None => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_tool() {
        let entry = PermissionEntry::parse("Edit").unwrap();
        assert_eq!(entry.tool, "Edit");
        assert!(entry.arg.is_none());
    }

    #[test]
    fn test_parse_exact() {
        let entry = PermissionEntry::parse("Bash(npm test)").unwrap();
        assert_eq!(entry.arg, Some(ArgPattern::Exact("npm test".to_string())));
    }

    #[test]
    fn test_parse_prefix() {
        let entry = PermissionEntry::parse("Bash(git status:*)").unwrap();
        assert_eq!(
            entry.arg,
            Some(ArgPattern::Prefix("git status".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(PermissionEntry::parse("").is_none());
        assert!(PermissionEntry::parse("Bash(unclosed").is_none());
        assert!(PermissionEntry::parse("Bash()").is_none());
        assert!(PermissionEntry::parse("not a tool!").is_none());
    }

    #[test]
    fn test_prefix_matches_on_argument_boundary() {
        let entry = PermissionEntry::parse("Bash(git status:*)").unwrap();
        assert!(entry.authorizes("Bash", "git status"));
        assert!(entry.authorizes("Bash", "git status --short"));
        assert!(!entry.authorizes("Bash", "git status-like-command"));
        assert!(!entry.authorizes("Bash", "git stash"));
    }

    #[test]
    fn test_authorizes_checks_tool_name() {
        let entry = PermissionEntry::parse("Bash(git status:*)").unwrap();
        assert!(!entry.authorizes("Edit", "git status"));
    }

    #[test]
    fn test_bare_tool_authorizes_anything() {
        let entry = PermissionEntry::parse("WebSearch").unwrap();
        assert!(entry.authorizes("WebSearch", ""));
        assert!(entry.authorizes("WebSearch", "anything"));
    }

    #[test]
    fn test_exact_requires_equality() {
        let entry = PermissionEntry::parse("Bash(npm test)").unwrap();
        assert!(entry.authorizes("Bash", "npm test"));
        assert!(!entry.authorizes("Bash", "npm test --watch"));
    }
}
