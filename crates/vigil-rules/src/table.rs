//! The ordered risk pattern tables.
//!
//! Rules are data, not code: each entry is a regex searched (never
//! full-matched) against the candidate command text, paired with a short
//! label and an impact description for the approver UI.
//!
//! Order is significant twice over. High tier is always consulted before
//! medium tier, and within a tier the first matching rule wins, so narrower
//! patterns must be declared before broader ones (`rm -r...` before bare
//! `rm`, `git push --force` before `git push`).

use regex::Regex;
use std::sync::LazyLock;

/// One `(matcher, label, impact)` entry in a risk tier.
#[derive(Debug)]
pub struct RiskRule {
    pattern: Regex,
    /// Short action label, e.g. "push to remote".
    pub label: &'static str,
    /// One-line description of what the command can affect.
    pub impact: &'static str,
}

impl RiskRule {
    fn new(pattern: &str, label: &'static str, impact: &'static str) -> Self {
        // Patterns are compile-time constants; a failure here is a bug
        // caught by the table tests.
        #[allow(clippy::expect_used)]
        let pattern = Regex::new(pattern).expect("builtin rule pattern must compile");
        Self {
            pattern,
            label,
            impact,
        }
    }

    /// Search (not full-match) this rule's pattern in `text`.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// The two ordered risk tiers.
///
/// Loaded once per process and never mutated; obtain the shared instance
/// via [`RuleSet::builtin`].
#[derive(Debug)]
pub struct RuleSet {
    /// Irreversible or externally visible operations.
    pub high: Vec<RiskRule>,
    /// State-changing but typically recoverable operations.
    pub medium: Vec<RiskRule>,
}

impl RuleSet {
    /// The process-wide builtin rule tables.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: LazyLock<RuleSet> = LazyLock::new(|| RuleSet {
            high: high_rules(),
            medium: medium_rules(),
        });
        &BUILTIN
    }

    /// First matching high-tier rule for `text`, in declaration order.
    #[must_use]
    pub fn match_high(&self, text: &str) -> Option<&RiskRule> {
        self.high.iter().find(|rule| rule.matches(text))
    }

    /// First matching medium-tier rule for `text`, in declaration order.
    #[must_use]
    pub fn match_medium(&self, text: &str) -> Option<&RiskRule> {
        self.medium.iter().find(|rule| rule.matches(text))
    }
}

/// High risk: destructive, irreversible, or reaching outside the machine.
#[allow(clippy::too_many_lines)]
fn high_rules() -> Vec<RiskRule> {
    vec![
        // File deletion
        RiskRule::new(
            r"\brm\s+-[^\s]*r",
            "recursive file delete",
            "removes files and directories permanently",
        ),
        RiskRule::new(r"\brm\s+", "file delete", "removes files permanently"),
        RiskRule::new(
            r"\bfind\b.*-delete\b",
            "find -delete",
            "bulk-deletes every file matching the search",
        ),
        RiskRule::new(
            r"\bfind\b.*-exec\b",
            "find -exec",
            "runs an arbitrary command on every search result",
        ),
        RiskRule::new(r"\btruncate\b", "file truncation", "erases file contents"),
        // Git irreversible
        RiskRule::new(
            r"\bgit\s+push\s+--force\b",
            "git force push",
            "overwrites remote history",
        ),
        RiskRule::new(
            r"\bgit\s+push\b",
            "push to remote",
            "sends commits to the remote repository",
        ),
        RiskRule::new(
            r"\bgit\s+reset\s+--hard\b",
            "git reset --hard",
            "discards all uncommitted changes",
        ),
        RiskRule::new(r"\bgit\s+clean\b", "git clean", "deletes untracked files"),
        RiskRule::new(
            r"\bgit\s+checkout\s+\.\s*$",
            "git checkout .",
            "discards all working tree changes",
        ),
        RiskRule::new(
            r"\bgit\s+restore\s+\.\s*$",
            "git restore .",
            "discards all working tree changes",
        ),
        RiskRule::new(
            r"\bgit\s+branch\s+-D\b",
            "forced branch delete",
            "deletes the branch without a merge check",
        ),
        RiskRule::new(
            r"\bgit\s+stash\s+clear\b",
            "stash clear",
            "drops every stash entry",
        ),
        RiskRule::new(
            r"\bgit\s+stash\s+drop\b",
            "stash drop",
            "drops a stash entry",
        ),
        // GitHub CLI
        RiskRule::new(r"\bgh\s+pr\s+merge\b", "PR merge", "merges the pull request"),
        // System administration
        RiskRule::new(
            r"\bsudo\b",
            "superuser command",
            "runs with elevated privileges, can affect the whole system",
        ),
        RiskRule::new(
            r"\bsystemctl\b",
            "service management",
            "changes system service state",
        ),
        RiskRule::new(
            r"\blaunchctl\b",
            "macOS service",
            "operates on macOS system services",
        ),
        RiskRule::new(r"\breboot\b", "reboot", "restarts the machine"),
        RiskRule::new(r"\bshutdown\b", "shutdown", "halts the machine"),
        // Remote script execution
        RiskRule::new(
            r"\bcurl\b.*\|\s*(ba)?sh\b",
            "remote script execution",
            "pipes a downloaded script straight into a shell",
        ),
        RiskRule::new(
            r"\bwget\b.*\|\s*(ba)?sh\b",
            "remote script execution",
            "pipes a downloaded script straight into a shell",
        ),
        // Permissions
        RiskRule::new(
            r"\bchmod\b",
            "permission change",
            "alters file access permissions",
        ),
        RiskRule::new(r"\bchown\b", "ownership change", "alters file ownership"),
        // Process management
        RiskRule::new(
            r"\bkillall\b",
            "kill all processes",
            "terminates every process with the given name",
        ),
        RiskRule::new(r"\bkill\b", "kill process", "sends a signal to a process"),
        // Remote access
        RiskRule::new(
            r"\bsshpass\b",
            "ssh with password",
            "password-authenticated remote login",
        ),
        RiskRule::new(r"\bssh\b", "remote login", "connects to a remote server"),
        RiskRule::new(r"\bscp\b", "remote copy", "transfers files over ssh"),
        RiskRule::new(
            r"\brsync\b",
            "remote sync",
            "synchronizes files with a remote host",
        ),
        // In-place edit
        RiskRule::new(r"\bsed\s+-i\b", "in-place edit", "rewrites files directly"),
        // Dangerous utilities
        RiskRule::new(r"\bdd\b", "low-level I/O", "writes directly to devices"),
        RiskRule::new(
            r"\beval\b",
            "dynamic evaluation",
            "evaluates arbitrary code at runtime",
        ),
        RiskRule::new(
            r"\bcrontab\b",
            "scheduled task change",
            "modifies scheduled jobs",
        ),
        // Package publishing
        RiskRule::new(
            r"\bnpm\s+publish\b",
            "package publish",
            "publishes to the npm registry",
        ),
        // Shell write redirects. Append must precede overwrite so `>>` gets
        // the specific label; the overwrite pattern excludes `>>`, `1>`, `2>`.
        RiskRule::new(r">>[^>]", "file append", "appends data to a file"),
        RiskRule::new(
            r"(^|[^>12])>[^>]",
            "file overwrite",
            "overwrites a file via shell redirection",
        ),
    ]
}

/// Medium risk: state-modifying but typically recoverable.
#[allow(clippy::too_many_lines)]
fn medium_rules() -> Vec<RiskRule> {
    vec![
        // Package management
        RiskRule::new(
            r"\bnpm\s+(ci|install)\b",
            "npm install",
            "installs node packages",
        ),
        RiskRule::new(
            r"\byarn\s+(add|install)\b",
            "yarn install",
            "installs node packages",
        ),
        RiskRule::new(
            r"\bpip3?\s+install\b",
            "pip install",
            "installs python packages",
        ),
        RiskRule::new(
            r"\bbrew\s+install\b",
            "brew install",
            "installs homebrew packages",
        ),
        RiskRule::new(r"\bgem\s+install\b", "gem install", "installs ruby gems"),
        RiskRule::new(
            r"\bcargo\s+install\b",
            "cargo install",
            "installs rust binaries",
        ),
        RiskRule::new(
            r"\bconda\s+install\b",
            "conda install",
            "installs conda packages",
        ),
        RiskRule::new(
            r"\bbun\s+(add|install)\b",
            "bun install",
            "installs node packages",
        ),
        // Git state changes
        RiskRule::new(r"\bgit\s+add\b", "git add", "stages files for commit"),
        RiskRule::new(r"\bgit\s+commit\b", "git commit", "records a commit"),
        RiskRule::new(r"\bgit\s+checkout\b", "git checkout", "switches branches"),
        RiskRule::new(r"\bgit\s+merge\b", "git merge", "merges a branch"),
        RiskRule::new(
            r"\bgit\s+pull\b",
            "git pull",
            "fetches and merges from the remote",
        ),
        RiskRule::new(r"\bgit\s+clone\b", "git clone", "clones a repository"),
        RiskRule::new(r"\bgit\s+rebase\b", "git rebase", "rewrites commit history"),
        RiskRule::new(
            r"\bgit\s+cherry-pick\b",
            "git cherry-pick",
            "applies a specific commit",
        ),
        // Lowercase -d refuses to delete unmerged branches; the forced -D
        // form is a high-tier rule.
        RiskRule::new(
            r"\bgit\s+branch\s+-d\b",
            "branch delete",
            "deletes a branch after a merge check",
        ),
        // File operations
        RiskRule::new(r"\bmkdir\b", "directory create", "creates a directory"),
        RiskRule::new(
            r"\btouch\b",
            "file create/update",
            "creates or updates a file",
        ),
        RiskRule::new(r"\bcp\b", "file copy", "duplicates files"),
        RiskRule::new(r"\bmv\b", "file move", "moves or renames files"),
        RiskRule::new(r"\bln\b", "link create", "creates a symbolic or hard link"),
        RiskRule::new(
            r"\btee\b",
            "tee output",
            "writes to stdout and a file at once",
        ),
        // Archives
        RiskRule::new(
            r"\btar\b",
            "archive operation",
            "creates or extracts a tar archive",
        ),
        RiskRule::new(r"\bunzip\b", "zip extract", "extracts a zip archive"),
        RiskRule::new(r"\bzip\b", "zip create", "creates a zip archive"),
        // Script and test runners
        RiskRule::new(r"\bnpx\b", "npx run", "runs an npm package directly"),
        RiskRule::new(
            r"\bnpm\s+(run|start|test)\b",
            "npm script",
            "runs an npm script",
        ),
        RiskRule::new(r"\bnode\b", "node run", "executes javascript"),
        RiskRule::new(r"\bpython3?\b", "python run", "executes a python script"),
        RiskRule::new(r"\bruby\b", "ruby run", "executes a ruby script"),
        RiskRule::new(r"\bjest\b", "jest tests", "runs javascript tests"),
        RiskRule::new(r"\bpytest\b", "pytest tests", "runs python tests"),
        RiskRule::new(
            r"\bplaywright\b",
            "playwright",
            "runs browser automation tests",
        ),
        RiskRule::new(r"\bbun\s+(run|test)\b", "bun script", "runs a bun script"),
        // Build tools
        RiskRule::new(r"\bmake\b", "make", "runs the build automation"),
        RiskRule::new(r"\bcmake\b", "cmake", "generates the build system"),
        RiskRule::new(r"\btsc\b", "typescript compile", "compiles typescript"),
        RiskRule::new(r"\bwebpack\b", "webpack", "bundles modules"),
        RiskRule::new(
            r"\bswift\s+(build|run|test)\b",
            "swift build",
            "builds or runs a swift project",
        ),
        // Code quality
        RiskRule::new(r"\beslint\b", "eslint", "lints javascript/typescript"),
        RiskRule::new(r"\bprettier\b", "prettier", "formats code"),
        RiskRule::new(r"\bblack\b", "black", "formats python code"),
        // Databases, servers and containers
        RiskRule::new(r"\bflask\b", "flask", "operates a python web server"),
        RiskRule::new(r"\bpsql\b", "postgresql client", "talks to postgresql"),
        RiskRule::new(r"\bmysql\b", "mysql client", "talks to mysql"),
        RiskRule::new(r"\bsqlite3\b", "sqlite client", "talks to sqlite"),
        RiskRule::new(r"\bdocker\b", "docker", "manages containers"),
        RiskRule::new(r"\bkubectl\b", "kubernetes", "manages a k8s cluster"),
        RiskRule::new(
            r"\bsupabase\b",
            "supabase cli",
            "operates on supabase resources",
        ),
        // Network
        RiskRule::new(r"\bcurl\b", "http request", "performs an http request"),
        RiskRule::new(r"\bwget\b", "download", "downloads a file"),
        // Cloud and deployment
        RiskRule::new(
            r"\bfirebase\s+deploy\b",
            "firebase deploy",
            "deploys to firebase",
        ),
        RiskRule::new(r"\bterraform\b", "terraform", "manages infrastructure"),
        RiskRule::new(r"\bgcloud\b", "google cloud", "operates on GCP resources"),
        RiskRule::new(r"\bvercel\b", "vercel", "deploys or operates on vercel"),
    ]
}
