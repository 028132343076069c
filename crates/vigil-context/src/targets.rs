//! Deletion target parsing and description.

use std::path::Path;
use walkdir::WalkDir;

/// Upper bound on the directory walk, so a delete aimed at a huge tree
/// cannot stall the hook.
const FILE_COUNT_CAP: usize = 10_000;

/// Extract path-like arguments from a delete command.
///
/// Tokens before (and including) the `rm` word are dropped, as are flag
/// tokens. Quoting is not interpreted; this is a best-effort description,
/// not an execution plan.
#[must_use]
pub fn parse_delete_targets(command: &str) -> Vec<String> {
    command
        .split_whitespace()
        .skip_while(|token| *token != "rm")
        .skip(1)
        .take_while(|token| !is_operator(token))
        .filter(|token| !token.starts_with('-'))
        .map(ToString::to_string)
        .collect()
}

/// Stop collecting at a shell operator so a chained command's tail is not
/// mistaken for deletion targets.
fn is_operator(token: &str) -> bool {
    matches!(token, "&&" | "||" | ";" | "|" | "&")
}

/// Describe one deletion target: directory with a recursive file count,
/// plain file, or nonexistent.
#[must_use]
pub fn describe_target(path: &Path) -> String {
    let display = path.display();
    if path.is_dir() {
        let count = WalkDir::new(path)
            .into_iter()
            .flatten()
            .filter(|entry| entry.file_type().is_file())
            .take(FILE_COUNT_CAP)
            .count();
        if count == FILE_COUNT_CAP {
            format!("{display} - directory with {FILE_COUNT_CAP}+ files")
        } else if count == 1 {
            format!("{display} - directory with 1 file")
        } else {
            format!("{display} - directory with {count} files")
        }
    } else if path.is_file() {
        format!("{display} - file")
    } else {
        format!("{display} - does not exist")
    }
}
