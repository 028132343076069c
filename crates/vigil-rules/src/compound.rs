//! Compound shell command resolution.
//!
//! `cd /tmp && rm -rf build` must not be judged by its first token. The
//! resolver splits command text on sequencing operators (`&&`, `||`, `;`)
//! and, scanning from the end, returns the last segment that is not a bare
//! directory change. High-tier classification never uses this reduction: a
//! dangerous operation buried mid-chain still matches on the full text.

/// Reduce command text to its effective trailing command.
///
/// Returns the input unchanged when there are no sequencing operators, or
/// when every segment is a directory change.
#[must_use]
pub fn resolve_command(text: &str) -> &str {
    let segments = split_segments(text);
    if segments.len() <= 1 {
        return text;
    }
    segments
        .iter()
        .rev()
        .map(|segment| segment.trim())
        .find(|segment| !segment.is_empty() && !is_directory_change(segment))
        .unwrap_or(text)
}

/// Whether the text chains multiple commands: `;`, `&&`, `||`, or a
/// standalone background `&` (but not `&&` or a redirect like `&>`).
#[must_use]
pub fn has_compound_operators(text: &str) -> bool {
    if text.contains(';') || text.contains("&&") || text.contains("||") {
        return true;
    }
    let bytes = text.as_bytes();
    let mut i = 0;
    #[allow(clippy::arithmetic_side_effects)]
    while i < bytes.len() {
        if bytes[i] == b'&' {
            match bytes.get(i + 1) {
                Some(b'&' | b'>') => i += 2,
                _ => return true,
            }
        } else {
            i += 1;
        }
    }
    false
}

/// Split on `&&`, `||`, and `;`. Single `&` (background) and single `|`
/// (pipeline) do not split: a pipeline is one command.
fn split_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    #[allow(clippy::arithmetic_side_effects)]
    while i < bytes.len() {
        let two = bytes.get(i..i + 2);
        if two == Some(b"&&") || two == Some(b"||") {
            segments.push(&text[start..i]);
            i += 2;
            start = i;
        } else if bytes[i] == b';' {
            segments.push(&text[start..i]);
            i += 1;
            start = i;
        } else {
            i += 1;
        }
    }
    segments.push(&text[start..]);
    segments
}

/// A bare `cd` operation: benign prefix, never the command that matters.
fn is_directory_change(segment: &str) -> bool {
    segment == "cd" || segment.starts_with("cd ")
}
