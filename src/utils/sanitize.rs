//! Sanitizing of error messages and caller-supplied file names.

use std::path::Path;

use crate::config::MAX_ERROR_MESSAGE_LENGTH;

/// Removes control characters (other than tab, newline and carriage return)
/// so error text can be embedded in JSON and console output safely.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Sanitizes and caps an error message at `MAX_ERROR_MESSAGE_LENGTH` characters.
///
/// Truncation counts characters, not bytes, so multi-byte text never splits.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);
    let char_count = sanitized.chars().count();

    if char_count > MAX_ERROR_MESSAGE_LENGTH {
        let keep = MAX_ERROR_MESSAGE_LENGTH.saturating_sub(50);
        let head: String = sanitized.chars().take(keep).collect();
        format!("{head}... (truncated, original length: {char_count} chars)")
    } else {
        sanitized
    }
}

/// Reduces a caller-supplied document name to its final path component.
///
/// Returns `None` when nothing usable is left (empty, `..`, a bare root), in
/// which case the caller falls back to a generated name.
pub fn sanitize_document_filename(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Treat backslashes as separators too, names may come from Windows browsers
    let normalized = trimmed.replace('\\', "/");
    Path::new(&normalized)
        .file_name()
        .and_then(|n| n.to_str())
        .map(sanitize_error_message)
        .filter(|n| !n.trim().is_empty())
}
