//! String utilities for the domain layer.

/// Truncate a string to at most `max_chars` characters (UTF-8 safe).
///
/// Unlike a byte cut this never splits a multi-byte character, and no
/// ellipsis is appended: the result is used verbatim inside prompts.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Return `Some(trimmed)` for non-blank input, `None` otherwise.
pub fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|t| !t.is_empty())
}
