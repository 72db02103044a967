//! String utilities for the domain layer.

/// Truncate a string to a maximum byte length with ellipsis (UTF-8 safe).
///
/// Used for log previews of response bodies; display paths never truncate
/// transcript text.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Whether a string carries any characters at all.
///
/// Whitespace counts as content: `" "` is present, `""` is not.
pub fn is_present(s: &str) -> bool {
    !s.is_empty()
}
