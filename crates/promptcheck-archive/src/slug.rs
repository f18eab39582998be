//! Filesystem-safe slug derivation

/// Derive a filename component from free text.
///
/// Keeps ASCII alphanumerics and underscores, collapses runs of whitespace
/// and hyphens into a single hyphen, drops everything else, lowercases, then
/// truncates to `max_chars` and trims boundary hyphens. The result matches
/// `[a-z0-9_-]*` and may be empty if the input has no usable characters.
pub fn slugify(text: &str, max_chars: usize) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.chars() {
        if ch.is_whitespace() || ch == '-' {
            if !slug.is_empty() {
                pending_hyphen = true;
            }
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(ch.to_ascii_lowercase());
        }
        // Anything else is dropped without breaking a run.
    }

    let truncated: String = slug.chars().take(max_chars).collect();
    truncated.trim_matches('-').to_string()
}
