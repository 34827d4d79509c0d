//! Shared helpers for rendering and post-processing.

/// Collapse every run of three or more consecutive newlines to exactly two,
/// then trim leading and trailing whitespace.
///
/// Applied once to each turn's rendered content and once to the assembled
/// document. Idempotent.
pub fn normalize_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut newlines = 0;

    for c in text.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines <= 2 {
                collapsed.push(c);
            }
        } else {
            newlines = 0;
            collapsed.push(c);
        }
    }

    collapsed.trim().to_string()
}

/// Extract a code-fence language tag from a CSS class list.
///
/// Highlighters tag code elements with a `language-<name>` class token;
/// this is the only styling metadata the converter depends on.
pub fn language_from_class(class: &str) -> Option<&str> {
    class
        .split_whitespace()
        .find_map(|token| token.strip_prefix("language-"))
        .filter(|language| !language.is_empty())
}
