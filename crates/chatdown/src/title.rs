//! Title derivation and filename sanitization for exported conversations.
//!
//! The page title arrives as `"<conversation> - ChatGPT"`; the suffix is
//! stripped before use. Filenames keep only characters that are safe on
//! every mainstream filesystem.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fallback title when the page yields nothing usable. Also the sentinel
/// the assembler treats as "untitled".
pub const DEFAULT_TITLE: &str = "conversation";

static TITLE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*[-–|]\s*ChatGPT\s*$").unwrap());
static FORBIDDEN_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new("[<>:\"/\\\\|?*\\x00-\\x1f]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Derive a conversation title from a raw page title.
pub fn derive_title(raw: &str) -> String {
    let title = TITLE_SUFFIX.replace(raw, "");
    let title = title.trim();
    if title.is_empty() || title == "ChatGPT" {
        DEFAULT_TITLE.to_string()
    } else {
        title.to_string()
    }
}

/// Sanitize a title into a safe filename stem (no extension).
pub fn sanitize_filename(name: &str) -> String {
    let name = FORBIDDEN_CHARS.replace_all(name, "");
    let name = WHITESPACE_RUN.replace_all(&name, "-");
    let name = DASH_RUN.replace_all(&name, "-");
    let name: String = name.trim_matches('-').chars().take(200).collect();

    if name.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        name
    }
}
