//! Extraction of the proposed ("After") and original ("Before") values from
//! free-form suggestion text.
//!
//! The AI service is asked to follow a `Before: '...' After: '...'`
//! convention but is not guaranteed to. Absence of an `After:` marker means
//! the whole suggestion *is* the proposed content — never an error.

use once_cell::sync::Lazy;
use regex::Regex;

static AFTER_QUOTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)After:\s*'([^']*)'").expect("after pattern must compile"));
static AFTER_BARE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)After:\s*(.+)").expect("bare after pattern must compile"));
static BEFORE_QUOTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Before:\s*'([^']*)'").expect("before pattern must compile"));
static BEFORE_BARE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Before:\s*(.+)").expect("bare before pattern must compile"));
static AFTER_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)After:").expect("after marker must compile"));

/// Returns the proposed replacement content of a suggestion.
///
/// Resolution order: a line starting with `After:` (prefix stripped, one
/// layer of surrounding quotes removed), a quoted inline capture, a
/// quote-less capture, and finally the entire text unchanged.
pub fn parse_after_content(text: &str) -> String {
    for line in text.lines() {
        if let Some(rest) = strip_prefix_ci(line.trim(), "after:") {
            return strip_quotes(rest.trim()).to_string();
        }
    }
    if let Some(caps) = AFTER_QUOTED_RE.captures(text) {
        return caps[1].trim().to_string();
    }
    if let Some(caps) = AFTER_BARE_RE.captures(text) {
        return strip_quotes(caps[1].trim()).to_string();
    }
    text.to_string()
}

/// Returns the quoted/labelled "Before" content, or an empty string when the
/// text carries no `Before:` marker (unlike `parse_after_content`, there is
/// no whole-text fallback — the original value is never guessed).
pub fn parse_before_content(text: &str) -> String {
    if let Some(caps) = BEFORE_QUOTED_RE.captures(text) {
        return caps[1].trim().to_string();
    }
    if let Some(caps) = BEFORE_BARE_RE.captures(text) {
        let content = caps[1].trim();
        // An inline "After:" on the same line delimits the before-content.
        let content = match AFTER_MARKER_RE.find(content) {
            Some(m) => content[..m.start()].trim_end(),
            None => content,
        };
        return strip_quotes(content).to_string();
    }
    String::new()
}

/// Case-insensitive ASCII prefix strip, safe on multi-byte input.
fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if text.len() >= prefix.len()
        && text.is_char_boundary(prefix.len())
        && text[..prefix.len()].eq_ignore_ascii_case(prefix)
    {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}

/// Removes one layer of matching surrounding straight quotes.
fn strip_quotes(text: &str) -> &str {
    for quote in ['\'', '"'] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}
