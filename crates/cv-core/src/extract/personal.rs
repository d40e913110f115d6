//! Personal information extraction.
//!
//! Unlike the entry-list extractors this one has no header state machine:
//! contact details are matched anywhere in the text, and the name is picked
//! from the top lines by a shape filter.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::{content_lines, matches_keyword};
use crate::models::cv::{PersonalInfo, PLACEHOLDER};

static EMAIL_SEARCH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("email search pattern must compile")
});

static PHONE_SEARCH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?84|0)(?:[\s.\-]?\d){9}").expect("phone search pattern must compile")
});

static LONG_DIGIT_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{9,}").expect("digit run pattern must compile"));

const ADDRESS_KEYWORDS: &[&str] = &["địa chỉ", "address", "location", "nơi ở", "thành phố"];

// How many leading lines are candidates for the name.
const NAME_SCAN_WINDOW: usize = 5;

pub fn extract_personal_info(text: &str) -> PersonalInfo {
    let lines = content_lines(text);

    let email = EMAIL_SEARCH_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let phone = PHONE_SEARCH_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let fullname = lines
        .iter()
        .take(NAME_SCAN_WINDOW)
        .find(|line| looks_like_name(line))
        .map(|line| line.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let location = lines
        .iter()
        .find(|line| matches_keyword(line, ADDRESS_KEYWORDS))
        .map(|line| after_last_colon(line).to_string())
        .unwrap_or_default();

    PersonalInfo {
        fullname,
        email,
        phone,
        location,
        summary: String::new(),
        avatar_url: String::new(),
    }
}

/// A personal name: short-ish, no contact detail markers, not a document
/// title like "CV - Nguyễn Văn An".
fn looks_like_name(line: &str) -> bool {
    let length = line.chars().count();
    if length <= 3 || length >= 50 {
        return false;
    }
    if line.contains('@') || LONG_DIGIT_RUN_RE.is_match(line) {
        return false;
    }
    let lower = line.to_lowercase();
    !lower.contains("cv") && !lower.contains("resume")
}

fn after_last_colon(line: &str) -> &str {
    line.rsplit(':').next().unwrap_or(line).trim()
}
