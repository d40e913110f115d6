//! Field normalizers — pure, total functions over extracted field values.
//!
//! Unrecognized formats pass through unchanged; correctness is reported
//! downstream as validation warnings, never as errors raised here.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern must compile")
});

// Vietnamese mobile numbers: optional +84/84 country prefix or a leading 0,
// then a carrier digit and eight more digits.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+?84|0)(?:3|5|7|8|9)\d{8}$").expect("phone pattern must compile")
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").expect("year pattern"));
static MONTH_SLASH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{4})$").expect("m/yyyy pattern"));
static YEAR_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("yyyy-mm pattern"));

static NON_NEWLINE_WS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\S\n]+").expect("whitespace pattern"));
static NEWLINE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\n\s*").expect("newline run pattern"));

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Accepts Vietnamese mobile formats with or without `+84`, ignoring
/// spacing/grouping characters, so both raw and display-formatted values pass.
pub fn validate_phone(phone: &str) -> bool {
    let compact: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-'))
        .collect();
    PHONE_RE.is_match(&compact)
}

/// Rewrites a recognized mobile number into a grouped display form.
/// Anything else is returned unchanged.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 11 && digits.starts_with("84") {
        let rest = &digits[2..];
        format!("+84 {}-{}-{}", &rest[..3], &rest[3..6], &rest[6..])
    } else if digits.len() == 10 && digits.starts_with('0') {
        format!("{}-{}-{}", &digits[..4], &digits[4..7], &digits[7..])
    } else {
        phone.to_string()
    }
}

/// `Present` (any case), `YYYY`, `M/YYYY`, `MM/YYYY` and `YYYY-MM` are valid.
pub fn validate_date(date: &str) -> bool {
    let d = date.trim();
    d.eq_ignore_ascii_case("present")
        || YEAR_RE.is_match(d)
        || MONTH_SLASH_RE.is_match(d)
        || YEAR_MONTH_RE.is_match(d)
}

/// Canonicalizes recognized date forms to `YYYY-MM`, padding the month and
/// defaulting bare years to January. `present` maps to the `Present` token.
/// Unrecognized input passes through unchanged.
pub fn format_date(date: &str) -> String {
    let d = date.trim();
    if d.eq_ignore_ascii_case("present") {
        return "Present".to_string();
    }
    if YEAR_RE.is_match(d) {
        return format!("{d}-01");
    }
    if let Some(caps) = MONTH_SLASH_RE.captures(d) {
        return format!("{}-{:0>2}", &caps[2], &caps[1]);
    }
    if YEAR_MONTH_RE.is_match(d) {
        return d.to_string();
    }
    date.to_string()
}

/// Collapses horizontal whitespace runs to one space and newline runs to one
/// newline, then trims.
pub fn clean_text(text: &str) -> String {
    let collapsed = NON_NEWLINE_WS_RE.replace_all(text, " ");
    let collapsed = NEWLINE_RUN_RE.replace_all(&collapsed, "\n");
    collapsed.trim().to_string()
}
