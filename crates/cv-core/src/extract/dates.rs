//! Date-range line recognition.
//!
//! A line consisting solely of a date, or a date pair joined by a range
//! separator, marks an entry boundary inside Experience/Education sections.
//! Values are captured verbatim; canonicalization happens at enhancement.

use once_cell::sync::Lazy;
use regex::Regex;

// Accepted forms: M/YYYY, YYYY-MM, bare YYYY, optionally followed by a
// separator and a second date or an "ongoing" token. Anchored to the whole
// line so prose mentioning a year does not open a new entry.
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)^
          (\d{1,2}/\d{4}|\d{4}-\d{2}\b|\d{4})
          (?:\s*(?:[-–—→]|to|đến)?\s*
            (\d{1,2}/\d{4}|\d{4}-\d{2}\b|\d{4}|present|hiện\ tại|nay)
          )?$",
    )
    .expect("date range pattern must compile")
});

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DateRange {
    pub start: String,
    pub end: String,
}

/// Parses a line that is entirely a date range. A missing or "ongoing"
/// second date yields the `Present` token.
pub(crate) fn parse_date_range(line: &str) -> Option<DateRange> {
    let caps = DATE_RANGE_RE.captures(line.trim())?;
    let start = caps[1].to_string();
    let end = match caps.get(2) {
        Some(m) => {
            let token = m.as_str().to_lowercase();
            if token == "present" || token == "hiện tại" || token == "nay" {
                "Present".to_string()
            } else {
                m.as_str().to_string()
            }
        }
        None => "Present".to_string(),
    };
    Some(DateRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(line: &str) -> DateRange {
        parse_date_range(line).unwrap_or_else(|| panic!("expected a date range in {line:?}"))
    }

    #[test]
    fn test_year_pair() {
        let r = range("2020-2022");
        assert_eq!(r.start, "2020");
        assert_eq!(r.end, "2022");
    }

    #[test]
    fn test_year_pair_spaced_dash() {
        let r = range("2020 - 2022");
        assert_eq!(r.start, "2020");
        assert_eq!(r.end, "2022");
    }

    #[test]
    fn test_month_slash_pair() {
        let r = range("01/2020 - 03/2022");
        assert_eq!(r.start, "01/2020");
        assert_eq!(r.end, "03/2022");
    }

    #[test]
    fn test_bare_year_defaults_to_present() {
        let r = range("2020");
        assert_eq!(r.start, "2020");
        assert_eq!(r.end, "Present");
    }

    #[test]
    fn test_single_year_month_is_a_start_date() {
        let r = range("2021-03");
        assert_eq!(r.start, "2021-03");
        assert_eq!(r.end, "Present");
    }

    #[test]
    fn test_ongoing_tokens_map_to_present() {
        assert_eq!(range("2020 - present").end, "Present");
        assert_eq!(range("2020 - hiện tại").end, "Present");
        assert_eq!(range("03/2020 đến nay").end, "Present");
    }

    #[test]
    fn test_prose_with_a_year_is_not_a_date_line() {
        assert!(parse_date_range("Built 3 services during 2020").is_none());
        assert!(parse_date_range("Shipped v2020 release").is_none());
    }

    #[test]
    fn test_plain_text_is_not_a_date_line() {
        assert!(parse_date_range("Acme Corp").is_none());
    }
}
