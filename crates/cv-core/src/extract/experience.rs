//! Work experience extraction.

use crate::extract::dates::parse_date_range;
use crate::extract::{content_lines, matches_keyword};
use crate::models::cv::Experience;

const SECTION_HEADERS: &[&str] = &[
    "kinh nghiệm",
    "experience",
    "employment",
    "work history",
    "quá trình làm việc",
];

// Headers of sections that conventionally follow experience; any of them
// closes the section.
const SECTION_STOPS: &[&str] = &["học vấn", "education", "academic", "kỹ năng", "skills"];

/// Scans the text for an experience section and assembles its entries.
///
/// Inside the section, a date-range line either attaches to the entry being
/// accumulated (when it has no dates yet) or flushes it and opens the next
/// one. Non-date lines fill `company`, then `position`, then append to
/// `description`; ordinal position after the dates is the most reliable
/// signal in unlabeled layouts.
pub fn extract_experiences(text: &str) -> Vec<Experience> {
    let mut experiences = Vec::new();
    let mut inside = false;
    let mut current: Option<Experience> = None;

    for line in content_lines(text) {
        if !inside {
            if matches_keyword(line, SECTION_HEADERS) {
                inside = true;
            }
            continue;
        }
        if matches_keyword(line, SECTION_STOPS) {
            break;
        }

        if let Some(range) = parse_date_range(line) {
            // A dated accumulator means this line opens the next entry;
            // a dateless one (company-first layout) absorbs the dates.
            let absorbs_dates = current
                .as_ref()
                .is_some_and(|entry| entry.start_date.is_empty());
            if !absorbs_dates {
                flush(&mut current, &mut experiences);
            }
            let entry = current.get_or_insert_with(Experience::new);
            entry.start_date = range.start;
            entry.end_date = range.end;
            continue;
        }

        let entry = current.get_or_insert_with(Experience::new);
        let length = line.chars().count();
        if entry.company.is_empty() && length > 2 {
            entry.company = line.to_string();
        } else if entry.position.is_empty() && length > 2 {
            entry.position = line.to_string();
        } else if length > 10 {
            if !entry.description.is_empty() {
                entry.description.push(' ');
            }
            entry.description.push_str(line);
        }
    }

    flush(&mut current, &mut experiences);
    experiences
}

fn flush(current: &mut Option<Experience>, out: &mut Vec<Experience>) {
    if let Some(entry) = current.take() {
        if entry.has_content() {
            out.push(entry);
        }
    }
}
