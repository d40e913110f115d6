//! Education extraction.

use crate::extract::dates::parse_date_range;
use crate::extract::{content_lines, matches_keyword};
use crate::models::cv::Education;

const SECTION_HEADERS: &[&str] = &["học vấn", "education", "academic", "bằng cấp"];

const SECTION_STOPS: &[&str] = &[
    "kỹ năng",
    "skills",
    "kinh nghiệm",
    "experience",
    "chứng chỉ",
    "certificat",
];

/// Scans the text for an education section. Same line machine as the
/// experience extractor with field order school → degree → field and no
/// description accumulation.
pub fn extract_educations(text: &str) -> Vec<Education> {
    let mut educations = Vec::new();
    let mut inside = false;
    let mut current: Option<Education> = None;

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
            let absorbs_dates = current
                .as_ref()
                .is_some_and(|entry| entry.start_date.is_empty());
            if !absorbs_dates {
                flush(&mut current, &mut educations);
            }
            let entry = current.get_or_insert_with(Education::new);
            entry.start_date = range.start;
            entry.end_date = range.end;
            continue;
        }

        let entry = current.get_or_insert_with(Education::new);
        let length = line.chars().count();
        if entry.school.is_empty() && length > 2 {
            entry.school = line.to_string();
        } else if entry.degree.is_empty() && length > 2 {
            entry.degree = line.to_string();
        } else if entry.field.is_empty() && length > 2 {
            entry.field = line.to_string();
        }
    }

    flush(&mut current, &mut educations);
    educations
}

fn flush(current: &mut Option<Education>, out: &mut Vec<Education>) {
    if let Some(entry) = current.take() {
        if entry.has_content() {
            out.push(entry);
        }
    }
}
