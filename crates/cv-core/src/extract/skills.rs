//! Skills extraction.

use crate::extract::{content_lines, matches_keyword};

const SECTION_HEADERS: &[&str] = &["kỹ năng", "skills", "chuyên môn", "technologies"];

const SECTION_STOPS: &[&str] = &[
    "kinh nghiệm",
    "experience",
    "học vấn",
    "education",
    "chứng chỉ",
    "certificat",
    "sở thích",
    "interests",
    "người tham chiếu",
    "references",
    "dự án",
    "projects",
];

const SKILL_DELIMITERS: &[char] = &[',', ';', '•', '-', '|'];

/// Scans the text for a skills section and collects a deduplicated,
/// first-seen-ordered list of short skill tokens.
pub fn extract_skills(text: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    let mut inside = false;

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
        for skill in split_skill_line(line) {
            if !skills.contains(&skill) {
                skills.push(skill);
            }
        }
    }

    skills
}

/// Splits one list-style line on the delimiter convention used by résumé
/// skill sections and keeps only plausibly-sized tokens.
pub(crate) fn split_skill_line(line: &str) -> Vec<String> {
    line.split(SKILL_DELIMITERS)
        .map(str::trim)
        .filter(|token| {
            let length = token.chars().count();
            length > 2 && length < 50
        })
        .map(str::to_string)
        .collect()
}
