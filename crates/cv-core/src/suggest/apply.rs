//! Suggestion application — routes a suggestion to the CV field(s) named by
//! its free-text section label.
//!
//! Experience/education entry recovery is heuristic: an explicit
//! `line_number` wins, then a company/school name mentioned in the message,
//! then a `Before:` content match, and finally the first entry. The last
//! tier knowingly accepts a false-positive target over silently dropping the
//! suggestion; callers needing certainty should send a `line_number`. With
//! several similarly-worded roles the name/content tiers can still pick the
//! wrong entry — an accepted precision limit of the message-text heuristics.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::extract::skills::split_skill_line;
use crate::models::cv::{Cv, Education, Experience};
use crate::models::suggestion::Suggestion;
use crate::suggest::after::{parse_after_content, parse_before_content};

// "... at Acme Corp ..." / "... tại FPT Software ..." in suggestion messages.
static ENTITY_IN_MESSAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:at|tại)\s+([^.]+)").expect("entity pattern must compile"));

// First characters of the Before-content used for description matching.
const BEFORE_MATCH_PREFIX_CHARS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionTarget {
    Summary,
    Experience,
    Education,
    Skills,
    Title,
    Fullname,
    Email,
    Phone,
    Location,
}

// Normalized label → handler. English and Vietnamese synonyms.
const SECTION_VOCABULARY: &[(&str, SectionTarget)] = &[
    ("summary", SectionTarget::Summary),
    ("tóm tắt", SectionTarget::Summary),
    ("giới thiệu", SectionTarget::Summary),
    ("personal", SectionTarget::Summary),
    ("personal info", SectionTarget::Summary),
    ("thông tin cá nhân", SectionTarget::Summary),
    ("experience", SectionTarget::Experience),
    ("work experience", SectionTarget::Experience),
    ("kinh nghiệm", SectionTarget::Experience),
    ("kinh nghiệm làm việc", SectionTarget::Experience),
    ("education", SectionTarget::Education),
    ("học vấn", SectionTarget::Education),
    ("skill", SectionTarget::Skills),
    ("skills", SectionTarget::Skills),
    ("kỹ năng", SectionTarget::Skills),
    ("title", SectionTarget::Title),
    ("tiêu đề", SectionTarget::Title),
    ("name", SectionTarget::Fullname),
    ("fullname", SectionTarget::Fullname),
    ("full name", SectionTarget::Fullname),
    ("họ tên", SectionTarget::Fullname),
    ("email", SectionTarget::Email),
    ("phone", SectionTarget::Phone),
    ("số điện thoại", SectionTarget::Phone),
    ("location", SectionTarget::Location),
    ("địa chỉ", SectionTarget::Location),
];

impl SectionTarget {
    fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();
        SECTION_VOCABULARY
            .iter()
            .find(|(keyword, _)| *keyword == normalized)
            .map(|(_, target)| *target)
    }
}

/// Applies one suggestion to a CV, returning the patched copy with a fresh
/// `updated_at`. Returns `None` when the section label is outside the known
/// vocabulary — the caller surfaces that as "suggestion not applicable".
/// The input CV is never mutated.
pub fn apply_suggestion_to_cv(cv: &Cv, suggestion: &Suggestion) -> Option<Cv> {
    let target = match SectionTarget::from_label(&suggestion.section) {
        Some(target) => target,
        None => {
            warn!(section = %suggestion.section, "unrecognized suggestion section");
            return None;
        }
    };

    let after = parse_after_content(&suggestion.suggestion);
    let mut updated = cv.clone();

    match target {
        SectionTarget::Summary => {
            set_if_nonempty(&mut updated.data.personal_info.summary, &after)
        }
        SectionTarget::Title => set_if_nonempty(&mut updated.data.title, &after),
        SectionTarget::Fullname => {
            set_if_nonempty(&mut updated.data.personal_info.fullname, &after)
        }
        SectionTarget::Email => set_if_nonempty(&mut updated.data.personal_info.email, &after),
        SectionTarget::Phone => set_if_nonempty(&mut updated.data.personal_info.phone, &after),
        SectionTarget::Location => {
            set_if_nonempty(&mut updated.data.personal_info.location, &after)
        }
        SectionTarget::Experience => {
            apply_to_experience(&mut updated.data.experiences, suggestion, &after)
        }
        SectionTarget::Education => {
            apply_to_education(&mut updated.data.educations, suggestion, &after)
        }
        SectionTarget::Skills => merge_skills(&mut updated.data.skills, &after),
    }

    updated.updated_at = Utc::now();
    Some(updated)
}

/// Scalar fields: an empty after-content is a no-op, not a clear.
fn set_if_nonempty(field: &mut String, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        *field = value.to_string();
    }
}

fn apply_to_experience(experiences: &mut [Experience], suggestion: &Suggestion, after: &str) {
    if after.trim().is_empty() {
        return;
    }
    if let Some(index) = match_experience_index(experiences, suggestion) {
        experiences[index].description = after.trim().to_string();
    }
}

fn match_experience_index(experiences: &[Experience], suggestion: &Suggestion) -> Option<usize> {
    if experiences.is_empty() {
        return None;
    }
    if let Some(index) = suggestion.line_number {
        if index < experiences.len() {
            return Some(index);
        }
    }

    if let Some(candidate) = entity_from_message(&suggestion.message) {
        if let Some(index) = experiences.iter().position(|e| {
            let company = e.company.to_lowercase();
            !company.is_empty() && (company.contains(&candidate) || candidate.contains(&company))
        }) {
            debug!(index, "matched experience by company mentioned in message");
            return Some(index);
        }
    }

    let before = parse_before_content(&suggestion.suggestion);
    if !before.is_empty() {
        let prefix: String = before.chars().take(BEFORE_MATCH_PREFIX_CHARS).collect();
        if let Some(index) = experiences
            .iter()
            .position(|e| e.description.contains(&prefix))
        {
            debug!(index, "matched experience by before-content");
            return Some(index);
        }
    }

    warn!("no experience entry matched; falling back to the first");
    Some(0)
}

fn apply_to_education(educations: &mut [Education], suggestion: &Suggestion, after: &str) {
    if after.trim().is_empty() {
        return;
    }
    if let Some(index) = match_education_index(educations, suggestion) {
        educations[index].degree = after.trim().to_string();
    }
}

fn match_education_index(educations: &[Education], suggestion: &Suggestion) -> Option<usize> {
    if educations.is_empty() {
        return None;
    }
    if let Some(index) = suggestion.line_number {
        if index < educations.len() {
            return Some(index);
        }
    }
    if let Some(candidate) = entity_from_message(&suggestion.message) {
        if let Some(index) = educations.iter().position(|e| {
            let school = e.school.to_lowercase();
            !school.is_empty() && (school.contains(&candidate) || candidate.contains(&school))
        }) {
            debug!(index, "matched education by school mentioned in message");
            return Some(index);
        }
    }
    warn!("no education entry matched; falling back to the first");
    Some(0)
}

fn entity_from_message(message: &str) -> Option<String> {
    let caps = ENTITY_IN_MESSAGE_RE.captures(message)?;
    let candidate = caps[1].trim().to_lowercase();
    if candidate.is_empty() {
        None
    } else {
        Some(candidate)
    }
}

/// Skills suggestions are additive: the after-content is split with the
/// skills-list delimiter convention and unioned into the existing list.
fn merge_skills(skills: &mut Vec<String>, after: &str) {
    for line in after.lines() {
        for token in split_skill_line(strip_list_label(line)) {
            if !skills.contains(&token) {
                skills.push(token);
            }
        }
    }
}

/// Drops a leading `Technical Skills:` / `Kỹ năng mềm:`-style label.
fn strip_list_label(line: &str) -> &str {
    if let Some(idx) = line.find(':') {
        let label = line[..idx].to_lowercase();
        if label.contains("skill") || label.contains("kỹ năng") {
            return &line[idx + 1..];
        }
    }
    line
}
