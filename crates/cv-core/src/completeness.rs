//! Completeness scoring and user-facing improvement advice.
//!
//! The rubric is two-tier per section: having any entry earns a base award,
//! and having at least one fully-filled entry earns a bonus, so partially
//! entered data is rewarded without requiring every entry to be complete.

use tracing::debug;

use crate::models::cv::ParsedCv;
use crate::normalize::{validate_email, validate_phone};
use crate::validation::validate_cv;

// Additive rubric, capped at 100.
const FULLNAME_POINTS: u32 = 10;
const EMAIL_POINTS: u32 = 10;
const PHONE_POINTS: u32 = 5;
const LOCATION_POINTS: u32 = 5;
const SUMMARY_POINTS: u32 = 10;
const EXPERIENCE_ANY_POINTS: u32 = 15;
const EXPERIENCE_COMPLETE_POINTS: u32 = 15;
const EDUCATION_ANY_POINTS: u32 = 10;
const EDUCATION_COMPLETE_POINTS: u32 = 10;
const SKILLS_FULL_POINTS: u32 = 10;
const SKILLS_PARTIAL_POINTS: u32 = 5;

const LOW_SCORE_THRESHOLD: u32 = 50;

/// Heuristic quality metric in `[0, 100]`, monotonic in field presence.
pub fn completeness_score(cv: &ParsedCv) -> u32 {
    let mut score = 0;
    let info = &cv.personal_info;

    if info.has_fullname() {
        score += FULLNAME_POINTS;
    }
    if validate_email(&info.email) {
        score += EMAIL_POINTS;
    }
    if validate_phone(&info.phone) {
        score += PHONE_POINTS;
    }
    if !info.location.trim().is_empty() {
        score += LOCATION_POINTS;
    }
    if !info.summary.trim().is_empty() {
        score += SUMMARY_POINTS;
    }

    if !cv.experiences.is_empty() {
        score += EXPERIENCE_ANY_POINTS;
        if cv.experiences.iter().any(|e| e.is_complete()) {
            score += EXPERIENCE_COMPLETE_POINTS;
        }
    }

    if !cv.educations.is_empty() {
        score += EDUCATION_ANY_POINTS;
        if cv.educations.iter().any(|e| e.is_complete()) {
            score += EDUCATION_COMPLETE_POINTS;
        }
    }

    match cv.skills.len() {
        0 => {}
        1 | 2 => score += SKILLS_PARTIAL_POINTS,
        _ => score += SKILLS_FULL_POINTS,
    }

    let score = score.min(100);
    debug!(score, "computed completeness score");
    score
}

/// Human-readable advice derived from the score, presence checks, and every
/// validation warning (passed through verbatim behind a marker glyph).
pub fn suggest_improvements(cv: &ParsedCv) -> Vec<String> {
    let mut suggestions = Vec::new();

    if completeness_score(cv) < LOW_SCORE_THRESHOLD {
        suggestions.push("CV của bạn còn thiếu nhiều thông tin quan trọng".to_string());
    }
    if cv.personal_info.summary.trim().is_empty() {
        suggestions
            .push("Thêm phần giới thiệu bản thân để gây ấn tượng với nhà tuyển dụng".to_string());
    }
    if cv.experiences.is_empty() {
        suggestions.push("Thêm kinh nghiệm làm việc của bạn".to_string());
    } else if cv.experiences.iter().any(|e| e.description.trim().is_empty()) {
        suggestions.push("Mô tả chi tiết công việc trong từng kinh nghiệm".to_string());
    }
    if cv.skills.len() < 3 {
        suggestions.push("Liệt kê ít nhất 3 kỹ năng nổi bật".to_string());
    }

    for warning in validate_cv(cv).warnings {
        suggestions.push(format!("⚠ {warning}"));
    }

    suggestions
}
