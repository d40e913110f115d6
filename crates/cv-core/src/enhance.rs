//! CV enhancement — canonicalizes an assembled CV with the field
//! normalizers. Pure value transform, no I/O; applying it twice is a no-op.

use crate::models::cv::{Education, Experience, ParsedCv, PersonalInfo};
use crate::normalize::{clean_text, format_date, format_phone};

/// Returns a new CV with cleaned text fields, a lowercased email, a
/// display-formatted phone, canonical dates and a deduplicated skill list.
pub fn enhance_cv(cv: &ParsedCv) -> ParsedCv {
    let personal_info = PersonalInfo {
        fullname: clean_text(&cv.personal_info.fullname),
        email: clean_text(&cv.personal_info.email).to_lowercase(),
        phone: format_phone(&clean_text(&cv.personal_info.phone)),
        location: clean_text(&cv.personal_info.location),
        summary: clean_text(&cv.personal_info.summary),
        avatar_url: cv.personal_info.avatar_url.clone(),
    };

    let experiences = cv
        .experiences
        .iter()
        .map(|e| Experience {
            id: e.id,
            company: clean_text(&e.company),
            position: clean_text(&e.position),
            start_date: format_date(&e.start_date),
            end_date: format_date(&e.end_date),
            description: clean_text(&e.description),
        })
        .collect();

    let educations = cv
        .educations
        .iter()
        .map(|e| Education {
            id: e.id,
            school: clean_text(&e.school),
            degree: clean_text(&e.degree),
            field: clean_text(&e.field),
            start_date: format_date(&e.start_date),
            end_date: format_date(&e.end_date),
        })
        .collect();

    let mut skills: Vec<String> = Vec::new();
    for skill in &cv.skills {
        let cleaned = clean_text(skill);
        if !cleaned.is_empty() && !skills.contains(&cleaned) {
            skills.push(cleaned);
        }
    }

    ParsedCv {
        title: clean_text(&cv.title),
        personal_info,
        experiences,
        educations,
        skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messy_cv() -> ParsedCv {
        let mut experience = Experience::new();
        experience.company = "  Acme   Corp ".to_string();
        experience.position = "Engineer".to_string();
        experience.start_date = "3/2020".to_string();
        experience.end_date = "present".to_string();
        experience.description = "Built   things".to_string();

        let mut education = Education::new();
        education.school = " Đại học  Bách Khoa ".to_string();
        education.degree = "Kỹ sư".to_string();
        education.start_date = "2016".to_string();
        education.end_date = "2020".to_string();

        ParsedCv {
            title: " my cv ".to_string(),
            personal_info: PersonalInfo {
                fullname: "  Nguyễn  Văn An ".to_string(),
                email: " An.Nguyen@Example.COM ".to_string(),
                phone: "0912 345 678".to_string(),
                location: "Hà Nội".to_string(),
                summary: String::new(),
                avatar_url: String::new(),
            },
            experiences: vec![experience],
            educations: vec![education],
            skills: vec![
                " Rust ".to_string(),
                "Docker".to_string(),
                "Rust".to_string(),
                "   ".to_string(),
            ],
        }
    }

    #[test]
    fn test_personal_fields_are_cleaned_and_email_lowercased() {
        let enhanced = enhance_cv(&messy_cv());
        assert_eq!(enhanced.personal_info.fullname, "Nguyễn Văn An");
        assert_eq!(enhanced.personal_info.email, "an.nguyen@example.com");
        assert_eq!(enhanced.personal_info.phone, "0912-345-678");
    }

    #[test]
    fn test_dates_are_canonicalized() {
        let enhanced = enhance_cv(&messy_cv());
        assert_eq!(enhanced.experiences[0].start_date, "2020-03");
        assert_eq!(enhanced.experiences[0].end_date, "Present");
        assert_eq!(enhanced.educations[0].start_date, "2016-01");
        assert_eq!(enhanced.educations[0].end_date, "2020-01");
    }

    #[test]
    fn test_skills_deduplicated_order_preserving_and_nonempty() {
        let enhanced = enhance_cv(&messy_cv());
        assert_eq!(enhanced.skills, vec!["Rust", "Docker"]);
    }

    #[test]
    fn test_entry_ids_survive_enhancement() {
        let cv = messy_cv();
        let enhanced = enhance_cv(&cv);
        assert_eq!(enhanced.experiences[0].id, cv.experiences[0].id);
        assert_eq!(enhanced.educations[0].id, cv.educations[0].id);
    }

    #[test]
    fn test_enhancement_is_idempotent() {
        let once = enhance_cv(&messy_cv());
        let twice = enhance_cv(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_enhancement_does_not_mutate_input() {
        let cv = messy_cv();
        let _ = enhance_cv(&cv);
        assert_eq!(cv.personal_info.email, " An.Nguyen@Example.COM ");
        assert_eq!(cv.skills.len(), 4);
    }
}
