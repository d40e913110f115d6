//! CV validation — inspects a structured CV and produces a fixed-order
//! error/warning list. Errors block validity; warnings are advisory only.

use serde::{Deserialize, Serialize};

use crate::models::cv::ParsedCv;
use crate::normalize::{validate_date, validate_email, validate_phone};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Check order is fixed (personal info → experience → education → skills)
/// so message lists are deterministic for a given CV.
pub fn validate_cv(cv: &ParsedCv) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let info = &cv.personal_info;

    if !info.has_fullname() {
        errors.push("Vui lòng nhập họ tên".to_string());
    }
    if info.email.trim().is_empty() {
        errors.push("Vui lòng nhập email".to_string());
    } else if !validate_email(&info.email) {
        errors.push("Email không hợp lệ".to_string());
    }
    if info.phone.trim().is_empty() {
        warnings.push("Chưa có số điện thoại".to_string());
    } else if !validate_phone(&info.phone) {
        warnings.push("Số điện thoại không hợp lệ".to_string());
    }

    if cv.experiences.is_empty() {
        warnings.push("Chưa có kinh nghiệm làm việc".to_string());
    }
    for (index, experience) in cv.experiences.iter().enumerate() {
        let position = index + 1;
        if experience.company.trim().is_empty() {
            warnings.push(format!("Kinh nghiệm #{position}: thiếu tên công ty"));
        }
        if experience.position.trim().is_empty() {
            warnings.push(format!("Kinh nghiệm #{position}: thiếu vị trí"));
        }
        if !experience.start_date.is_empty() && !validate_date(&experience.start_date) {
            warnings.push(format!(
                "Kinh nghiệm #{position}: ngày bắt đầu không hợp lệ"
            ));
        }
        if !experience.end_date.is_empty() && !validate_date(&experience.end_date) {
            warnings.push(format!(
                "Kinh nghiệm #{position}: ngày kết thúc không hợp lệ"
            ));
        }
    }

    if cv.educations.is_empty() {
        warnings.push("Chưa có thông tin học vấn".to_string());
    }
    for (index, education) in cv.educations.iter().enumerate() {
        let position = index + 1;
        if education.school.trim().is_empty() {
            warnings.push(format!("Học vấn #{position}: thiếu tên trường"));
        }
        if education.degree.trim().is_empty() {
            warnings.push(format!("Học vấn #{position}: thiếu bằng cấp"));
        }
    }

    if cv.skills.is_empty() {
        warnings.push("Chưa có kỹ năng nào".to_string());
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{Experience, PersonalInfo, PLACEHOLDER};

    fn valid_cv() -> ParsedCv {
        let mut experience = Experience::new();
        experience.company = "Acme Corp".to_string();
        experience.position = "Engineer".to_string();
        experience.start_date = "2020-01".to_string();
        experience.end_date = "Present".to_string();
        experience.description = "Built the billing system".to_string();

        ParsedCv {
            title: "cv".to_string(),
            personal_info: PersonalInfo {
                fullname: "Nguyễn Văn An".to_string(),
                email: "an@example.com".to_string(),
                phone: "0912345678".to_string(),
                location: "Hà Nội".to_string(),
                summary: "Backend engineer".to_string(),
                avatar_url: String::new(),
            },
            experiences: vec![experience],
            educations: vec![],
            skills: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn test_valid_cv_has_no_errors() {
        let result = validate_cv(&valid_cv());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_placeholder_fullname_is_an_error() {
        let mut cv = valid_cv();
        cv.personal_info.fullname = PLACEHOLDER.to_string();
        let result = validate_cv(&cv);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Vui lòng nhập họ tên"]);
    }

    #[test]
    fn test_missing_email_is_an_error() {
        let mut cv = valid_cv();
        cv.personal_info.email = String::new();
        let result = validate_cv(&cv);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Vui lòng nhập email"]);
    }

    #[test]
    fn test_invalid_email_is_an_error() {
        let mut cv = valid_cv();
        cv.personal_info.email = "not-an-email".to_string();
        let result = validate_cv(&cv);
        assert_eq!(result.errors, vec!["Email không hợp lệ"]);
    }

    #[test]
    fn test_warnings_do_not_block_validity() {
        let mut cv = valid_cv();
        cv.personal_info.phone = String::new();
        cv.experiences.clear();
        cv.skills.clear();
        let result = validate_cv(&cv);
        assert!(result.is_valid);
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_warning_order_is_deterministic() {
        let mut cv = valid_cv();
        cv.personal_info.phone = String::new();
        cv.experiences.clear();
        cv.skills.clear();
        let result = validate_cv(&cv);
        assert_eq!(
            result.warnings,
            vec![
                "Chưa có số điện thoại",
                "Chưa có kinh nghiệm làm việc",
                "Chưa có thông tin học vấn",
                "Chưa có kỹ năng nào",
            ]
        );
    }

    #[test]
    fn test_per_experience_warnings_carry_entry_number() {
        let mut cv = valid_cv();
        cv.experiences[0].company = String::new();
        cv.experiences[0].start_date = "garbage".to_string();
        let result = validate_cv(&cv);
        assert!(result
            .warnings
            .contains(&"Kinh nghiệm #1: thiếu tên công ty".to_string()));
        assert!(result
            .warnings
            .contains(&"Kinh nghiệm #1: ngày bắt đầu không hợp lệ".to_string()));
    }

    #[test]
    fn test_validity_implies_real_name_and_valid_email() {
        let cv = valid_cv();
        let result = validate_cv(&cv);
        if result.is_valid {
            assert!(cv.personal_info.has_fullname());
            assert!(crate::normalize::validate_email(&cv.personal_info.email));
        }
    }
}
