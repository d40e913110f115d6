use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel rendered by the UI for fields with no recoverable value.
/// Kept in-band (instead of `Option`) because every field is always displayed.
pub const PLACEHOLDER: &str = "Chưa có thông tin";

/// Token stored in `end_date` for an ongoing position or study period.
pub const PRESENT: &str = "Present";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub avatar_url: String,
}

impl PersonalInfo {
    /// True when the fullname carries real content rather than the sentinel.
    pub fn has_fullname(&self) -> bool {
        !self.fullname.trim().is_empty() && self.fullname != PLACEHOLDER
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl Experience {
    /// Empty entry with a freshly generated id. Ids exist only for list
    /// identity on the client, never for business logic.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }

    pub fn has_content(&self) -> bool {
        !self.company.is_empty()
            || !self.position.is_empty()
            || !self.start_date.is_empty()
            || !self.description.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        !self.company.is_empty()
            && !self.position.is_empty()
            && !self.start_date.is_empty()
            && !self.end_date.is_empty()
            && !self.description.is_empty()
    }
}

impl Default for Experience {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
}

impl Education {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            school: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }

    pub fn has_content(&self) -> bool {
        !self.school.is_empty()
            || !self.degree.is_empty()
            || !self.field.is_empty()
            || !self.start_date.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        !self.school.is_empty()
            && !self.degree.is_empty()
            && !self.field.is_empty()
            && !self.start_date.is_empty()
            && !self.end_date.is_empty()
    }
}

impl Default for Education {
    fn default() -> Self {
        Self::new()
    }
}

/// Structured content recovered from one uploaded document.
///
/// `title` comes from the source filename, not from document content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCv {
    pub title: String,
    pub personal_info: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub skills: Vec<String>,
}

/// A stored CV record: parsed content plus ownership and lifecycle metadata.
///
/// Values are never mutated in place — every edit produces a new `Cv` with a
/// fresh `updated_at` so client-side snapshots stay consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cv {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(flatten)]
    pub data: ParsedCv,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_experience_has_fresh_id() {
        let a = Experience::new();
        let b = Experience::new();
        assert!(!a.id.is_nil());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_placeholder_name_is_not_real_content() {
        let info = PersonalInfo {
            fullname: PLACEHOLDER.to_string(),
            ..Default::default()
        };
        assert!(!info.has_fullname());
    }

    #[test]
    fn test_real_name_counts_as_content() {
        let info = PersonalInfo {
            fullname: "Nguyễn Văn An".to_string(),
            ..Default::default()
        };
        assert!(info.has_fullname());
    }

    #[test]
    fn test_experience_completeness() {
        let mut e = Experience::new();
        assert!(!e.has_content());
        e.company = "Acme Corp".to_string();
        assert!(e.has_content());
        assert!(!e.is_complete());
        e.position = "Engineer".to_string();
        e.start_date = "2020-01".to_string();
        e.end_date = PRESENT.to_string();
        e.description = "Built the billing pipeline".to_string();
        assert!(e.is_complete());
    }

    #[test]
    fn test_parsed_cv_serializes_camel_case() {
        let cv = ParsedCv {
            title: "my-cv".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&cv).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json["personalInfo"].get("avatarUrl").is_some());
    }
}
