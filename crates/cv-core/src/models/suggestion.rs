use serde::{Deserialize, Serialize};

/// One improvement suggestion produced by the remote AI service.
///
/// The engine consumes only `section`, `message`, `suggestion` and
/// `line_number`; the remaining fields pass through to the review UI.
/// `suggestion` is free text that may embed a `Before: '...'` / `After: '...'`
/// convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    /// Free-text section label ("Experience", "kỹ năng", ...), matched
    /// case-insensitively against a fixed vocabulary when applied.
    pub section: String,
    pub message: String,
    pub suggestion: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
    #[serde(default)]
    pub applied: bool,
}
