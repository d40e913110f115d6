//! Document parser — orchestrates decoding and the four section extractors
//! into one structured CV record.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::decode::{DefaultDecoder, DocumentDecoder};
use crate::errors::ParseError;
use crate::extract::education::extract_educations;
use crate::extract::experience::extract_experiences;
use crate::extract::personal::extract_personal_info;
use crate::extract::skills::extract_skills;
use crate::models::cv::{Cv, ParsedCv};

/// Parses uploaded documents into `ParsedCv` records.
///
/// Carries the decoder behind an `Arc<dyn DocumentDecoder>` so hosts can
/// swap the byte-to-text backend without touching the extraction pipeline.
pub struct CvParser {
    decoder: Arc<dyn DocumentDecoder>,
}

impl CvParser {
    pub fn new() -> Self {
        Self {
            decoder: Arc::new(DefaultDecoder),
        }
    }

    pub fn with_decoder(decoder: Arc<dyn DocumentDecoder>) -> Self {
        Self { decoder }
    }

    /// Decodes the document and extracts a structured CV.
    ///
    /// Decode failure, an unsupported MIME type and an empty decode result
    /// are the only hard errors; a layout the extractors cannot read fully
    /// still yields a partially filled record for the user to fix up.
    pub fn parse(
        &self,
        bytes: &[u8],
        mime_type: &str,
        filename: &str,
    ) -> Result<ParsedCv, ParseError> {
        let text = self.decoder.decode(bytes, mime_type)?;
        if text.trim().is_empty() {
            return Err(ParseError::EmptyDocument);
        }
        Ok(parse_text(&text, filename))
    }
}

impl Default for CvParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure extraction pass over already-decoded text. Infallible: every section
/// degrades to empty values when unrecognized.
pub fn parse_text(text: &str, filename: &str) -> ParsedCv {
    let parsed = ParsedCv {
        title: title_from_filename(filename),
        personal_info: extract_personal_info(text),
        experiences: extract_experiences(text),
        educations: extract_educations(text),
        skills: extract_skills(text),
    };
    info!(
        experiences = parsed.experiences.len(),
        educations = parsed.educations.len(),
        skills = parsed.skills.len(),
        "extracted CV sections"
    );
    parsed
}

/// Promotes a parsed record to a stored CV owned by `user_id`.
pub fn convert_to_cv(parsed: ParsedCv, user_id: Uuid) -> Cv {
    let now = Utc::now();
    Cv {
        id: Uuid::new_v4(),
        user_id,
        data: parsed,
        avatar: None,
        created_at: now,
        updated_at: now,
    }
}

// The title comes from the upload's filename, not from document content.
fn title_from_filename(filename: &str) -> String {
    let stem = filename
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(filename)
        .trim();
    if stem.is_empty() {
        "CV".to_string()
    } else {
        stem.to_string()
    }
}
