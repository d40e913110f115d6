//! Résumé extraction and quality-scoring engine.
//!
//! Given plain text recovered from an uploaded document, the engine segments
//! it into semantic sections without any markup, pulls typed fields out of
//! each section with positional and lexical heuristics, normalizes the
//! result, and produces a completeness assessment plus actionable advice.
//! A companion applier patches a structured CV from loosely-formatted AI
//! suggestion text.
//!
//! The engine is a deterministic, rule-based line/keyword scanner tuned for
//! common résumé conventions (labeled sections, date ranges, delimited
//! lists). It favors graceful degradation — empty or placeholder fields —
//! over failure: the only hard errors are an unsupported file type and a
//! document that decodes to nothing.
//!
//! Everything is synchronous and side-effect-free: functions take immutable
//! inputs and return new values, so documents can be parsed concurrently by
//! simply invoking the engine once per document.

pub mod completeness;
pub mod decode;
pub mod enhance;
pub mod errors;
pub mod extract;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod suggest;
pub mod validation;

pub use completeness::{completeness_score, suggest_improvements};
pub use decode::{DefaultDecoder, DocumentDecoder, DOCX_MIME, PDF_MIME};
pub use enhance::enhance_cv;
pub use errors::ParseError;
pub use models::cv::{Cv, Education, Experience, ParsedCv, PersonalInfo, PLACEHOLDER, PRESENT};
pub use models::suggestion::Suggestion;
pub use parser::{convert_to_cv, parse_text, CvParser};
pub use suggest::after::{parse_after_content, parse_before_content};
pub use suggest::apply::apply_suggestion_to_cv;
pub use validation::{validate_cv, ValidationResult};
