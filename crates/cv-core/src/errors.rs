use thiserror::Error;

/// Engine-level error type.
///
/// Decode failure and unsupported input are the only hard error paths; a
/// missing section or unrecoverable field degrades to empty/placeholder
/// values surfaced later through validation.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Could not extract content from document")]
    EmptyDocument,

    #[error("Document decode failed: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
