//! Document-to-text decoding.
//!
//! The engine consumes plain text; this module owns the byte-to-text step
//! behind a pluggable seam so tests and alternate hosts can substitute their
//! own decoder.

use std::io::{Cursor, Read};

use anyhow::Context;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::info;

use crate::errors::ParseError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Byte-to-text decoder seam. Implementations must be pure with respect to
/// shared state so documents can be decoded concurrently.
pub trait DocumentDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8], mime_type: &str) -> Result<String, ParseError>;
}

/// Default decoder: PDF via `pdf-extract`, DOCX via the OOXML main document
/// part. Any other MIME type is an unsupported-input error.
pub struct DefaultDecoder;

impl DocumentDecoder for DefaultDecoder {
    fn decode(&self, bytes: &[u8], mime_type: &str) -> Result<String, ParseError> {
        match mime_type {
            PDF_MIME => {
                let text = pdf_extract::extract_text_from_mem(bytes)
                    .map_err(|e| ParseError::Decode(format!("PDF extraction failed: {e}")))?;
                info!(bytes = bytes.len(), chars = text.len(), "decoded PDF document");
                Ok(text)
            }
            DOCX_MIME => {
                let text = read_docx_text(bytes)
                    .map_err(|e| ParseError::Decode(format!("DOCX extraction failed: {e:#}")))?;
                info!(bytes = bytes.len(), chars = text.len(), "decoded DOCX document");
                Ok(text)
            }
            other => Err(ParseError::UnsupportedFileType(other.to_string())),
        }
    }
}

/// DOCX files are ZIP archives; the document body lives in
/// `word/document.xml` as `w:t` text runs grouped into `w:p` paragraphs.
fn read_docx_text(bytes: &[u8]) -> anyhow::Result<String> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).context("not a valid DOCX archive")?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .context("word/document.xml missing from archive")?
        .read_to_string(&mut xml)?;

    // Keep default (non-trimming) text handling: run-internal spacing like
    // "Acme " + "Corp" must survive concatenation.
    let mut reader = Reader::from_str(&xml);

    let mut text = String::new();
    let mut in_text_run = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => text.push_str(&e.unescape()?),
            Ok(Event::Eof) => break,
            Err(e) => return Err(e).context("malformed document.xml"),
            _ => {}
        }
    }
    Ok(text)
}
