//! Document Text Extractor — pulls plain text out of an uploaded resume PDF.
//!
//! Wraps the `pdf-extract` crate: page text is concatenated in page order and
//! pages with no extractable text (scanned images) contribute nothing. Any
//! parse failure is captured as `ExtractError` at this boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not parse the uploaded file as a PDF: {0}")]
    Parse(#[from] pdf_extract::OutputError),
}

/// Extracts the concatenated text of every page of a PDF byte stream.
///
/// The parser is synchronous CPU work; callers in async context should run
/// this inside `tokio::task::spawn_blocking`.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(pdf_bytes)?;
    Ok(text)
}
