//! Upload → extracted text → summary + key points.
//!
//! Shared by `POST /api/summarize` and the `summarize` CLI command. Everything
//! here is blocking (PDF parsing, OCR processes), so async callers run it on
//! the blocking pool.

use tracing::{info, warn};

use docsum_core::{Config, DocsumError, SummarizeResponse};
use docsum_summarize::{LengthTier, Summarizer};

/// The only summarization mode this service implements.
pub const RULE_MODE: &str = "rule";

pub const NO_TEXT_MESSAGE: &str = "Could not extract text from file.";

/// A document submitted for summarization.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub length: LengthTier,
}

/// Resolve a requested mode to the one actually used.
pub fn resolve_mode(requested: Option<&str>) -> &'static str {
    match requested.map(str::trim) {
        None | Some("") | Some(RULE_MODE) => RULE_MODE,
        Some(other) => {
            warn!(requested = other, "unsupported summarization mode, using '{}'", RULE_MODE);
            RULE_MODE
        }
    }
}

/// The first `lines` raw lines of `text`, joined with spaces. Substitutes for
/// an empty engine result.
pub fn fallback_summary(text: &str, lines: usize) -> String {
    text.split('\n')
        .take(lines)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract, summarize, and derive key points for one upload.
///
/// A document without extractable text is not an error: the response carries
/// an explicit warning in `summary` and no key points.
pub fn summarize_upload(
    config: &Config,
    summarizer: &Summarizer,
    upload: &Upload,
) -> Result<SummarizeResponse, DocsumError> {
    if !docsum_ingest::is_supported(&upload.filename) {
        return Err(DocsumError::UnsupportedType(upload.filename.clone()));
    }

    let doc = docsum_ingest::extract_text(&upload.bytes, &upload.filename, &config.ocr)?;
    info!(
        filename = %upload.filename,
        file_type = %doc.file_type,
        pages = doc.page_count,
        chars = doc.total_chars(),
        ocr = doc.used_ocr,
        "extracted text"
    );

    let length = upload.length.to_string();
    let text = doc.full_text();
    if text.trim().is_empty() {
        warn!(filename = %upload.filename, "no extractable text");
        return Ok(SummarizeResponse {
            filename: Some(upload.filename.clone()),
            length: Some(length),
            ..SummarizeResponse::warning(NO_TEXT_MESSAGE)
        });
    }

    let mut summary = summarizer.summarize(&text, upload.length);
    if summary.is_empty() {
        summary = fallback_summary(&text, config.summarize.fallback_lines);
    }
    let key_points = summarizer.extract_key_points(&summary);

    info!(
        filename = %upload.filename,
        length = %upload.length,
        summary_chars = summary.len(),
        key_points = key_points.len(),
        "summarized document"
    );

    Ok(SummarizeResponse {
        filename: Some(upload.filename.clone()),
        length: Some(length),
        summary,
        key_points,
        mode: Some(RULE_MODE.to_string()),
        pages: Some(doc.page_count),
    })
}
