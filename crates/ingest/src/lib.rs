//! Text extraction for uploaded documents.
//!
//! PDFs are read through their text layer and fall back to OCR when none is
//! present; images always go through OCR. OCR shells out to the poppler and
//! tesseract command-line tools.

pub mod document;
pub mod ocr;

pub use document::{extract_text, is_supported, ExtractedDocument, ExtractionError, PageContent};
pub use ocr::Ocr;
