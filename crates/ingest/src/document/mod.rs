mod image;
mod md;
mod pdf;
mod txt;

use docsum_core::config::OcrConfig;
use thiserror::Error;

use crate::ocr::Ocr;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("PDF extraction failed: {0}")]
    PdfError(String),
    #[error("OCR failed: {0}")]
    OcrError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ExtractionError> for docsum_core::DocsumError {
    fn from(e: ExtractionError) -> Self {
        match e {
            ExtractionError::UnsupportedType(t) => Self::UnsupportedType(t),
            ExtractionError::PdfError(m) => Self::Extraction(m),
            ExtractionError::OcrError(m) => Self::Ocr(m),
            ExtractionError::Io(e) => Self::Io(e),
        }
    }
}

/// Extensions accepted for upload.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "pdf", "png", "jpg", "jpeg", "tif", "tiff", "txt", "text", "md", "markdown",
];

/// A page of extracted text with metadata.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// 1-based page number (for PDFs). For images and TXT/MD, always 1.
    pub page_number: usize,
    /// The extracted text content.
    pub text: String,
}

/// Result of extracting text from a document.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Original filename.
    pub filename: String,
    /// Lowercase file extension: "pdf", "png", "txt", ...
    pub file_type: String,
    /// Pages that produced text.
    pub pages: Vec<PageContent>,
    /// Page count of the source (PDF page tree size, 1 otherwise).
    pub page_count: usize,
    /// Whether the text came from OCR rather than a text layer.
    pub used_ocr: bool,
}

impl ExtractedDocument {
    /// Get all text concatenated.
    pub fn full_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.text.as_str())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Total character count across all pages.
    pub fn total_chars(&self) -> usize {
        self.pages.iter().map(|p| p.text.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(|p| p.text.trim().is_empty())
    }
}

fn extension_of(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    }
}

/// Whether `filename` has an extension this crate can extract.
pub fn is_supported(filename: &str) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension_of(filename).as_str())
}

/// Extract text from file bytes based on the filename's extension.
///
/// OCR failures never surface as errors: an unreadable image or scanned PDF
/// yields an empty document and the caller decides how to report it.
pub fn extract_text(
    bytes: &[u8],
    filename: &str,
    ocr_config: &OcrConfig,
) -> Result<ExtractedDocument, ExtractionError> {
    let file_type = extension_of(filename);
    let ocr = Ocr::new(ocr_config);

    let (pages, page_count, used_ocr) = match file_type.as_str() {
        "pdf" => {
            let extracted = pdf::extract_pdf(bytes, &ocr)?;
            (extracted.pages, extracted.page_count, extracted.used_ocr)
        }
        "png" | "jpg" | "jpeg" | "tif" | "tiff" => (image::extract_image(bytes, &file_type, &ocr), 1, true),
        "txt" | "text" => (txt::extract_txt(bytes)?, 1, false),
        "md" | "markdown" => (md::extract_md(bytes)?, 1, false),
        other => return Err(ExtractionError::UnsupportedType(other.to_string())),
    };

    Ok(ExtractedDocument {
        filename: filename.to_string(),
        file_type,
        pages,
        page_count,
        used_ocr,
    })
}
