use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocsumError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("OCR failed: {0}")]
    Ocr(String),
}

pub type Result<T> = std::result::Result<T, DocsumError>;
