//! OCR through external tools: `pdftoppm` (poppler) rasterises PDF pages,
//! `tesseract` reads text from images.

use std::path::{Path, PathBuf};
use std::process::Command;

use docsum_core::config::OcrConfig;

use crate::document::{ExtractionError, PageContent};

/// OCR runner bound to one [`OcrConfig`].
pub struct Ocr<'a> {
    config: &'a OcrConfig,
}

impl<'a> Ocr<'a> {
    pub fn new(config: &'a OcrConfig) -> Self {
        Self { config }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    fn ensure_enabled(&self) -> Result<(), ExtractionError> {
        if self.config.enabled {
            Ok(())
        } else {
            Err(ExtractionError::OcrError("OCR is disabled (OCR_ENABLED=false)".to_string()))
        }
    }

    /// Run tesseract on an image file and return the trimmed text.
    pub fn image_file(&self, path: &Path) -> Result<String, ExtractionError> {
        self.ensure_enabled()?;

        let output = Command::new(&self.config.tesseract_bin)
            .arg(path)
            .arg("stdout")
            .args(["-l", &self.config.language])
            .output()
            .map_err(|e| {
                ExtractionError::OcrError(format!("Failed to run {}: {e}", self.config.tesseract_bin))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractionError::OcrError(format!(
                "{} exited with {}: {}",
                self.config.tesseract_bin,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// OCR an in-memory image. `extension` picks the temp file suffix so
    /// tesseract can detect the format.
    pub fn image_bytes(&self, bytes: &[u8], extension: &str) -> Result<String, ExtractionError> {
        self.ensure_enabled()?;

        let dir = tempfile::Builder::new().prefix("docsum_ocr_").tempdir()?;
        let path = dir.path().join(format!("upload.{extension}"));
        std::fs::write(&path, bytes)?;
        self.image_file(&path)
    }

    /// Rasterise the first `page_limit` pages of a PDF and OCR each one.
    ///
    /// Pages whose OCR fails or comes back blank are skipped.
    pub fn pdf_bytes(&self, bytes: &[u8]) -> Result<Vec<PageContent>, ExtractionError> {
        self.ensure_enabled()?;

        let dir = tempfile::Builder::new().prefix("docsum_pdfocr_").tempdir()?;
        let pdf_path = dir.path().join("input.pdf");
        std::fs::write(&pdf_path, bytes)?;

        let output = Command::new(&self.config.pdftoppm_bin)
            .arg("-png")
            .args(["-f", "1"])
            .args(["-l", &self.config.page_limit.to_string()])
            .arg(&pdf_path)
            .arg(dir.path().join("page"))
            .output()
            .map_err(|e| {
                ExtractionError::OcrError(format!("Failed to run {}: {e}", self.config.pdftoppm_bin))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractionError::OcrError(format!(
                "{} exited with {}: {}",
                self.config.pdftoppm_bin,
                output.status,
                stderr.trim()
            )));
        }

        let images = rasterized_pages(dir.path())?;
        tracing::debug!(pages = images.len(), "rasterised PDF for OCR");

        let mut pages = Vec::with_capacity(images.len());
        for (page_number, image) in images {
            match self.image_file(&image) {
                Ok(text) if !text.is_empty() => pages.push(PageContent {
                    page_number,
                    text,
                }),
                Ok(_) => tracing::debug!(page_number, "OCR found no text on page"),
                Err(e) => tracing::warn!(page_number, error = %e, "OCR failed for page"),
            }
        }

        Ok(pages)
    }
}

/// Page number encoded in a pdftoppm output name such as `page-03.png`.
pub(crate) fn page_number_of(file_name: &str) -> Option<usize> {
    file_name
        .strip_prefix("page-")?
        .strip_suffix(".png")?
        .parse()
        .ok()
}

/// pdftoppm outputs in `dir`, sorted by page number.
pub(crate) fn rasterized_pages(dir: &Path) -> Result<Vec<(usize, PathBuf)>, ExtractionError> {
    let mut pages: Vec<(usize, PathBuf)> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name();
            let number = page_number_of(name.to_str()?)?;
            Some((number, entry.path()))
        })
        .collect();
    pages.sort_by_key(|(n, _)| *n);
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(bin: &str) -> OcrConfig {
        OcrConfig {
            tesseract_bin: bin.to_string(),
            pdftoppm_bin: bin.to_string(),
            ..OcrConfig::default()
        }
    }

    #[test]
    fn parses_page_numbers() {
        assert_eq!(page_number_of("page-1.png"), Some(1));
        assert_eq!(page_number_of("page-012.png"), Some(12));
        assert_eq!(page_number_of("page-x.png"), None);
        assert_eq!(page_number_of("input.pdf"), None);
        assert_eq!(page_number_of("page-2.ppm"), None);
    }

    #[test]
    fn rasterized_pages_sort_numerically() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["page-10.png", "page-2.png", "page-1.png", "input.pdf", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        let pages = rasterized_pages(dir.path()).unwrap();
        let numbers: Vec<usize> = pages.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, vec![1, 2, 10]);
        assert!(pages[2].1.ends_with("page-10.png"));
    }

    #[test]
    fn missing_binary_is_an_ocr_error() {
        let config = config_with("/nonexistent/docsum-test-ocr-binary");
        let ocr = Ocr::new(&config);
        let err = ocr.image_bytes(b"not an image", "png").unwrap_err();
        assert!(matches!(err, ExtractionError::OcrError(_)));
        let err = ocr.pdf_bytes(b"%PDF-1.4").unwrap_err();
        assert!(matches!(err, ExtractionError::OcrError(_)));
    }

    #[test]
    fn disabled_ocr_refuses_work() {
        let config = OcrConfig {
            enabled: false,
            ..OcrConfig::default()
        };
        let ocr = Ocr::new(&config);
        assert!(!ocr.is_enabled());
        let err = ocr.image_file(Path::new("whatever.png")).unwrap_err();
        assert!(err.to_string().contains("disabled"));
    }
}
