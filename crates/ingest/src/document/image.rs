use super::PageContent;
use crate::ocr::Ocr;

/// OCR an uploaded image. Failures are logged and produce no pages.
pub(super) fn extract_image(bytes: &[u8], extension: &str, ocr: &Ocr<'_>) -> Vec<PageContent> {
    match ocr.image_bytes(bytes, extension) {
        Ok(text) if !text.is_empty() => vec![PageContent {
            page_number: 1,
            text,
        }],
        Ok(_) => {
            tracing::info!("OCR found no text in image");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("OCR failed for image: {}", e);
            Vec::new()
        }
    }
}
