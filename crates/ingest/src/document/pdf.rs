use super::{ExtractionError, PageContent};
use crate::ocr::Ocr;

pub(super) struct PdfText {
    pub pages: Vec<PageContent>,
    pub page_count: usize,
    pub used_ocr: bool,
}

/// Number of pages in the PDF's page tree, if it parses.
fn page_tree_len(bytes: &[u8]) -> Option<usize> {
    lopdf::Document::load_mem(bytes)
        .map(|doc| doc.get_pages().len())
        .ok()
}

/// Split pdf-extract output into pages on form feeds (`\x0C`).
fn split_pages(text: &str) -> Vec<PageContent> {
    if text.contains('\x0C') {
        text.split('\x0C')
            .enumerate()
            .filter(|(_, page_text)| !page_text.trim().is_empty())
            .map(|(i, page_text)| PageContent {
                page_number: i + 1,
                text: page_text.trim().to_string(),
            })
            .collect()
    } else {
        vec![PageContent {
            page_number: 1,
            text: text.trim().to_string(),
        }]
    }
}

pub(super) fn extract_pdf(bytes: &[u8], ocr: &Ocr<'_>) -> Result<PdfText, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::PdfError(e.to_string()))?;

    let text_pages = split_pages(&text);
    let page_count = page_tree_len(bytes).unwrap_or(text_pages.len()).max(1);

    if !text.trim().is_empty() {
        return Ok(PdfText {
            pages: text_pages,
            page_count,
            used_ocr: false,
        });
    }

    // No text layer (scanned/image PDF)
    tracing::info!("No embedded text in PDF, trying OCR");
    let pages = match ocr.pdf_bytes(bytes) {
        Ok(pages) => {
            tracing::info!("PDF text extraction via OCR succeeded ({} pages)", pages.len());
            pages
        }
        Err(e) => {
            tracing::warn!("PDF OCR skipped: {}", e);
            Vec::new()
        }
    };

    Ok(PdfText {
        pages,
        page_count,
        used_ocr: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsum_core::config::OcrConfig;

    #[test]
    fn splits_on_form_feeds() {
        let pages = split_pages("First page.\x0C\x0C  Third page.  \x0C");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[1].page_number, 3);
        assert_eq!(pages[1].text, "Third page.");
    }

    #[test]
    fn no_form_feed_is_single_page() {
        let pages = split_pages("\n  Only page.\n");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].text, "Only page.");
    }

    #[test]
    fn garbage_bytes_are_a_pdf_error() {
        let config = OcrConfig::default();
        let ocr = Ocr::new(&config);
        let result = extract_pdf(b"definitely not a pdf", &ocr);
        assert!(matches!(result, Err(ExtractionError::PdfError(_))));
    }

    #[test]
    fn page_tree_len_rejects_garbage() {
        assert_eq!(page_tree_len(b"nope"), None);
    }
}
