use super::{ExtractionError, PageContent};

const BOM: char = '\u{FEFF}';

/// Decode uploaded text: invalid UTF-8 becomes U+FFFD, a leading byte-order
/// mark is dropped, and CRLF / lone CR line endings become `\n`.
pub(super) fn decode(bytes: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(bytes);
    let text = decoded.strip_prefix(BOM).unwrap_or(&decoded);
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

pub fn extract_txt(bytes: &[u8]) -> Result<Vec<PageContent>, ExtractionError> {
    Ok(vec![PageContent {
        page_number: 1,
        text: decode(bytes).trim().to_string(),
    }])
}
