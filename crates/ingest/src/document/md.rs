use super::{ExtractionError, PageContent};

/// Strip block-level markdown markers from one line. Headings come back with
/// terminal punctuation so they segment as their own sentence.
fn plain_line(line: &str) -> String {
    let trimmed = line.trim();

    if trimmed.starts_with('#') {
        let heading = trimmed.trim_start_matches('#').trim();
        if heading.is_empty() || heading.ends_with(['.', '!', '?']) {
            return heading.to_string();
        }
        return format!("{heading}.");
    }

    trimmed
        .strip_prefix("> ")
        .or_else(|| trimmed.strip_prefix("- "))
        .or_else(|| trimmed.strip_prefix("* "))
        .or_else(|| trimmed.strip_prefix("+ "))
        .unwrap_or(trimmed)
        .to_string()
}

pub fn extract_md(bytes: &[u8]) -> Result<Vec<PageContent>, ExtractionError> {
    let source = super::txt::decode(bytes);

    let mut lines = Vec::new();
    let mut in_fence = false;

    for line in source.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if !in_fence {
            lines.push(plain_line(line));
        }
    }

    Ok(vec![PageContent {
        page_number: 1,
        text: lines.join("\n").trim().to_string(),
    }])
}
