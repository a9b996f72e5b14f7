//! Key-point bullets derived from a finished summary.

use crate::config::SummarizerConfig;
use crate::frequency::TermFrequency;
use crate::segment::segment;

/// Prefix of bullets synthesized from keywords.
pub const KEYWORD_BULLET_PREFIX: &str = "Covers";

/// Derive at most `config.max_key_points` bullets from `summary`.
///
/// Short summary sentences are taken verbatim first. When fewer than the
/// maximum qualify, the list is padded with `Covers <keyword>` entries for
/// the summary's most frequent content words. If neither source yields a
/// bullet for a non-empty summary, its first sentence is clipped to
/// `max_bullet_chars` so the list is never empty for non-empty input.
pub fn extract_key_points(summary: &str, config: &SummarizerConfig) -> Vec<String> {
    let max = config.max_key_points;
    let sentences = segment(summary);
    let mut bullets: Vec<String> = Vec::with_capacity(max);

    for sentence in &sentences {
        if bullets.len() >= max {
            break;
        }
        if sentence.text.chars().count() <= config.max_bullet_chars {
            bullets.push(sentence.text.clone());
        }
    }

    if bullets.len() < max {
        let freq = TermFrequency::build(summary, &config.stop_words);
        for keyword in freq.top_keywords(config.keyword_candidates) {
            if bullets.len() >= max {
                break;
            }
            bullets.push(format!("{KEYWORD_BULLET_PREFIX} {keyword}"));
        }
    }

    if bullets.is_empty() && max > 0 {
        if let Some(first) = sentences.first() {
            bullets.push(clip(&first.text, config.max_bullet_chars));
        }
    }

    bullets.truncate(max);
    bullets
}

/// Cut `text` to at most `max_chars` characters, ending with an ellipsis
/// when anything was removed.
fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(summary: &str) -> Vec<String> {
        extract_key_points(summary, &SummarizerConfig::default())
    }

    fn long_sentence(word: &str) -> String {
        let body = vec![word; 40].join(" ");
        format!("{body}.")
    }

    #[test]
    fn empty_summary_has_no_points() {
        assert!(points("").is_empty());
        assert!(points("   ").is_empty());
    }

    #[test]
    fn short_sentences_are_taken_verbatim() {
        let p = points("One cat. Two dogs. Three birds. Four fish. Five frogs. Six snakes.");
        assert_eq!(p, vec!["One cat.", "Two dogs.", "Three birds.", "Four fish.", "Five frogs."]);
    }

    #[test]
    fn pads_with_keywords_when_few_sentences() {
        let p = points("Rust compilers check borrows. Rust programs rarely crash.");
        assert_eq!(p.len(), 5);
        assert_eq!(p[0], "Rust compilers check borrows.");
        assert_eq!(p[1], "Rust programs rarely crash.");
        assert_eq!(p[2], "Covers rust");
        assert_eq!(p[3], "Covers compilers");
        assert_eq!(p[4], "Covers check");
    }

    #[test]
    fn long_sentences_fall_back_to_keywords() {
        let summary = format!("{} {}", long_sentence("granite"), long_sentence("basalt"));
        let p = points(&summary);
        assert_eq!(p, vec!["Covers granite", "Covers basalt"]);
        assert!(p.iter().all(|b| b.starts_with("Covers ")));
    }

    #[test]
    fn sentence_at_exact_limit_is_accepted() {
        let sentence = format!("{}.", "x".repeat(159));
        assert_eq!(sentence.chars().count(), 160);
        let p = points(&sentence);
        assert_eq!(p[0], sentence);
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let sentence = format!("{}.", "é".repeat(150));
        let p = points(&sentence);
        assert_eq!(p[0], sentence);
    }

    #[test]
    fn stop_word_only_long_summary_still_yields_a_point() {
        let summary = format!("{}.", vec!["the"; 60].join(" "));
        let p = points(&summary);
        assert_eq!(p.len(), 1);
        assert!(p[0].ends_with('…'));
        assert_eq!(p[0].chars().count(), 160);
    }

    #[test]
    fn never_more_than_configured_maximum() {
        let config = SummarizerConfig::default().with_max_key_points(2);
        let p = extract_key_points("A b c. D e f. G h i.", &config);
        assert_eq!(p.len(), 2);
        let none = SummarizerConfig::default().with_max_key_points(0);
        assert!(extract_key_points("Some text.", &none).is_empty());
    }
}
