//! Tuning constants for the summarizer.

use crate::stopwords::StopWords;

/// Immutable settings shared by every stage of a [`Summarizer`](crate::Summarizer).
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub stop_words: StopWords,
    /// Lower bound on the token count a sentence score is divided by.
    /// Keeps one-word sentences from outscoring real content.
    pub min_length_norm: usize,
    /// Maximum number of key points returned.
    pub max_key_points: usize,
    /// Longest sentence, in characters, accepted verbatim as a key point.
    pub max_bullet_chars: usize,
    /// Keywords considered when padding key points.
    pub keyword_candidates: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWords::english(),
            min_length_norm: 4,
            max_key_points: 5,
            max_bullet_chars: 160,
            keyword_candidates: 8,
        }
    }
}

impl SummarizerConfig {
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_min_length_norm(mut self, n: usize) -> Self {
        self.min_length_norm = n.max(1);
        self
    }

    pub fn with_max_key_points(mut self, n: usize) -> Self {
        self.max_key_points = n;
        self
    }
}
