//! Extractive document summarization.
//!
//! The pipeline is pure and synchronous:
//!
//! 1. [`segment`] splits the text into sentences.
//! 2. [`TermFrequency::build`] counts content words over the whole text.
//! 3. Each sentence is scored by term-frequency density ([`score_sentence`]).
//! 4. [`select_summary`] keeps the top sentences for a [`LengthTier`] and
//!    restores reading order.
//! 5. [`extract_key_points`] turns the summary into at most five bullets.
//!
//! Nothing is cached between calls. A [`Summarizer`] only holds immutable
//! configuration, so one instance can be shared freely across threads.

pub mod config;
pub mod frequency;
pub mod key_points;
pub mod score;
pub mod segment;
pub mod select;
pub mod stopwords;
pub mod tier;

use std::sync::LazyLock;

pub use config::SummarizerConfig;
pub use frequency::{tokenize, TermFrequency};
pub use score::{score_sentence, ScoredSentence};
pub use segment::{segment, Sentence};
pub use select::select_summary;
pub use stopwords::{StopWords, ENGLISH_STOP_WORDS};
pub use tier::{LengthTier, TierBudget};

static DEFAULT_SUMMARIZER: LazyLock<Summarizer> = LazyLock::new(Summarizer::default);

/// Summarization engine bound to one immutable [`SummarizerConfig`].
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
}

impl Summarizer {
    pub fn new(config: SummarizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Stop-word-filtered term counts for `text`.
    pub fn build_frequency(&self, text: &str) -> TermFrequency {
        TermFrequency::build(text, &self.config.stop_words)
    }

    pub fn score(&self, sentence: &str, freq: &TermFrequency) -> f64 {
        score_sentence(sentence, freq, self.config.min_length_norm)
    }

    /// Selected sentences with their scores, in document order.
    pub fn select(&self, text: &str, tier: LengthTier) -> Vec<ScoredSentence> {
        let sentences = segment(text);
        if sentences.is_empty() {
            return Vec::new();
        }
        let freq = self.build_frequency(text);
        select::select_sentences(&sentences, &freq, tier, self.config.min_length_norm)
    }

    /// Extractive summary of `text`. Returns `""` when `text` has no sentences.
    pub fn summarize(&self, text: &str, tier: LengthTier) -> String {
        self.select(text, tier)
            .into_iter()
            .map(|s| s.text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn extract_key_points(&self, summary: &str) -> Vec<String> {
        key_points::extract_key_points(summary, &self.config)
    }
}

/// [`Summarizer::summarize`] with the default configuration.
pub fn summarize(text: &str, tier: LengthTier) -> String {
    DEFAULT_SUMMARIZER.summarize(text, tier)
}

/// [`Summarizer::extract_key_points`] with the default configuration.
pub fn extract_key_points(summary: &str) -> Vec<String> {
    DEFAULT_SUMMARIZER.extract_key_points(summary)
}

/// [`Summarizer::build_frequency`] with the default stop words.
pub fn build_frequency(text: &str) -> TermFrequency {
    DEFAULT_SUMMARIZER.build_frequency(text)
}
