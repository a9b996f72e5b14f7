//! Term-frequency density scoring.

use crate::frequency::{tokenize, TermFrequency};
use crate::segment::Sentence;

/// A sentence with its score, carrying its original position so selection
/// can restore reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub index: usize,
    pub text: String,
    pub score: f64,
}

/// Sum of the document frequencies of `sentence`'s tokens divided by
/// `max(min_length_norm, token count)`.
///
/// Stop words score 0 because the frequency map never holds them.
pub fn score_sentence(sentence: &str, freq: &TermFrequency, min_length_norm: usize) -> f64 {
    let tokens = tokenize(sentence);
    let total: usize = tokens.iter().map(|t| freq.get(t)).sum();
    total as f64 / tokens.len().max(min_length_norm).max(1) as f64
}

/// Score every sentence, preserving input order.
pub fn score_all(
    sentences: &[Sentence],
    freq: &TermFrequency,
    min_length_norm: usize,
) -> Vec<ScoredSentence> {
    sentences
        .iter()
        .map(|s| ScoredSentence {
            index: s.index,
            text: s.text.clone(),
            score: score_sentence(&s.text, freq, min_length_norm),
        })
        .collect()
}
