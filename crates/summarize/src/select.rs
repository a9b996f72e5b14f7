//! Budgeted sentence selection.

use crate::frequency::TermFrequency;
use crate::score::{score_all, ScoredSentence};
use crate::segment::Sentence;
use crate::tier::LengthTier;

/// Pick the highest-scoring sentences within the tier's budget and return
/// them in original document order.
///
/// Ranking uses a stable sort, so equal scores keep their encounter order.
pub fn select_sentences(
    sentences: &[Sentence],
    freq: &TermFrequency,
    tier: LengthTier,
    min_length_norm: usize,
) -> Vec<ScoredSentence> {
    if sentences.is_empty() {
        return Vec::new();
    }

    let keep = tier.keep_count(sentences.len()).min(sentences.len());

    let mut ranked = score_all(sentences, freq, min_length_norm);
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(keep);
    ranked.sort_by_key(|s| s.index);

    tracing::debug!(
        sentences = sentences.len(),
        keep,
        tier = %tier,
        "selected summary sentences"
    );
    ranked
}

/// [`select_sentences`] joined with single spaces. Empty input yields `""`.
pub fn select_summary(
    sentences: &[Sentence],
    freq: &TermFrequency,
    tier: LengthTier,
    min_length_norm: usize,
) -> String {
    select_sentences(sentences, freq, tier, min_length_norm)
        .into_iter()
        .map(|s| s.text)
        .collect::<Vec<_>>()
        .join(" ")
}
