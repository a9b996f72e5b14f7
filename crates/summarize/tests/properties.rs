//! Property-based tests for the summarization pipeline.

use docsum_summarize::{
    build_frequency, extract_key_points, segment, summarize, LengthTier, Summarizer,
};
use proptest::prelude::*;

/// Free-form text including punctuation, digits, apostrophes and odd whitespace.
fn any_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9' .!?,\n\t\u{00e9}\u{65e5}-]{0,400}"
}

/// Prose made of short words and sentence-final punctuation.
fn prose() -> impl Strategy<Value = String> {
    let word = "[a-z]{1,8}";
    let sentence = (prop::collection::vec(word, 1..12), prop_oneof![Just("."), Just("!"), Just("?")])
        .prop_map(|(words, end)| format!("{}{}", words.join(" "), end));
    prop::collection::vec(sentence, 0..40).prop_map(|s| s.join(" "))
}

fn tier() -> impl Strategy<Value = LengthTier> {
    prop_oneof![
        Just(LengthTier::Short),
        Just(LengthTier::Medium),
        Just(LengthTier::Long),
    ]
}

proptest! {
    /// Property: sentences are non-empty, trimmed, and cover every non-whitespace character
    #[test]
    fn segmentation_is_total(text in any_text()) {
        let sentences = segment(&text);
        for s in &sentences {
            prop_assert!(!s.text.is_empty());
            prop_assert_eq!(s.text.trim(), s.text.as_str());
        }
        let rejoined: String = sentences.iter().map(|s| s.text.as_str()).collect::<Vec<_>>().join(" ");
        let strip = |t: &str| t.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        prop_assert_eq!(strip(&rejoined), strip(&text));
    }

    /// Property: sentence indices are 0..n in order
    #[test]
    fn segment_indices_are_dense(text in any_text()) {
        for (i, s) in segment(&text).iter().enumerate() {
            prop_assert_eq!(s.index, i);
        }
    }

    /// Property: frequency model is a pure function of its input
    #[test]
    fn frequency_is_deterministic(text in any_text()) {
        prop_assert_eq!(build_frequency(&text), build_frequency(&text));
    }

    /// Property: no stop word ever appears as a frequency key
    #[test]
    fn frequency_excludes_stop_words(text in any_text()) {
        let freq = build_frequency(&text);
        for (word, count) in freq.iter() {
            prop_assert!(!docsum_summarize::ENGLISH_STOP_WORDS.contains(&word));
            prop_assert!(count > 0);
        }
    }

    /// Property: selected sentences are a subsequence of the input in original order
    #[test]
    fn selection_preserves_order(text in prose(), t in tier()) {
        let picked = Summarizer::default().select(&text, t);
        let all = segment(&text);
        prop_assert!(picked.windows(2).all(|w| w[0].index < w[1].index));
        for s in &picked {
            prop_assert_eq!(&all[s.index].text, &s.text);
        }
        let expected = t.keep_count(all.len()).min(all.len());
        prop_assert_eq!(picked.len(), expected);
    }

    /// Property: summary is exactly the picked sentences joined by spaces
    #[test]
    fn summary_matches_selection(text in prose(), t in tier()) {
        let joined = Summarizer::default()
            .select(&text, t)
            .into_iter()
            .map(|s| s.text)
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(summarize(&text, t), joined);
    }

    /// Property: long >= medium >= short for every document size from 15 up
    #[test]
    fn keep_count_is_monotonic(n in 15usize..10_000) {
        let short = LengthTier::Short.keep_count(n);
        let medium = LengthTier::Medium.keep_count(n);
        let long = LengthTier::Long.keep_count(n);
        prop_assert!(long >= medium);
        prop_assert!(medium >= short);
    }

    /// Property: unknown tier names behave exactly like medium
    #[test]
    fn unknown_tier_is_medium(name in "[a-z]{0,10}", text in prose()) {
        prop_assume!(name != "short" && name != "long");
        let parsed = LengthTier::parse(&name);
        prop_assert_eq!(parsed, LengthTier::Medium);
        prop_assert_eq!(summarize(&text, parsed), summarize(&text, LengthTier::Medium));
    }

    /// Property: never more than five key points, empty only for empty summaries
    #[test]
    fn key_points_are_bounded(summary in any_text()) {
        let points = extract_key_points(&summary);
        prop_assert!(points.len() <= 5);
        if !summary.trim().is_empty() {
            prop_assert!(!points.is_empty());
        } else {
            prop_assert!(points.is_empty());
        }
    }

    /// Property: key points are deterministic
    #[test]
    fn key_points_are_deterministic(summary in prose()) {
        prop_assert_eq!(extract_key_points(&summary), extract_key_points(&summary));
    }
}
