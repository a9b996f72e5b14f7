//! Tokenization and the term-frequency model.

use indexmap::IndexMap;

use crate::stopwords::StopWords;

fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '\''
}

/// Lowercase `text` and return its maximal `[a-z0-9']+` runs.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_token_char(c))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Occurrence counts of content words, keyed in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequency {
    counts: IndexMap<String, usize>,
}

impl TermFrequency {
    /// Count every token of `text` that is not in `stop_words`.
    pub fn build(text: &str, stop_words: &StopWords) -> Self {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for token in tokenize(text) {
            if stop_words.contains(&token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for `token`, 0 when absent.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// The `k` most frequent tokens, highest count first. Equal counts keep
    /// first-seen order.
    pub fn top_keywords(&self, k: usize) -> Vec<&str> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.into_iter().take(k).map(|(w, _)| w).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(text: &str) -> TermFrequency {
        TermFrequency::build(text, &StopWords::english())
    }

    #[test]
    fn tokenize_lowercases_and_keeps_apostrophes() {
        assert_eq!(
            tokenize("Don't STOP-me, 42 times!"),
            vec!["don't", "stop", "me", "42", "times"]
        );
    }

    #[test]
    fn tokenize_treats_non_ascii_letters_as_separators() {
        assert_eq!(tokenize("café naïve"), vec!["caf", "na", "ve"]);
        assert!(tokenize("日本語 — ...").is_empty());
    }

    #[test]
    fn excludes_stop_words() {
        let f = build("the a of and summary");
        assert!(!f.contains("the"));
        assert!(!f.contains("a"));
        assert!(!f.contains("of"));
        assert!(!f.contains("and"));
        assert_eq!(f.get("summary"), 1);
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn counts_case_insensitively() {
        let f = build("Cats chase cats. CATS sleep.");
        assert_eq!(f.get("cats"), 3);
        assert_eq!(f.get("chase"), 1);
        assert_eq!(f.get("dogs"), 0);
    }

    #[test]
    fn empty_input_gives_empty_map() {
        assert!(build("").is_empty());
        assert!(build("the and of").is_empty());
    }

    #[test]
    fn build_is_deterministic() {
        let text = "Rodents gnaw. Mice are rodents. Cats hunt mice.";
        assert_eq!(build(text), build(text));
    }

    #[test]
    fn iter_preserves_first_seen_order() {
        let f = build("zebra apple zebra mango");
        let keys: Vec<&str> = f.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn top_keywords_break_ties_by_first_seen() {
        let f = build("delta beta alpha beta gamma alpha omega");
        assert_eq!(f.top_keywords(3), vec!["beta", "alpha", "delta"]);
        assert_eq!(f.top_keywords(10).len(), 5);
        assert!(f.top_keywords(0).is_empty());
    }
}
