//! English stop-word filtering.

use std::collections::HashSet;

/// Function words ignored by the frequency model.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "of", "and", "or", "to",
    "in", "on", "for", "at", "by", "with", "from", "as", "that", "this", "these", "those", "it",
    "its", "into", "over", "under", "between", "above", "below", "you", "your", "our", "we",
    "they", "them", "he", "she", "his", "her", "theirs", "ours", "what", "which", "who", "whom",
    "whose", "not", "no", "yes", "do", "does", "did", "done", "than", "then", "there", "here",
    "how", "why", "when", "where", "also", "too", "just", "can", "will", "may", "might", "must",
    "should", "could", "would",
];

/// An immutable set of lowercase stop words.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

impl StopWords {
    pub fn english() -> Self {
        Self::from_list(ENGLISH_STOP_WORDS)
    }

    /// Build a set from a custom list. Entries are lowercased.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// A set that filters nothing.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// `token` must already be lowercase.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
