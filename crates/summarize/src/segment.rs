//! Sentence segmentation.
//!
//! Whitespace runs collapse to a single space, then the text is cut right
//! after every `.`, `!` or `?` that is followed by a space. The punctuation
//! stays attached to the sentence it ends.

/// A sentence and its position in the segmented sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// 0-based position in the output of [`segment`].
    pub index: usize,
    /// Trimmed, non-empty sentence text.
    pub text: String,
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Unicode whitespace plus U+FEFF, which often leads extracted PDF text.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Collapse every whitespace run to one ASCII space and trim both ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split(is_space)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split `text` into sentences. Total over all inputs: empty or
/// whitespace-only text yields an empty vector, text without terminal
/// punctuation yields one sentence.
pub fn segment(text: &str) -> Vec<Sentence> {
    let collapsed = collapse_whitespace(text);
    let mut pieces: Vec<&str> = Vec::new();
    let mut start = 0;
    let mut chars = collapsed.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        if let Some(&(space_at, ' ')) = chars.peek() {
            pieces.push(&collapsed[start..space_at]);
            start = space_at + 1;
            chars.next();
        }
    }
    pieces.push(&collapsed[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(index, text)| Sentence {
            index,
            text: text.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        segment(input).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn splits_on_terminal_punctuation() {
        assert_eq!(
            texts("Cats are mammals. Do they hunt? Yes! They do."),
            vec!["Cats are mammals.", "Do they hunt?", "Yes!", "They do."]
        );
    }

    #[test]
    fn indices_are_sequential() {
        let sents = segment("One. Two. Three.");
        let idx: Vec<usize> = sents.iter().map(|s| s.index).collect();
        assert_eq!(idx, vec![0, 1, 2]);
    }

    #[test]
    fn collapses_newlines_and_tabs() {
        assert_eq!(
            texts("First line\nstill first.\n\n\tSecond   one."),
            vec!["First line still first.", "Second one."]
        );
    }

    #[test]
    fn empty_and_whitespace_yield_nothing() {
        assert!(segment("").is_empty());
        assert!(segment("  \n\t  ").is_empty());
    }

    #[test]
    fn no_terminal_punctuation_is_one_sentence() {
        assert_eq!(texts("  just a fragment without end  "), vec!["just a fragment without end"]);
    }

    #[test]
    fn punctuation_without_following_space_does_not_split() {
        assert_eq!(texts("Version 2.5 shipped.Next"), vec!["Version 2.5 shipped.Next"]);
        assert_eq!(texts("e.g. this"), vec!["e.g.", "this"]);
    }

    #[test]
    fn runs_of_punctuation_split_after_the_last() {
        assert_eq!(texts("Really?! Yes..."), vec!["Really?!", "Yes..."]);
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(
            texts("Ça marche. Über alles! 日本語です。 end"),
            vec!["Ça marche.", "Über alles!", "日本語です。 end"]
        );
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(texts("\u{FEFF}First.\u{FEFF}Second."), vec!["First.", "Second."]);
        assert!(segment("\u{FEFF}").is_empty());
    }

    #[test]
    fn lone_punctuation_is_kept() {
        assert_eq!(texts(". ! ?"), vec![".", "!", "?"]);
    }
}
