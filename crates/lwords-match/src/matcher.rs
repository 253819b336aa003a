#![forbid(unsafe_code)]

//! First-match-wins lookup over an accepted-word mapping.
//!
//! [`WordList`] is the build-once form: the folded shape of every accepted
//! word is computed at construction so repeated lookups (one per keystroke)
//! only fold the user's input. [`find_first`] serves callers that already
//! hold a (key, word) map and want a one-shot lookup without building a list.

use crate::fold::fold_word;

/// One accepted answer: an opaque identifier and its word text.
///
/// The folded form is precomputed; entries are immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Opaque identifier naming this answer (e.g. a localization key).
    pub key: String,
    /// The accepted word text, exactly as supplied.
    pub word: String,
    folded: String,
}

impl WordEntry {
    fn new(key: String, word: String) -> Self {
        let folded = fold_word(&word);
        Self { key, word, folded }
    }
}

/// An ordered set of accepted (identifier, word) pairs.
///
/// Iteration order is insertion order, and [`WordList::find`] returns the
/// first entry whose word matches — so when two entries fold to the same
/// form (a caller error), the earlier one deterministically wins.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Build a word list from (identifier, word) pairs, folding each word once.
    #[must_use]
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(key, word)| WordEntry::new(key, word))
            .collect();
        Self { entries }
    }

    /// Number of accepted words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    /// Find the first accepted word equal to `input` under the insensitive
    /// relation.
    ///
    /// Returns `None` when nothing matches; a wrong guess is not an error.
    /// Total over all inputs — empty strings and combining-mark-only strings
    /// simply fold and compare like anything else.
    #[must_use]
    pub fn find(&self, input: &str) -> Option<&WordEntry> {
        let needle = fold_word(input);
        self.entries.iter().find(|entry| entry.folded == needle)
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One-shot lookup over borrowed (identifier, word) pairs.
///
/// Folds `input` once and every candidate word once, returning the first
/// matching pair in the iterator's order. For hash-map candidates that order
/// is the map's own; callers must not depend on which of several equal-
/// folding entries wins.
#[must_use]
pub fn find_first<'a, I>(input: &str, candidates: I) -> Option<(&'a str, &'a str)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let needle = fold_word(input);
    candidates
        .into_iter()
        .find(|(_, word)| fold_word(word) == needle)
}
