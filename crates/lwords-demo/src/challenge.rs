#![forbid(unsafe_code)]

//! The guess-the-word challenge screen, headless.
//!
//! Accepted words are resolved from the catalog once per screen and held in a
//! [`WordList`]; every input change runs one lookup against the prebuilt
//! list. On a match, the feedback message key is the matched identifier plus
//! a fixed suffix, resolved through the same catalog.

use lwords_i18n::StringCatalog;
use lwords_match::WordList;

/// Identifiers of the accepted answers, in first-match-wins order.
pub const ACCEPTED_KEYS: [&str; 3] = ["walrus", "cone", "banana"];

/// Suffix selecting the follow-up message for a matched identifier.
const FEEDBACK_SUFFIX: &str = "_value";

/// Feedback shown after a correct guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// The matched identifier.
    pub key: String,
    /// Localization key of the message (`<key>_value`).
    pub message_key: String,
    /// Resolved message text; the key itself when unresolved.
    pub message: String,
}

/// Challenge state for one locale: the accepted words, built once.
#[derive(Debug)]
pub struct ChallengeScreen<'a> {
    catalog: &'a StringCatalog,
    locale: String,
    words: WordList,
}

impl<'a> ChallengeScreen<'a> {
    /// Resolve the accepted words for `locale` and build the word list.
    ///
    /// An identifier without a catalog entry keeps its key text as the word,
    /// so the screen stays playable with a sparse catalog.
    #[must_use]
    pub fn new(catalog: &'a StringCatalog, locale: &str) -> Self {
        let words = WordList::new(ACCEPTED_KEYS.iter().map(|key| {
            let word = catalog.get(locale, key).unwrap_or(key).to_owned();
            ((*key).to_owned(), word)
        }));
        Self {
            catalog,
            locale: locale.to_owned(),
            words,
        }
    }

    /// The locale this screen was built for.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The accepted words, in order.
    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Check a guess. A wrong guess yields `None` — no feedback, no error.
    #[must_use]
    pub fn check_word(&self, input: &str) -> Option<Feedback> {
        let entry = self.words.find(input)?;
        let message_key = format!("{}{FEEDBACK_SUFFIX}", entry.key);
        let message = self
            .catalog
            .get(&self.locale, &message_key)
            .unwrap_or(&message_key)
            .to_owned();
        Some(Feedback {
            key: entry.key.clone(),
            message_key,
            message,
        })
    }
}
