#![forbid(unsafe_code)]

//! Insensitive word matching for LocalizedWords.
//!
//! Provides a lookup over a caller-supplied (identifier, word) mapping that
//! treats two words as equal when they differ only in letter case, diacritical
//! marks, or full-width/half-width character form.
//!
//! # Role in LocalizedWords
//! `lwords-match` isolates the one piece of the guess-the-word flow with a
//! reusable contract: deciding whether a user's guess is one of the accepted
//! localized words. It holds no state between calls and performs no I/O.
//!
//! # How it fits in the system
//! The challenge screen resolves its accepted words through `lwords-i18n`,
//! builds a [`WordList`] once per locale, and calls [`WordList::find`] on
//! every input change. Callers holding an arbitrary map can use the free
//! function [`find_first`] instead.

pub mod fold;
pub mod matcher;

pub use fold::{eq_folded, fold_word};
pub use matcher::{WordEntry, WordList, find_first};
