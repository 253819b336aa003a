#![forbid(unsafe_code)]

//! The folding pipeline that defines insensitive equality.
//!
//! Two strings are equal under the matcher's relation when their folded forms
//! are codepoint-for-codepoint identical. The fold is fixed:
//!
//! 1. NFKD compatibility decomposition — separates base characters from
//!    combining marks and maps compatibility variants (full-width Latin,
//!    half-width Katakana, ligatures) to their canonical counterparts.
//! 2. Removal of combining marks — drops the accents exposed by step 1.
//! 3. Unicode lowercasing.
//!
//! # Example
//! ```
//! use lwords_match::fold::{eq_folded, fold_word};
//!
//! assert_eq!(fold_word("Caf\u{00E9}"), "cafe");
//! assert!(eq_folded("\u{FF37}ALRUS", "walrus")); // full-width W
//! ```

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a word into the canonical form used for insensitive comparison.
///
/// The result is empty when the input contains nothing but combining marks
/// (or is itself empty). Folding is idempotent: folding a folded string
/// returns it unchanged.
#[must_use]
pub fn fold_word(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Check two strings for equality under the insensitive relation.
///
/// Both sides are folded, so the relation is symmetric: `café` matches
/// `cafe` and `cafe` matches `café`.
#[must_use]
pub fn eq_folded(a: &str, b: &str) -> bool {
    fold_word(a) == fold_word(b)
}
