//! Property-based invariant tests for the word matcher.
//!
//! Verifies structural guarantees of folding and lookup:
//!
//! 1. Folding is idempotent
//! 2. Folding never panics on arbitrary input
//! 3. Reflexivity: every word in a list is found by its own text
//! 4. Lookup against an empty list always returns None
//! 5. Lookup is deterministic: same input, same list → same entry
//! 6. A match implies folded equality of input and matched word
//! 7. Case variation of the accepted word still matches
//! 8. Duplicate folded entries never panic and the first one wins
//! 9. find_first agrees with WordList::find on the same pairs

use lwords_match::{WordList, find_first, fold_word};
use proptest::prelude::*;

fn word_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec(("[a-z_]{1,12}", "\\PC{1,16}"), 0..8)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Folding is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fold_idempotent(s in "\\PC*") {
        let once = fold_word(&s);
        let twice = fold_word(&once);
        prop_assert_eq!(once, twice);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Folding never panics on arbitrary input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fold_total(s in any::<String>()) {
        let _ = fold_word(&s);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Reflexivity: every listed word is found by its own text
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reflexivity(pairs in word_pairs()) {
        let list = WordList::new(pairs.clone());
        for (_, word) in &pairs {
            let entry = list.find(word);
            prop_assert!(entry.is_some(), "word {:?} not found in its own list", word);
            let entry = entry.unwrap();
            prop_assert_eq!(
                fold_word(&entry.word),
                fold_word(word),
                "matched word not fold-equal to probe"
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Empty list always returns None
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn empty_list_returns_none(input in "\\PC*") {
        let list = WordList::new(std::iter::empty());
        prop_assert!(list.find(&input).is_none());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Lookup is deterministic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lookup_deterministic(pairs in word_pairs(), input in "\\PC{0,16}") {
        let list = WordList::new(pairs);
        let a = list.find(&input).map(|e| e.key.clone());
        let b = list.find(&input).map(|e| e.key.clone());
        prop_assert_eq!(a, b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. A match implies folded equality
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn match_implies_folded_equality(pairs in word_pairs(), input in "\\PC{0,16}") {
        let list = WordList::new(pairs);
        if let Some(entry) = list.find(&input) {
            prop_assert_eq!(fold_word(&entry.word), fold_word(&input));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Case variation still matches
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn case_variation_matches(word in "[a-z]{1,12}") {
        let list = WordList::new([("k".to_owned(), word.clone())]);
        prop_assert!(list.find(&word.to_uppercase()).is_some());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Duplicate folded entries: no panic, first one wins
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn duplicates_first_wins(word in "[a-z]{1,12}") {
        let list = WordList::new([
            ("a".to_owned(), word.clone()),
            ("b".to_owned(), word.to_uppercase()),
        ]);
        let entry = list.find(&word).expect("duplicate word should still match");
        prop_assert_eq!(entry.key.as_str(), "a");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. find_first agrees with WordList::find
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn find_first_agrees_with_word_list(pairs in word_pairs(), input in "\\PC{0,16}") {
        let list = WordList::new(pairs.clone());
        let via_list = list.find(&input).map(|e| (e.key.clone(), e.word.clone()));
        let via_pairs = find_first(
            &input,
            pairs.iter().map(|(k, w)| (k.as_str(), w.as_str())),
        )
        .map(|(k, w)| (k.to_owned(), w.to_owned()));
        prop_assert_eq!(via_list, via_pairs);
    }
}
