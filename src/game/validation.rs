#![allow(dead_code)]
//! Word validation
//!
//! A word is legal against a hand when:
//! - it is non-empty
//! - the hand holds all of its letters (with multiplicity)
//! - the dictionary knows it

use super::dictionary::Dictionary;
use super::inventory::LetterInventory;

/// Result of word validation with specific error messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Word is valid
    Valid,
    /// Nothing was submitted
    Empty,
    /// Word uses letters not available in the hand
    InvalidLetters { missing: Vec<char> },
    /// Word not found in dictionary
    NotInDictionary,
}

impl ValidationResult {
    /// Returns true if the word is valid
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Returns a user-friendly error message
    pub fn message(&self) -> String {
        match self {
            ValidationResult::Valid => "Valid word!".to_string(),
            ValidationResult::Empty => "No word entered".to_string(),
            ValidationResult::InvalidLetters { missing } => {
                let letters: String = missing.iter().collect();
                format!("Missing letters: {}", letters)
            }
            ValidationResult::NotInDictionary => "Not in dictionary".to_string(),
        }
    }
}

/// Validate a word against the hand and dictionary
///
/// Hand containment is checked before the dictionary so a word built
/// from unavailable tiles never costs a lookup.
pub fn validate_word<D>(word: &str, hand: &LetterInventory, dictionary: &D) -> ValidationResult
where
    D: Dictionary + ?Sized,
{
    if word.is_empty() {
        return ValidationResult::Empty;
    }

    let missing = hand.missing_letters(word);
    if !missing.is_empty() {
        return ValidationResult::InvalidLetters { missing };
    }

    if !dictionary.word_exists(word) {
        return ValidationResult::NotInDictionary;
    }

    ValidationResult::Valid
}

/// Shorthand for `validate_word(..).is_valid()`.
pub fn is_valid_word<D>(word: &str, hand: &LetterInventory, dictionary: &D) -> bool
where
    D: Dictionary + ?Sized,
{
    validate_word(word, hand, dictionary).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dictionary::WordList;
    use proptest::prelude::*;
    use std::cell::Cell;

    fn dict() -> WordList {
        WordList::parse("cat\ndog\ncats\nhello\nworld\nxyzzy")
    }

    /// Counts lookups so tests can see whether the dictionary was consulted.
    struct CountingDictionary {
        inner: WordList,
        lookups: Cell<usize>,
    }

    impl Dictionary for CountingDictionary {
        fn word_exists(&self, word: &str) -> bool {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.word_exists(word)
        }
    }

    #[test]
    fn test_valid_word() {
        let hand = LetterInventory::from_word("catsdog");
        assert_eq!(validate_word("cat", &hand, &dict()), ValidationResult::Valid);
        assert_eq!(validate_word("dog", &hand, &dict()), ValidationResult::Valid);
        assert!(is_valid_word("cats", &hand, &dict()));
    }

    #[test]
    fn test_empty_word() {
        let hand = LetterInventory::from_word("catsdog");
        assert_eq!(validate_word("", &hand, &dict()), ValidationResult::Empty);
    }

    #[test]
    fn test_missing_letters() {
        let hand = LetterInventory::from_word("catsdog");
        match validate_word("xyzzy", &hand, &dict()) {
            ValidationResult::InvalidLetters { missing } => {
                assert_eq!(missing, vec!['x', 'y', 'z']);
            }
            other => panic!("Expected InvalidLetters, got {:?}", other),
        }
    }

    #[test]
    fn test_multiplicity_respected() {
        // Hand has only one 'l'
        let hand = LetterInventory::from_word("helowrd");
        let result = validate_word("hello", &hand, &dict());
        assert_eq!(result, ValidationResult::InvalidLetters { missing: vec!['l'] });
    }

    #[test]
    fn test_not_in_dictionary() {
        let hand = LetterInventory::from_word("catsdog");
        assert_eq!(validate_word("tac", &hand, &dict()), ValidationResult::NotInDictionary);
    }

    #[test]
    fn test_hand_checked_before_dictionary() {
        let counting = CountingDictionary {
            inner: dict(),
            lookups: Cell::new(0),
        };
        let hand = LetterInventory::from_word("dog");
        assert!(!is_valid_word("cat", &hand, &counting));
        assert_eq!(counting.lookups.get(), 0);
        assert!(is_valid_word("dog", &hand, &counting));
        assert_eq!(counting.lookups.get(), 1);
    }

    #[test]
    fn test_message_format() {
        assert_eq!(ValidationResult::Valid.message(), "Valid word!");
        assert_eq!(ValidationResult::Empty.message(), "No word entered");
        assert_eq!(
            ValidationResult::InvalidLetters {
                missing: vec!['x', 'y']
            }
            .message(),
            "Missing letters: xy"
        );
        assert_eq!(
            ValidationResult::NotInDictionary.message(),
            "Not in dictionary"
        );
    }

    proptest! {
        #[test]
        fn prop_validity_is_membership_and_containment(
            hand in "[a-z]{0,9}",
            word in prop::sample::select(vec!["cat", "dog", "cats", "tac", "hello", "act", ""]),
        ) {
            let dictionary = dict();
            let hand = LetterInventory::from_word(&hand);
            let expected = dictionary.word_exists(word) && hand.contains(word);
            prop_assert_eq!(is_valid_word(word, &hand, &dictionary), expected);
        }
    }
}
