#![allow(dead_code)]
//! Letter inventories: the multiset behind a hand or a word

use std::collections::BTreeMap;
use std::fmt;

/// Mapping from lowercase letter to tile count.
///
/// Inventories are values: `subtract` hands back a new inventory and
/// leaves the receiver untouched. A count may drop to zero and stay in
/// the map; it is never negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterInventory {
    counts: BTreeMap<char, u32>,
}

impl LetterInventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the frequency multiset of a word (or any letter sequence).
    pub fn from_word(word: &str) -> Self {
        word.chars().collect()
    }

    /// Count of `letter`, 0 when absent.
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of tiles.
    pub fn total_len(&self) -> u32 {
        self.counts.values().sum()
    }

    /// True if every letter of `word` is available with enough multiplicity.
    pub fn contains(&self, word: &str) -> bool {
        self.missing_letters(word).is_empty()
    }

    /// Letters of `word` the inventory cannot cover, deduplicated in order
    /// of first shortfall.
    pub fn missing_letters(&self, word: &str) -> Vec<char> {
        let needed = Self::from_word(word);
        let mut missing = Vec::new();
        for c in word.chars() {
            if needed.count(c) > self.count(c) && !missing.contains(&c) {
                missing.push(c);
            }
        }
        missing
    }

    /// Remove the letters of `word`, returning the resulting inventory.
    ///
    /// The caller must have checked `contains(word)` first. A letter that
    /// is short saturates at zero instead of going negative.
    pub fn subtract(&self, word: &str) -> Self {
        let mut next = self.clone();
        for c in word.chars() {
            let slot = next.counts.entry(c).or_insert(0);
            *slot = slot.saturating_sub(1);
        }
        next
    }

    /// True when no tiles remain.
    pub fn is_exhausted(&self) -> bool {
        self.counts.values().all(|&n| n == 0)
    }

    /// Letters with a non-zero count, each repeated by its count, in
    /// alphabetical order.
    pub fn tiles(&self) -> Vec<char> {
        self.counts
            .iter()
            .flat_map(|(&c, &n)| std::iter::repeat(c).take(n as usize))
            .collect()
    }

    /// Iterate over `(letter, count)` entries, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    pub(crate) fn add(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
    }
}

impl FromIterator<char> for LetterInventory {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut inventory = Self::new();
        for c in iter {
            inventory.add(c);
        }
        inventory
    }
}

impl<const N: usize> From<[(char, u32); N]> for LetterInventory {
    fn from(entries: [(char, u32); N]) -> Self {
        Self {
            counts: entries.into_iter().collect(),
        }
    }
}

impl fmt::Display for LetterInventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiles: Vec<String> = self.tiles().iter().map(|c| c.to_string()).collect();
        write!(f, "{}", tiles.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_count_absent_letter_is_zero() {
        let hand = LetterInventory::from_word("cat");
        assert_eq!(hand.count('c'), 1);
        assert_eq!(hand.count('z'), 0);
    }

    #[test]
    fn test_total_len() {
        let hand = LetterInventory::from([('a', 2), ('x', 1), ('l', 3), ('e', 0)]);
        assert_eq!(hand.total_len(), 6);
        assert_eq!(LetterInventory::new().total_len(), 0);
    }

    #[test]
    fn test_contains_respects_multiplicity() {
        let hand = LetterInventory::from_word("helowrd");
        assert!(hand.contains("world"));
        assert!(!hand.contains("hello"));
        assert_eq!(hand.missing_letters("hello"), vec!['l']);
    }

    #[test]
    fn test_contains_ignores_zero_counts() {
        let hand = LetterInventory::from([('a', 0), ('t', 1)]);
        assert!(!hand.contains("at"));
        assert_eq!(hand.missing_letters("at"), vec!['a']);
    }

    #[test]
    fn test_subtract_leaves_receiver_untouched() {
        let hand = LetterInventory::from_word("catsdog");
        let rest = hand.subtract("cats");
        assert_eq!(hand.total_len(), 7);
        assert_eq!(rest.total_len(), 3);
        assert_eq!(rest.count('c'), 0);
        assert_eq!(rest.count('d'), 1);
    }

    #[test]
    fn test_subtract_keeps_zero_entries() {
        let rest = LetterInventory::from_word("ab").subtract("a");
        assert_eq!(rest.iter().collect::<Vec<_>>(), vec![('a', 0), ('b', 1)]);
    }

    #[test]
    fn test_is_exhausted() {
        assert!(LetterInventory::new().is_exhausted());
        let hand = LetterInventory::from_word("dog");
        assert!(!hand.is_exhausted());
        assert!(hand.subtract("dog").is_exhausted());
    }

    #[test]
    fn test_display_lists_tiles_alphabetically() {
        let hand = LetterInventory::from([('x', 2), ('a', 1), ('e', 0)]);
        assert_eq!(hand.to_string(), "a x x");
    }

    proptest! {
        #[test]
        fn prop_subtract_conserves_letters(hand in "[a-e]{0,12}", word in "[a-e]{0,6}") {
            let hand = LetterInventory::from_word(&hand);
            prop_assume!(hand.contains(&word));
            let used = LetterInventory::from_word(&word);
            let rest = hand.subtract(&word);
            for c in 'a'..='e' {
                prop_assert_eq!(rest.count(c), hand.count(c) - used.count(c));
            }
            prop_assert_eq!(rest.total_len() + used.total_len(), hand.total_len());
        }

        #[test]
        fn prop_contains_matches_counts(hand in "[a-d]{0,10}", word in "[a-d]{0,6}") {
            let inventory = LetterInventory::from_word(&hand);
            let used = LetterInventory::from_word(&word);
            let expected = word.chars().all(|c| used.count(c) <= inventory.count(c));
            prop_assert_eq!(inventory.contains(&word), expected);
        }
    }
}
