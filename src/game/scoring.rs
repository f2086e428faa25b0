//! Word scoring: Scrabble letter values times word length, plus a
//! full-hand bonus

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Flat bonus for a word that uses every tile of the hand.
pub const FULL_HAND_BONUS: u32 = 50;

/// Standard Scrabble letter values.
pub static SCRABBLE_LETTER_VALUES: Lazy<LetterValueTable> = Lazy::new(|| {
    let mut values = HashMap::new();
    for (letters, points) in [
        ("aeilnorstu", 1),
        ("dg", 2),
        ("bcmp", 3),
        ("fhvwy", 4),
        ("k", 5),
        ("jx", 8),
        ("qz", 10),
    ] {
        for c in letters.chars() {
            values.insert(c, points);
        }
    }
    LetterValueTable { values }
});

/// Fixed mapping from letter to point value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterValueTable {
    values: HashMap<char, u32>,
}

impl LetterValueTable {
    pub fn value(&self, letter: char) -> Option<u32> {
        self.values.get(&letter).copied()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.values.contains_key(&letter)
    }
}

/// Pure scoring function parameterised by a letter value table and the
/// bonus amount.
#[derive(Debug, Clone)]
pub struct ScoringPolicy {
    values: LetterValueTable,
    bonus: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::new(SCRABBLE_LETTER_VALUES.clone(), FULL_HAND_BONUS)
    }
}

impl ScoringPolicy {
    pub fn new(values: LetterValueTable, bonus: u32) -> Self {
        Self { values, bonus }
    }

    /// Sum of letter values times word length, without any bonus.
    ///
    /// Letters missing from the table count as 0; validated words never
    /// contain one.
    pub fn word_points(&self, word: &str) -> u32 {
        let base: u32 = word.chars().filter_map(|c| self.values.value(c)).sum();
        base * word.chars().count() as u32
    }

    /// Score `word` played from a hand of `full_hand_size` tiles. Adds the
    /// bonus when the word is exactly as long as the hand.
    pub fn score(&self, word: &str, full_hand_size: u32) -> u32 {
        let points = self.word_points(word);
        if word.chars().count() as u32 == full_hand_size {
            points + self.bonus
        } else {
            points
        }
    }
}
