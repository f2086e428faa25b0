//! Game logic: letter inventories, scoring, word validation, dealing and
//! the per-hand turn engine

pub mod dealer;
pub mod dictionary;
pub mod inventory;
pub mod scoring;
pub mod turn;
pub mod validation;

pub use dealer::{HandDealer, LetterSource, RngLetters};
pub use dictionary::{Dictionary, WordList};
pub use inventory::LetterInventory;
pub use scoring::{LetterValueTable, ScoringPolicy, FULL_HAND_BONUS, SCRABBLE_LETTER_VALUES};
pub use turn::{TurnEngine, TurnOutcome, END_HAND_SENTINEL};
pub use validation::ValidationResult;

/// Default vowel pool
pub const VOWELS: &str = "aeiou";

/// Default consonant pool
pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// Default number of tiles in a hand
pub const HAND_SIZE: u32 = 7;
