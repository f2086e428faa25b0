//! Game configuration
//!
//! Letter pools, hand size and letter values are fixed for the whole
//! process and handed to the dealer, the scoring policy and the session.

use crate::game::{
    HandDealer, LetterValueTable, ScoringPolicy, CONSONANTS, FULL_HAND_BONUS, HAND_SIZE,
    SCRABBLE_LETTER_VALUES, VOWELS,
};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Word list file name, looked up in the working directory then the data dir.
pub const WORD_LIST_FILE: &str = "words.txt";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{pool} pool is empty but a hand of {hand_size} needs draws from it")]
    EmptyPool { pool: &'static str, hand_size: u32 },
    #[error("letter '{0}' has no point value")]
    UnscoredLetter(char),
    #[error("no word list found; pass --words <PATH>")]
    NoWordList,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub hand_size: u32,
    pub vowels: Vec<char>,
    pub consonants: Vec<char>,
    pub letter_values: LetterValueTable,
    pub bonus: u32,
    pub word_list: PathBuf,
}

impl GameConfig {
    /// Default game rules reading words from `word_list`.
    pub fn new(word_list: PathBuf) -> Self {
        Self {
            hand_size: HAND_SIZE,
            vowels: VOWELS.chars().collect(),
            consonants: CONSONANTS.chars().collect(),
            letter_values: SCRABBLE_LETTER_VALUES.clone(),
            bonus: FULL_HAND_BONUS,
            word_list,
        }
    }

    pub fn with_hand_size(mut self, hand_size: u32) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Check that every deal can be filled and every dealt letter scored.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let vowel_draws = HandDealer::vowel_draws(self.hand_size);
        if vowel_draws > 0 && self.vowels.is_empty() {
            return Err(ConfigError::EmptyPool {
                pool: "vowel",
                hand_size: self.hand_size,
            });
        }
        if self.hand_size > vowel_draws && self.consonants.is_empty() {
            return Err(ConfigError::EmptyPool {
                pool: "consonant",
                hand_size: self.hand_size,
            });
        }
        if let Some(&c) = self
            .vowels
            .iter()
            .chain(&self.consonants)
            .find(|&&c| !self.letter_values.contains(c))
        {
            return Err(ConfigError::UnscoredLetter(c));
        }
        Ok(())
    }

    pub fn dealer(&self) -> HandDealer {
        HandDealer::new(self.vowels.clone(), self.consonants.clone())
    }

    pub fn scoring(&self) -> ScoringPolicy {
        ScoringPolicy::new(self.letter_values.clone(), self.bonus)
    }
}

/// Pick the word list: an explicit path wins, then `words.txt` in the
/// working directory, then the OS data directory.
///
/// - Linux: `$XDG_DATA_HOME/wordhand/` or `~/.local/share/wordhand/`
/// - macOS: `~/Library/Application Support/wordhand/`
pub fn resolve_word_list(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let local = PathBuf::from(WORD_LIST_FILE);
    if local.is_file() {
        return Ok(local);
    }
    data_dir()
        .map(|dir| dir.join(WORD_LIST_FILE))
        .ok_or(ConfigError::NoWordList)
}

fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wordhand").map(|dirs| dirs.data_dir().to_path_buf())
}
