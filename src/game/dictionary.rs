#![allow(dead_code)]
//! Dictionary module for word validation
//!
//! Loads a newline-delimited word list once at startup and answers
//! membership queries with O(1) hash set lookups.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Read-only word membership.
pub trait Dictionary {
    fn word_exists(&self, word: &str) -> bool;
}

/// The word list could not be loaded. Fatal to session start.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Word list held in memory, lowercased on load.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Load a word list from a file, one word per line.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let data = fs::read_to_string(path).map_err(|source| DictionaryError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&data);
        tracing::info!(path = %path.display(), words = list.len(), "word list loaded");
        Ok(list)
    }

    /// Build a word list from newline-delimited text. Blank lines are skipped.
    pub fn parse(data: &str) -> Self {
        data.lines().collect()
    }

    /// Returns the total number of words in the list
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for WordList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

impl Dictionary for WordList {
    fn word_exists(&self, word: &str) -> bool {
        !word.is_empty() && self.words.contains(word)
    }
}
