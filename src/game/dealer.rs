//! Random hand dealing

use super::inventory::LetterInventory;
use rand::prelude::*;
use rand::seq::IndexedRandom;

/// Source of random letters drawn from a pool.
pub trait LetterSource {
    /// Draw one letter uniformly from `pool`, with replacement. `None` only
    /// for an empty pool.
    fn random_letter(&mut self, pool: &[char]) -> Option<char>;
}

/// `LetterSource` backed by any `rand` generator.
pub struct RngLetters<R> {
    rng: R,
}

impl<R: Rng> RngLetters<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngLetters<StdRng> {
    /// Seeded source, for reproducible deals.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the OS.
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> LetterSource for RngLetters<R> {
    fn random_letter(&mut self, pool: &[char]) -> Option<char> {
        pool.choose(&mut self.rng).copied()
    }
}

/// Deals hands with a third of the tiles drawn from the vowel pool.
#[derive(Debug, Clone)]
pub struct HandDealer {
    vowels: Vec<char>,
    consonants: Vec<char>,
}

impl HandDealer {
    pub fn new(vowels: Vec<char>, consonants: Vec<char>) -> Self {
        Self { vowels, consonants }
    }

    /// Number of vowel draws for a hand of `size` tiles.
    pub fn vowel_draws(size: u32) -> u32 {
        size / 3
    }

    /// Deal `size` tiles: `size / 3` vowel draws, the rest consonant draws.
    /// Draws are independent; nothing is rebalanced afterwards.
    ///
    /// Each pool that `size` draws from must be non-empty, otherwise the
    /// hand comes up short by those draws. `GameConfig::validate` checks this.
    pub fn deal<S: LetterSource + ?Sized>(&self, size: u32, source: &mut S) -> LetterInventory {
        let vowel_draws = Self::vowel_draws(size);
        let mut hand = LetterInventory::new();
        for i in 0..size {
            let pool = if i < vowel_draws {
                &self.vowels
            } else {
                &self.consonants
            };
            if let Some(c) = source.random_letter(pool) {
                hand.add(c);
            }
        }
        tracing::debug!(size, hand = %hand, "hand dealt");
        hand
    }
}
