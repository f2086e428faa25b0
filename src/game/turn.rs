#![allow(dead_code)]
//! Per-hand turn engine
//!
//! Drives one hand from deal to finish: each submission is validated,
//! scored and removed from the hand until the player stops or the tiles
//! run out.

use super::dictionary::Dictionary;
use super::inventory::LetterInventory;
use super::scoring::ScoringPolicy;
use super::validation::{validate_word, ValidationResult};

/// Token that ends a hand early.
pub const END_HAND_SENTINEL: &str = ".";

/// Why a hand finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// Player entered the sentinel
    Stopped,
    /// Every tile was used
    OutOfLetters,
}

/// Turn state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingSubmission,
    HandFinished(FinishReason),
}

/// Result of submitting a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Word accepted and removed from the hand
    Accepted {
        word: String,
        points: u32,
        bonus: bool,
        total: u32,
        finished: bool,
    },
    /// Word rejected, hand unchanged
    Rejected(ValidationResult),
    /// Sentinel received
    Stopped { total: u32 },
    /// Submission after the hand already ended
    HandOver,
}

/// Mutable state of one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandState {
    pub inventory: LetterInventory,
    /// Hand size at deal time
    pub original_size: u32,
    pub bonus_awarded: bool,
    pub score: u32,
}

impl HandState {
    pub fn new(inventory: LetterInventory) -> Self {
        let original_size = inventory.total_len();
        Self {
            inventory,
            original_size,
            bonus_awarded: false,
            score: 0,
        }
    }
}

/// One hand's state machine. Borrows the dictionary and scoring policy
/// read-only for the duration of the hand.
pub struct TurnEngine<'a, D: ?Sized> {
    state: HandState,
    phase: TurnPhase,
    dictionary: &'a D,
    policy: &'a ScoringPolicy,
}

impl<'a, D: Dictionary + ?Sized> TurnEngine<'a, D> {
    pub fn new(hand: LetterInventory, dictionary: &'a D, policy: &'a ScoringPolicy) -> Self {
        Self {
            state: HandState::new(hand),
            phase: TurnPhase::AwaitingSubmission,
            dictionary,
            policy,
        }
    }

    pub fn state(&self) -> &HandState {
        &self.state
    }

    pub fn hand(&self) -> &LetterInventory {
        &self.state.inventory
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, TurnPhase::HandFinished(_))
    }

    /// Process one submission token.
    pub fn submit(&mut self, token: &str) -> TurnOutcome {
        if self.is_finished() {
            return TurnOutcome::HandOver;
        }

        if token == END_HAND_SENTINEL {
            self.finish(FinishReason::Stopped);
            return TurnOutcome::Stopped {
                total: self.state.score,
            };
        }

        let result = validate_word(token, &self.state.inventory, self.dictionary);
        if !result.is_valid() {
            tracing::debug!(word = token, reason = %result.message(), "submission rejected");
            return TurnOutcome::Rejected(result);
        }

        let hand_len = self.state.inventory.total_len();
        // The bonus target is the hand as dealt: only a word spending every
        // original tile earns it, and only once.
        let bonus = !self.state.bonus_awarded
            && hand_len == self.state.original_size
            && token.chars().count() as u32 == hand_len;
        let points = if bonus {
            self.state.bonus_awarded = true;
            self.policy.score(token, hand_len)
        } else {
            self.policy.word_points(token)
        };

        self.state.score += points;
        self.state.inventory = self.state.inventory.subtract(token);
        tracing::debug!(word = token, points, bonus, total = self.state.score, "word accepted");

        let finished = self.state.inventory.is_exhausted();
        if finished {
            self.finish(FinishReason::OutOfLetters);
        }

        TurnOutcome::Accepted {
            word: token.to_string(),
            points,
            bonus,
            total: self.state.score,
            finished,
        }
    }

    fn finish(&mut self, reason: FinishReason) {
        self.phase = TurnPhase::HandFinished(reason);
        tracing::info!(score = self.state.score, ?reason, "hand finished");
    }
}
