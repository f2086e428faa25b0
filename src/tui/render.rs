//! Text rendering for hands, feedback and summaries

use crate::app::SessionStats;
use crate::game::{LetterInventory, ValidationResult};

pub const WORD_PROMPT: &str = "Enter word, or a \".\" to indicate that you are finished: ";

pub const COMMAND_PROMPT: &str =
    "Enter n to deal a new hand, r to replay the last hand, or e to end game: ";

pub const NO_HAND_YET: &str = "You have not played a hand yet. Please play a new hand first!";

/// `Current hand: a c t`
pub fn hand_line(hand: &LetterInventory) -> String {
    format!("Current hand: {}", hand)
}

pub fn accepted_line(word: &str, points: u32, bonus: bool, total: u32) -> String {
    let bonus = if bonus { " (full hand bonus!)" } else { "" };
    format!(
        "\"{}\" earns {} points{}. Total score: {} points",
        word, points, bonus, total
    )
}

pub fn rejected_line(result: &ValidationResult) -> String {
    format!("Invalid word, please try again. ({})", result.message())
}

pub fn out_of_letters_line(total: u32) -> String {
    format!("Run out of letters. Total score: {} points.", total)
}

pub fn goodbye_line(total: u32) -> String {
    format!("Goodbye! Total score: {} points.", total)
}

pub fn summary_lines(stats: &SessionStats) -> Vec<String> {
    vec![
        format!("Hands played: {}", stats.hands_played),
        format!("Best hand: {} points", stats.best_score),
        format!("Session total: {} points", stats.total_score),
    ]
}
