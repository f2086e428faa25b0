#![allow(dead_code)]
//! Session loop: deal, replay or end, and play each hand turn by turn

use super::stats::SessionStats;
use crate::game::{
    Dictionary, HandDealer, LetterInventory, LetterSource, ScoringPolicy, TurnEngine,
    TurnOutcome, END_HAND_SENTINEL,
};
use crate::tui::{render, Console, Tone};
use std::str::FromStr;
use thiserror::Error;

/// Session-level command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// `n`: deal and play a new hand
    NewHand,
    /// `r`: replay the last dealt hand
    ReplayHand,
    /// `e`: end the session
    End,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid command.")]
    Unknown(String),
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(SessionCommand::NewHand),
            "r" => Ok(SessionCommand::ReplayHand),
            "e" => Ok(SessionCommand::End),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// How a played hand ended from the session's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    pub score: u32,
    /// Input closed mid-hand; the session should stop too
    pub input_closed: bool,
}

/// A game session: deals hands and plays them against one dictionary.
pub struct Session<'a, D: ?Sized, S> {
    dictionary: &'a D,
    dealer: HandDealer,
    policy: ScoringPolicy,
    letters: S,
    hand_size: u32,
    last_hand: Option<LetterInventory>,
    stats: SessionStats,
}

impl<'a, D, S> Session<'a, D, S>
where
    D: Dictionary + ?Sized,
    S: LetterSource,
{
    pub fn new(
        dictionary: &'a D,
        dealer: HandDealer,
        policy: ScoringPolicy,
        letters: S,
        hand_size: u32,
    ) -> Self {
        Self {
            dictionary,
            dealer,
            policy,
            letters,
            hand_size,
            last_hand: None,
            stats: SessionStats::default(),
        }
    }

    pub fn last_hand(&self) -> Option<&LetterInventory> {
        self.last_hand.as_ref()
    }

    /// Run the command loop until `e` or end of input.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<SessionStats, SessionError> {
        while let Some(line) = console.read_line(render::COMMAND_PROMPT)? {
            let command = match line.parse::<SessionCommand>() {
                Ok(command) => command,
                Err(e) => {
                    tracing::debug!(input = %line, "unknown command");
                    console.write_styled(&e.to_string(), Tone::Bad)?;
                    continue;
                }
            };

            let hand = match command {
                SessionCommand::End => break,
                SessionCommand::NewHand => {
                    let hand = self.dealer.deal(self.hand_size, &mut self.letters);
                    self.last_hand = Some(hand.clone());
                    hand
                }
                SessionCommand::ReplayHand => match &self.last_hand {
                    Some(hand) => hand.clone(),
                    None => {
                        console.write_styled(render::NO_HAND_YET, Tone::Bad)?;
                        continue;
                    }
                },
            };

            let result = self.play_hand(hand, console)?;
            self.stats.record(result.score);
            if result.input_closed {
                break;
            }
        }

        for line in render::summary_lines(&self.stats) {
            console.write_line(&line)?;
        }
        Ok(self.stats.clone())
    }

    /// Play one hand to completion.
    pub fn play_hand<C: Console>(
        &self,
        hand: LetterInventory,
        console: &mut C,
    ) -> Result<HandResult, SessionError> {
        let mut engine = TurnEngine::new(hand, self.dictionary, &self.policy);
        let mut input_closed = false;

        while !engine.is_finished() {
            console.write_line(&render::hand_line(engine.hand()))?;
            let token = match console.read_line(render::WORD_PROMPT)? {
                Some(token) => token,
                None => {
                    input_closed = true;
                    END_HAND_SENTINEL.to_string()
                }
            };

            match engine.submit(&token) {
                TurnOutcome::Accepted {
                    word,
                    points,
                    bonus,
                    total,
                    finished,
                } => {
                    console.write_styled(
                        &render::accepted_line(&word, points, bonus, total),
                        Tone::Good,
                    )?;
                    if finished {
                        console.write_line(&render::out_of_letters_line(total))?;
                        console.write_line(&render::goodbye_line(total))?;
                    }
                }
                TurnOutcome::Rejected(reason) => {
                    console.write_styled(&render::rejected_line(&reason), Tone::Bad)?;
                }
                TurnOutcome::Stopped { total } => {
                    console.write_line(&render::goodbye_line(total))?;
                }
                TurnOutcome::HandOver => break,
            }
        }

        Ok(HandResult {
            score: engine.score(),
            input_closed,
        })
    }
}
