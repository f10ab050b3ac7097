//! Win tallies across rounds.
//!
//! Tallies belong to the surrounding session, not to the board model:
//! a board is discarded and replaced every round, while the score
//! accumulates for as long as the players keep pressing "play again".

use crate::phases::Outcome;
use crate::types::Mark;
use crate::wrapper::AnyGame;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Caller-owned win tallies for a sequence of rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    circle: u32,
    cross: u32,
    draws: u32,
}

impl Scoreboard {
    /// Creates a scoreboard with all tallies at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of a finished round.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Winner(Mark::Circle) => self.circle += 1,
            Outcome::Winner(Mark::Cross) => self.cross += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Rounds won by the given mark.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::Circle => self.circle,
            Mark::Cross => self.cross,
        }
    }

    /// Rounds that ended in a draw.
    pub fn draws(&self) -> u32 {
        self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "O {} - X {} ({} drawn)",
            self.circle, self.cross, self.draws
        )
    }
}

/// Full session snapshot: the current round in whatever phase it was
/// saved, plus the tallies accumulated over finished rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedMatch {
    /// The round being played when the session was saved.
    pub game: AnyGame,
    /// Tallies over finished rounds.
    pub score: Scoreboard,
}

impl SavedMatch {
    /// Bundles a round snapshot with its scoreboard.
    pub fn new(game: AnyGame, score: Scoreboard) -> Self {
        Self { game, score }
    }
}
