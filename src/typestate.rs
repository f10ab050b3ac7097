//! Typestate round state machine.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! A finished round ALWAYS has an outcome, and a finished round has no
//! `make_move` — moving after the round ends is a compile error, not a
//! runtime check.

use crate::action::{Move, MoveError};
use crate::phases::Outcome;
use crate::types::{Board, Mark};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Round in setup phase - ready to start.
///
/// The board is always empty. No history, no outcome.
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub(crate) board: Board,
}

impl GameSetup {
    /// Creates a new round on a standard 3×3 board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::default(),
        }
    }

    /// Creates a new round on a board of the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero (see [`Board::new`]).
    #[instrument]
    pub fn with_size(size: usize) -> Self {
        Self {
            board: Board::new(size),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the round with the first mark to move (consumes setup,
    /// returns in-progress). The classic game opens with Circle.
    #[instrument(skip(self))]
    pub fn start(self, first_mark: Mark) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first_mark,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress - can accept moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Mark,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// The mutation and the outcome queries are deliberately separate
    /// steps: the move is applied through [`Board::place`], then
    /// [`Board::winner`] and [`Board::is_full`] decide whether the round
    /// continues or finishes.
    ///
    /// # Errors
    ///
    /// [`MoveError::WrongTurn`] when the move carries the wrong mark,
    /// [`MoveError::OutOfBounds`] or [`MoveError::CellOccupied`] when the
    /// board rejects the placement. The round is unchanged on error.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        if action.mark != self.to_move {
            return Err(MoveError::WrongTurn(action.mark));
        }

        let mut round = self;
        round.board.place(action.x, action.y, action.mark)?;
        round.history.push(action);

        if let Some(winner) = round.board.winner() {
            return Ok(GameResult::Finished(GameFinished {
                board: round.board,
                history: round.history,
                outcome: Outcome::Winner(winner),
            }));
        }

        if round.board.is_full() {
            return Ok(GameResult::Finished(GameFinished {
                board: round.board,
                history: round.history,
                outcome: Outcome::Draw,
            }));
        }

        round.to_move = round.to_move.opponent();

        // Postconditions, debug builds only.
        #[cfg(debug_assertions)]
        {
            use crate::invariants::{InvariantSet, RoundInvariants};
            RoundInvariants::check_all(&round).map_err(|violations| {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                MoveError::InvariantViolation(descriptions)
            })?;
        }

        Ok(GameResult::InProgress(round))
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Coordinates of the cells still open to the mover.
    pub fn valid_moves(&self) -> Vec<(usize, usize)> {
        self.board.empty_cells()
    }

    /// Replays a move history from an empty board of side `size`.
    ///
    /// The first mark to move is taken from the first move in the
    /// history; an empty history starts a fresh Circle-first round.
    #[instrument]
    pub fn replay(size: usize, moves: &[Move]) -> Result<GameResult, MoveError> {
        let first = moves.first().map(|m| m.mark).unwrap_or(Mark::Circle);
        let mut round = GameSetup::with_size(size).start(first);

        for action in moves {
            match round.make_move(*action)? {
                GameResult::InProgress(next) => round = next,
                GameResult::Finished(finished) => {
                    return Ok(GameResult::Finished(finished));
                }
            }
        }

        Ok(GameResult::InProgress(round))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished - outcome determined.
///
/// The outcome is always present, not `Option`.
#[derive(Debug, Clone)]
pub struct GameFinished {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Starts over with a fresh board of the same side length (the
    /// "play again" flow; consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::with_size(self.board.size())
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Round continues with the opposing mark to move.
    InProgress(GameInProgress),
    /// Round finished.
    Finished(GameFinished),
}
