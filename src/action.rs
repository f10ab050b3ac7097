//! First-class move actions.
//!
//! Moves are domain events, not side effects. They capture the player's
//! intent, serialize for replay, and can be validated independently of
//! execution.

use crate::types::{BoardError, Mark};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Column, in `[0, size)`.
    pub x: usize,
    /// Row, in `[0, size)`.
    pub y: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, x: usize, y: usize) -> Self {
        Self { mark, x, y }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.mark, self.x, self.y)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the board.
    #[display("coordinate ({x}, {y}) is outside the board")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
    },
    /// The cell at the coordinate is already occupied.
    #[display("cell ({x}, {y}) is already occupied")]
    CellOccupied {
        /// Column of the occupied cell.
        x: usize,
        /// Row of the occupied cell.
        y: usize,
    },
    /// It is not this mark's turn.
    #[display("it is not {_0}'s turn")]
    WrongTurn(Mark),
    /// The round is already over.
    #[display("the round is already over")]
    GameOver,
    /// An invariant was violated (postcondition failure).
    #[display("invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfBounds { x, y, .. } => MoveError::OutOfBounds { x, y },
            BoardError::CellOccupied { x, y } => MoveError::CellOccupied { x, y },
        }
    }
}
