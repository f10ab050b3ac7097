//! Pure tic-tac-toe game logic.
//!
//! The crate centers on a small board model - an N×N grid of cells, move
//! legality, and exhaustive win/draw detection - wrapped in a typestate
//! state machine for turn management and a serializable snapshot layer
//! for persistence across host restarts.
//!
//! # Architecture
//!
//! - **Board**: grid state, move legality, win/draw queries (leaf, no deps)
//! - **Rules**: pure win/draw evaluation, separate from board storage
//! - **Typestate**: `GameSetup` → `GameInProgress` → `GameFinished`;
//!   finished rounds have no `make_move`, so late moves cannot compile
//! - **Snapshots**: `AnyGame`/`SavedMatch` for the save/restore boundary
//!
//! # Example
//!
//! ```
//! use tictactoe_field::{GameResult, GameSetup, Mark, Move};
//!
//! let round = GameSetup::new().start(Mark::Circle);
//! let result = round.make_move(Move::new(Mark::Circle, 1, 1))?;
//! assert!(matches!(result, GameResult::InProgress(_)));
//! # Ok::<(), tictactoe_field::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod invariants;
mod phases;
mod rules;
mod score;
mod types;
mod typestate;
mod wrapper;

pub use action::{Move, MoveError};
pub use invariants::{
    AlternatingTurn, Invariant, InvariantSet, InvariantViolation, MonotonicBoard, RoundInvariants,
};
pub use phases::Outcome;
pub use rules::{check_winner, is_full};
pub use score::{SavedMatch, Scoreboard};
pub use types::{Board, BoardError, Cell, DEFAULT_SIZE, Mark};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use wrapper::{AnyGame, Resumed};
