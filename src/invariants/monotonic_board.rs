//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::action::Move;
use crate::types::Board;
use crate::typestate::GameInProgress;

/// Checks that `history` replays cleanly onto a fresh board and
/// reproduces `board` exactly. Any placement error during the replay
/// (overwrite, out of range) fails the check.
pub(crate) fn replays_to(history: &[Move], board: &Board) -> bool {
    let mut reconstructed = Board::new(board.size());

    for action in history {
        if reconstructed.place(action.x, action.y, action.mark).is_err() {
            return false;
        }
    }

    reconstructed == *board
}

/// Invariant: board cells are monotonic (never overwritten).
///
/// Once a cell transitions from empty to occupied, it never changes.
/// Verified by replaying the move history onto a fresh board and
/// comparing with the current board.
pub struct MonotonicBoard;

impl Invariant<GameInProgress> for MonotonicBoard {
    fn holds(round: &GameInProgress) -> bool {
        replays_to(round.history(), round.board())
    }

    fn description() -> &'static str {
        "board cells are monotonic (never overwritten)"
    }
}
