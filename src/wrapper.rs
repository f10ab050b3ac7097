//! Serializable round wrapper for typestate phases.
//!
//! Typestate phases cannot be serialized directly, so snapshots pass
//! through this enum. This is the crate's only wire format: a snapshot
//! records the board (size plus full grid), the mark to move, the move
//! history, and the outcome where one exists, and `resume` reconstructs
//! a round indistinguishable from the one that was saved.

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, RoundInvariants};
use crate::phases::Outcome;
use crate::types::{Board, Mark};
use crate::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Serializable snapshot of a round in any phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyGame {
    /// Round in setup phase.
    Setup {
        /// The (empty) board.
        board: Board,
    },
    /// Round in progress.
    InProgress {
        /// The board state.
        board: Board,
        /// Mark to move.
        to_move: Mark,
        /// Move history.
        history: Vec<Move>,
    },
    /// Round finished.
    Finished {
        /// The board state.
        board: Board,
        /// The outcome.
        outcome: Outcome,
        /// Move history.
        history: Vec<Move>,
    },
}

/// A phase reconstructed from a snapshot.
#[derive(Debug)]
pub enum Resumed {
    /// Resumed into setup.
    Setup(GameSetup),
    /// Resumed mid-round.
    InProgress(GameInProgress),
    /// Resumed after the round ended.
    Finished(GameFinished),
}

impl From<GameSetup> for AnyGame {
    fn from(round: GameSetup) -> Self {
        AnyGame::Setup { board: round.board }
    }
}

impl From<GameInProgress> for AnyGame {
    fn from(round: GameInProgress) -> Self {
        AnyGame::InProgress {
            board: round.board,
            to_move: round.to_move,
            history: round.history,
        }
    }
}

impl From<GameFinished> for AnyGame {
    fn from(round: GameFinished) -> Self {
        AnyGame::Finished {
            board: round.board,
            outcome: round.outcome,
            history: round.history,
        }
    }
}

impl From<GameResult> for AnyGame {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(round) => round.into(),
            GameResult::Finished(round) => round.into(),
        }
    }
}

impl AnyGame {
    /// Returns the board for any phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::Setup { board } => board,
            AnyGame::InProgress { board, .. } => board,
            AnyGame::Finished { board, .. } => board,
        }
    }

    /// Returns the move history for any phase.
    pub fn history(&self) -> &[Move] {
        match self {
            AnyGame::Setup { .. } => &[],
            AnyGame::InProgress { history, .. } => history,
            AnyGame::Finished { history, .. } => history,
        }
    }

    /// Returns the mark to move, if the round is in progress.
    pub fn to_move(&self) -> Option<Mark> {
        match self {
            AnyGame::InProgress { to_move, .. } => Some(*to_move),
            _ => None,
        }
    }

    /// Returns the winner, if the round finished with one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            AnyGame::Finished { outcome, .. } => outcome.winner(),
            _ => None,
        }
    }

    /// Returns true if the round is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyGame::Finished { .. })
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyGame::Setup { .. } => "Ready to start".to_string(),
            AnyGame::InProgress { to_move, .. } => {
                format!("In progress. {to_move} to move.")
            }
            AnyGame::Finished { outcome, .. } => match outcome {
                Outcome::Winner(mark) => format!("Round over. {mark} wins!"),
                Outcome::Draw => "Round over. Draw!".to_string(),
            },
        }
    }

    /// Makes a move through the snapshot, revalidating against the
    /// typestate machine.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] on a finished snapshot; otherwise whatever
    /// [`GameInProgress::make_move`] reports.
    #[instrument(skip(self))]
    pub fn make_move(self, action: Move) -> Result<Self, MoveError> {
        match self.resume()? {
            Resumed::Setup(round) => {
                let round = round.start(action.mark);
                Ok(round.make_move(action)?.into())
            }
            Resumed::InProgress(round) => Ok(round.make_move(action)?.into()),
            Resumed::Finished(_) => Err(MoveError::GameOver),
        }
    }

    /// Reconstructs the typestate phase this snapshot was taken from.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvariantViolation`] when the snapshot is internally
    /// inconsistent - a setup board with marks on it, a history that does
    /// not reproduce the board, or a recorded outcome the board
    /// contradicts.
    #[instrument(skip(self))]
    pub fn resume(self) -> Result<Resumed, MoveError> {
        match self {
            AnyGame::Setup { board } => {
                if board.cells().iter().any(|cell| !cell.is_empty()) {
                    warn!("setup snapshot carries a non-empty board");
                    return Err(MoveError::InvariantViolation(
                        "setup snapshot carries a non-empty board".to_string(),
                    ));
                }
                Ok(Resumed::Setup(GameSetup { board }))
            }
            AnyGame::InProgress {
                board,
                to_move,
                history,
            } => {
                let round = GameInProgress {
                    board,
                    history,
                    to_move,
                };
                RoundInvariants::check_all(&round).map_err(|violations| {
                    let descriptions = violations
                        .iter()
                        .map(|v| v.description.as_str())
                        .collect::<Vec<_>>()
                        .join("; ");
                    warn!(%descriptions, "rejecting inconsistent snapshot");
                    MoveError::InvariantViolation(descriptions)
                })?;
                debug!(moves = round.history.len(), "resumed in-progress round");
                Ok(Resumed::InProgress(round))
            }
            AnyGame::Finished {
                board,
                outcome,
                history,
            } => {
                if !crate::invariants::monotonic_board::replays_to(&history, &board) {
                    warn!("finished snapshot history does not reproduce the board");
                    return Err(MoveError::InvariantViolation(
                        "finished snapshot history does not reproduce the board".to_string(),
                    ));
                }
                let consistent = match outcome {
                    Outcome::Winner(mark) => board.winner() == Some(mark),
                    Outcome::Draw => board.winner().is_none() && board.is_full(),
                };
                if !consistent {
                    warn!(%outcome, "finished snapshot outcome contradicts the board");
                    return Err(MoveError::InvariantViolation(
                        "finished snapshot outcome contradicts the board".to_string(),
                    ));
                }
                Ok(Resumed::Finished(GameFinished {
                    board,
                    history,
                    outcome,
                }))
            }
        }
    }
}
