//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark};

/// Checks if there is a winner on the board.
///
/// A board of side `n` has `2n + 2` candidate lines: `n` rows, `n`
/// columns, and the two full-length diagonals. A line is complete when
/// every cell on it holds the same mark.
///
/// Lines are traversed rows first, then columns, then diagonals. Under
/// legal play at most one mark can ever complete a line, so traversal
/// order is unobservable; on a corrupted position holding two complete
/// lines, the first line in that order decides the result.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let n = board.size();

    for y in 0..n {
        if let Some(mark) = line_owner(board, (0..n).map(|x| (x, y))) {
            return Some(mark);
        }
    }
    for x in 0..n {
        if let Some(mark) = line_owner(board, (0..n).map(|y| (x, y))) {
            return Some(mark);
        }
    }
    if let Some(mark) = line_owner(board, (0..n).map(|i| (i, i))) {
        return Some(mark);
    }
    line_owner(board, (0..n).map(|i| (n - 1 - i, i)))
}

/// Returns the mark occupying every cell of `line`, if there is one.
fn line_owner<I>(board: &Board, mut line: I) -> Option<Mark>
where
    I: Iterator<Item = (usize, usize)>,
{
    let (x, y) = line.next()?;
    let first = board.at(x, y).mark()?;
    line.all(|(x, y)| board.at(x, y) == Cell::Occupied(first))
        .then_some(first)
}
