//! Core domain types: marks, cells, and the board.

use serde::{Deserialize, Serialize};

/// Default side length for a standard game.
pub const DEFAULT_SIZE: usize = 3;

/// The figure a player places in a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// Circle (goes first in the classic game).
    Circle,
    /// Cross.
    Cross,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Circle => Mark::Cross,
            Mark::Cross => Mark::Circle,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Circle => write!(f, "O"),
            Mark::Cross => write!(f, "X"),
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks whether the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Errors returned by board operations.
///
/// Both variants indicate caller misuse rather than transient failures:
/// there is nothing to retry, only a logic defect to fix upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Coordinate outside `[0, size)` on either axis.
    #[display("coordinate ({x}, {y}) is outside a {size}x{size} board")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Side length of the board that rejected the access.
        size: usize,
    },
    /// Attempt to place a mark on an already-occupied cell.
    #[display("cell ({x}, {y}) is already occupied")]
    CellOccupied {
        /// Column of the occupied cell.
        x: usize,
        /// Row of the occupied cell.
        y: usize,
    },
}

impl std::error::Error for BoardError {}

/// N×N grid of cells plus its side length, fixed at construction.
///
/// Cells are stored row-major. Coordinates are `(x = column, y = row)`,
/// each in `[0, size)`. Every in-range coordinate holds exactly one
/// [`Cell`] at all times, and an occupied cell is never overwritten.
///
/// Deserialization upholds the same invariant: input whose cell count
/// does not match `size × size`, or whose side length is zero, is
/// rejected rather than admitted as a malformed board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unvalidated shape of a serialized board.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.size == 0 {
            return Err("board side length must be at least 1".to_string());
        }
        if raw.cells.len() != raw.size * raw.size {
            return Err(format!(
                "expected {} cells for a {}x{} board, got {}",
                raw.size * raw.size,
                raw.size,
                raw.size,
                raw.cells.len()
            ));
        }
        Ok(Board {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Creates a board with every cell empty.
    ///
    /// The model accepts any positive side length; a genuine game is
    /// expected to use at least 3, but that is the caller's concern.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "board side length must be at least 1");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length fixed at construction.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells as a row-major slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if x >= self.size || y >= self.size {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y * self.size + x)
    }

    /// Returns the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        Ok(self.cells[self.index(x, y)?])
    }

    /// Infallible access for in-range coordinates produced by the board's
    /// own dimensions (line traversal in the rules module).
    pub(crate) fn at(&self, x: usize, y: usize) -> Cell {
        debug_assert!(x < self.size && y < self.size);
        self.cells[y * self.size + x]
    }

    /// Checks whether the cell at `(x, y)` is empty.
    pub fn is_empty(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        Ok(self.get(x, y)?.is_empty())
    }

    /// Places `mark` into the empty cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for a coordinate outside the
    /// grid and [`BoardError::CellOccupied`] when the cell already holds
    /// a mark. In both cases the board is left unchanged.
    pub fn place(&mut self, x: usize, y: usize, mark: Mark) -> Result<(), BoardError> {
        let idx = self.index(x, y)?;
        if self.cells[idx] != Cell::Empty {
            return Err(BoardError::CellOccupied { x, y });
        }
        self.cells[idx] = Cell::Occupied(mark);
        Ok(())
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }

    /// Returns the mark holding a complete line, if any.
    ///
    /// See [`check_winner`](crate::check_winner) for the traversal order
    /// applied when a corrupted position holds more than one complete line.
    pub fn winner(&self) -> Option<Mark> {
        crate::rules::check_winner(self)
    }

    /// Coordinates of every empty cell, row by row.
    ///
    /// The standard guard for callers mapping input to a move.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| (idx % self.size, idx / self.size))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                match self.at(x, y) {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Occupied(mark) => write!(f, "{mark}")?,
                }
                if x + 1 < self.size {
                    write!(f, "|")?;
                }
            }
            if y + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
