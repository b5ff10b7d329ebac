//! Board representation: a fixed-size 2D grid of cells.
//!
//! The board is created once per game with the standard four-disc centre
//! seed and is mutated in place by [`crate::rules::apply_move`]; its size
//! never changes after construction. Cells are addressed by signed
//! (row, column) pairs so that the always-illegal sentinel coordinate and
//! genuinely out-of-range input take the same fail-closed path.

use std::fmt;

use crate::constants::{MAX_SIZE, MIN_SIZE};

/// Index of a player within the game's player list.
pub type PlayerId = usize;

/// State of a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Taken(PlayerId),
}

/// Error returned when a requested board size is unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    /// Dimension outside [MIN_SIZE, MAX_SIZE]
    OutOfRange(usize),
    /// Dimension is odd, so the centre seed has no home
    Odd(usize),
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeError::OutOfRange(n) => {
                write!(f, "board size {n} not in [{MIN_SIZE}, {MAX_SIZE}]")
            }
            SizeError::Odd(n) => write!(f, "board size {n} is odd"),
        }
    }
}

impl std::error::Error for SizeError {}

/// A rows x cols grid of cells.
#[derive(Debug)]
pub struct Board {
    pub rows: usize,
    pub cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with the standard starting position: all cells empty
    /// except the four centre cells, seeded with diagonally alternating
    /// ownership (player 1 on the main diagonal, player 0 on the anti
    /// diagonal).
    ///
    /// Both dimensions must be even and within [MIN_SIZE, MAX_SIZE].
    pub fn new(rows: usize, cols: usize) -> Result<Self, SizeError> {
        for dim in [rows, cols] {
            if !(MIN_SIZE..=MAX_SIZE).contains(&dim) {
                return Err(SizeError::OutOfRange(dim));
            }
            if dim % 2 != 0 {
                return Err(SizeError::Odd(dim));
            }
        }

        let mut board = Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        };

        let (r, c) = (rows / 2 - 1, cols / 2 - 1);
        board.set(r, c, Cell::Taken(1));
        board.set(r, c + 1, Cell::Taken(0));
        board.set(r + 1, c, Cell::Taken(0));
        board.set(r + 1, c + 1, Cell::Taken(1));
        Ok(board)
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Whether (row, col) addresses a cell on the grid.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Cell at (row, col), or `None` when off the grid.
    pub fn cell(&self, row: isize, col: isize) -> Option<Cell> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(self.cells[self.idx(row as usize, col as usize)])
    }

    /// Overwrite the cell at (row, col). Intended for position setup;
    /// normal play goes through [`crate::rules::apply_move`].
    ///
    /// Panics if (row, col) is off the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> &mut Self {
        let i = self.idx(row, col);
        self.cells[i] = cell;
        self
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl fmt::Display for Board {
    /// Debug-oriented rendering: 'X' for player 0, 'O' for player 1,
    /// '.' for empty. The session renders with the configured symbols.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let ch = match self.cells[self.idx(row, col)] {
                    Cell::Taken(0) => 'X',
                    Cell::Taken(_) => 'O',
                    Cell::Empty => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
