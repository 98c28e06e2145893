use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

pub const SIZE: usize = 9;
pub(crate) const MAX_VALUE: u8 = 9;
const BOX_SIZE: usize = 3;
const NUM_CELLS: usize = SIZE * SIZE;

/// A [Board] is a 9x9 sudoku board.
/// Each cell can contain a value in 0..=9 where 0 means the cell is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    // Cells are ordered by rows, first left-to-right, then top-to-bottom.
    cells: [[u8; SIZE]; SIZE],
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({row}, {col}) holds {value} but cell values must be in 0..=9")]
    InvalidCellValue { row: usize, col: usize, value: u8 },

    #[error("expected 81 cells, found {0}")]
    WrongCellCount(usize),

    #[error("invalid character {0:?} in board text")]
    InvalidCharacter(char),
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Board {
            cells: [[0; SIZE]; SIZE],
        }
    }

    /// Creates a board from a row-major grid snapshot, rejecting cells outside 0..=9.
    pub fn from_cells(cells: [[u8; SIZE]; SIZE]) -> Result<Self, BoardError> {
        for (row, col) in (0..SIZE).cartesian_product(0..SIZE) {
            let value = cells[row][col];
            if value > MAX_VALUE {
                return Err(BoardError::InvalidCellValue { row, col, value });
            }
        }
        Ok(Board { cells })
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        assert!(value <= MAX_VALUE);
        self.cells[row][col] = value;
    }

    pub fn in_row(&self, row: usize, value: u8) -> bool {
        self.cells[row].contains(&value)
    }

    pub fn in_col(&self, col: usize, value: u8) -> bool {
        self.cells.iter().any(|row| row[col] == value)
    }

    /// Checks whether `value` is present in the 3x3 box containing `(row, col)`.
    pub fn in_box(&self, row: usize, col: usize, value: u8) -> bool {
        let box_row = row / BOX_SIZE * BOX_SIZE;
        let box_col = col / BOX_SIZE * BOX_SIZE;
        (box_row..box_row + BOX_SIZE)
            .cartesian_product(box_col..box_col + BOX_SIZE)
            .any(|(r, c)| self.cells[r][c] == value)
    }

    /// Checks whether placing `value` at `(row, col)` would conflict with the
    /// row, column or 3x3 box of that cell. Does not check that the cell is
    /// currently empty, callers have to ensure that themselves.
    pub fn is_valid_move(&self, row: usize, col: usize, value: u8) -> bool {
        !(self.in_row(row, value) || self.in_col(col, value) || self.in_box(row, col, value))
    }

    /// Checks that no placed value conflicts with another cell in its row,
    /// column or 3x3 box. Each cell is probed by clearing it on a scratch copy
    /// and re-checking its value with [Self::is_valid_move], so the board
    /// itself is never mutated.
    pub fn is_valid(&self) -> bool {
        let mut scratch = *self;
        for (row, col) in (0..SIZE).cartesian_product(0..SIZE) {
            let value = scratch.cells[row][col];
            if value == 0 {
                continue;
            }
            scratch.cells[row][col] = 0;
            if !scratch.is_valid_move(row, col, value) {
                return false;
            }
            scratch.cells[row][col] = value;
        }
        true
    }

    /// Returns the first empty cell in row-major order, or `None` if the board
    /// is completely filled.
    pub fn first_empty_cell(&self) -> Option<(usize, usize)> {
        (0..SIZE)
            .cartesian_product(0..SIZE)
            .find(|&(row, col)| self.cells[row][col] == 0)
    }

    pub fn num_empty(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&value| value == 0)
            .count()
    }

    pub fn num_filled(&self) -> usize {
        NUM_CELLS - self.num_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for value in row {
                write!(f, "{value} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    // Accepts 81 cells where '1'..='9' are placed values and '0', '_' or '.'
    // mean empty. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::with_capacity(NUM_CELLS);
        for c in s.chars() {
            match c {
                '1'..='9' => values.push(c as u8 - b'0'),
                '0' | '_' | '.' => values.push(0),
                c if c.is_whitespace() => {}
                c => return Err(BoardError::InvalidCharacter(c)),
            }
        }
        if values.len() != NUM_CELLS {
            return Err(BoardError::WrongCellCount(values.len()));
        }
        let mut cells = [[0; SIZE]; SIZE];
        for (index, value) in values.into_iter().enumerate() {
            cells[index / SIZE][index % SIZE] = value;
        }
        Ok(Board { cells })
    }
}
