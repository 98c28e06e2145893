use log::debug;

use crate::board::{Board, MAX_VALUE};

/// Solves a board in place via depth-first backtracking.
///
/// Returns `true` if a solution was found, in which case the board is fully
/// filled and satisfies all constraints. Returns `false` if no solution
/// exists, in which case the board is left exactly as it was passed in.
/// The input board is assumed to be internally consistent already.
///
/// The search is deterministic: empty cells are taken in row-major order and
/// candidates are tried ascending, so the same input always produces the
/// same solution.
pub fn solve(board: &mut Board) -> bool {
    // Invariant:
    //  - When `solve` returns false, `board` is unchanged. Any changes made to
    //    `board` during the search have been undone.
    match board.first_empty_cell() {
        None => {
            // No empty cells left. The sudoku is fully solved.
            true
        }
        Some((row, col)) => {
            for value in 1..=MAX_VALUE {
                if board.is_valid_move(row, col, value) {
                    board.set(row, col, value);
                    if solve(board) {
                        return true;
                    }
                    // This branch is a dead end. Undo the placement and try
                    // the next candidate.
                    board.set(row, col, 0);
                }
            }
            false
        }
    }
}

/// A backtracking solver that owns the board it works on.
pub struct Solver {
    board: Board,
}

impl Solver {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// A solver starting from an all-empty board.
    pub fn empty() -> Self {
        Self::new(Board::new_empty())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn solve(&mut self) -> bool {
        let solved = solve(&mut self.board);
        if solved {
            debug_assert_eq!(0, self.board.num_empty());
            debug_assert!(self.board.is_valid());
            debug!("board solved");
        } else {
            debug!("board has no solution, input left unchanged");
        }
        solved
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::empty()
    }
}
