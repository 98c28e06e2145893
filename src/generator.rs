use log::debug;
use rand::Rng;

use crate::board::{Board, MAX_VALUE, SIZE};

/// Generates random partially filled boards.
///
/// Boards are built purely from placements that pass
/// [Board::is_valid_move](crate::Board::is_valid_move), so they are valid by
/// construction and no validation pass is run on the result.
pub struct Generator {
    board: Board,
}

impl Generator {
    pub fn new() -> Self {
        Self {
            board: Board::new_empty(),
        }
    }

    pub fn generate(&mut self) -> Board {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generates a board using the given RNG. Between 10 and 19 cells are
    /// filled by rejection sampling: coordinates are redrawn until they hit an
    /// empty cell, values are redrawn until they pass the constraint check.
    /// Neither loop is bounded, but at this density valid placements stay
    /// plentiful and the sampling terminates almost surely.
    pub fn generate_with(&mut self, rng: &mut impl Rng) -> Board {
        self.board = Board::new_empty();
        let num_to_fill: usize = rng.gen_range(10..=19);
        debug!("generating a board with {num_to_fill} filled cells");
        for _ in 0..num_to_fill {
            let (row, col) = loop {
                let row = rng.gen_range(0..SIZE);
                let col = rng.gen_range(0..SIZE);
                if self.board.get(row, col) == 0 {
                    break (row, col);
                }
            };
            let value = loop {
                let value = rng.gen_range(1..=MAX_VALUE);
                if self.board.is_valid_move(row, col, value) {
                    break value;
                }
            };
            self.board.set(row, col, value);
        }
        self.board
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn generate() -> Board {
    Generator::new().generate()
}
