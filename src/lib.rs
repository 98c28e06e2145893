mod board;
mod generator;
mod solver;

pub use board::{Board, BoardError, SIZE};
pub use generator::{generate, Generator};
pub use solver::{solve, Solver};
