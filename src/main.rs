use sudoku_core::{Generator, Solver};

fn main() {
    env_logger::init();

    let puzzle = Generator::new().generate();
    println!("Puzzle ({} filled cells):", puzzle.num_filled());
    println!("{puzzle}");

    let mut solver = Solver::new(puzzle);
    if solver.solve() {
        println!("Solution:");
        println!("{}", solver.board());
    } else {
        println!("No solution exists for this puzzle.");
    }
}
