#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The solve entry point: seeds the exact-cover search with a puzzle's
//! givens and decodes each cover back onto the grid.

use crate::cover::matrix::Matrix;
use crate::cover::search::{Search, SearchStats};
use crate::sudoku::grid::Grid;

/// Lazy enumeration of a puzzle's solutions.
///
/// Each `next()` runs the underlying search until the next exact cover or
/// exhaustion; callers wanting only the first solution simply stop
/// consuming. The sequence is finite and the order deterministic.
#[derive(Debug, Clone)]
pub struct Solutions<'a> {
    givens: Grid,
    search: Search<'a>,
}

impl Solutions<'_> {
    /// Search counters accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.search.stats()
    }
}

impl Iterator for Solutions<'_> {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        self.search
            .next()
            .map(|cover| self.givens.with_cover(&cover))
    }
}

/// Solves a puzzle against a shared constraint matrix, yielding zero or more
/// completed grids. Givens are applied as forced placements before the walk
/// starts, so they are never overwritten.
#[must_use]
pub fn solve<'a>(matrix: &'a Matrix, puzzle: &Grid) -> Solutions<'a> {
    Solutions {
        givens: *puzzle,
        search: Search::new(matrix, puzzle.givens()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_classic_puzzle_has_exactly_one_solution() {
        let matrix = Matrix::new();
        let puzzle: Grid = PUZZLE.parse().unwrap();

        let solutions: Vec<Grid> = solve(&matrix, &puzzle).collect();
        assert_eq!(solutions, vec![SOLVED.parse().unwrap()]);
        assert!(solutions[0].is_solved());
    }

    #[test]
    fn test_solutions_preserve_givens() {
        let matrix = Matrix::new();
        let puzzle: Grid = PUZZLE.parse().unwrap();

        let solution = solve(&matrix, &puzzle).next().unwrap();
        for row in 0..9 {
            for col in 0..9 {
                let hint = puzzle.get(row, col);
                if hint != 0 {
                    assert_eq!(solution.get(row, col), hint);
                }
            }
        }
    }

    #[test]
    fn test_empty_grid_has_many_valid_solutions() {
        let matrix = Matrix::new();

        let solutions: Vec<Grid> = solve(&matrix, &Grid::empty()).take(4).collect();
        assert_eq!(solutions.len(), 4);
        assert!(solutions.iter().all(Grid::is_solved));
        assert!(solutions.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn test_conflicting_hints_yield_no_solutions() {
        let matrix = Matrix::new();

        // Two 1s in row 0, columns 0 and 5.
        let mut line = ".".repeat(81).into_bytes();
        line[0] = b'1';
        line[5] = b'1';
        let puzzle: Grid = String::from_utf8(line).unwrap().parse().unwrap();

        assert_eq!(solve(&matrix, &puzzle).count(), 0);
    }

    #[test]
    fn test_solving_twice_is_idempotent() {
        let matrix = Matrix::new();
        let puzzle: Grid = PUZZLE.parse().unwrap();

        let first: Vec<Grid> = solve(&matrix, &puzzle).collect();
        let second: Vec<Grid> = solve(&matrix, &puzzle).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rebuilt_matrix_gives_identical_results() {
        let cached = Matrix::new();
        let rebuilt = Matrix::new();
        let puzzle: Grid = PUZZLE.parse().unwrap();

        let from_cached: Vec<Grid> = solve(&cached, &puzzle).collect();
        let from_rebuilt: Vec<Grid> = solve(&rebuilt, &puzzle).collect();
        assert_eq!(from_cached, from_rebuilt);
    }

    #[test]
    fn test_full_grid_round_trips() {
        let matrix = Matrix::new();
        let solved: Grid = SOLVED.parse().unwrap();

        let solutions: Vec<Grid> = solve(&matrix, &solved).collect();
        assert_eq!(solutions, vec![solved]);
    }

    #[test]
    fn test_hard_puzzle_solves() {
        // Arto Inkala's "world's hardest sudoku".
        let matrix = Matrix::new();
        let puzzle: Grid =
            "8..........36......7..9.2...5...7.......457.....1...3...1....68..85...1..9....4.."
                .parse()
                .unwrap();

        let solution = solve(&matrix, &puzzle).next().unwrap();
        assert!(solution.is_solved());
        assert_eq!(
            solution.to_string(),
            "812753649943682175675491283154237896369845721287169534521974368438526917796318452"
        );
    }
}
