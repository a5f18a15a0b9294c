#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This crate solves Sudoku puzzles by reduction to the exact cover problem.
//!
//! A 9x9 puzzle is expressed as 729 candidate placements (cell, digit) against
//! 324 constraints; a completed grid is a subset of placements covering every
//! constraint exactly once. The search is a heuristic backtracking walk over a
//! sparse incidence matrix, enumerating every solution of a puzzle lazily.

/// The `cover` module implements the exact-cover engine: the constraint
/// matrix and the backtracking search over it.
pub mod cover;

/// The `sudoku` module implements the puzzle frontend: grid parsing,
/// formatting and the solve entry point.
pub mod sudoku;
