#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The Sudoku frontend: the 81-cell grid type and the solve entry point
//! tying a grid to the exact-cover engine.

pub mod grid;
pub mod solver;
