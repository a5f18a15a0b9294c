#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The 81-cell grid: parsing, formatting and validation.
//!
//! The line format is the common row-major 81-character encoding: digits
//! '1'-'9' are givens, any other character (usually '.' or '0') is an empty
//! cell. Parsing accepts lines of at least 81 characters and ignores the
//! tail; shorter lines are an error, which callers feeding whole streams
//! typically treat as "skip this line".

use crate::cover::matrix::{Placement, placement, placement_cell, placement_digit};
use crate::cover::search::Cover;
use itertools::Itertools;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Cells in a grid.
pub const CELLS: usize = 81;

/// A 9x9 grid in row-major order. Each cell holds a digit 1-9 or is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid([u8; CELLS]);

/// Error parsing a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseGridError {
    /// The line held fewer than 81 characters.
    TooShort {
        /// Characters actually present.
        len: usize,
    },
}

impl Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len } => {
                write!(f, "puzzle line holds {len} characters, expected {CELLS}")
            }
        }
    }
}

impl std::error::Error for ParseGridError {}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() < CELLS {
            return Err(ParseGridError::TooShort { len: bytes.len() });
        }

        let mut cells = [0_u8; CELLS];
        for (cell, &b) in cells.iter_mut().zip(bytes) {
            if b.is_ascii_digit() && b != b'0' {
                *cell = b - b'0';
            }
        }
        Ok(Self(cells))
    }
}

impl Display for Grid {
    /// The canonical 81-character line, '.' for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.0 {
            let ch = if cell == 0 { '.' } else { (b'0' + cell) as char };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl Grid {
    /// The fully empty grid.
    #[must_use]
    pub const fn empty() -> Self {
        Self([0; CELLS])
    }

    /// The digit (1-9) at (row, col), or 0 for an empty cell.
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row * 9 + col]
    }

    /// Number of givens.
    #[must_use]
    pub fn hint_count(&self) -> usize {
        self.0.iter().filter(|&&cell| cell != 0).count()
    }

    /// The placements forced by the givens, one per filled cell.
    pub fn givens(&self) -> impl Iterator<Item = Placement> {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != 0)
            .map(|(i, &cell)| placement(i / 9, i % 9, usize::from(cell) - 1))
    }

    /// This grid with every placement of a cover written in.
    #[must_use]
    pub fn with_cover(&self, cover: &Cover) -> Self {
        let mut cells = self.0;
        for &p in cover {
            cells[placement_cell(p)] = placement_digit(p);
        }
        Self(cells)
    }

    /// Whether the grid is completely filled and every row, column and box
    /// contains each digit exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let mut rows = [0_u16; 9];
        let mut cols = [0_u16; 9];
        let mut boxes = [0_u16; 9];

        for (i, &cell) in self.0.iter().enumerate() {
            if cell == 0 {
                return false;
            }
            let bit = 1_u16 << cell;
            let (row, col) = (i / 9, i % 9);
            let bx = row / 3 * 3 + col / 3;

            if rows[row] & bit != 0 || cols[col] & bit != 0 || boxes[bx] & bit != 0 {
                return false;
            }
            rows[row] |= bit;
            cols[col] |= bit;
            boxes[bx] |= bit;
        }
        true
    }

    /// A nine-line rendering for interactive output.
    #[must_use]
    pub fn pretty(&self) -> String {
        self.0
            .chunks_exact(9)
            .map(|row| {
                row.iter()
                    .map(|&cell| {
                        if cell == 0 {
                            '.'
                        } else {
                            (b'0' + cell) as char
                        }
                    })
                    .collect::<String>()
            })
            .join("\n")
    }
}
