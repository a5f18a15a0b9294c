#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The sparse incidence matrix between candidate placements and constraints.
//!
//! A 9x9 Sudoku offers 9x9x9 = 729 candidate placements: "cell (row, col)
//! holds digit d". Against these stand 4x81 = 324 constraints, in four
//! families of 81:
//!
//! 1. row-column: cell (row, col) holds exactly one digit.
//! 2. box-number: box b holds digit d exactly once.
//! 3. row-number: row r holds digit d exactly once.
//! 4. col-number: column c holds digit d exactly once.
//!
//! Conceptually this is a 729x324 binary matrix with M(p, c) = 1 when
//! placement p participates in constraint c. Solving a puzzle means picking a
//! subset of placements that covers every constraint exactly once, which is
//! the exact cover problem. The matrix is extremely sparse (each placement
//! touches exactly 4 constraints, each constraint exactly 9 placements), so
//! it is stored as two dense index tables giving O(1) neighbour enumeration
//! in both directions.
//!
//! The matrix is a pure function of the fixed puzzle geometry: construction
//! is total, deterministic and `const`-evaluable, and the value is never
//! mutated afterwards. One instance can be shared by reference across any
//! number of searches without synchronisation.

/// A candidate placement, in `0..729`. Encodes `row * 81 + col * 9 + digit`
/// with row, col and digit each in `0..9`.
pub type Placement = u16;

/// A constraint identifier, in `0..324`. See the module docs for the four
/// families and their ranges.
pub type Constraint = u16;

/// Number of candidate placements.
pub const PLACEMENTS: usize = 729;

/// Number of constraints.
pub const CONSTRAINTS: usize = 324;

/// Placements incident to one constraint.
pub const CONSTRAINT_WIDTH: usize = 9;

/// Constraints incident to one placement.
pub const PLACEMENT_WIDTH: usize = 4;

/// Encodes the placement "cell (row, col) holds digit". All arguments are
/// zero-based, digit included: digit 0 stands for the pencil mark '1'.
#[must_use]
pub const fn placement(row: usize, col: usize, digit: usize) -> Placement {
    (row * 81 + col * 9 + digit) as Placement
}

/// The cell (in `0..81`, row-major) a placement writes to.
#[must_use]
pub const fn placement_cell(p: Placement) -> usize {
    p as usize / 9
}

/// The digit (1-9) a placement writes.
#[must_use]
pub const fn placement_digit(p: Placement) -> u8 {
    (p % 9) as u8 + 1
}

/// Row-column constraint: cell (row, col) holds exactly one digit.
/// Domain: row, col in `0..9`. Range: `0..81`.
#[must_use]
pub const fn row_col(row: usize, col: usize) -> Constraint {
    (row * 9 + col) as Constraint
}

/// Box-number constraint: the box containing (row, col) holds `digit`
/// exactly once. Domain: row, col, digit in `0..9`. Range: `81..162`.
#[must_use]
pub const fn box_number(row: usize, col: usize, digit: usize) -> Constraint {
    ((row / 3 * 3 + col / 3) * 9 + digit + 81) as Constraint
}

/// Row-number constraint: row holds `digit` exactly once.
/// Domain: row, digit in `0..9`. Range: `162..243`.
#[must_use]
pub const fn row_number(row: usize, digit: usize) -> Constraint {
    (row * 9 + digit + 162) as Constraint
}

/// Col-number constraint: column holds `digit` exactly once.
/// Domain: col, digit in `0..9`. Range: `243..324`.
#[must_use]
pub const fn col_number(col: usize, digit: usize) -> Constraint {
    (col * 9 + digit + 243) as Constraint
}

/// The immutable incidence structure, stored as dense fixed-width index
/// tables in both directions.
///
/// Invariant: the tables are mutually consistent — `constraint_placements`
/// lists placement p under constraint c iff `placement_constraints` lists c
/// under p.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    constraint_placements: [[Placement; CONSTRAINT_WIDTH]; CONSTRAINTS],
    placement_constraints: [[Constraint; PLACEMENT_WIDTH]; PLACEMENTS],
}

impl Matrix {
    /// Builds the matrix from the fixed puzzle geometry.
    ///
    /// Placements are enumerated in lexicographic (row, col, digit) order and
    /// each records its four constraints directly; the reverse table is then
    /// derived by inversion. The geometry guarantees each constraint receives
    /// exactly nine placements, so fixed-width rows with a per-constraint
    /// write cursor suffice.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new() -> Self {
        let mut placement_constraints = [[0; PLACEMENT_WIDTH]; PLACEMENTS];

        let mut row = 0;
        while row < 9 {
            let mut col = 0;
            while col < 9 {
                let mut digit = 0;
                while digit < 9 {
                    placement_constraints[placement(row, col, digit) as usize] = [
                        row_col(row, col),
                        box_number(row, col, digit),
                        row_number(row, digit),
                        col_number(col, digit),
                    ];
                    digit += 1;
                }
                col += 1;
            }
            row += 1;
        }

        let mut constraint_placements = [[0; CONSTRAINT_WIDTH]; CONSTRAINTS];
        let mut filled = [0_usize; CONSTRAINTS];

        let mut p = 0;
        while p < PLACEMENTS {
            let mut k = 0;
            while k < PLACEMENT_WIDTH {
                let c = placement_constraints[p][k] as usize;
                constraint_placements[c][filled[c]] = p as Placement;
                filled[c] += 1;
                k += 1;
            }
            p += 1;
        }

        Self {
            constraint_placements,
            placement_constraints,
        }
    }

    /// The nine placements incident to a constraint.
    #[must_use]
    pub const fn placements_of(&self, c: Constraint) -> &[Placement; CONSTRAINT_WIDTH] {
        &self.constraint_placements[c as usize]
    }

    /// The four constraints incident to a placement.
    #[must_use]
    pub const fn constraints_of(&self, p: Placement) -> &[Constraint; PLACEMENT_WIDTH] {
        &self.placement_constraints[p as usize]
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new()
    }
}
