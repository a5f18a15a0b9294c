#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Per-search mutable state: one signed counter per constraint and per
//! placement, driven by a single invertible update primitive.

use crate::cover::matrix::{CONSTRAINTS, Constraint, Matrix, PLACEMENTS, Placement};

/// Live counters for one search. Created fresh per puzzle, never shared.
///
/// `constraint_used[c]` is zero while constraint c is still available to
/// branch on and positive once a chosen placement satisfies it; it acts as a
/// reference count and may transiently exceed one in invalid branches.
/// `placement_blocked[p]` counts how many chosen placements rule p out by
/// sharing a constraint with it; zero means p is still a legal candidate.
///
/// Both are flat arrays on purpose: the search scans them linearly in its hot
/// loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    constraint_used: [i8; CONSTRAINTS],
    placement_blocked: [i16; PLACEMENTS],
}

impl SearchState {
    /// Fresh state with every constraint available and every placement viable.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            constraint_used: [0; CONSTRAINTS],
            placement_blocked: [0; PLACEMENTS],
        }
    }

    /// Selects a placement into the partial solution: marks its four
    /// constraints used and blocks their nine incident placements each
    /// (the chosen placement included).
    pub fn select(&mut self, matrix: &Matrix, chosen: Placement) {
        self.apply(matrix, chosen, 1);
    }

    /// Reverts a `select`. Exact inverse: a select followed by a deselect of
    /// the same placement restores the prior state bit for bit.
    pub fn deselect(&mut self, matrix: &Matrix, chosen: Placement) {
        self.apply(matrix, chosen, -1);
    }

    // The only mutator. Walks 4 constraints and 4 x 9 sibling placements.
    fn apply(&mut self, matrix: &Matrix, chosen: Placement, sign: i8) {
        for &c in matrix.constraints_of(chosen) {
            self.constraint_used[c as usize] += sign;
            for &sibling in matrix.placements_of(c) {
                self.placement_blocked[sibling as usize] += i16::from(sign);
            }
        }
    }

    /// Whether a constraint is already satisfied by the partial solution.
    #[must_use]
    pub const fn is_satisfied(&self, c: Constraint) -> bool {
        self.constraint_used[c as usize] != 0
    }

    /// Whether a placement is still a legal candidate.
    #[must_use]
    pub const fn is_viable(&self, p: Placement) -> bool {
        self.placement_blocked[p as usize] == 0
    }

    /// How many of a constraint's nine placements are still viable.
    #[must_use]
    pub fn viable_count(&self, matrix: &Matrix, c: Constraint) -> usize {
        matrix
            .placements_of(c)
            .iter()
            .filter(|&&p| self.is_viable(p))
            .count()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
