#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The backtracking search over the incidence matrix.
//!
//! The search is a depth-first walk with a minimum-remaining-values heuristic:
//! at each depth it branches on the unsatisfied constraint with the fewest
//! viable placements, failing fast on dead ends. It is iterative (depth is
//! bounded by 81, so a fixed-capacity decision stack suffices) and resumable:
//! [`Search`] is an [`Iterator`] yielding one exact cover per `next()` call,
//! so enumeration of further solutions is entirely driven by the caller.
//!
//! Per-step cost is dominated by the 324-constraint scan and the 9-wide
//! viability count inside it; both stay flat array walks on purpose.

use crate::cover::matrix::{CONSTRAINT_WIDTH, CONSTRAINTS, Constraint, Matrix, Placement};
use crate::cover::state::SearchState;
use smallvec::SmallVec;

/// One exact cover: the placements chosen by the search, excluding the
/// givens it was seeded with. At most 81 entries.
pub type Cover = SmallVec<[Placement; 81]>;

/// Counters accumulated over one search, cheap enough to track
/// unconditionally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Placements tried (givens excluded).
    pub decisions: usize,
    /// Times the walk retreated a level.
    pub backtracks: usize,
    /// Exact covers yielded so far.
    pub solutions: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// One stack entry: the constraint branched on at this depth and the index
/// (into its nine-placement list) last tried there, -1 if none yet.
#[derive(Debug, Clone, Copy)]
struct Decision {
    constraint: Constraint,
    tried: i8,
}

const NO_CANDIDATE: i8 = -1;

/// A resumable exact-cover search. Yields every cover of the matrix that
/// extends the seeded givens, then ends.
///
/// Each instance owns its [`SearchState`]; only the matrix is shared. An
/// abandoned search needs no cleanup.
#[derive(Debug, Clone)]
pub struct Search<'a> {
    matrix: &'a Matrix,
    state: SearchState,
    decisions: [Decision; 81],
    /// Depth within `decisions`; -1 once the tree is exhausted.
    depth: isize,
    /// Cells left to fill: 81 minus the seeded givens.
    to_fill: usize,
    /// Rotating start for the constraint scan. Spreads work across the
    /// constraint range; a performance heuristic, not a correctness need.
    cursor: usize,
    direction: Direction,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    /// Seeds a search with the given placements (a puzzle's hints), each
    /// applied as a forced choice before the walk starts.
    ///
    /// Two givens sharing a constraint (say the same digit twice in one row)
    /// leave no cover to find; the search starts exhausted and yields nothing.
    pub fn new(matrix: &'a Matrix, givens: impl IntoIterator<Item = Placement>) -> Self {
        let mut state = SearchState::new();
        let mut hints = 0_usize;
        let mut conflict = false;

        for p in givens {
            conflict |= matrix.constraints_of(p).iter().any(|&c| state.is_satisfied(c));
            state.select(matrix, p);
            hints += 1;
        }

        Self {
            matrix,
            state,
            decisions: [Decision {
                constraint: 0,
                tried: NO_CANDIDATE,
            }; 81],
            depth: if conflict { -1 } else { 0 },
            to_fill: 81 - hints,
            cursor: 0,
            direction: Direction::Forward,
            stats: SearchStats::default(),
        }
    }

    /// Counters accumulated so far; useful between yields.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// MRV scan: picks the unsatisfied constraint with the fewest viable
    /// placements, records it at `depth`, and returns that minimum count.
    ///
    /// Scanning starts at the rotating cursor and stops early once a
    /// constraint with at most one candidate turns up, since nothing below a
    /// forced move (or a dead branch) can improve on it.
    #[allow(clippy::cast_possible_truncation)]
    fn pick_constraint(&mut self, depth: usize) -> usize {
        let mut min = CONSTRAINT_WIDTH + 1;

        for j in 0..CONSTRAINTS {
            let c = (j + self.cursor) % CONSTRAINTS;
            if self.state.is_satisfied(c as Constraint) {
                continue;
            }

            let n = self.state.viable_count(self.matrix, c as Constraint);
            if n < min {
                min = n;
                self.decisions[depth].constraint = c as Constraint;
                self.cursor = c + 1;
            }
            if n <= 1 {
                break;
            }
        }

        min
    }

    /// First viable placement of `candidates` strictly after index `tried`.
    #[allow(clippy::cast_sign_loss)]
    fn next_candidate(
        &self,
        candidates: &[Placement; CONSTRAINT_WIDTH],
        tried: i8,
    ) -> Option<usize> {
        ((tried + 1) as usize..CONSTRAINT_WIDTH).find(|&r| self.state.is_viable(candidates[r]))
    }

    fn retreat(&mut self, depth: usize) {
        self.decisions[depth].tried = NO_CANDIDATE;
        self.direction = Direction::Backward;
        self.depth -= 1;
        self.stats.backtracks += 1;
    }
}

impl Iterator for Search<'_> {
    type Item = Cover;

    #[allow(clippy::cast_sign_loss)]
    fn next(&mut self) -> Option<Cover> {
        let matrix = self.matrix;

        while self.depth >= 0 && (self.depth as usize) < self.to_fill {
            let i = self.depth as usize;

            if self.direction == Direction::Forward {
                let min = self.pick_constraint(i);
                debug_assert!(
                    min <= CONSTRAINT_WIDTH,
                    "an unfilled cell always leaves its row-column constraint unsatisfied"
                );
                if min == 0 {
                    // Some unresolved constraint has no candidate left.
                    self.retreat(i);
                    continue;
                }
            }

            let Decision { constraint, tried } = self.decisions[i];
            let candidates = matrix.placements_of(constraint);

            if self.direction == Direction::Backward && tried != NO_CANDIDATE {
                self.state.deselect(matrix, candidates[tried as usize]);
            }

            if let Some(r) = self.next_candidate(candidates, tried) {
                self.state.select(matrix, candidates[r]);
                self.decisions[i].tried = r as i8;
                self.direction = Direction::Forward;
                self.depth += 1;
                self.stats.decisions += 1;
            } else {
                // Constraint exhausted at this depth.
                self.retreat(i);
            }
        }

        if self.depth < 0 {
            return None;
        }

        // Depth reached `to_fill`: the decision stack is a complete cover.
        let cover = self.decisions[..self.to_fill]
            .iter()
            .map(|d| matrix.placements_of(d.constraint)[d.tried as usize])
            .collect();
        self.stats.solutions += 1;

        // Force a retreat so the next call resumes enumerating. The last
        // decision keeps its `tried` index and is reverted on resumption.
        self.direction = Direction::Backward;
        self.depth -= 1;

        Some(cover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::matrix::{PLACEMENTS, placement, placement_cell};

    #[test]
    fn test_unseeded_search_yields_full_covers() {
        let matrix = Matrix::new();
        let mut search = Search::new(&matrix, []);

        let cover = search.next().expect("empty grid has completions");
        assert_eq!(cover.len(), 81);

        // Exactly one placement per constraint.
        let mut hits = [0_u8; CONSTRAINTS];
        for &p in &cover {
            assert!((p as usize) < PLACEMENTS);
            for &c in matrix.constraints_of(p) {
                hits[c as usize] += 1;
            }
        }
        assert!(hits.iter().all(|&h| h == 1));
    }

    #[test]
    fn test_conflicting_givens_yield_nothing() {
        let matrix = Matrix::new();

        // Digit 1 twice in row 0.
        let givens = [placement(0, 0, 0), placement(0, 5, 0)];
        let mut search = Search::new(&matrix, givens);

        assert!(search.next().is_none());
        assert_eq!(search.stats().solutions, 0);
    }

    #[test]
    fn test_exhausted_search_stays_exhausted() {
        let matrix = Matrix::new();
        let mut search = Search::new(&matrix, [placement(3, 3, 3), placement(3, 4, 3)]);

        assert!(search.next().is_none());
        assert!(search.next().is_none());
    }

    #[test]
    fn test_covers_respect_givens() {
        let matrix = Matrix::new();
        let givens = [placement(0, 0, 4), placement(8, 8, 8)];
        let mut search = Search::new(&matrix, givens);

        let cover = search.next().expect("two compatible givens extend");
        assert_eq!(cover.len(), 79);
        for &p in &cover {
            assert_ne!(placement_cell(p), 0);
            assert_ne!(placement_cell(p), 80);
        }
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let matrix = Matrix::new();

        let first: Vec<Cover> = Search::new(&matrix, []).take(3).collect();
        let second: Vec<Cover> = Search::new(&matrix, []).take(3).collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 3, "the empty grid has many completions");
    }

    #[test]
    fn test_stats_accumulate() {
        let matrix = Matrix::new();
        let mut search = Search::new(&matrix, []);

        search.next().expect("cover exists");
        let stats = search.stats();
        assert_eq!(stats.solutions, 1);
        assert!(stats.decisions >= 81);
    }
}
