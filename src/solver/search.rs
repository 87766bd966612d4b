//! Backtracking exact-cover search over the toroidal matrix (Knuth's
//! Algorithm X, driven by Dancing Links).

use serde::Serialize;
use tracing::debug;

use crate::solver::matrix::{Matrix, NodeId, RowId};

/// Counters collected over one solve.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Search tree nodes entered, including the root call.
    pub nodes_visited: u64,
    /// Candidate rows abandoned after their subtree failed.
    pub backtracks: u64,
    /// Cover operations performed (uncovers mirror them exactly).
    pub covers: u64,
    /// Deepest recursion reached.
    pub max_depth: usize,
}

/// The exact-cover search engine.
///
/// The engine owns nothing but the partial solution and its counters; the
/// matrix is mutated in place through [`Matrix::cover`] /
/// [`Matrix::uncover`] and every edit is undone on backtrack, so after
/// `solve` returns the matrix is back in its pre-search state.
pub struct Solver {
    solution: Vec<NodeId>,
    stats: SearchStats,
}

impl Solver {
    pub fn new() -> Self {
        Self {
            solution: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Searches for one exact cover of `matrix`.
    ///
    /// Returns the chosen rows' identifiers in choice order, or `None` when
    /// no cover exists. Exhausting the search space is an expected outcome,
    /// not an error; callers must check the option before interpreting the
    /// rows. Only the first solution is returned, and for a fixed matrix the
    /// result is deterministic (column selection depends only on ring order
    /// and counts).
    pub fn solve(mut self, matrix: &mut Matrix) -> (Option<Vec<RowId>>, SearchStats) {
        let found = self.search(matrix, 0);
        debug!(
            found,
            nodes_visited = self.stats.nodes_visited,
            backtracks = self.stats.backtracks,
            covers = self.stats.covers,
            "search finished"
        );
        let rows =
            found.then(|| self.solution.iter().map(|&node| matrix.row_of(node)).collect());
        (rows, self.stats)
    }

    fn search(&mut self, matrix: &mut Matrix, depth: usize) -> bool {
        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        // Base case: the header ring is empty, so every column is covered
        // exactly once by the rows chosen so far.
        if matrix.is_complete() {
            return true;
        }

        let Some(column) = matrix.select_column() else {
            // Unreachable while `is_complete` is false, but we handle it.
            return true;
        };
        matrix.cover(column);
        self.stats.covers += 1;

        let mut r = matrix.down(column);
        while r != column {
            self.solution.push(r);
            // Choosing row `r` satisfies every column it touches; cover
            // them all so no conflicting row can be chosen below.
            let mut j = matrix.right(r);
            while j != r {
                matrix.cover(matrix.column_of(j));
                self.stats.covers += 1;
                j = matrix.right(j);
            }

            if self.search(matrix, depth + 1) {
                return true;
            }

            // Dead end: undo this row's covers in reverse order and move on
            // to the next candidate.
            self.solution.pop();
            let mut j = matrix.left(r);
            while j != r {
                matrix.uncover(matrix.column_of(j));
                j = matrix.left(j);
            }
            self.stats.backtracks += 1;
            r = matrix.down(r);
        }

        matrix.uncover(column);
        false
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
