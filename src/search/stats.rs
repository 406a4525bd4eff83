//! Graph search statistics for diagnostics and heuristic comparison.

use serde::{Deserialize, Serialize};

/// Statistics collected during a graph search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States expanded (calls to `Problem::actions`).
    pub nodes_expanded: u64,

    /// Successor states generated.
    pub nodes_generated: u64,

    /// Largest frontier size observed.
    pub frontier_peak: usize,

    /// Frontier entries replaced by a cheaper path.
    pub frontier_updates: u64,

    /// Length of the returned path (0 when no solution was found).
    pub solution_length: usize,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.frontier_peak = self.frontier_peak.max(len);
    }

    /// Expansions per second.
    #[must_use]
    pub fn expansions_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average number of successors generated per expansion.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.nodes_expanded == 0 {
            0.0
        } else {
            self.nodes_generated as f64 / self.nodes_expanded as f64
        }
    }
}
