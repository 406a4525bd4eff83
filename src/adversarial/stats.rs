//! Game-tree search statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one game-tree search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Interior nodes whose actions were enumerated.
    pub nodes_expanded: u64,

    /// Terminal states reached.
    pub terminal_leaves: u64,

    /// Non-terminal states scored by the heuristic.
    pub cutoff_leaves: u64,

    /// Alpha-beta cutoffs that skipped remaining siblings.
    pub prunes: u64,

    /// Deepest ply visited below the root.
    pub max_ply: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl TreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Nodes visited: interior nodes plus leaves.
    #[must_use]
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_expanded + self.terminal_leaves + self.cutoff_leaves
    }
}
