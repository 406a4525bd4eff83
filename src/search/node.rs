//! Search node structure.
//!
//! Paths are persistent vectors, so extending a parent's path by one action
//! shares the parent's storage instead of copying it.

use std::fmt;

use im::Vector;

/// A generated, not yet expanded, search node.
#[derive(Clone)]
pub struct SearchNode<S, A> {
    pub state: S,

    /// Accumulated cost of `path`.
    pub path_cost: f64,

    /// Frontier key. Path cost, path cost + h, or h, depending on strategy.
    pub priority: f64,

    /// Strictly increasing creation counter. Breaks priority ties.
    pub order: u64,

    /// Actions from the initial state to `state`.
    pub path: Vector<A>,
}

impl<S, A: Clone> SearchNode<S, A> {
    /// Root node for the initial state.
    pub fn root(state: S) -> Self {
        Self {
            state,
            path_cost: 0.0,
            priority: 0.0,
            order: 0,
            path: Vector::new(),
        }
    }

    /// True if `self` is ordered strictly before `other` in the frontier.
    #[must_use]
    pub fn sorts_before(&self, other: &Self) -> bool {
        self.priority < other.priority
            || (self.priority == other.priority && self.order < other.order)
    }

    /// Consume the node, returning its action path.
    pub fn into_actions(self) -> Vec<A> {
        self.path.into_iter().collect()
    }
}

impl<S: fmt::Debug, A: Clone + fmt::Debug> fmt::Debug for SearchNode<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNode")
            .field("state", &self.state)
            .field("path_cost", &self.path_cost)
            .field("priority", &self.priority)
            .field("order", &self.order)
            .field("path", &self.path)
            .finish()
    }
}

/// Extend `path` by one action, leaving `path` itself unchanged.
pub(crate) fn extend<A: Clone>(path: &Vector<A>, action: A) -> Vector<A> {
    let mut next = path.clone();
    next.push_back(action);
    next
}
