//! Priority frontier with decrease-key by lazy deletion.
//!
//! Entries are ordered by `(priority, order)` ascending, where `order` is the
//! insertion counter of the node. Replacing a state's entry pushes a fresh
//! heap key and marks the old one stale; stale keys are skipped on pop.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::node::SearchNode;

/// Heap key for one frontier entry.
#[derive(Clone, Debug)]
struct FrontierKey<S> {
    priority: f64,
    order: u64,
    state: S,
}

impl<S> PartialEq for FrontierKey<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for FrontierKey<S> {}

impl<S> PartialOrd for FrontierKey<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierKey<S> {
    /// `+ 0.0` folds -0.0 into 0.0, matching the IEEE `==` used by
    /// `SearchNode::sorts_before`.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.priority + 0.0)
            .total_cmp(&(other.priority + 0.0))
            .then(self.order.cmp(&other.order))
    }
}

/// Min-priority frontier keyed by state.
///
/// At most one live node exists per state.
pub struct PriorityFrontier<S, A> {
    heap: BinaryHeap<Reverse<FrontierKey<S>>>,
    live: FxHashMap<S, SearchNode<S, A>>,
}

impl<S: Clone + Eq + Hash, A: Clone> PriorityFrontier<S, A> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: FxHashMap::default(),
        }
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.live.contains_key(state)
    }

    /// Live entry for `state`, if any.
    #[must_use]
    pub fn get(&self, state: &S) -> Option<&SearchNode<S, A>> {
        self.live.get(state)
    }

    /// Insert a node. Any existing entry for the same state is superseded.
    pub fn push(&mut self, node: SearchNode<S, A>) {
        self.heap.push(Reverse(FrontierKey {
            priority: node.priority,
            order: node.order,
            state: node.state.clone(),
        }));
        self.live.insert(node.state.clone(), node);
    }

    /// Replace the entry for `node.state` if `node` sorts strictly before it.
    ///
    /// Returns true when the frontier was updated.
    pub fn improve(&mut self, node: SearchNode<S, A>) -> bool {
        let better = match self.live.get(&node.state) {
            Some(existing) => node.sorts_before(existing),
            None => false,
        };
        if better {
            self.push(node);
        }
        better
    }

    /// Remove and return the node with the lowest `(priority, order)`.
    pub fn pop(&mut self) -> Option<SearchNode<S, A>> {
        while let Some(Reverse(key)) = self.heap.pop() {
            let current = self
                .live
                .get(&key.state)
                .is_some_and(|node| node.order == key.order);
            if current {
                return self.live.remove(&key.state);
            }
        }
        None
    }
}

impl<S: Clone + Eq + Hash, A: Clone> Default for PriorityFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
