//! Search problem trait and heuristics.
//!
//! Problems implement `Problem` to describe a state space:
//! - The initial state and the goal test
//! - Which actions apply in a state
//! - The deterministic successor of a state under an action
//! - The non-negative cost of taking an action

use std::hash::Hash;

/// A deterministic state-space search problem.
///
/// ## Implementation Notes
///
/// - `successor` must return a new state and never mutate its input
/// - `cost` must be non-negative for uniform-cost and A* to be optimal
/// - `actions` order is significant: it drives tie-breaking in every strategy
pub trait Problem {
    /// State type. Used as a key in explored sets and frontiers.
    type State: Clone + Eq + Hash;

    /// Action type.
    type Action: Clone;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Actions applicable in `state`, in enumeration order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn successor(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Cost of applying `action` in `state` (>= 0).
    fn cost(&self, state: &Self::State, action: &Self::Action) -> f64;
}

/// Estimate of the remaining cost from a state to the nearest goal.
///
/// A* is optimal only when the estimate is admissible. The engine does not
/// check this.
///
/// Any `Fn(&P, &P::State) -> f64` closure is a heuristic:
///
/// ```
/// use rust_search::core::Heuristic;
/// use rust_search::problems::GraphProblem;
///
/// let h = |_: &GraphProblem, _: &usize| 1.0;
/// # fn takes<H: Heuristic<GraphProblem>>(_: &H) {}
/// takes(&h);
/// ```
pub trait Heuristic<P: Problem + ?Sized> {
    fn estimate(&self, problem: &P, state: &P::State) -> f64;
}

impl<P, F> Heuristic<P> for F
where
    P: Problem + ?Sized,
    F: Fn(&P, &P::State) -> f64,
{
    fn estimate(&self, problem: &P, state: &P::State) -> f64 {
        self(problem, state)
    }
}

/// Heuristic that always returns 0. Turns A* into uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<P: Problem + ?Sized> Heuristic<P> for ZeroHeuristic {
    fn estimate(&self, _problem: &P, _state: &P::State) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter;

    impl Problem for Counter {
        type State = u32;
        type Action = u32;

        fn initial_state(&self) -> u32 {
            0
        }

        fn is_goal(&self, state: &u32) -> bool {
            *state == 3
        }

        fn actions(&self, _state: &u32) -> Vec<u32> {
            vec![1]
        }

        fn successor(&self, state: &u32, action: &u32) -> u32 {
            state + action
        }

        fn cost(&self, _state: &u32, _action: &u32) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_closure_heuristic() {
        let h = |_: &Counter, s: &u32| f64::from(3 - s);
        assert_eq!(h.estimate(&Counter, &1), 2.0);
    }

    #[test]
    fn test_zero_heuristic() {
        assert_eq!(ZeroHeuristic.estimate(&Counter, &0), 0.0);
    }
}
