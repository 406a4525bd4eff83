//! Graph search over caller-supplied problems.
//!
//! ## Overview
//!
//! Five strategies explore the state graph of a [`Problem`] and return the
//! action path to a goal, or `None` when no goal is reachable:
//!
//! - **Breadth-first**: fewest actions; goal test on generation
//! - **Depth-first**: goal test on expansion; no optimality guarantee
//! - **Uniform-cost**: cheapest path for non-negative costs
//! - **A\***: cheapest path when the heuristic is admissible
//! - **Greedy best-first**: follows the heuristic alone
//!
//! A goal initial state returns an empty path without any expansion.
//!
//! ## Usage
//!
//! ```rust
//! use rust_search::core::Problem;
//! use rust_search::problems::GraphProblem;
//! use rust_search::search::{a_star_search, breadth_first_search};
//!
//! let problem = GraphProblem::builder()
//!     .edge("A", "B", 1.0)
//!     .edge("B", "C", 1.0)
//!     .start("A")
//!     .goal("C")
//!     .build()
//!     .unwrap();
//!
//! let start = problem.initial_state();
//! let bfs = breadth_first_search(&problem, &start).unwrap();
//! let astar = a_star_search(&problem, &start, &|_: &GraphProblem, _: &usize| 0.0).unwrap();
//! assert_eq!(bfs.len(), 2);
//! assert_eq!(problem.path_cost(&astar), 2.0);
//! ```
//!
//! Use [`GraphSearch`] to select the strategy at runtime and read the
//! statistics of the last run.

pub mod engine;
pub mod frontier;
mod informed;
pub mod node;
pub mod stats;
pub mod strategy;
mod uninformed;

pub use engine::GraphSearch;
pub use frontier::PriorityFrontier;
pub use node::SearchNode;
pub use stats::SearchStats;
pub use strategy::Strategy;

use crate::core::{Heuristic, Problem};

/// Breadth-first search. Returns a path with the fewest actions.
pub fn breadth_first_search<P: Problem + ?Sized>(
    problem: &P,
    initial: &P::State,
) -> Option<Vec<P::Action>> {
    uninformed::breadth_first(problem, initial, &mut SearchStats::default())
}

/// Depth-first search.
pub fn depth_first_search<P: Problem + ?Sized>(
    problem: &P,
    initial: &P::State,
) -> Option<Vec<P::Action>> {
    uninformed::depth_first(problem, initial, &mut SearchStats::default())
}

/// Uniform-cost search. Returns a cheapest path.
pub fn uniform_cost_search<P: Problem + ?Sized>(
    problem: &P,
    initial: &P::State,
) -> Option<Vec<P::Action>> {
    informed::uniform_cost(problem, initial, &mut SearchStats::default())
}

/// A* search with priority `g + h(successor)`.
pub fn a_star_search<P, H>(problem: &P, initial: &P::State, heuristic: &H) -> Option<Vec<P::Action>>
where
    P: Problem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    informed::a_star(problem, initial, heuristic, &mut SearchStats::default())
}

/// Greedy best-first search with priority `h(successor)`.
pub fn best_first_search<P, H>(
    problem: &P,
    initial: &P::State,
    heuristic: &H,
) -> Option<Vec<P::Action>>
where
    P: Problem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    informed::greedy_best_first(problem, initial, heuristic, &mut SearchStats::default())
}
