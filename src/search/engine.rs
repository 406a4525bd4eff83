//! Strategy-dispatching graph search context.

use std::time::Instant;

use log::debug;

use crate::core::{Heuristic, Problem, ZeroHeuristic};

use super::informed;
use super::stats::SearchStats;
use super::strategy::Strategy;
use super::uninformed;

/// Graph search context.
///
/// Holds the strategy and the statistics of the most recent run. Every run
/// builds its own frontier and explored set, so one context can be reused
/// across problems.
///
/// ```
/// use rust_search::core::Problem;
/// use rust_search::problems::GraphProblem;
/// use rust_search::search::{GraphSearch, Strategy};
///
/// let problem = GraphProblem::builder()
///     .edge("A", "B", 1.0)
///     .edge("B", "C", 1.0)
///     .start("A")
///     .goal("C")
///     .build()
///     .unwrap();
///
/// let mut search = GraphSearch::new(Strategy::UniformCost);
/// let path = search.run(&problem, &problem.initial_state()).unwrap();
/// assert_eq!(problem.path_labels(&path), vec!["A->B", "B->C"]);
/// assert_eq!(search.stats().nodes_expanded, 2);
/// ```
#[derive(Clone, Debug)]
pub struct GraphSearch {
    strategy: Strategy,
    stats: SearchStats,
}

impl GraphSearch {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search without a heuristic. Informed strategies see `h = 0`.
    pub fn run<P: Problem + ?Sized>(
        &mut self,
        problem: &P,
        initial: &P::State,
    ) -> Option<Vec<P::Action>> {
        self.run_with(problem, initial, &ZeroHeuristic)
    }

    /// Search from `initial`, returning the action path to a goal.
    ///
    /// `None` means the reachable state space holds no goal. Uninformed
    /// strategies ignore `heuristic`.
    pub fn run_with<P, H>(
        &mut self,
        problem: &P,
        initial: &P::State,
        heuristic: &H,
    ) -> Option<Vec<P::Action>>
    where
        P: Problem + ?Sized,
        H: Heuristic<P> + ?Sized,
    {
        let start = Instant::now();
        self.stats.reset();

        let stats = &mut self.stats;
        let solution = match self.strategy {
            Strategy::BreadthFirst => uninformed::breadth_first(problem, initial, stats),
            Strategy::DepthFirst => uninformed::depth_first(problem, initial, stats),
            Strategy::UniformCost => informed::uniform_cost(problem, initial, stats),
            Strategy::AStar => informed::a_star(problem, initial, heuristic, stats),
            Strategy::GreedyBestFirst => {
                informed::greedy_best_first(problem, initial, heuristic, stats)
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.stats.solution_length = solution.as_ref().map_or(0, Vec::len);

        debug!(
            "{} search {} after expanding {} nodes ({} generated) in {}us",
            self.strategy,
            if solution.is_some() { "solved" } else { "found no solution" },
            self.stats.nodes_expanded,
            self.stats.nodes_generated,
            self.stats.time_us
        );

        solution
    }
}

impl Default for GraphSearch {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}
