//! Priority-frontier search: uniform-cost, A* and greedy best-first.
//!
//! The three strategies share one loop and differ only in the priority key
//! computed for a generated child:
//! - uniform-cost: `g`
//! - A*: `g + h(child)`
//! - greedy best-first: `h(child)`
//!
//! Ties are broken by creation order. A child already on the frontier is
//! replaced only when its key sorts strictly before the existing entry.
//! Expanded states are never reopened.

use log::trace;
use rustc_hash::FxHashSet;

use crate::core::{Heuristic, Problem};

use super::frontier::PriorityFrontier;
use super::node::{extend, SearchNode};
use super::stats::SearchStats;

pub(crate) fn uniform_cost<P: Problem + ?Sized>(
    problem: &P,
    initial: &P::State,
    stats: &mut SearchStats,
) -> Option<Vec<P::Action>> {
    best_first(problem, initial, stats, |g, _| g)
}

pub(crate) fn a_star<P, H>(
    problem: &P,
    initial: &P::State,
    heuristic: &H,
    stats: &mut SearchStats,
) -> Option<Vec<P::Action>>
where
    P: Problem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    best_first(problem, initial, stats, |g, child| {
        g + heuristic.estimate(problem, child)
    })
}

pub(crate) fn greedy_best_first<P, H>(
    problem: &P,
    initial: &P::State,
    heuristic: &H,
    stats: &mut SearchStats,
) -> Option<Vec<P::Action>>
where
    P: Problem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    best_first(problem, initial, stats, |_, child| {
        heuristic.estimate(problem, child)
    })
}

fn best_first<P, F>(
    problem: &P,
    initial: &P::State,
    stats: &mut SearchStats,
    priority: F,
) -> Option<Vec<P::Action>>
where
    P: Problem + ?Sized,
    F: Fn(f64, &P::State) -> f64,
{
    if problem.is_goal(initial) {
        return Some(Vec::new());
    }

    let mut frontier: PriorityFrontier<P::State, P::Action> = PriorityFrontier::new();
    let mut explored: FxHashSet<P::State> = FxHashSet::default();
    let mut next_order: u64 = 1;

    frontier.push(SearchNode::root(initial.clone()));

    while let Some(node) = frontier.pop() {
        if problem.is_goal(&node.state) {
            return Some(node.into_actions());
        }

        explored.insert(node.state.clone());
        let actions = problem.actions(&node.state);
        stats.nodes_expanded += 1;
        trace!(
            "expanding node #{} (g = {}, key = {}), {} actions",
            node.order,
            node.path_cost,
            node.priority,
            actions.len()
        );

        for action in actions {
            let child = problem.successor(&node.state, &action);
            stats.nodes_generated += 1;

            let path_cost = node.path_cost + problem.cost(&node.state, &action);
            let candidate = SearchNode {
                priority: priority(path_cost, &child),
                state: child,
                path_cost,
                order: next_order,
                path: extend(&node.path, action),
            };
            next_order += 1;

            if frontier.contains(&candidate.state) {
                if frontier.improve(candidate) {
                    stats.frontier_updates += 1;
                }
            } else if !explored.contains(&candidate.state) {
                frontier.push(candidate);
            }
        }

        stats.observe_frontier(frontier.len());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ZeroHeuristic;
    use crate::problems::GraphProblem;

    /// S->A->G costs 2 by edges but S->G directly costs 5.
    fn detour() -> GraphProblem {
        GraphProblem::builder()
            .edge("S", "G", 5.0)
            .edge("S", "A", 1.0)
            .edge("A", "G", 1.0)
            .start("S")
            .goal("G")
            .build()
            .unwrap()
    }

    #[test]
    fn test_ucs_finds_cheapest_path() {
        let problem = detour();
        let mut stats = SearchStats::new();
        let path = uniform_cost(&problem, &problem.initial_state(), &mut stats).unwrap();

        assert_eq!(problem.path_labels(&path), vec!["S->A", "A->G"]);
        assert_eq!(problem.path_cost(&path), 2.0);
        // G entered the frontier at cost 5 and was lowered to 2 via A.
        assert_eq!(stats.frontier_updates, 1);
    }

    #[test]
    fn test_a_star_zero_heuristic_matches_ucs() {
        let problem = detour();
        let mut stats = SearchStats::new();
        let path = a_star(&problem, &problem.initial_state(), &ZeroHeuristic, &mut stats).unwrap();
        assert_eq!(problem.path_cost(&path), 2.0);
    }

    #[test]
    fn test_greedy_ignores_path_cost() {
        // h(G) = 0 makes the direct edge look best immediately.
        let problem = GraphProblem::builder()
            .edge("S", "G", 5.0)
            .edge("S", "A", 1.0)
            .edge("A", "G", 1.0)
            .estimate("A", 1.0)
            .start("S")
            .goal("G")
            .build()
            .unwrap();
        let h = problem.estimate_heuristic();
        let mut stats = SearchStats::new();
        let path =
            greedy_best_first(&problem, &problem.initial_state(), &h, &mut stats).unwrap();

        assert_eq!(problem.path_labels(&path), vec!["S->G"]);
    }

    #[test]
    fn test_equal_cost_keeps_first_discovered_path() {
        // Both routes to G cost 2; the one generated first wins the tie.
        let problem = GraphProblem::builder()
            .edge("S", "A", 1.0)
            .edge("S", "B", 1.0)
            .edge("A", "G", 1.0)
            .edge("B", "G", 1.0)
            .start("S")
            .goal("G")
            .build()
            .unwrap();
        let mut stats = SearchStats::new();
        let path = uniform_cost(&problem, &problem.initial_state(), &mut stats).unwrap();

        assert_eq!(problem.path_labels(&path), vec!["S->A", "A->G"]);
        assert_eq!(stats.frontier_updates, 0);
    }

    #[test]
    fn test_no_solution() {
        let problem = GraphProblem::builder()
            .edge("S", "A", 1.0)
            .node("G")
            .start("S")
            .goal("G")
            .build()
            .unwrap();
        let mut stats = SearchStats::new();
        assert!(uniform_cost(&problem, &problem.initial_state(), &mut stats).is_none());
        assert_eq!(stats.nodes_expanded, 2);
    }
}
