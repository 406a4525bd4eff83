//! Breadth-first and depth-first graph search.
//!
//! Both keep a discovered-path table keyed by state: a state is pushed at
//! most once, on first discovery, and never reopened. They differ in where
//! the goal test happens:
//! - BFS tests children as they are generated
//! - DFS tests a state when it is popped for expansion

use std::collections::VecDeque;

use im::Vector;
use log::trace;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::Problem;

use super::node::extend;
use super::stats::SearchStats;

/// Which end of the deque the frontier pops from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Discipline {
    Fifo,
    Lifo,
}

pub(crate) fn breadth_first<P: Problem + ?Sized>(
    problem: &P,
    initial: &P::State,
    stats: &mut SearchStats,
) -> Option<Vec<P::Action>> {
    run(problem, initial, Discipline::Fifo, stats)
}

pub(crate) fn depth_first<P: Problem + ?Sized>(
    problem: &P,
    initial: &P::State,
    stats: &mut SearchStats,
) -> Option<Vec<P::Action>> {
    run(problem, initial, Discipline::Lifo, stats)
}

fn run<P: Problem + ?Sized>(
    problem: &P,
    initial: &P::State,
    discipline: Discipline,
    stats: &mut SearchStats,
) -> Option<Vec<P::Action>> {
    if problem.is_goal(initial) {
        return Some(Vec::new());
    }

    let mut frontier: VecDeque<P::State> = VecDeque::new();
    let mut explored: FxHashSet<P::State> = FxHashSet::default();
    let mut paths: FxHashMap<P::State, Vector<P::Action>> = FxHashMap::default();

    frontier.push_back(initial.clone());
    paths.insert(initial.clone(), Vector::new());

    loop {
        let state = match discipline {
            Discipline::Fifo => frontier.pop_front(),
            Discipline::Lifo => frontier.pop_back(),
        }?;

        let path = paths.get(&state).cloned().unwrap_or_default();
        if discipline == Discipline::Lifo && problem.is_goal(&state) {
            return Some(path.into_iter().collect());
        }

        let actions = problem.actions(&state);
        stats.nodes_expanded += 1;
        trace!("expanding state with {} actions, depth {}", actions.len(), path.len());

        for action in actions {
            let child = problem.successor(&state, &action);
            stats.nodes_generated += 1;
            if explored.contains(&child) || paths.contains_key(&child) {
                continue;
            }

            let child_path = extend(&path, action);
            if discipline == Discipline::Fifo && problem.is_goal(&child) {
                return Some(child_path.into_iter().collect());
            }
            paths.insert(child.clone(), child_path);
            frontier.push_back(child);
        }

        explored.insert(state);
        stats.observe_frontier(frontier.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::{GraphProblem, Step};

    type SearchFn = fn(&GraphProblem, &usize, &mut SearchStats) -> Option<Vec<Step>>;

    /// S reaches G1 directly and G2 through A.
    fn two_goals() -> GraphProblem {
        GraphProblem::builder()
            .edge("S", "A", 1.0)
            .edge("S", "G1", 1.0)
            .edge("A", "G2", 1.0)
            .start("S")
            .goal("G1")
            .goal("G2")
            .build()
            .unwrap()
    }

    #[test]
    fn test_bfs_tests_goal_on_generation() {
        let problem = two_goals();
        let mut stats = SearchStats::new();
        let path = breadth_first(&problem, &problem.initial_state(), &mut stats).unwrap();

        assert_eq!(problem.path_labels(&path), vec!["S->G1"]);
        // Only S is expanded: G1 is found while generating S's children.
        assert_eq!(stats.nodes_expanded, 1);
    }

    #[test]
    fn test_dfs_tests_goal_on_expansion() {
        let problem = two_goals();
        let mut stats = SearchStats::new();
        let path = depth_first(&problem, &problem.initial_state(), &mut stats).unwrap();

        // LIFO pops G1 (pushed last) before A, and the goal check happens then.
        assert_eq!(problem.path_labels(&path), vec!["S->G1"]);
        assert_eq!(stats.nodes_expanded, 1);
    }

    #[test]
    fn test_dfs_follows_last_pushed_branch() {
        let problem = GraphProblem::builder()
            .edge("S", "G1", 1.0)
            .edge("S", "A", 1.0)
            .edge("A", "G2", 1.0)
            .start("S")
            .goal("G1")
            .goal("G2")
            .build()
            .unwrap();
        let mut stats = SearchStats::new();
        let path = depth_first(&problem, &problem.initial_state(), &mut stats).unwrap();

        assert_eq!(problem.path_labels(&path), vec!["S->A", "A->G2"]);
        // S and A expanded; G2 is popped and recognized without expansion.
        assert_eq!(stats.nodes_expanded, 2);
    }

    #[test]
    fn test_goal_at_start_needs_no_expansion() {
        let problem = GraphProblem::builder()
            .edge("S", "A", 1.0)
            .start("S")
            .goal("S")
            .build()
            .unwrap();

        let searches: [SearchFn; 2] = [breadth_first, depth_first];
        for search in searches {
            let mut stats = SearchStats::new();
            let path = search(&problem, &problem.initial_state(), &mut stats).unwrap();
            assert!(path.is_empty());
            assert_eq!(stats.nodes_expanded, 0);
        }
    }

    #[test]
    fn test_unreachable_goal() {
        let problem = GraphProblem::builder()
            .edge("S", "A", 1.0)
            .edge("A", "S", 1.0)
            .node("G")
            .start("S")
            .goal("G")
            .build()
            .unwrap();

        let mut stats = SearchStats::new();
        assert!(breadth_first(&problem, &problem.initial_state(), &mut stats).is_none());
        assert_eq!(stats.nodes_expanded, 2);

        let mut stats = SearchStats::new();
        assert!(depth_first(&problem, &problem.initial_state(), &mut stats).is_none());
        assert_eq!(stats.nodes_expanded, 2);
    }
}
