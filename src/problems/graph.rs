//! Explicit weighted directed graph as a search problem.
//!
//! Nodes are named; states are node indices. Listed nodes are numbered
//! first, then nodes in order of first mention by an edge.
//! Adjacency keeps edge insertion order, which is the action order seen by
//! every search strategy.
//!
//! Graphs can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "edges": [
//!     { "from": "A", "to": "B", "cost": 1.0 },
//!     { "from": "B", "to": "C", "cost": 1.0 }
//!   ],
//!   "start": "A",
//!   "goals": ["C"],
//!   "estimates": { "A": 2.0, "B": 1.0 }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::core::error::read_file;
use crate::core::{Error, Heuristic, Problem, Result, SeedRng};

/// Serialized graph description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Nodes numbered ahead of any edge. Nodes named by edges are added
    /// implicitly.
    #[serde(default)]
    pub nodes: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,

    #[serde(default)]
    pub start: Option<String>,

    #[serde(default)]
    pub goals: Vec<String>,

    /// Heuristic estimate per node. Missing nodes estimate 0.
    #[serde(default)]
    pub estimates: BTreeMap<String, f64>,
}

/// One directed edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub cost: f64,
}

/// Traversal of the edge `from -> to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub from: usize,
    pub to: usize,
}

/// Weighted directed graph with a start node and a goal set.
#[derive(Clone, Debug)]
pub struct GraphProblem {
    names: Vec<String>,
    index: FxHashMap<String, usize>,
    adjacency: Vec<SmallVec<[(usize, f64); 4]>>,
    start: usize,
    goals: Vec<bool>,
    estimates: Vec<f64>,
}

impl GraphProblem {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Build and validate a graph from its description.
    pub fn from_spec(spec: &GraphSpec) -> Result<Self> {
        let mut names: Vec<String> = Vec::new();
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut intern = |name: &str| -> usize {
            if let Some(&i) = index.get(name) {
                return i;
            }
            names.push(name.to_string());
            index.insert(name.to_string(), names.len() - 1);
            names.len() - 1
        };

        for node in &spec.nodes {
            intern(node);
        }
        let mut edges = Vec::with_capacity(spec.edges.len());
        for edge in &spec.edges {
            if edge.cost.is_nan() || edge.cost < 0.0 {
                return Err(Error::InvalidGraph(format!(
                    "edge {}->{} has invalid cost {}",
                    edge.from, edge.to, edge.cost
                )));
            }
            edges.push((intern(&edge.from), intern(&edge.to), edge.cost));
        }

        let lookup = |name: &str| -> Result<usize> {
            index
                .get(name)
                .copied()
                .ok_or_else(|| Error::InvalidGraph(format!("unknown node '{}'", name)))
        };

        let start = match &spec.start {
            Some(name) => lookup(name)?,
            None => return Err(Error::InvalidGraph("missing start node".into())),
        };

        let mut goals = vec![false; names.len()];
        for goal in &spec.goals {
            goals[lookup(goal)?] = true;
        }

        let mut estimates = vec![0.0; names.len()];
        for (name, &h) in &spec.estimates {
            estimates[lookup(name)?] = h;
        }

        let mut adjacency: Vec<SmallVec<[(usize, f64); 4]>> = vec![SmallVec::new(); names.len()];
        for (from, to, cost) in edges {
            if adjacency[from].iter().any(|&(t, _)| t == to) {
                return Err(Error::InvalidGraph(format!(
                    "duplicate edge {}->{}",
                    names[from], names[to]
                )));
            }
            adjacency[from].push((to, cost));
        }

        Ok(Self {
            names,
            index,
            adjacency,
            start,
            goals,
            estimates,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let spec: GraphSpec = serde_json::from_str(json)?;
        Self::from_spec(&spec)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_json(&read_file(path)?)
    }

    /// Random graph over nodes `n0..n{nodes-1}`, start `n0`, goal the last
    /// node, up to `edges` distinct edges with whole-number costs 1..=9.
    pub fn random(seed: u64, nodes: usize, edges: usize) -> Self {
        assert!(nodes >= 2, "random graph needs at least 2 nodes");
        let mut rng = SeedRng::new(seed);
        let mut builder = GraphBuilder::default();
        for i in 0..nodes {
            builder = builder.node(&format!("n{}", i));
        }

        let mut seen = FxHashSet::default();
        for _ in 0..edges {
            let from = rng.gen_range_usize(0..nodes);
            let to = rng.gen_range_usize(0..nodes);
            if from == to || !seen.insert((from, to)) {
                continue;
            }
            let cost = rng.gen_value(1..=9);
            builder = builder.edge(&format!("n{}", from), &format!("n{}", to), cost);
        }

        builder
            .start("n0")
            .goal(&format!("n{}", nodes - 1))
            .build()
            .unwrap_or_else(|e| unreachable!("generated graph is valid: {}", e))
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn name(&self, node: usize) -> &str {
        &self.names[node]
    }

    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Heuristic estimate recorded for `node`.
    #[must_use]
    pub fn estimate(&self, node: usize) -> f64 {
        self.estimates[node]
    }

    /// Heuristic reading the per-node estimate table.
    #[must_use]
    pub fn estimate_heuristic(&self) -> EstimateTable {
        EstimateTable
    }

    /// `"from->to"` using node names.
    #[must_use]
    pub fn describe(&self, step: &Step) -> String {
        format!("{}->{}", self.names[step.from], self.names[step.to])
    }

    pub fn path_labels(&self, path: &[Step]) -> Vec<String> {
        path.iter().map(|step| self.describe(step)).collect()
    }

    /// Total edge cost of a path.
    #[must_use]
    pub fn path_cost(&self, path: &[Step]) -> f64 {
        path.iter().map(|step| self.cost(&step.from, step)).sum()
    }
}

impl Problem for GraphProblem {
    type State = usize;
    type Action = Step;

    fn initial_state(&self) -> usize {
        self.start
    }

    fn is_goal(&self, state: &usize) -> bool {
        self.goals[*state]
    }

    fn actions(&self, state: &usize) -> Vec<Step> {
        self.adjacency[*state]
            .iter()
            .map(|&(to, _)| Step { from: *state, to })
            .collect()
    }

    fn successor(&self, _state: &usize, action: &Step) -> usize {
        action.to
    }

    fn cost(&self, state: &usize, action: &Step) -> f64 {
        self.adjacency[*state]
            .iter()
            .find(|&&(to, _)| to == action.to)
            .map_or(f64::INFINITY, |&(_, cost)| cost)
    }
}

/// Heuristic backed by a graph's per-node estimates.
#[derive(Clone, Copy, Debug, Default)]
pub struct EstimateTable;

impl Heuristic<GraphProblem> for EstimateTable {
    fn estimate(&self, problem: &GraphProblem, state: &usize) -> f64 {
        problem.estimate(*state)
    }
}

/// Fluent builder over `GraphSpec`.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    spec: GraphSpec,
}

impl GraphBuilder {
    pub fn node(mut self, name: &str) -> Self {
        self.spec.nodes.push(name.to_string());
        self
    }

    pub fn edge(mut self, from: &str, to: &str, cost: f64) -> Self {
        self.spec.edges.push(EdgeSpec {
            from: from.to_string(),
            to: to.to_string(),
            cost,
        });
        self
    }

    pub fn start(mut self, name: &str) -> Self {
        self.spec.start = Some(name.to_string());
        self
    }

    pub fn goal(mut self, name: &str) -> Self {
        self.spec.goals.push(name.to_string());
        self
    }

    pub fn estimate(mut self, name: &str, h: f64) -> Self {
        self.spec.estimates.insert(name.to_string(), h);
        self
    }

    pub fn build(self) -> Result<GraphProblem> {
        GraphProblem::from_spec(&self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> GraphProblem {
        GraphProblem::builder()
            .edge("A", "B", 1.0)
            .edge("B", "C", 2.5)
            .start("A")
            .goal("C")
            .estimate("A", 3.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_nodes_indexed_by_first_mention() {
        let graph = line();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.index_of("C"), Some(2));
        assert_eq!(graph.name(1), "B");
    }

    #[test]
    fn test_listed_nodes_numbered_before_edges() {
        let graph = GraphProblem::builder()
            .edge("x", "y", 1.0)
            .node("y")
            .node("z")
            .start("x")
            .build()
            .unwrap();

        assert_eq!(graph.index_of("y"), Some(0));
        assert_eq!(graph.index_of("z"), Some(1));
        assert_eq!(graph.index_of("x"), Some(2));
        assert_eq!(graph.actions(&2), vec![Step { from: 2, to: 0 }]);
    }

    #[test]
    fn test_problem_interface() {
        let graph = line();
        let a = graph.initial_state();
        let actions = graph.actions(&a);

        assert_eq!(actions, vec![Step { from: 0, to: 1 }]);
        assert_eq!(graph.successor(&a, &actions[0]), 1);
        assert!(graph.is_goal(&2));
        assert!(!graph.is_goal(&1));
        assert_eq!(graph.cost(&1, &Step { from: 1, to: 2 }), 2.5);
    }

    #[test]
    fn test_estimates_default_to_zero() {
        let graph = line();
        let h = graph.estimate_heuristic();
        assert_eq!(h.estimate(&graph, &0), 3.0);
        assert_eq!(h.estimate(&graph, &1), 0.0);
    }

    #[test]
    fn test_path_helpers() {
        let graph = line();
        let path = [Step { from: 0, to: 1 }, Step { from: 1, to: 2 }];
        assert_eq!(graph.path_labels(&path), vec!["A->B", "B->C"]);
        assert_eq!(graph.path_cost(&path), 3.5);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "edges": [{ "from": "A", "to": "B", "cost": 1.0 }],
            "nodes": ["Z"],
            "start": "A",
            "goals": ["B"]
        }"#;
        let graph = GraphProblem::from_json(json).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert!(graph.actions(&graph.index_of("Z").unwrap()).is_empty());
    }

    #[test]
    fn test_rejects_negative_cost() {
        let err = GraphProblem::builder()
            .edge("A", "B", -1.0)
            .start("A")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidGraph(_)));
    }

    #[test]
    fn test_rejects_unknown_goal_and_missing_start() {
        let err = GraphProblem::builder()
            .edge("A", "B", 1.0)
            .start("A")
            .goal("Q")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("unknown node 'Q'"));

        let err = GraphProblem::builder().edge("A", "B", 1.0).build().unwrap_err();
        assert!(err.to_string().contains("missing start"));
    }

    #[test]
    fn test_rejects_duplicate_edge() {
        let err = GraphProblem::builder()
            .edge("A", "B", 1.0)
            .edge("A", "B", 2.0)
            .start("A")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("duplicate edge A->B"));
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = GraphProblem::random(9, 8, 20);
        let b = GraphProblem::random(9, 8, 20);

        assert_eq!(a.node_count(), 8);
        for node in 0..8 {
            assert_eq!(a.actions(&node), b.actions(&node));
        }
        assert!(a.is_goal(&7));
        assert_eq!(a.initial_state(), 0);
        assert_eq!(a.name(7), "n7");
    }
}
