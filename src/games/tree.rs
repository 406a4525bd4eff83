//! Explicit game trees, loaded from JSON or generated from a seed.
//!
//! JSON nodes come in three shapes:
//!
//! ```json
//! {"agents": 2, "root": {"turn": 0, "estimate": 1.5, "children": [
//!     3,
//!     {"values": [2, -2]},
//!     {"turn": 1, "children": [4, 6]}
//! ]}}
//! ```
//!
//! - a bare number `v` is a terminal leaf worth `v` to agent 0 and `-v` to
//!   every other agent
//! - `{"values": [...]}` is a terminal leaf with one utility per agent
//! - `{"turn", "children", "estimate"?}` is an interior node; the optional
//!   estimate is what `estimate_heuristic` reports for it (default 0)
//!
//! Actions are child indices, so the action `1` at the root selects the
//! second child.

use std::path::Path;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::read_file;
use crate::core::{Error, Game, GameHeuristic, PlayerId, PlayerMap, Result, SeedRng};

/// Probability that a generated interior position ends the game early.
const EARLY_LEAF_PROBABILITY: f64 = 0.1;

fn default_agents() -> usize {
    2
}

/// Serialized form of a game tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeSpec {
    #[serde(default = "default_agents")]
    pub agents: usize,
    pub root: TreeSpecNode,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeSpecNode {
    Value(f64),
    Leaf {
        values: Vec<f64>,
    },
    Branch {
        turn: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        estimate: Option<f64>,
        children: Vec<TreeSpecNode>,
    },
}

#[derive(Clone, Debug)]
struct TreeNode {
    turn: PlayerId,
    children: SmallVec<[usize; 4]>,
    values: Option<PlayerMap<f64>>,
    estimate: f64,
}

/// Game over an explicit tree stored as an arena. States are node ids and
/// the root is node 0.
#[derive(Clone, Debug)]
pub struct TreeGame {
    nodes: Vec<TreeNode>,
    agents: usize,
}

impl TreeGame {
    pub fn from_spec(spec: &TreeSpec) -> Result<Self> {
        if spec.agents == 0 || spec.agents > 255 {
            return Err(Error::InvalidTree(format!(
                "agent count must be 1-255, got {}",
                spec.agents
            )));
        }

        let mut game = Self {
            nodes: Vec::new(),
            agents: spec.agents,
        };
        // Pre-order over an explicit stack; children are pushed reversed so
        // they attach to their parent in declaration order.
        let mut pending: Vec<(&TreeSpecNode, Option<usize>)> = vec![(&spec.root, None)];
        while let Some((node, parent)) = pending.pop() {
            let id = game.nodes.len();
            let parsed = match node {
                TreeSpecNode::Value(value) => game.leaf(game.zero_sum(*value), id)?,
                TreeSpecNode::Leaf { values } => game.leaf(values.clone(), id)?,
                TreeSpecNode::Branch {
                    turn,
                    estimate,
                    children,
                } => {
                    if usize::from(*turn) >= game.agents {
                        return Err(Error::InvalidTree(format!(
                            "node {} has turn {} but the game has {} agents",
                            id, turn, game.agents
                        )));
                    }
                    pending.extend(children.iter().rev().map(|child| (child, Some(id))));
                    TreeNode {
                        turn: PlayerId::new(*turn),
                        children: SmallVec::new(),
                        values: None,
                        estimate: estimate.unwrap_or(0.0),
                    }
                }
            };
            game.nodes.push(parsed);
            if let Some(parent) = parent {
                game.nodes[parent].children.push(id);
            }
        }

        Ok(game)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let spec: TreeSpec = serde_json::from_str(json)?;
        Self::from_spec(&spec)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_json(&read_file(path)?)
    }

    /// Two-agent tree: agent 0 picks a row, agent 1 picks a leaf in it.
    ///
    /// ```
    /// use rust_search::core::Game;
    /// use rust_search::games::TreeGame;
    ///
    /// let game = TreeGame::two_ply(&[&[3.0, 12.0], &[2.0]]);
    /// assert_eq!(game.actions(&game.root()), vec![0, 1]);
    /// assert_eq!(game.node_count(), 6);
    /// ```
    #[must_use]
    pub fn two_ply(rows: &[&[f64]]) -> Self {
        let mut game = Self::with_root(2, PlayerId::MAXIMIZER);
        for row in rows {
            let min = game.push_child(0, PlayerId::new(1), None);
            for &value in row.iter() {
                game.push_child(min, PlayerId::new(0), Some(PlayerMap::from_vec(vec![value, -value])));
            }
        }
        game
    }

    /// Two-agent chain of `length` single-child interior nodes ending in a
    /// leaf worth `value` to agent 0.
    #[must_use]
    pub fn chain(length: usize, value: f64) -> Self {
        let mut game = Self::with_root(2, PlayerId::MAXIMIZER);
        let mut tip = 0;
        for ply in 1..=length {
            let turn = PlayerId::new((ply % 2) as u8);
            let values = (ply == length).then(|| PlayerMap::from_vec(vec![value, -value]));
            tip = game.push_child(tip, turn, values);
        }
        if length == 0 {
            game.nodes[0].values = Some(PlayerMap::from_vec(vec![value, -value]));
        }
        game
    }

    /// Random tree. Agents move in rotation starting with agent 0; every
    /// interior node has 1 to `max_branching` children. Leaves sit at
    /// `depth` plies, or earlier with a small probability, and carry
    /// whole-number utilities in [-10, 10]. Interior estimates are drawn
    /// from the same range.
    #[must_use]
    pub fn random(seed: u64, depth: u32, max_branching: usize, agents: usize) -> Self {
        let agents = agents.clamp(1, 255);
        let max_branching = max_branching.max(1);
        let mut rng = SeedRng::new(seed);
        let mut game = Self::with_root(agents, PlayerId::MAXIMIZER);

        // Breadth-first so node ids grow with ply.
        let mut frontier = std::collections::VecDeque::from([(0usize, 0u32)]);
        while let Some((id, ply)) = frontier.pop_front() {
            let is_leaf = ply == depth || (ply > 0 && rng.gen_bool(EARLY_LEAF_PROBABILITY));
            if is_leaf {
                let value = rng.gen_value(-10..=10);
                game.nodes[id].values = Some(game.spread(value));
                continue;
            }
            game.nodes[id].estimate = rng.gen_value(-10..=10);
            let branching = rng.gen_range_usize(1..max_branching + 1);
            let turn = PlayerId::new(((ply + 1) as usize % agents) as u8);
            for _ in 0..branching {
                let child = game.push_child(id, turn, None);
                frontier.push_back((child, ply + 1));
            }
        }
        game
    }

    /// Node id of the root.
    #[must_use]
    pub fn root(&self) -> usize {
        0
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.agents
    }

    /// Heuristic reading node estimates: terminal nodes report their
    /// utility for the asked agent; interior nodes report their estimate
    /// for agent 0 and its negation for anyone else.
    #[must_use]
    pub fn estimate_heuristic(&self) -> NodeEstimate {
        NodeEstimate
    }

    fn with_root(agents: usize, turn: PlayerId) -> Self {
        Self {
            nodes: vec![TreeNode {
                turn,
                children: SmallVec::new(),
                values: None,
                estimate: 0.0,
            }],
            agents,
        }
    }

    fn push_child(&mut self, parent: usize, turn: PlayerId, values: Option<PlayerMap<f64>>) -> usize {
        let id = self.nodes.len();
        let estimate = values.as_ref().map_or(0.0, |v| v[PlayerId::MAXIMIZER]);
        self.nodes.push(TreeNode {
            turn,
            children: SmallVec::new(),
            values,
            estimate,
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// `value` for agent 0, `-value` for everyone else.
    fn zero_sum(&self, value: f64) -> Vec<f64> {
        PlayerId::all(self.agents)
            .map(|agent| if agent.is_maximizer() { value } else { -value })
            .collect()
    }

    fn spread(&self, value: f64) -> PlayerMap<f64> {
        PlayerMap::from_vec(self.zero_sum(value))
    }

    fn leaf(&self, values: Vec<f64>, id: usize) -> Result<TreeNode> {
        if values.len() != self.agents {
            return Err(Error::InvalidTree(format!(
                "leaf {} has {} values but the game has {} agents",
                id,
                values.len(),
                self.agents
            )));
        }
        if values.iter().any(|v| v.is_nan()) {
            return Err(Error::InvalidTree(format!("leaf {} has a NaN utility", id)));
        }
        let values = PlayerMap::from_vec(values);
        Ok(TreeNode {
            turn: PlayerId::MAXIMIZER,
            children: SmallVec::new(),
            estimate: values[PlayerId::MAXIMIZER],
            values: Some(values),
        })
    }
}

impl Game for TreeGame {
    type State = usize;
    type Action = usize;

    fn turn(&self, state: &usize) -> PlayerId {
        self.nodes[*state].turn
    }

    fn is_terminal(&self, state: &usize) -> Option<PlayerMap<f64>> {
        self.nodes[*state].values.clone()
    }

    fn actions(&self, state: &usize) -> Vec<usize> {
        (0..self.nodes[*state].children.len()).collect()
    }

    fn successor(&self, state: &usize, action: &usize) -> usize {
        self.nodes[*state].children[*action]
    }
}

/// See [`TreeGame::estimate_heuristic`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NodeEstimate;

impl GameHeuristic<TreeGame> for NodeEstimate {
    fn evaluate(&self, game: &TreeGame, state: &usize, agent: PlayerId) -> f64 {
        let node = &game.nodes[*state];
        match &node.values {
            Some(values) => values[agent],
            None if agent.is_maximizer() => node.estimate,
            None => -node.estimate,
        }
    }
}
