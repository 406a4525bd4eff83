//! Graph search strategy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Error;

/// Frontier discipline used by `GraphSearch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// FIFO frontier, goal test on generation. Fewest actions.
    #[serde(alias = "bfs")]
    BreadthFirst,
    /// LIFO frontier, goal test on expansion. No optimality guarantee.
    #[serde(alias = "dfs")]
    DepthFirst,
    /// Priority = path cost.
    #[serde(alias = "ucs")]
    UniformCost,
    /// Priority = path cost + heuristic(successor).
    AStar,
    /// Priority = heuristic(successor).
    GreedyBestFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
        Strategy::GreedyBestFirst,
    ];

    /// Whether the strategy consults the heuristic.
    #[must_use]
    pub const fn is_informed(self) -> bool {
        matches!(self, Strategy::AStar | Strategy::GreedyBestFirst)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::UniformCost => "ucs",
            Strategy::AStar => "a-star",
            Strategy::GreedyBestFirst => "greedy-best-first",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::AStar
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "ucs" | "uniform-cost" => Ok(Strategy::UniformCost),
            "a-star" | "astar" | "a*" => Ok(Strategy::AStar),
            "greedy-best-first" | "gbfs" | "best-first" => Ok(Strategy::GreedyBestFirst),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_from_str() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("A*".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!(" BFS ".parse::<Strategy>().unwrap(), Strategy::BreadthFirst);
    }

    #[test]
    fn test_unknown_strategy() {
        let err = "dijkstra".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, Error::UnknownStrategy(ref s) if s == "dijkstra"));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Strategy::GreedyBestFirst).unwrap();
        assert_eq!(json, "\"greedy-best-first\"");
        let back: Strategy = serde_json::from_str("\"uniform-cost\"").unwrap();
        assert_eq!(back, Strategy::UniformCost);
        let short: Strategy = serde_json::from_str("\"bfs\"").unwrap();
        assert_eq!(short, Strategy::BreadthFirst);
    }

    #[test]
    fn test_informed() {
        assert!(Strategy::AStar.is_informed());
        assert!(!Strategy::UniformCost.is_informed());
    }
}
