//! Game-tree algorithm selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Error;

/// How `GameTreeSearch` values the nodes of a game tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAlgorithm {
    /// One-ply lookahead on the heuristic.
    #[serde(rename = "greedy")]
    Greedy,
    /// Max at agent 0, min elsewhere.
    #[serde(rename = "minimax")]
    Minimax,
    /// Minimax with alpha-beta bounds.
    #[serde(rename = "alphabeta")]
    AlphaBeta,
    /// Alpha-beta exploring children in heuristic order.
    #[serde(rename = "alphabeta-ordered")]
    AlphaBetaOrdered,
    /// Max at agent 0, uniform chance elsewhere.
    #[serde(rename = "expectimax")]
    Expectimax,
}

impl GameAlgorithm {
    pub const ALL: [GameAlgorithm; 5] = [
        GameAlgorithm::Greedy,
        GameAlgorithm::Minimax,
        GameAlgorithm::AlphaBeta,
        GameAlgorithm::AlphaBetaOrdered,
        GameAlgorithm::Expectimax,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameAlgorithm::Greedy => "greedy",
            GameAlgorithm::Minimax => "minimax",
            GameAlgorithm::AlphaBeta => "alphabeta",
            GameAlgorithm::AlphaBetaOrdered => "alphabeta-ordered",
            GameAlgorithm::Expectimax => "expectimax",
        }
    }

    /// Whether alpha-beta bounds are threaded through the tree.
    #[must_use]
    pub const fn prunes(self) -> bool {
        matches!(self, GameAlgorithm::AlphaBeta | GameAlgorithm::AlphaBetaOrdered)
    }
}

impl fmt::Display for GameAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(GameAlgorithm::Greedy),
            "minimax" => Ok(GameAlgorithm::Minimax),
            "alphabeta" | "alpha-beta" => Ok(GameAlgorithm::AlphaBeta),
            "alphabeta-ordered" | "alphabeta_with_move_ordering" | "alpha-beta-ordered" => {
                Ok(GameAlgorithm::AlphaBetaOrdered)
            }
            "expectimax" => Ok(GameAlgorithm::Expectimax),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Default for GameAlgorithm {
    fn default() -> Self {
        GameAlgorithm::AlphaBeta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for algorithm in GameAlgorithm::ALL {
            assert_eq!(algorithm.name().parse::<GameAlgorithm>().unwrap(), algorithm);
            let json = serde_json::to_string(&algorithm).unwrap();
            assert_eq!(json, format!("\"{}\"", algorithm));
        }
    }

    #[test]
    fn test_unknown_algorithm() {
        assert!(matches!(
            "negamax".parse::<GameAlgorithm>(),
            Err(Error::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_prunes() {
        assert!(GameAlgorithm::AlphaBetaOrdered.prunes());
        assert!(!GameAlgorithm::Expectimax.prunes());
    }
}
