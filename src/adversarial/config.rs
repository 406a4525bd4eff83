//! Game-tree search configuration.

use serde::{Deserialize, Serialize};

use crate::core::Error;

use super::algorithm::GameAlgorithm;

/// Remaining search depth in plies.
///
/// Serialized as a signed integer where `-1` means unlimited, matching the
/// usual command-line convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Depth {
    /// Expand until terminal states.
    Unlimited,
    /// Evaluate with the heuristic once this many plies have been searched.
    Limited(u32),
}

impl Depth {
    /// True when the budget is spent and the node must be evaluated.
    #[inline]
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Depth::Limited(0))
    }

    /// Budget for a child node: one ply less, regardless of whose turn.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Depth::Unlimited => Depth::Unlimited,
            Depth::Limited(n) => Depth::Limited(n.saturating_sub(1)),
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth::Unlimited
    }
}

impl From<u32> for Depth {
    fn from(plies: u32) -> Self {
        Depth::Limited(plies)
    }
}

impl From<Depth> for i64 {
    fn from(depth: Depth) -> Self {
        match depth {
            Depth::Unlimited => -1,
            Depth::Limited(n) => i64::from(n),
        }
    }
}

impl TryFrom<i64> for Depth {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Depth::Unlimited),
            n if n >= 0 => u32::try_from(n)
                .map(Depth::Limited)
                .map_err(|_| Error::Validation(format!("depth {} is too large", n))),
            n => Err(Error::Validation(format!(
                "depth must be -1 (unlimited) or non-negative, got {}",
                n
            ))),
        }
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Depth::Unlimited => write!(f, "unlimited"),
            Depth::Limited(n) => write!(f, "{}", n),
        }
    }
}

/// Game-tree search parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSearchConfig {
    /// Node-combination rule.
    pub algorithm: GameAlgorithm,

    /// Ply budget before heuristic evaluation (-1 = unlimited).
    pub max_depth: Depth,
}

impl Default for GameSearchConfig {
    fn default() -> Self {
        Self {
            algorithm: GameAlgorithm::AlphaBeta,
            max_depth: Depth::Unlimited,
        }
    }
}

impl GameSearchConfig {
    pub fn with_algorithm(mut self, algorithm: GameAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_max_depth(mut self, depth: impl Into<Depth>) -> Self {
        self.max_depth = depth.into();
        self
    }
}
