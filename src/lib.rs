//! # rust-search
//!
//! Classical state-space search and adversarial game-tree search behind
//! two small traits.
//!
//! ## Design Principles
//!
//! 1. **Caller-Defined Problems**: strategies only see a [`Problem`] or a
//!    [`Game`] plus an optional heuristic. Nothing assumes grids, boards or
//!    a particular state type.
//!
//! 2. **N-Agent Games**: agent 0 maximizes; every other agent minimizes or
//!    moves at random, depending on the algorithm.
//!
//! 3. **Deterministic Results**: frontier ties break by insertion order and
//!    generated fixtures come from seeded RNGs.
//!
//! ## Modules
//!
//! - `core`: problem and game traits, heuristics, agents, RNG, errors
//! - `search`: BFS, DFS, UCS, A*, greedy best-first
//! - `adversarial`: minimax, alpha-beta, ordered alpha-beta, expectimax,
//!   one-step greedy
//! - `problems`: weighted graphs and the parking puzzle
//! - `games`: explicit game trees and a subtraction game
//! - `config`: JSON solver configuration

pub mod adversarial;
pub mod config;
pub mod core;
pub mod games;
pub mod problems;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Error, Game, GameHeuristic, Heuristic, PlayerId, PlayerMap, Problem, Result, SeedRng,
    ZeroHeuristic,
};

pub use crate::adversarial::{Depth, GameAlgorithm, GameSearchConfig, GameTreeSearch, TreeStats};
pub use crate::config::SolverConfig;
pub use crate::search::{GraphSearch, SearchStats, Strategy};
