//! Core types: problem and game traits, heuristics, agents, RNG, errors.
//!
//! Search strategies only see problems and games through these traits.
//! Concrete puzzles live in `problems` and `games`.

pub mod error;
pub mod game;
pub mod player;
pub mod problem;
pub mod rng;

pub use error::{Error, Result};
pub use game::{Game, GameHeuristic};
pub use player::{PlayerId, PlayerMap};
pub use problem::{Heuristic, Problem, ZeroHeuristic};
pub use rng::SeedRng;
