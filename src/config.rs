//! Solver configuration loaded from JSON.
//!
//! ```json
//! {
//!   "strategy": "a-star",
//!   "game": { "algorithm": "alphabeta-ordered", "max_depth": 4 }
//! }
//! ```
//!
//! Every field is optional. `max_depth` of `-1` means unlimited; other
//! negative depths are rejected while parsing.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::adversarial::GameSearchConfig;
use crate::core::error::read_file;
use crate::core::Result;
use crate::search::Strategy;

/// Top-level configuration for graph and game-tree searches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Graph search strategy.
    pub strategy: Strategy,

    /// Game-tree algorithm and depth budget.
    pub game: GameSearchConfig,
}

impl SolverConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&read_file(path)?)
    }

    /// Load configuration from a JSON file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_game(mut self, game: GameSearchConfig) -> Self {
        self.game = game;
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
