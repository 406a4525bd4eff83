//! Algorithm-dispatching game-tree search context.

use std::time::Instant;

use log::debug;

use crate::core::{Game, GameHeuristic};

use super::algorithm::GameAlgorithm;
use super::config::GameSearchConfig;
use super::greedy;
use super::stats::TreeStats;
use super::walk::{self, Rule};

/// Game-tree search context.
///
/// Generic over the game. Owns the game and configuration, and keeps the
/// statistics of the most recent search.
///
/// ```
/// use rust_search::adversarial::{GameAlgorithm, GameSearchConfig, GameTreeSearch};
/// use rust_search::games::TreeGame;
///
/// let game = TreeGame::two_ply(&[&[3.0, 12.0, 8.0], &[2.0, 4.0, 6.0], &[14.0, 5.0, 2.0]]);
/// let root = game.root();
/// let heuristic = game.estimate_heuristic();
///
/// let config = GameSearchConfig::default().with_algorithm(GameAlgorithm::AlphaBeta);
/// let mut search = GameTreeSearch::new(game, config);
/// assert_eq!(search.search(&root, &heuristic), (3.0, Some(0)));
/// assert_eq!(search.stats().prunes, 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameTreeSearch<G: Game> {
    /// The game being searched.
    game: G,

    /// Algorithm and depth budget.
    config: GameSearchConfig,

    /// Statistics of the most recent search.
    stats: TreeStats,
}

impl<G: Game> GameTreeSearch<G> {
    pub fn new(game: G, config: GameSearchConfig) -> Self {
        Self {
            game,
            config,
            stats: TreeStats::default(),
        }
    }

    /// Value of `state` and the recommended action.
    ///
    /// Tree algorithms report the value for agent 0. Greedy reports it for
    /// the agent to move. The action is `None` at leaves and chance roots.
    pub fn search<H>(&mut self, state: &G::State, heuristic: &H) -> (f64, Option<G::Action>)
    where
        H: GameHeuristic<G> + ?Sized,
    {
        let start = Instant::now();
        self.stats.reset();

        let algorithm = self.config().algorithm;
        let depth = self.config().max_depth;
        let game = &self.game;
        let stats = &mut self.stats;
        let result = match algorithm {
            GameAlgorithm::Greedy => greedy::greedy(game, state, heuristic, stats),
            GameAlgorithm::Minimax => {
                walk::evaluate(game, state, heuristic, depth, Rule::Minimax, stats)
            }
            GameAlgorithm::AlphaBeta => {
                walk::evaluate(game, state, heuristic, depth, Rule::AlphaBeta, stats)
            }
            GameAlgorithm::AlphaBetaOrdered => {
                walk::evaluate(game, state, heuristic, depth, Rule::OrderedAlphaBeta, stats)
            }
            GameAlgorithm::Expectimax => {
                walk::evaluate(game, state, heuristic, depth, Rule::Expectimax, stats)
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            "{} (depth {}) valued root at {} after {} expansions, {} prunes, in {}us",
            algorithm,
            depth,
            result.0,
            self.stats.nodes_expanded,
            self.stats.prunes,
            self.stats.time_us
        );

        result
    }

    /// Get search statistics.
    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    /// Get the game.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Get the configuration.
    pub fn config(&self) -> &GameSearchConfig {
        &self.config
    }
}
