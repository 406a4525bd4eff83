//! Adversarial search over turn-based multi-agent games.
//!
//! Agent 0 is the maximizer. Every other agent minimizes agent 0's value
//! (minimax, alpha-beta) or moves uniformly at random (expectimax). Each
//! algorithm returns `(value, action)` for the root:
//!
//! - `greedy`: one-ply lookahead on the heuristic for the agent to move
//! - `minimax`: exhaustive max/min up to the depth budget
//! - `alphabeta`: minimax with alpha-beta pruning
//! - `alphabeta_with_move_ordering`: alpha-beta visiting children in
//!   heuristic order
//! - `expectimax`: max at agent 0, mean of children elsewhere
//!
//! The depth budget counts plies, not rounds: every move by any agent
//! spends one. Terminal states always score their utility for agent 0; at
//! the budget, non-terminal states score `heuristic(state, agent 0)`.
//!
//! ```
//! use rust_search::adversarial::{self, Depth};
//! use rust_search::games::TreeGame;
//!
//! let game = TreeGame::two_ply(&[&[3.0, 12.0, 8.0], &[2.0, 4.0, 6.0], &[14.0, 5.0, 2.0]]);
//! let h = game.estimate_heuristic();
//!
//! assert_eq!(adversarial::minimax(&game, &game.root(), &h, Depth::Unlimited), (3.0, Some(0)));
//! assert_eq!(adversarial::alphabeta(&game, &game.root(), &h, Depth::Unlimited), (3.0, Some(0)));
//! ```

pub mod algorithm;
pub mod config;
pub mod engine;
pub mod stats;

mod greedy;
mod walk;

pub use algorithm::GameAlgorithm;
pub use config::{Depth, GameSearchConfig};
pub use engine::GameTreeSearch;
pub use stats::TreeStats;

use crate::core::{Game, GameHeuristic};

use walk::Rule;

/// One-step greedy choice for the agent to move. `max_depth` is accepted
/// for signature parity with the tree searches and ignored.
pub fn greedy<G, H>(
    game: &G,
    state: &G::State,
    heuristic: &H,
    _max_depth: Depth,
) -> (f64, Option<G::Action>)
where
    G: Game + ?Sized,
    H: GameHeuristic<G> + ?Sized,
{
    greedy::greedy(game, state, heuristic, &mut TreeStats::default())
}

pub fn minimax<G, H>(
    game: &G,
    state: &G::State,
    heuristic: &H,
    max_depth: Depth,
) -> (f64, Option<G::Action>)
where
    G: Game + ?Sized,
    H: GameHeuristic<G> + ?Sized,
{
    walk::evaluate(game, state, heuristic, max_depth, Rule::Minimax, &mut TreeStats::default())
}

/// Minimax with alpha-beta pruning. Same value as `minimax`; on ties at
/// min nodes the later action wins.
pub fn alphabeta<G, H>(
    game: &G,
    state: &G::State,
    heuristic: &H,
    max_depth: Depth,
) -> (f64, Option<G::Action>)
where
    G: Game + ?Sized,
    H: GameHeuristic<G> + ?Sized,
{
    walk::evaluate(game, state, heuristic, max_depth, Rule::AlphaBeta, &mut TreeStats::default())
}

/// Alpha-beta that sorts each node's children by `heuristic(successor,
/// agent 0)`: descending at max nodes, ascending at min nodes.
pub fn alphabeta_with_move_ordering<G, H>(
    game: &G,
    state: &G::State,
    heuristic: &H,
    max_depth: Depth,
) -> (f64, Option<G::Action>)
where
    G: Game + ?Sized,
    H: GameHeuristic<G> + ?Sized,
{
    walk::evaluate(
        game,
        state,
        heuristic,
        max_depth,
        Rule::OrderedAlphaBeta,
        &mut TreeStats::default(),
    )
}

pub fn expectimax<G, H>(
    game: &G,
    state: &G::State,
    heuristic: &H,
    max_depth: Depth,
) -> (f64, Option<G::Action>)
where
    G: Game + ?Sized,
    H: GameHeuristic<G> + ?Sized,
{
    walk::evaluate(game, state, heuristic, max_depth, Rule::Expectimax, &mut TreeStats::default())
}
