//! Game trait for adversarial search.
//!
//! Games implement `Game` to define:
//! - Whose turn it is in a state
//! - Whether a state is terminal, and the utility of every agent if so
//! - Legal actions and their deterministic successors

use super::player::{PlayerId, PlayerMap};
use super::problem::ZeroHeuristic;

/// A deterministic multi-agent, turn-based game.
///
/// ## Implementation Notes
///
/// - `is_terminal`: return `None` while the game continues
/// - `actions`: non-terminal states should have at least one action; an
///   empty list is scored as a leaf by the heuristic
/// - `successor`: must not mutate its input
pub trait Game {
    type State: Clone;
    type Action: Clone;

    /// Agent to move in `state`.
    fn turn(&self, state: &Self::State) -> PlayerId;

    /// Per-agent utilities if the game is over.
    fn is_terminal(&self, state: &Self::State) -> Option<PlayerMap<f64>>;

    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn successor(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}

/// Evaluation of a non-terminal state from an agent's point of view.
///
/// Used at depth cutoffs, by move ordering and by one-step greedy play.
/// Any `Fn(&G, &G::State, PlayerId) -> f64` closure qualifies.
pub trait GameHeuristic<G: Game + ?Sized> {
    fn evaluate(&self, game: &G, state: &G::State, agent: PlayerId) -> f64;
}

impl<G, F> GameHeuristic<G> for F
where
    G: Game + ?Sized,
    F: Fn(&G, &G::State, PlayerId) -> f64,
{
    fn evaluate(&self, game: &G, state: &G::State, agent: PlayerId) -> f64 {
        self(game, state, agent)
    }
}

impl<G: Game + ?Sized> GameHeuristic<G> for ZeroHeuristic {
    fn evaluate(&self, _game: &G, _state: &G::State, _agent: PlayerId) -> f64 {
        0.0
    }
}
