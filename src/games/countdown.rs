//! Two-agent subtraction game.
//!
//! Agents alternately take between 1 and `max_take` items from a pile. The
//! agent who takes the last item wins (+1) and the other loses (-1).
//! Piles that are a multiple of `max_take + 1` are lost for the agent to
//! move under perfect play.

use serde::{Deserialize, Serialize};

use crate::core::{Game, GameHeuristic, PlayerId, PlayerMap};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountdownState {
    pub remaining: u32,
    pub to_move: PlayerId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pile: u32,
    max_take: u32,
}

impl Countdown {
    /// `max_take` is raised to at least 1.
    #[must_use]
    pub fn new(pile: u32, max_take: u32) -> Self {
        Self {
            pile,
            max_take: max_take.max(1),
        }
    }

    /// Full pile with agent 0 to move.
    #[must_use]
    pub fn start(&self) -> CountdownState {
        self.start_with(PlayerId::MAXIMIZER)
    }

    #[must_use]
    pub fn start_with(&self, to_move: PlayerId) -> CountdownState {
        CountdownState {
            remaining: self.pile,
            to_move,
        }
    }

    /// Exact evaluation from the modular winning rule.
    #[must_use]
    pub fn modulo_heuristic(&self) -> ModuloHeuristic {
        ModuloHeuristic
    }

    fn other(agent: PlayerId) -> PlayerId {
        PlayerId::new(1 - agent.0.min(1))
    }

    fn utilities(winner: PlayerId) -> PlayerMap<f64> {
        PlayerMap::new(2, |agent| if agent == winner { 1.0 } else { -1.0 })
    }
}

impl Game for Countdown {
    type State = CountdownState;
    type Action = u32;

    fn turn(&self, state: &CountdownState) -> PlayerId {
        state.to_move
    }

    fn is_terminal(&self, state: &CountdownState) -> Option<PlayerMap<f64>> {
        // The agent who just moved emptied the pile.
        (state.remaining == 0).then(|| Self::utilities(Self::other(state.to_move)))
    }

    fn actions(&self, state: &CountdownState) -> Vec<u32> {
        (1..=self.max_take.min(state.remaining)).collect()
    }

    fn successor(&self, state: &CountdownState, take: &u32) -> CountdownState {
        CountdownState {
            remaining: state.remaining.saturating_sub(*take),
            to_move: Self::other(state.to_move),
        }
    }
}

/// See [`Countdown::modulo_heuristic`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ModuloHeuristic;

impl GameHeuristic<Countdown> for ModuloHeuristic {
    fn evaluate(&self, game: &Countdown, state: &CountdownState, agent: PlayerId) -> f64 {
        let mover_loses = state.remaining % (game.max_take + 1) == 0;
        if mover_loses == (agent == state.to_move) {
            -1.0
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_capped_by_pile() {
        let game = Countdown::new(2, 3);
        assert_eq!(game.actions(&game.start()), vec![1, 2]);
    }

    #[test]
    fn test_last_taker_wins() {
        let game = Countdown::new(1, 3);
        let end = game.successor(&game.start(), &1);
        let values = game.is_terminal(&end).unwrap();
        assert_eq!(values[PlayerId::MAXIMIZER], 1.0);
        assert_eq!(values[PlayerId::new(1)], -1.0);
        assert_eq!(game.turn(&end), PlayerId::new(1));
    }

    #[test]
    fn test_modulo_heuristic() {
        let game = Countdown::new(8, 3);
        let h = game.modulo_heuristic();
        // 8 is a multiple of 4: agent 0 to move is losing.
        assert_eq!(h.evaluate(&game, &game.start(), PlayerId::MAXIMIZER), -1.0);
        assert_eq!(h.evaluate(&game, &game.start(), PlayerId::new(1)), 1.0);

        // Taking 1 leaves agent 1 facing 7, which it can cut to 4.
        let state = game.successor(&game.start(), &1);
        assert_eq!(h.evaluate(&game, &state, PlayerId::MAXIMIZER), -1.0);

        let game = Countdown::new(7, 3);
        let state = game.successor(&game.start(), &3);
        assert_eq!(h.evaluate(&game, &state, PlayerId::MAXIMIZER), 1.0);
    }
}
