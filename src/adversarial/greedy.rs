//! One-step greedy play.

use log::warn;

use crate::core::{Game, GameHeuristic};

use super::stats::TreeStats;

/// Pick the action whose successor the heuristic rates best for the agent
/// to move. Ties go to the earliest action.
///
/// Unlike the tree searches, values are from the moving agent's point of
/// view, and a terminal root reports that agent's utility.
pub(crate) fn greedy<G, H>(
    game: &G,
    state: &G::State,
    heuristic: &H,
    stats: &mut TreeStats,
) -> (f64, Option<G::Action>)
where
    G: Game + ?Sized,
    H: GameHeuristic<G> + ?Sized,
{
    let agent = game.turn(state);
    if let Some(values) = game.is_terminal(state) {
        stats.terminal_leaves += 1;
        return (values[agent], None);
    }

    let actions = game.actions(state);
    stats.nodes_expanded += 1;

    let mut best: Option<(f64, G::Action)> = None;
    for action in actions {
        let next = game.successor(state, &action);
        let value = heuristic.evaluate(game, &next, agent);
        stats.cutoff_leaves += 1;
        if best.as_ref().map_or(true, |(top, _)| value > *top) {
            best = Some((value, action));
        }
    }

    match best {
        Some((value, action)) => {
            stats.max_ply = 1;
            (value, Some(action))
        }
        None => {
            warn!("{} has no actions in a non-terminal state; scoring it as a leaf", agent);
            (heuristic.evaluate(game, state, agent), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, ZeroHeuristic};
    use crate::games::{Countdown, TreeGame};

    #[test]
    fn test_picks_best_estimate() {
        let game = TreeGame::from_json(
            r#"{
                "agents": 2,
                "root": {"turn": 0, "children": [
                    {"turn": 1, "estimate": 2, "children": [0]},
                    {"turn": 1, "estimate": 7, "children": [0]},
                    {"turn": 1, "estimate": 7, "children": [0]}
                ]}
            }"#,
        )
        .unwrap();
        let mut stats = TreeStats::default();
        let result = greedy(&game, &game.root(), &game.estimate_heuristic(), &mut stats);
        assert_eq!(result, (7.0, Some(1)));
        assert_eq!(stats.nodes_expanded, 1);
    }

    #[test]
    fn test_uses_moving_agent_view() {
        // Agent 1 moves; estimates are stored for agent 0 and negated for agent 1.
        let game = TreeGame::from_json(
            r#"{"agents": 2, "root": {"turn": 1, "children": [4, -3]}}"#,
        )
        .unwrap();
        let mut stats = TreeStats::default();
        let result = greedy(&game, &game.root(), &game.estimate_heuristic(), &mut stats);
        assert_eq!(result, (3.0, Some(1)));
    }

    #[test]
    fn test_terminal_root_reports_mover_utility() {
        let game = Countdown::new(0, 3);
        let state = game.start_with(PlayerId::new(1));
        let mut stats = TreeStats::default();
        // Agent 0 took the last item, so agent 1 (to move) has lost.
        let result = greedy(&game, &state, &ZeroHeuristic, &mut stats);
        assert_eq!(result, (-1.0, None));
    }
}
