//! Depth-limited game-tree evaluation shared by minimax, alpha-beta and
//! expectimax.
//!
//! The tree is walked with an explicit stack of frames instead of native
//! recursion, so unlimited-depth searches over deep games cannot overflow
//! the thread stack. A frame is one interior node with its children listed
//! up front; child values flow back into the parent frame as they finish.
//!
//! Node rules, with `v` the running value of a node:
//!
//! | node | minimax | alpha-beta |
//! |------|---------|------------|
//! | max (agent 0) | take child if `> v` | take child if `> v`, cut when `v >= beta` |
//! | min (others)  | take child if `< v` | take child if `<= v`, cut when `v <= alpha` |
//!
//! The min rule of alpha-beta replaces the action on ties, so alpha-beta and
//! minimax always agree on value but may report different actions.

use log::{trace, warn};

use crate::core::{Game, GameHeuristic, PlayerId};

use super::config::Depth;
use super::stats::TreeStats;

/// How interior nodes combine child values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rule {
    Minimax,
    AlphaBeta,
    OrderedAlphaBeta,
    Expectimax,
}

impl Rule {
    fn prunes(self) -> bool {
        matches!(self, Rule::AlphaBeta | Rule::OrderedAlphaBeta)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeKind {
    Max,
    Min,
    Chance,
}

impl NodeKind {
    fn initial_value(self) -> f64 {
        match self {
            NodeKind::Max => f64::NEG_INFINITY,
            NodeKind::Min => f64::INFINITY,
            NodeKind::Chance => 0.0,
        }
    }
}

/// An interior node being evaluated.
struct Frame<S, A> {
    kind: NodeKind,
    state: S,
    depth: Depth,
    /// Actions in visiting order. Successors are precomputed only when move
    /// ordering needed them.
    children: Vec<(A, Option<S>)>,
    next: usize,
    /// Running best value, or the running sum at chance nodes.
    value: f64,
    best: Option<usize>,
    alpha: f64,
    beta: f64,
}

impl<S, A> Frame<S, A> {
    /// Fold in the value of child `next - 1`. Returns true on a cutoff.
    fn absorb(&mut self, child: f64, rule: Rule) -> bool {
        let index = self.next - 1;
        match self.kind {
            NodeKind::Max => {
                if child > self.value {
                    self.value = child;
                    self.best = Some(index);
                }
                if rule.prunes() {
                    if self.value >= self.beta {
                        return true;
                    }
                    self.alpha = self.alpha.max(self.value);
                }
            }
            NodeKind::Min => {
                let takes = if rule.prunes() {
                    child <= self.value
                } else {
                    child < self.value
                };
                if takes {
                    self.value = child;
                    self.best = Some(index);
                }
                if rule.prunes() {
                    if self.value <= self.alpha {
                        return true;
                    }
                    self.beta = self.beta.min(self.value);
                }
            }
            NodeKind::Chance => self.value += child,
        }
        false
    }

    fn is_exhausted(&self) -> bool {
        self.next == self.children.len()
    }

    fn finish(self) -> (f64, Option<A>) {
        match self.kind {
            NodeKind::Chance => (self.value / self.children.len() as f64, None),
            NodeKind::Max | NodeKind::Min => {
                let action = self
                    .best
                    .and_then(|index| self.children.into_iter().nth(index))
                    .map(|(action, _)| action);
                (self.value, action)
            }
        }
    }
}

enum Opened<S, A> {
    Leaf(f64),
    Interior(Frame<S, A>),
}

/// Value of `root` for agent 0 and the action achieving it.
///
/// Terminal states score `values[agent 0]`. States reached with the depth
/// budget exhausted score `heuristic(state, agent 0)`. Either way a leaf has
/// no action, and neither does a chance node.
pub(crate) fn evaluate<G, H>(
    game: &G,
    root: &G::State,
    heuristic: &H,
    max_depth: Depth,
    rule: Rule,
    stats: &mut TreeStats,
) -> (f64, Option<G::Action>)
where
    G: Game + ?Sized,
    H: GameHeuristic<G> + ?Sized,
{
    let bounds = (f64::NEG_INFINITY, f64::INFINITY);
    let mut stack = match open(game, heuristic, rule, root.clone(), max_depth, bounds, stats) {
        Opened::Leaf(value) => return (value, None),
        Opened::Interior(frame) => vec![frame],
    };

    let mut outcome = (f64::NEG_INFINITY, None);
    let mut returned: Option<f64> = None;

    loop {
        let ply = stack.len();
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let cut = match returned.take() {
            Some(value) => frame.absorb(value, rule),
            None => false,
        };

        if cut || frame.is_exhausted() {
            if cut && !frame.is_exhausted() {
                stats.prunes += 1;
                trace!(
                    "pruned {} siblings at ply {} (alpha {}, beta {})",
                    frame.children.len() - frame.next,
                    ply - 1,
                    frame.alpha,
                    frame.beta
                );
            }
            if let Some(done) = stack.pop() {
                let (value, action) = done.finish();
                if stack.is_empty() {
                    outcome = (value, action);
                } else {
                    returned = Some(value);
                }
            }
            continue;
        }

        let index = frame.next;
        frame.next += 1;
        let (action, successor) = &mut frame.children[index];
        let child = match successor.take() {
            Some(state) => state,
            None => game.successor(&frame.state, action),
        };
        let depth = frame.depth.next();
        let bounds = (frame.alpha, frame.beta);

        stats.max_ply = stats.max_ply.max(ply as u32);
        match open(game, heuristic, rule, child, depth, bounds, stats) {
            Opened::Leaf(value) => returned = Some(value),
            Opened::Interior(frame) => stack.push(frame),
        }
    }

    outcome
}

/// Score a leaf or prepare an interior node for walking.
fn open<G, H>(
    game: &G,
    heuristic: &H,
    rule: Rule,
    state: G::State,
    depth: Depth,
    (alpha, beta): (f64, f64),
    stats: &mut TreeStats,
) -> Opened<G::State, G::Action>
where
    G: Game + ?Sized,
    H: GameHeuristic<G> + ?Sized,
{
    if let Some(values) = game.is_terminal(&state) {
        stats.terminal_leaves += 1;
        return Opened::Leaf(values[PlayerId::MAXIMIZER]);
    }
    if depth.is_exhausted() {
        stats.cutoff_leaves += 1;
        return Opened::Leaf(heuristic.evaluate(game, &state, PlayerId::MAXIMIZER));
    }

    let turn = game.turn(&state);
    let kind = if turn.is_maximizer() {
        NodeKind::Max
    } else if rule == Rule::Expectimax {
        NodeKind::Chance
    } else {
        NodeKind::Min
    };

    let actions = game.actions(&state);
    stats.nodes_expanded += 1;
    if actions.is_empty() {
        warn!("{} has no actions in a non-terminal state; scoring it as a leaf", turn);
        stats.cutoff_leaves += 1;
        return Opened::Leaf(heuristic.evaluate(game, &state, PlayerId::MAXIMIZER));
    }

    let children = if rule == Rule::OrderedAlphaBeta {
        order_children(game, heuristic, &state, actions, kind)
    } else {
        actions.into_iter().map(|action| (action, None)).collect()
    };

    Opened::Interior(Frame {
        kind,
        state,
        depth,
        children,
        next: 0,
        value: kind.initial_value(),
        best: None,
        alpha,
        beta,
    })
}

/// Sort children by the heuristic value of their successor for agent 0:
/// best-first for the maximizer, worst-first for minimizers. The sort is
/// stable, so equal estimates keep their action order.
fn order_children<G, H>(
    game: &G,
    heuristic: &H,
    state: &G::State,
    actions: Vec<G::Action>,
    kind: NodeKind,
) -> Vec<(G::Action, Option<G::State>)>
where
    G: Game + ?Sized,
    H: GameHeuristic<G> + ?Sized,
{
    let mut scored: Vec<(f64, G::Action, G::State)> = actions
        .into_iter()
        .map(|action| {
            let next = game.successor(state, &action);
            (heuristic.evaluate(game, &next, PlayerId::MAXIMIZER), action, next)
        })
        .collect();

    // `+ 0.0` folds -0.0 into 0.0 so signed zeros tie.
    if kind == NodeKind::Max {
        scored.sort_by(|a, b| (b.0 + 0.0).total_cmp(&(a.0 + 0.0)));
    } else {
        scored.sort_by(|a, b| (a.0 + 0.0).total_cmp(&(b.0 + 0.0)));
    }

    scored
        .into_iter()
        .map(|(_, action, next)| (action, Some(next)))
        .collect()
}
