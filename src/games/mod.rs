//! Concrete games for adversarial search.
//!
//! - `TreeGame`: explicit trees from JSON, builders or a seed
//! - `Countdown`: two-agent subtraction game

pub mod countdown;
pub mod tree;

pub use countdown::{Countdown, CountdownState, ModuloHeuristic};
pub use tree::{NodeEstimate, TreeGame, TreeSpec, TreeSpecNode};
