//! Agent identification and per-agent utility storage.
//!
//! ## PlayerId
//!
//! Agent 0 is always the maximizing player in game-tree search. Every other
//! agent is an opponent (min node) or chance (expectimax), depending on the
//! algorithm.
//!
//! ## PlayerMap
//!
//! Per-agent values backed by a `Vec` for O(1) access. Terminal states
//! report their utility vector as a `PlayerMap<f64>`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Agent identifier supporting 1-255 agents.
///
/// Agent indices are 0-based: the maximizing player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The maximizing agent whose value game-tree search reports.
    pub const MAXIMIZER: PlayerId = PlayerId(0);

    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw agent index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True for agent 0.
    #[inline]
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        self.0 == 0
    }

    /// Iterate over all agent IDs for a game with `agent_count` agents.
    ///
    /// ```
    /// use rust_search::core::PlayerId;
    ///
    /// let agents: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(agents, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(agent_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..agent_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.0)
    }
}

/// Per-agent data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_search::core::{PlayerId, PlayerMap};
///
/// let utilities = PlayerMap::from_vec(vec![1.0, -1.0]);
/// assert_eq!(utilities[PlayerId::MAXIMIZER], 1.0);
/// assert_eq!(utilities[PlayerId::new(1)], -1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(agent_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(agent_count > 0, "Must have at least 1 agent");
        assert!(agent_count <= 255, "At most 255 agents supported");

        let data = (0..agent_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Wrap an existing vector, one entry per agent in index order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 agent");
        assert!(data.len() <= 255, "At most 255 agents supported");
        Self { data }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::MAXIMIZER;
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert!(p0.is_maximizer());
        assert!(!p1.is_maximizer());
        assert_eq!(format!("{}", p1), "Agent 1");
    }

    #[test]
    fn test_player_map_from_vec() {
        let map = PlayerMap::from_vec(vec![3.0, 4.0, 5.0]);

        assert_eq!(map[PlayerId::new(2)], 5.0);
        assert_eq!(map.get(PlayerId::MAXIMIZER), &3.0);
    }

    #[test]
    fn test_player_map_from_factory() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(2)], 20);
    }

    #[test]
    fn test_player_map_serializes_as_array() {
        let map = PlayerMap::from_vec(vec![1.0, -1.0]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, "[1.0,-1.0]");

        let back: PlayerMap<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 agent")]
    fn test_player_map_zero_agents() {
        let _: PlayerMap<f64> = PlayerMap::from_vec(Vec::new());
    }
}
