//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Bao is strictly two-player. `Player::One` owns pits 0-15 and moves first,
//! `Player::Two` owns pits 16-31. Players serialize as their number (`1`/`2`).
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage with O(1) access, indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    /// Owns pits 0-15. Always moves first.
    One,
    /// Owns pits 16-31.
    Two,
}

/// A player number other than 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid player number {0}, expected 1 or 2")]
pub struct InvalidPlayer(pub u8);

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Player from its 1-based number.
    ///
    /// ```
    /// use bao_engine::core::Player;
    ///
    /// assert_eq!(Player::from_number(2), Some(Player::Two));
    /// assert_eq!(Player::from_number(3), None);
    /// ```
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// 0-based slot index, used by `PlayerMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = InvalidPlayer;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Player::from_number(number).ok_or(InvalidPlayer(number))
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.number()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use bao_engine::core::{Player, PlayerMap};
///
/// let mut hands: PlayerMap<u8> = PlayerMap::with_value(22);
/// hands[Player::Two] -= 1;
///
/// assert_eq!(hands[Player::One], 22);
/// assert_eq!(hands[Player::Two], 21);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_numbers() {
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.number(), 2);
        assert_eq!(Player::from_number(1), Some(Player::One));
        assert_eq!(Player::from_number(0), None);
        assert_eq!(format!("{}", Player::Two), "Player 2");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn test_player_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Player::Two).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Player>("1").unwrap(), Player::One);
        assert!(serde_json::from_str::<Player>("3").is_err());
    }

    #[test]
    fn test_player_map_new() {
        let map = PlayerMap::new(|p| u32::from(p.number()) * 10);

        assert_eq!(map[Player::One], 10);
        assert_eq!(map[Player::Two], 20);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_default();

        map[Player::One] = 7;
        *map.get_mut(Player::Two) += 3;

        assert_eq!(map[Player::One], 7);
        assert_eq!(map[Player::Two], 3);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::new(|p| p.index());

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::One, &0), (Player::Two, &1)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::new(|p| p.number());
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
