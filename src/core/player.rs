//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Kalah is strictly two-player. Players are numbered 1 and 2 to match the
//! board layout: Player 1 owns the low pits and the store right after them,
//! Player 2 owns the high pits and the last cell.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player 1 ("A"), owns pits `0..pits_per_side`.
    One,
    /// Player 2 ("B"), owns pits `pits_per_side + 1..=2 * pits_per_side`.
    Two,
}

impl Player {
    /// Get the opponent.
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Get the 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parse a 1-based player number.
    ///
    /// ```
    /// use kalah_engine::core::Player;
    ///
    /// assert_eq!(Player::from_number(2), Some(Player::Two));
    /// assert_eq!(Player::from_number(3), None);
    /// ```
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Player> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Short seat name used in status text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::One => "A",
            Player::Two => "B",
        }
    }

    /// Both players, Player 1 first.
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::One, Player::Two].into_iter()
    }

    const fn slot(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data with O(1) access.
///
/// ## Example
///
/// ```
/// use kalah_engine::core::{Player, PlayerMap};
///
/// let mut stores: PlayerMap<u32> = PlayerMap::with_value(0);
/// stores[Player::Two] += 5;
/// assert_eq!(stores[Player::One], 0);
/// assert_eq!(stores[Player::Two], 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
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
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.slot()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.slot()]
    }

    /// Iterate over (Player, &T) pairs, Player 1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::all().zip(self.data.iter())
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
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_player_numbers() {
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.number(), 2);
        assert_eq!(Player::from_number(1), Some(Player::One));
        assert_eq!(Player::from_number(0), None);
        assert_eq!(format!("{}", Player::Two), "Player 2");
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::One.name(), "A");
        assert_eq!(Player::Two.name(), "B");
    }

    #[test]
    fn test_player_map_new() {
        let map = PlayerMap::new(|p| p.number() as u32 * 10);
        assert_eq!(map[Player::One], 10);
        assert_eq!(map[Player::Two], 20);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<u32> = PlayerMap::default();
        map[Player::One] = 7;
        *map.get_mut(Player::Two) += 3;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::One, &7), (Player::Two, &3)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::new(|p| p.number() as u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
