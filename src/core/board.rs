//! Board representation and layout arithmetic.
//!
//! ## Layout
//!
//! For `n` pits per side the board is a ring of `2n + 2` cells:
//!
//! ```text
//!   index:  0 .. n-1 |  n  | n+1 .. 2n | 2n+1
//!   owner:  Player 1 | P1  | Player 2  | P2
//!            pits    |store|  pits     |store
//! ```
//!
//! Sowing walks the ring by increasing index, so pit `p` and pit `2n - p`
//! face each other across the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::RangeInclusive;

use super::config::MancalaConfig;
use super::player::{Player, PlayerMap};

/// Stone counts for every pit and store.
///
/// The board owns its storage; readers get copies (`to_vec`) or plain
/// values (`stones`), never a live reference that could be mutated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pits_per_side: usize,
    cells: SmallVec<[u32; 14]>,
}

impl Board {
    /// Create the starting board: every pit holds `stones_per_pit`, stores are empty.
    #[must_use]
    pub fn new(config: &MancalaConfig) -> Self {
        let mut board = Self {
            pits_per_side: config.pits_per_side,
            cells: SmallVec::from_elem(0, config.board_len()),
        };
        for player in Player::all() {
            for pit in board.pit_range(player) {
                board.cells[pit] = config.stones_per_pit;
            }
        }
        board
    }

    /// Build a board from explicit cell counts.
    ///
    /// Returns `None` unless `cells` has an even length of at least 4
    /// (one pit and one store per side) and its stone total fits a `u32`.
    #[must_use]
    pub fn from_cells(cells: &[u32]) -> Option<Self> {
        if cells.len() < 4 || cells.len() % 2 != 0 {
            return None;
        }
        let board = Self {
            pits_per_side: (cells.len() - 2) / 2,
            cells: SmallVec::from_slice(cells),
        };
        board.checked_total().map(|_| board)
    }

    /// Playable pits per side.
    #[must_use]
    pub fn pits_per_side(&self) -> usize {
        self.pits_per_side
    }

    /// Number of cells (pits and stores).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A valid board always has cells; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Stones at a cell, or `None` if the index is off the board.
    #[must_use]
    pub fn stones(&self, index: usize) -> Option<u32> {
        self.cells.get(index).copied()
    }

    /// An independent copy of every cell.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u32> {
        self.cells.to_vec()
    }

    /// Store index for a player.
    #[must_use]
    pub fn store_index(&self, player: Player) -> usize {
        match player {
            Player::One => self.pits_per_side,
            Player::Two => 2 * self.pits_per_side + 1,
        }
    }

    /// Playable pit indices for a player, store excluded.
    #[must_use]
    pub fn pit_range(&self, player: Player) -> RangeInclusive<usize> {
        let n = self.pits_per_side;
        match player {
            Player::One => 0..=n - 1,
            Player::Two => n + 1..=2 * n,
        }
    }

    /// The pit facing `pit` across the board.
    ///
    /// Only defined for playable pits.
    #[must_use]
    pub fn opposite_pit(&self, pit: usize) -> usize {
        debug_assert!(self.owner_of(pit).is_some(), "pit {pit} has no opposite");
        2 * self.pits_per_side - pit
    }

    /// Owner of a playable pit. `None` for stores and off-board indices.
    #[must_use]
    pub fn owner_of(&self, pit: usize) -> Option<Player> {
        Player::all().find(|&p| self.pit_range(p).contains(&pit))
    }

    /// Check if `pit` is one of `player`'s playable pits.
    #[must_use]
    pub fn is_pit_of(&self, pit: usize, player: Player) -> bool {
        self.pit_range(player).contains(&pit)
    }

    /// Stones in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u32 {
        self.cells[self.store_index(player)]
    }

    /// Store totals for both players.
    #[must_use]
    pub fn stores(&self) -> PlayerMap<u32> {
        PlayerMap::new(|p| self.store(p))
    }

    /// Stones remaining in a player's pits, store excluded.
    #[must_use]
    pub fn side_total(&self, player: Player) -> u32 {
        self.pit_range(player).map(|i| self.cells[i]).sum()
    }

    /// Check if every pit on a player's side is empty.
    #[must_use]
    pub fn side_is_empty(&self, player: Player) -> bool {
        self.pit_range(player).all(|i| self.cells[i] == 0)
    }

    /// Stones on the whole board.
    ///
    /// Saturates at `u32::MAX`; boards built by this crate never get there.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.checked_total().unwrap_or(u32::MAX)
    }

    /// Stones on the whole board, `None` on overflow.
    #[must_use]
    pub fn checked_total(&self) -> Option<u32> {
        self.cells.iter().try_fold(0u32, |acc, &c| acc.checked_add(c))
    }

    /// Remove and return every stone in a cell.
    pub(crate) fn take(&mut self, index: usize) -> u32 {
        std::mem::take(&mut self.cells[index])
    }

    /// Add stones to a cell.
    pub(crate) fn add(&mut self, index: usize, stones: u32) {
        self.cells[index] += stones;
    }
}
