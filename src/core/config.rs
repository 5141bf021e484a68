//! Game configuration.
//!
//! A Kalah board is fully described by two numbers: how many pits each side
//! has and how many stones start in each pit. Both are fixed for the lifetime
//! of a game.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default number of pits per side.
pub const DEFAULT_PITS_PER_SIDE: usize = 6;

/// Default number of stones per pit.
pub const DEFAULT_STONES_PER_PIT: u32 = 4;

/// Board dimensions for a game.
///
/// Any positive values are accepted; front ends that only offer 3 or 4
/// stones per pit enforce that themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MancalaConfig {
    /// Playable pits on each side (store excluded).
    pub pits_per_side: usize,

    /// Stones placed in every playable pit at the start.
    pub stones_per_pit: u32,
}

impl Default for MancalaConfig {
    fn default() -> Self {
        Self {
            pits_per_side: DEFAULT_PITS_PER_SIDE,
            stones_per_pit: DEFAULT_STONES_PER_PIT,
        }
    }
}

impl MancalaConfig {
    /// Create a configuration. Call `validate` before building a board.
    #[must_use]
    pub const fn new(pits_per_side: usize, stones_per_pit: u32) -> Self {
        Self {
            pits_per_side,
            stones_per_pit,
        }
    }

    /// Set the number of pits per side.
    #[must_use]
    pub fn with_pits_per_side(mut self, pits: usize) -> Self {
        self.pits_per_side = pits;
        self
    }

    /// Set the starting stones per pit.
    #[must_use]
    pub fn with_stones_per_pit(mut self, stones: u32) -> Self {
        self.stones_per_pit = stones;
        self
    }

    /// Number of cells on the board: both rows plus both stores.
    #[must_use]
    pub const fn board_len(&self) -> usize {
        2 * self.pits_per_side + 2
    }

    /// Stones on the board for the whole game.
    ///
    /// Only meaningful for a validated config.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.checked_total().unwrap_or(u32::MAX)
    }

    fn checked_total(&self) -> Option<u32> {
        u32::try_from(self.pits_per_side)
            .ok()?
            .checked_mul(2)?
            .checked_mul(self.stones_per_pit)
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pits_per_side == 0 {
            return Err(ConfigError::ZeroPits);
        }
        if self.stones_per_pit == 0 {
            return Err(ConfigError::ZeroStones);
        }
        if self.checked_total().is_none() {
            return Err(ConfigError::TooManyStones {
                pits_per_side: self.pits_per_side,
                stones_per_pit: self.stones_per_pit,
            });
        }
        Ok(())
    }
}
