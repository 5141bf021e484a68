//! Rules engine trait for Mancala variants.
//!
//! A variant implements `RulesEngine` to define:
//! - Which pits the player to move may choose
//! - How a chosen pit changes the state
//! - When the game is over and who won

use serde::{Deserialize, Serialize};

use super::capture::{Capture, TurnOutcome};
use crate::core::{GameState, MancalaConfig, MoveError, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One player has more stones in their store.
    Winner(Player),
    /// Both stores hold the same number of stones.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, `None` for a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Tie => None,
        }
    }
}

/// Report of an applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Who moved.
    pub player: Player,
    /// The pit that was emptied.
    pub pit: usize,
    /// The cell that received the last stone.
    pub landing: usize,
    /// Whether the mover keeps the turn.
    pub turn: TurnOutcome,
    /// Stones captured by this move, if any.
    pub capture: Option<Capture>,
    /// Set when this move ended the game.
    pub result: Option<GameResult>,
}

impl MoveOutcome {
    /// Check if the mover plays again.
    #[must_use]
    pub fn is_extra_turn(&self) -> bool {
        self.turn == TurnOutcome::ExtraTurn
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate_move`: Must reject anything `apply_move` would reject
/// - `apply_move`: Must leave the state untouched on error
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &MancalaConfig;

    /// Build the starting state.
    fn initial_state(&self, first_player: Player) -> GameState {
        GameState::new(self.config(), first_player)
    }

    /// Check that the player to move may choose `pit`.
    fn validate_move(&self, state: &GameState, pit: usize) -> Result<(), MoveError>;

    /// Apply a move to the state.
    fn apply_move(&self, state: &mut GameState, pit: usize) -> Result<MoveOutcome, MoveError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.outcome
    }

    // === Convenience Methods ===

    /// Enumerate every pit the player to move may choose.
    fn legal_moves(&self, state: &GameState) -> Vec<usize> {
        (0..state.board().len())
            .filter(|&pit| self.validate_move(state, pit).is_ok())
            .collect()
    }
}
