//! Game state: the board plus turn bookkeeping.
//!
//! `GameState` is plain data. Rules live in `rules`, history and
//! notification live in `MancalaGame`; this type is what a snapshot copies.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::MancalaConfig;
use super::player::Player;
use crate::rules::GameResult;

/// Everything needed to resume a game from a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,

    /// Whose turn it is.
    pub current_player: Player,

    /// Pit chosen by the most recent move, `None` before the first move.
    pub last_move: Option<usize>,

    /// Final result once the game has ended.
    pub outcome: Option<GameResult>,
}

impl GameState {
    /// Create the starting state for a configuration.
    #[must_use]
    pub fn new(config: &MancalaConfig, first_player: Player) -> Self {
        Self::from_board(Board::new(config), first_player)
    }

    /// Create a state around an existing board.
    #[must_use]
    pub fn from_board(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            last_move: None,
            outcome: None,
        }
    }

    /// Read access to the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Hand the turn to the other player.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.other();
    }
}
