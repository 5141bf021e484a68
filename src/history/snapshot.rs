use serde::{Deserialize, Serialize};

use crate::core::{Board, GameState, Player};
use crate::rules::GameResult;

/// Immutable copy of the game state taken before a move.
///
/// Holds its own `GameState` clone, so later moves on the live board can
/// never reach into a stored snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    state: GameState,
}

impl Snapshot {
    /// Copy the current state.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Board as it was before the move.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Pit chosen by the move before this snapshot was taken.
    #[must_use]
    pub fn last_move(&self) -> Option<usize> {
        self.state.last_move
    }

    /// Player to move before the move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// Result recorded at the time, `None` while the game was running.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.state.outcome
    }

    /// Consume the snapshot, yielding the state to restore.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}
