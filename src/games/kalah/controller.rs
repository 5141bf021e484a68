//! Turn and undo policy on top of `MancalaGame`.
//!
//! The engine lets a caller undo as often as it likes. Front ends usually
//! want a house rule instead: a few undos per turn, and never two in a row.
//! `Controller` enforces that and produces the status line a front end
//! shows between moves.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::game::MancalaGame;
use crate::core::{MoveError, Player, PlayerMap, UndoError};
use crate::rules::{GameResult, MoveOutcome};

/// How many undos a player may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoPolicy {
    /// Undos allowed before the opponent moves again. `None` = unlimited.
    pub max_per_turn: Option<u32>,

    /// May an undo directly follow another undo?
    pub allow_consecutive: bool,
}

impl Default for UndoPolicy {
    fn default() -> Self {
        Self {
            max_per_turn: Some(3),
            allow_consecutive: false,
        }
    }
}

impl UndoPolicy {
    /// No limits: the engine's own behaviour.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_per_turn: None,
            allow_consecutive: true,
        }
    }

    #[must_use]
    pub fn with_max_per_turn(mut self, max: u32) -> Self {
        self.max_per_turn = Some(max);
        self
    }

    #[must_use]
    pub fn with_consecutive(mut self, allow: bool) -> Self {
        self.allow_consecutive = allow;
        self
    }
}

/// What a front end should tell the players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Turn(Player),
    Won(Player),
    Tie,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Turn(p) => write!(f, "Player {}'s turn", p.name()),
            Status::Won(p) => write!(f, "Player {} wins!", p.name()),
            Status::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// A game plus an undo policy.
///
/// Undos are charged to the player who gets the turn back, i.e. the one
/// who made the move being taken back. A player's count resets when the
/// opponent makes a move.
#[derive(Debug)]
pub struct Controller {
    game: MancalaGame,
    policy: UndoPolicy,
    undos_used: PlayerMap<u32>,
    last_was_undo: bool,
}

impl Controller {
    /// Wrap a game with the given policy.
    #[must_use]
    pub fn new(game: MancalaGame, policy: UndoPolicy) -> Self {
        Self {
            game,
            policy,
            undos_used: PlayerMap::default(),
            last_was_undo: false,
        }
    }

    /// Read access to the game.
    #[must_use]
    pub fn game(&self) -> &MancalaGame {
        &self.game
    }

    /// Mutable access for listener registration and the like.
    ///
    /// Moves and undos made directly on the game bypass the policy.
    pub fn game_mut(&mut self) -> &mut MancalaGame {
        &mut self.game
    }

    #[must_use]
    pub fn policy(&self) -> UndoPolicy {
        self.policy
    }

    /// Play a pit for the current player.
    pub fn apply_move(&mut self, pit: usize) -> Result<MoveOutcome, MoveError> {
        let outcome = self.game.apply_move(pit)?;
        self.undos_used[outcome.player.other()] = 0;
        self.last_was_undo = false;
        Ok(outcome)
    }

    /// Check whether `undo` would currently succeed.
    pub fn check_undo(&self) -> Result<Player, UndoError> {
        if self.game.is_game_over() {
            return Err(UndoError::GameOver);
        }
        let snapshot = self.game.last_snapshot().ok_or(UndoError::NothingToUndo)?;
        if self.last_was_undo && !self.policy.allow_consecutive {
            return Err(UndoError::ConsecutiveUndo);
        }

        let player = snapshot.current_player();
        if let Some(limit) = self.policy.max_per_turn {
            if self.undos_used[player] >= limit {
                return Err(UndoError::LimitReached { limit });
            }
        }
        Ok(player)
    }

    /// Take back the most recent move, if the policy allows it.
    pub fn undo(&mut self) -> Result<(), UndoError> {
        let player = self.check_undo()?;
        self.game.undo();
        self.undos_used[player] += 1;
        self.last_was_undo = true;
        debug!(%player, used = self.undos_used[player], "undo charged");
        Ok(())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.check_undo().is_ok()
    }

    /// Undos the player to move has left this turn. `None` = unlimited.
    #[must_use]
    pub fn undos_remaining(&self) -> Option<u32> {
        let used = self.undos_used[self.game.current_player()];
        self.policy.max_per_turn.map(|max| max.saturating_sub(used))
    }

    #[must_use]
    pub fn status(&self) -> Status {
        match self.game.winner() {
            Some(GameResult::Winner(p)) => Status::Won(p),
            Some(GameResult::Tie) => Status::Tie,
            None => Status::Turn(self.game.current_player()),
        }
    }

    /// Give back the game.
    #[must_use]
    pub fn into_game(self) -> MancalaGame {
        self.game
    }
}
