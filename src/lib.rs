//! # kalah-engine
//!
//! Rules engine for two-player Kalah, the common Mancala variant.
//!
//! ## Design Principles
//!
//! 1. **Authoritative engine**: Moves are validated before anything changes.
//!    An illegal pit is an error, never a silent no-op or a corrupted board.
//!
//! 2. **Owned state**: The board is owned by one game. Readers get copies,
//!    snapshots are deep copies, so nothing outside the engine can alias it.
//!
//! 3. **Explicit outcomes**: A move reports whether the mover keeps the turn
//!    (`TurnOutcome`), what it captured, and whether it ended the game.
//!
//! ## Board Layout
//!
//! With `n` pits per side, cells `0..n` are Player 1's pits, `n` is Player
//! 1's store, `n+1..=2n` are Player 2's pits, and `2n+1` is Player 2's store.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, board, state, errors
//! - `rules`: Sowing, capture, extra turns, end of game, `RulesEngine`
//! - `history`: Snapshots and the undo stack
//! - `listeners`: Per-game change notification
//! - `games`: `MancalaGame` and the undo-policy `Controller`
//!
//! ## Logging
//!
//! The engine emits `tracing` events (moves at `debug`, game end at `info`,
//! rejected moves at `warn`). Install a subscriber to see them.

pub mod core;
pub mod games;
pub mod history;
pub mod listeners;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, ConfigError, GameState, MancalaConfig, MoveError, Player, PlayerMap, UndoError,
};

pub use crate::rules::{
    Capture, GameResult, Kalah, MoveOutcome, RulesEngine, TurnOutcome,
};

pub use crate::history::{History, Snapshot};

pub use crate::listeners::{ListenerId, ListenerRegistry};

pub use crate::games::kalah::{Controller, MancalaGame, Status, UndoPolicy};
