//! Core engine types: players, configuration, board, state, errors.
//!
//! These are the building blocks the rules operate on. None of them know
//! how a move is played; they only hold and expose data.

pub mod board;
pub mod config;
pub mod error;
pub mod player;
pub mod state;

pub use board::Board;
pub use config::{MancalaConfig, DEFAULT_PITS_PER_SIDE, DEFAULT_STONES_PER_PIT};
pub use error::{ConfigError, MoveError, UndoError};
pub use player::{Player, PlayerMap};
pub use state::GameState;
