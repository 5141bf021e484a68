//! Kalah as a playable game.
//!
//! - `MancalaGame`: the engine a front end drives. Moves, undo, queries,
//!   and change listeners.
//! - `Controller`: optional house rules for undo and a status line.

mod controller;
mod game;

pub use controller::{Controller, Status, UndoPolicy};
pub use game::MancalaGame;
