//! Game rules: sowing, captures, extra turns, end of game.
//!
//! The pieces are free functions over `Board` so each rule can be tested on
//! its own. `Kalah` strings them together in the fixed order
//! sow → evaluate landing → check end → switch turn, behind the
//! `RulesEngine` trait.

pub mod capture;
pub mod engine;
pub mod kalah;
pub mod scoring;
pub mod sowing;

pub use capture::{Capture, Evaluation, TurnOutcome};
pub use engine::{GameResult, MoveOutcome, RulesEngine};
pub use kalah::Kalah;
