//! Capture and extra-turn evaluation for the landing pit.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// Whether the mover keeps the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Last stone landed in the mover's store; the mover plays again.
    ExtraTurn,
    /// The turn passes (unless the game ended).
    TurnEnds,
}

/// Stones moved into a store by a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    /// The mover's pit that received the last stone.
    pub pit: usize,
    /// The facing pit that was emptied.
    pub opposite: usize,
    /// Total stones moved into the mover's store.
    pub stones: u32,
}

/// Result of evaluating a landing pit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    /// Whether the mover plays again.
    pub turn: TurnOutcome,
    /// Always `None` when `turn` is `ExtraTurn`.
    pub capture: Option<Capture>,
}

/// Decide the turn outcome for a landing pit, capturing if the rules allow.
///
/// Rules, first match wins:
/// 1. Landing in the mover's store grants an extra turn.
/// 2. Landing in a previously empty pit of the mover's, facing a non-empty
///    pit, moves both pits into the mover's store. The turn ends.
/// 3. Otherwise the turn ends.
pub fn evaluate(board: &mut Board, landing: usize, mover: Player) -> Evaluation {
    let store = board.store_index(mover);
    if landing == store {
        return Evaluation {
            turn: TurnOutcome::ExtraTurn,
            capture: None,
        };
    }

    let capture = if board.is_pit_of(landing, mover) && board.stones(landing) == Some(1) {
        let opposite = board.opposite_pit(landing);
        if board.stones(opposite).unwrap_or(0) > 0 {
            let stones = board.take(landing) + board.take(opposite);
            board.add(store, stones);
            Some(Capture {
                pit: landing,
                opposite,
                stones,
            })
        } else {
            None
        }
    } else {
        None
    };

    Evaluation {
        turn: TurnOutcome::TurnEnds,
        capture,
    }
}
