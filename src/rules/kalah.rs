//! Standard Kalah rules.

use tracing::{debug, instrument};

use super::capture::{evaluate, TurnOutcome};
use super::engine::{MoveOutcome, RulesEngine};
use super::scoring::check_and_finalize;
use super::sowing::sow;
use crate::core::{Board, ConfigError, GameState, MancalaConfig, MoveError};

/// Kalah rules for a fixed board size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kalah {
    config: MancalaConfig,
    total_stones: u32,
}

impl Default for Kalah {
    fn default() -> Self {
        Self::new(MancalaConfig::default())
    }
}

impl Kalah {
    /// Create rules for a validated configuration.
    #[must_use]
    pub fn new(config: MancalaConfig) -> Self {
        Self {
            config,
            total_stones: config.total_stones(),
        }
    }

    /// Create rules for a game resumed from `board`.
    ///
    /// The stone total is taken from the board itself. The configuration
    /// keeps the board's pit count and its average stones per pit, rounded
    /// down but never below one.
    pub fn for_board(board: &Board) -> Result<Self, ConfigError> {
        let total_stones = board.checked_total().ok_or(ConfigError::BoardOverflow)?;
        if total_stones == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        let pits = board.pits_per_side();
        let pit_count = u32::try_from(2 * pits).map_err(|_| ConfigError::BoardOverflow)?;
        let config = MancalaConfig::new(pits, (total_stones / pit_count).max(1));
        config.validate()?;
        Ok(Self {
            config,
            total_stones,
        })
    }

    /// Stones in play for the whole game. Every move conserves this.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.total_stones
    }
}

impl RulesEngine for Kalah {
    fn config(&self) -> &MancalaConfig {
        &self.config
    }

    fn validate_move(&self, state: &GameState, pit: usize) -> Result<(), MoveError> {
        if state.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let board = state.board();
        let stones = board.stones(pit).ok_or(MoveError::OutOfRangePit {
            pit,
            board_len: board.len(),
        })?;

        let player = state.current_player;
        if !board.is_pit_of(pit, player) {
            return Err(MoveError::NotOwnedByCurrentPlayer { pit, player });
        }
        if stones == 0 {
            return Err(MoveError::EmptyPit(pit));
        }
        Ok(())
    }

    /// Sow, evaluate the landing pit, check for the end, then pass the turn
    /// unless the mover earned another or the game is over.
    #[instrument(level = "debug", skip(self, state), fields(player = %state.current_player))]
    fn apply_move(&self, state: &mut GameState, pit: usize) -> Result<MoveOutcome, MoveError> {
        self.validate_move(state, pit)?;

        let player = state.current_player;
        state.last_move = Some(pit);

        let board = state.board_mut();
        let landing = sow(board, pit, player);
        let eval = evaluate(board, landing, player);
        let result = check_and_finalize(board);

        if let Some(result) = result {
            state.outcome = Some(result);
        } else if eval.turn == TurnOutcome::TurnEnds {
            state.switch_player();
        }

        let outcome = MoveOutcome {
            player,
            pit,
            landing,
            turn: eval.turn,
            capture: eval.capture,
            result,
        };
        debug!(landing, turn = ?outcome.turn, capture = ?outcome.capture, "move applied");
        Ok(outcome)
    }
}
