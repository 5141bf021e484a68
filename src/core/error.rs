//! Error types for moves, undos, and configuration.

use super::Player;

/// Reasons a move is rejected. The board is left untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("pit {pit} is outside the board (0..{board_len})")]
    OutOfRangePit { pit: usize, board_len: usize },

    #[error("pit {pit} is not a playable pit of {player}")]
    NotOwnedByCurrentPlayer { pit: usize, player: Player },

    #[error("pit {0} is empty")]
    EmptyPit(usize),

    #[error("game is already over")]
    GameAlreadyOver,
}

/// Reasons a controller refuses an undo.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UndoError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("undo limit of {limit} per turn reached")]
    LimitReached { limit: u32 },

    #[error("cannot undo twice in a row")]
    ConsecutiveUndo,

    #[error("game is over")]
    GameOver,
}

/// Errors that can occur when building a game configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("pits_per_side must be > 0")]
    ZeroPits,

    #[error("stones_per_pit must be > 0")]
    ZeroStones,

    #[error("{pits_per_side} pits of {stones_per_pit} stones per side overflows the stone count")]
    TooManyStones {
        pits_per_side: usize,
        stones_per_pit: u32,
    },

    #[error("board holds no stones")]
    EmptyBoard,

    #[error("stones on the board overflow the stone count")]
    BoardOverflow,
}
