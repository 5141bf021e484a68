//! The playable Kalah engine: rules, live state, undo history, listeners.

use tracing::{debug, instrument, warn};

use crate::core::{Board, ConfigError, GameState, MancalaConfig, MoveError, Player, PlayerMap};
use crate::history::{History, Snapshot};
use crate::listeners::{ListenerId, ListenerRegistry};
use crate::rules::{GameResult, Kalah, MoveOutcome, RulesEngine};

/// One game of Kalah.
///
/// Owns its board, its history, and its listeners; nothing is shared with
/// other instances. Every mutating call notifies the listeners after the
/// state has settled. Listeners get `&MancalaGame` and read what they need.
///
/// Not thread-safe by itself: wrap the whole game in a mutex if several
/// threads drive it.
///
/// ## Example
///
/// ```
/// use kalah_engine::games::kalah::MancalaGame;
/// use kalah_engine::core::Player;
///
/// let mut game = MancalaGame::default();
/// let outcome = game.apply_move(2).unwrap();
///
/// assert!(outcome.is_extra_turn());
/// assert_eq!(game.current_player(), Player::One);
/// assert_eq!(game.board_state(), vec![4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
///
/// game.undo();
/// assert_eq!(game.board_state(), vec![4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
/// ```
#[derive(Debug)]
pub struct MancalaGame {
    rules: Kalah,
    state: GameState,
    history: History,
    listeners: ListenerRegistry<MancalaGame>,
}

impl Default for MancalaGame {
    /// Six pits per side, four stones each, Player 1 to move.
    fn default() -> Self {
        Self::from_parts(MancalaConfig::default(), Player::One)
    }
}

impl MancalaGame {
    /// Create a game with `pits_per_side` pits of `stones_per_pit` stones.
    ///
    /// Player 1 moves first unless `start_game` says otherwise.
    pub fn new(pits_per_side: usize, stones_per_pit: u32) -> Result<Self, ConfigError> {
        Self::with_config(MancalaConfig::new(pits_per_side, stones_per_pit))
    }

    /// Create a game from a configuration.
    pub fn with_config(config: MancalaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, Player::One))
    }

    /// Resume from an arbitrary position, with empty history.
    ///
    /// The board's own stone total becomes the conserved total, and its
    /// pit count becomes the configuration. Useful for setting up endgames
    /// and puzzles. Fails for a board with no stones.
    pub fn from_board(board: Board, current_player: Player) -> Result<Self, ConfigError> {
        let rules = Kalah::for_board(&board)?;
        Ok(Self {
            rules,
            state: GameState::from_board(board, current_player),
            history: History::new(),
            listeners: ListenerRegistry::new(),
        })
    }

    fn from_parts(config: MancalaConfig, first_player: Player) -> Self {
        let rules = Kalah::new(config);
        Self {
            state: rules.initial_state(first_player),
            rules,
            history: History::new(),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Same position and history, no listeners.
    ///
    /// Cheap regardless of history length, so callers can explore a line
    /// of play without disturbing the original.
    #[must_use]
    pub fn detached(&self) -> Self {
        Self {
            rules: self.rules,
            state: self.state.clone(),
            history: self.history.clone(),
            listeners: ListenerRegistry::new(),
        }
    }

    // === Mutation ===

    /// Choose who moves first.
    pub fn start_game(&mut self, first_player: Player) -> Result<(), MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }
        debug!(%first_player, "game started");
        self.state.current_player = first_player;
        self.notify_listeners();
        Ok(())
    }

    /// Play the pit at `pit` for the current player.
    ///
    /// Snapshots the state, sows, resolves capture or extra turn, checks
    /// for the end of the game, passes the turn if due, then notifies.
    /// An invalid move changes nothing and records no snapshot.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_move(&mut self, pit: usize) -> Result<MoveOutcome, MoveError> {
        if let Err(err) = self.rules.validate_move(&self.state, pit) {
            warn!(%err, "move rejected");
            return Err(err);
        }

        self.history.push(Snapshot::capture(&self.state));
        let outcome = self.rules.apply_move(&mut self.state, pit)?;
        self.notify_listeners();
        Ok(outcome)
    }

    /// Restore the state from before the most recent move.
    ///
    /// Returns false, and notifies nobody, if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.state = snapshot.into_state();
        debug!(
            player = %self.state.current_player,
            remaining = self.history.len(),
            "move undone"
        );
        self.notify_listeners();
        true
    }

    /// Hand the turn to a specific player.
    pub fn set_current_player(&mut self, player: Player) -> Result<(), MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }
        self.state.current_player = player;
        self.notify_listeners();
        Ok(())
    }

    /// Hand the turn to the other player.
    pub fn switch_player(&mut self) -> Result<(), MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }
        self.state.switch_player();
        self.notify_listeners();
        Ok(())
    }

    // === Listeners ===

    /// Register a callback run after every change.
    pub fn add_listener(&mut self, listener: impl FnMut(&MancalaGame) + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Unregister a callback. Returns true if it was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn notify_listeners(&mut self) {
        // Listeners borrow the game immutably, so the registry steps aside.
        // The guard puts it back even if a listener panics.
        let listeners = std::mem::take(&mut self.listeners);
        let mut guard = RegistryGuard {
            game: self,
            listeners,
        };
        let RegistryGuard { game, listeners } = &mut guard;
        listeners.notify(&**game);
    }

    // === Queries ===

    /// Check if anything can be undone.
    #[must_use]
    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of moves that can be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The snapshot the next `undo` would restore.
    #[must_use]
    pub fn last_snapshot(&self) -> Option<&Snapshot> {
        self.history.peek()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Final result, `None` while the game is running.
    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        self.state.outcome
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// Pit chosen by the most recent move still on the board.
    #[must_use]
    pub fn last_move(&self) -> Option<usize> {
        self.state.last_move
    }

    /// An independent copy of every pit and store.
    #[must_use]
    pub fn board_state(&self) -> Vec<u32> {
        self.state.board().to_vec()
    }

    /// Stones at one cell, `None` if off the board.
    #[must_use]
    pub fn stones_at_pit(&self, index: usize) -> Option<u32> {
        self.state.board().stones(index)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &MancalaConfig {
        self.rules.config()
    }

    /// Stones in play; the board always sums to this.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.rules.total_stones()
    }

    /// Store totals.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.state.board().stores()
    }

    /// Pits the current player may choose.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<usize> {
        self.rules.legal_moves(&self.state)
    }
}

/// Returns a taken-out listener registry to its game on drop.
struct RegistryGuard<'a> {
    game: &'a mut MancalaGame,
    listeners: ListenerRegistry<MancalaGame>,
}

impl Drop for RegistryGuard<'_> {
    fn drop(&mut self) {
        self.game.listeners = std::mem::take(&mut self.listeners);
    }
}
