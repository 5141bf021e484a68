//! End-of-game detection, the final sweep, and scoring.

use tracing::info;

use super::GameResult;
use crate::core::{Board, Player, PlayerMap};

/// Check if either side has run out of stones.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    Player::all().any(|p| board.side_is_empty(p))
}

/// Move every stone left in each player's pits into that player's store.
pub fn sweep(board: &mut Board) {
    for player in Player::all() {
        let store = board.store_index(player);
        let remaining: u32 = board.pit_range(player).map(|pit| board.take(pit)).sum();
        board.add(store, remaining);
    }
}

/// Compare store totals.
#[must_use]
pub fn final_result(board: &Board) -> GameResult {
    let (one, two) = (board.store(Player::One), board.store(Player::Two));
    match one.cmp(&two) {
        std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
        std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
        std::cmp::Ordering::Equal => GameResult::Tie,
    }
}

/// If the game is over, sweep both sides and return the result.
///
/// Returns `None` and leaves the board untouched while both sides still
/// hold stones.
pub fn check_and_finalize(board: &mut Board) -> Option<GameResult> {
    if !is_terminal(board) {
        return None;
    }
    sweep(board);
    let result = final_result(board);
    info!(
        player_one = board.store(Player::One),
        player_two = board.store(Player::Two),
        ?result,
        "game over"
    );
    Some(result)
}

/// Current store totals.
#[must_use]
pub fn scores(board: &Board) -> PlayerMap<u32> {
    board.stores()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(cells: &[u32]) -> Board {
        Board::from_cells(cells).unwrap()
    }

    #[test]
    fn test_not_terminal_while_both_sides_have_stones() {
        let mut board = cells(&[0, 0, 0, 0, 0, 1, 20, 0, 0, 0, 0, 0, 1, 26]);
        let before = board.clone();
        assert_eq!(check_and_finalize(&mut board), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_sweeps_both_sides() {
        let mut board = cells(&[0, 0, 0, 0, 0, 0, 20, 1, 2, 3, 0, 0, 0, 22]);
        let result = check_and_finalize(&mut board);

        assert_eq!(result, Some(GameResult::Winner(Player::Two)));
        assert_eq!(board.to_vec(), vec![0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 28]);
    }

    #[test]
    fn test_emptied_opponent_side_still_sweeps_mover() {
        // Player 2's side is empty; Player 1's leftovers go to Player 1.
        let mut board = cells(&[5, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 23]);
        let result = check_and_finalize(&mut board);

        assert_eq!(result, Some(GameResult::Winner(Player::One)));
        assert_eq!(board.store(Player::One), 25);
        assert_eq!(board.side_total(Player::One), 0);
    }

    #[test]
    fn test_tie() {
        let mut board = cells(&[0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 4, 0, 20]);
        assert_eq!(check_and_finalize(&mut board), Some(GameResult::Tie));
        assert_eq!(scores(&board), PlayerMap::with_value(24));
    }
}
