//! Property tests over random boards and random legal move sequences.

use proptest::prelude::*;

use kalah_engine::core::{Board, GameState};
use kalah_engine::rules::sowing::sow;
use kalah_engine::{MancalaGame, Player};

/// Random game setup plus a list of move choices. Each choice indexes
/// into the legal moves at that point, modulo their count.
fn game_and_choices() -> impl Strategy<Value = ((usize, u32), Vec<usize>)> {
    ((1usize..=8, 1u32..=6), prop::collection::vec(any::<usize>(), 0..120))
}

/// Random board with at least one stone in a pit of the chosen player.
fn board_and_pit() -> impl Strategy<Value = (Vec<u32>, usize, Player)> {
    (1usize..=8)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(0u32..=30, 2 * n + 2),
                0..n,
                prop::bool::ANY,
            )
        })
        .prop_map(|(mut cells, offset, second)| {
            let n = (cells.len() - 2) / 2;
            let (player, pit) = if second {
                (Player::Two, n + 1 + offset)
            } else {
                (Player::One, offset)
            };
            if cells[pit] == 0 {
                cells[pit] = 1;
            }
            (cells, pit, player)
        })
}

fn choose(game: &MancalaGame, choice: usize) -> Option<usize> {
    let legal = game.legal_moves();
    (!legal.is_empty()).then(|| legal[choice % legal.len()])
}

proptest! {
    #[test]
    fn stones_are_conserved(((pits, stones), choices) in game_and_choices()) {
        let mut game = MancalaGame::new(pits, stones).unwrap();
        let total = 2 * pits as u32 * stones;

        for choice in choices {
            let Some(pit) = choose(&game, choice) else { break };
            game.apply_move(pit).unwrap();
            prop_assert_eq!(game.board_state().iter().sum::<u32>(), total);
        }
        while game.undo() {
            prop_assert_eq!(game.board_state().iter().sum::<u32>(), total);
        }
    }

    #[test]
    fn undo_restores_previous_state(((pits, stones), choices) in game_and_choices()) {
        let mut game = MancalaGame::new(pits, stones).unwrap();

        for choice in choices {
            let Some(pit) = choose(&game, choice) else { break };
            let before: GameState = game.state().clone();

            game.apply_move(pit).unwrap();
            prop_assert!(game.undo());
            prop_assert_eq!(game.state(), &before);
            prop_assert_eq!(game.is_game_over(), before.is_terminal());

            game.apply_move(pit).unwrap();
        }
    }

    #[test]
    fn extra_turn_iff_landing_in_own_store(((pits, stones), choices) in game_and_choices()) {
        let mut game = MancalaGame::new(pits, stones).unwrap();

        for choice in choices {
            let Some(pit) = choose(&game, choice) else { break };
            let mover = game.current_player();
            let outcome = game.apply_move(pit).unwrap();

            let own_store = game.board().store_index(mover);
            prop_assert_eq!(outcome.is_extra_turn(), outcome.landing == own_store);
            if outcome.is_extra_turn() {
                prop_assert_eq!(outcome.capture, None);
                prop_assert_eq!(game.current_player(), mover);
            } else if outcome.result.is_none() {
                prop_assert_eq!(game.current_player(), mover.other());
            }
        }
    }

    #[test]
    fn capture_rule_holds(((pits, stones), choices) in game_and_choices()) {
        let mut game = MancalaGame::new(pits, stones).unwrap();

        for choice in choices {
            let Some(pit) = choose(&game, choice) else { break };
            let mover = game.current_player();
            let before = game.board().clone();
            let outcome = game.apply_move(pit).unwrap();
            let board = game.board();

            match outcome.capture {
                Some(capture) => {
                    prop_assert_eq!(capture.pit, outcome.landing);
                    prop_assert!(board.is_pit_of(capture.pit, mover));
                    prop_assert_eq!(capture.opposite, board.opposite_pit(capture.pit));
                    prop_assert_eq!(board.stones(capture.pit), Some(0));
                    prop_assert_eq!(board.stones(capture.opposite), Some(0));
                    prop_assert!(capture.stones >= 2);
                    prop_assert!(!outcome.is_extra_turn());
                    prop_assert!(board.store(mover) >= before.store(mover) + capture.stones);
                }
                None if outcome.result.is_none() && board.is_pit_of(outcome.landing, mover) => {
                    let opposite = board.opposite_pit(outcome.landing);
                    prop_assert!(
                        board.stones(outcome.landing) != Some(1)
                            || board.stones(opposite) == Some(0)
                    );
                }
                None => {}
            }
        }
    }

    #[test]
    fn sowing_visits_expected_cells((cells, pit, mover) in board_and_pit()) {
        let mut board = Board::from_cells(&cells).unwrap();
        let skip = board.store_index(mover.other());
        let len = cells.len();

        // Walk the ring independently to predict every deposit.
        let mut expected = cells.clone();
        let mut remaining = expected[pit];
        expected[pit] = 0;
        let mut index = pit;
        while remaining > 0 {
            index = (index + 1) % len;
            if index != skip {
                expected[index] += 1;
                remaining -= 1;
            }
        }

        let landing = sow(&mut board, pit, mover);

        prop_assert_eq!(landing, index);
        prop_assert_ne!(landing, skip);
        prop_assert_eq!(board.to_vec(), expected);
        prop_assert_eq!(board.stones(skip), Some(cells[skip]));
        prop_assert_eq!(board.total_stones(), cells.iter().sum::<u32>());
    }
}
