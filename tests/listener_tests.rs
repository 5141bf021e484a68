//! Change notification integration tests.
//!
//! These tests verify listeners see settled state, fire in registration
//! order, and stay private to their game.

use std::cell::RefCell;
use std::rc::Rc;

use kalah_engine::{MancalaGame, Player};

#[test]
fn test_listener_reads_post_move_state() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut game = MancalaGame::default();

    let s = Rc::clone(&seen);
    game.add_listener(move |g: &MancalaGame| {
        s.borrow_mut().push((g.board_state(), g.current_player(), g.has_history()));
    });

    game.apply_move(3).unwrap();
    game.undo();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, vec![4, 4, 4, 0, 5, 5, 1, 5, 4, 4, 4, 4, 4, 0]);
    assert_eq!(seen[0].1, Player::Two);
    assert!(seen[0].2);
    assert_eq!(seen[1].0, vec![4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
    assert_eq!(seen[1].1, Player::One);
    assert!(!seen[1].2);
}

#[test]
fn test_listeners_fire_in_registration_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut game = MancalaGame::default();

    for tag in 0..4 {
        let o = Rc::clone(&order);
        game.add_listener(move |_| o.borrow_mut().push(tag));
    }

    game.apply_move(2).unwrap();
    assert_eq!(*order.borrow(), vec![0, 1, 2, 3]);
}

#[test]
fn test_removed_listener_is_silent() {
    let count = Rc::new(RefCell::new(0));
    let mut game = MancalaGame::default();

    let c = Rc::clone(&count);
    let id = game.add_listener(move |_| *c.borrow_mut() += 1);

    game.apply_move(2).unwrap();
    assert!(game.remove_listener(id));
    game.apply_move(0).unwrap();

    assert_eq!(*count.borrow(), 1);
    assert!(!game.remove_listener(id));
}

#[test]
fn test_games_do_not_share_listeners() {
    let hits = Rc::new(RefCell::new((0, 0)));
    let mut first = MancalaGame::default();
    let mut second = MancalaGame::default();

    let h = Rc::clone(&hits);
    first.add_listener(move |_| h.borrow_mut().0 += 1);
    let h = Rc::clone(&hits);
    second.add_listener(move |_| h.borrow_mut().1 += 1);

    first.apply_move(2).unwrap();
    first.apply_move(0).unwrap();
    second.apply_move(3).unwrap();

    assert_eq!(*hits.borrow(), (2, 1));
}

#[test]
fn test_turn_changes_notify() {
    let players = Rc::new(RefCell::new(Vec::new()));
    let mut game = MancalaGame::default();

    let p = Rc::clone(&players);
    game.add_listener(move |g: &MancalaGame| p.borrow_mut().push(g.current_player()));

    game.start_game(Player::Two).unwrap();
    game.switch_player().unwrap();
    game.set_current_player(Player::Two).unwrap();

    assert_eq!(*players.borrow(), vec![Player::Two, Player::One, Player::Two]);
}
