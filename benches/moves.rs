use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kalah_engine::MancalaGame;

/// Play first-legal-move to the end of the game.
fn play_out(game: &mut MancalaGame) {
    while let Some(&pit) = game.legal_moves().first() {
        let _ = game.apply_move(pit);
    }
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_6x4", |b| {
        b.iter(|| {
            let mut game = MancalaGame::default();
            play_out(&mut game);
            black_box(game.winner())
        })
    });
}

fn bench_move_undo(c: &mut Criterion) {
    let mut game = MancalaGame::default();
    c.bench_function("move_then_undo", |b| {
        b.iter(|| {
            let _ = game.apply_move(black_box(3));
            game.undo()
        })
    });
}

fn bench_detached(c: &mut Criterion) {
    let mut game = MancalaGame::default();
    play_out(&mut game);
    c.bench_function("detach_finished_game", |b| b.iter(|| black_box(game.detached())));
}

criterion_group!(benches, bench_full_game, bench_move_undo, bench_detached);
criterion_main!(benches);
