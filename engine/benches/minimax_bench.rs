use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::{Board, GameOutcome, Player, choose_move};

fn bench_choose_move_empty_board(c: &mut Criterion) {
    c.bench_function("choose_move_empty", |b| {
        b.iter(|| {
            let mut board = Board::new();
            choose_move(&mut board)
        });
    });
}

fn bench_choose_move_midgame(c: &mut Criterion) {
    c.bench_function("choose_move_midgame", |b| {
        let mut board = Board::new();
        let moves = [
            (4, Player::Computer),
            (0, Player::Human),
            (8, Player::Computer),
            (2, Player::Human),
        ];
        for (index, player) in moves {
            board.place(index, player).unwrap();
        }

        b.iter(|| {
            let mut board = board.clone();
            choose_move(&mut board)
        });
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("choose_move_full_game", |b| {
        b.iter(|| {
            let mut board = Board::new();
            while board.outcome() == GameOutcome::Ongoing {
                let index = choose_move(&mut board).unwrap();
                board.place(index, Player::Computer).unwrap();
                if board.outcome() != GameOutcome::Ongoing {
                    break;
                }
                let reply = board.legal_moves()[0];
                board.place(reply, Player::Human).unwrap();
            }
            board
        });
    });
}

criterion_group!(
    benches,
    bench_choose_move_empty_board,
    bench_choose_move_midgame,
    bench_full_game
);
criterion_main!(benches);
