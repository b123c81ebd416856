use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tictactoe::core::{Board, GameState};
use tui_tictactoe::input::classify_bytes;
use tui_tictactoe::term::{encode_frame, Viewport};
use tui_tictactoe::types::{Cell, PlayerMode, Token};

fn bench_cursor_move(c: &mut Criterion) {
    let mut state = GameState::new(PlayerMode::Two);

    c.bench_function("apply_move_right", |b| {
        b.iter(|| {
            state.apply_input(black_box(Token::MoveRight));
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    let cells = [0usize, 1, 2, 4, 3, 5, 7, 6, 8];

    c.bench_function("play_drawn_game", |b| {
        b.iter(|| {
            let mut state = GameState::new(PlayerMode::Two);
            for &cell in &cells {
                for _ in 0..2 {
                    state.apply_input(Token::MoveUp);
                    state.apply_input(Token::MoveLeft);
                }
                for _ in 0..cell / 3 {
                    state.apply_input(Token::MoveDown);
                }
                for _ in 0..cell % 3 {
                    state.apply_input(Token::MoveRight);
                }
                state.apply_input(Token::Confirm);
            }
            black_box(state.winner())
        })
    });
}

fn bench_line_owner(c: &mut Criterion) {
    use Cell::{Empty as E, PlayerO as O, PlayerX as X};
    let board = Board::from_cells([X, O, X, X, O, O, O, X, E]);

    c.bench_function("line_owner_no_win", |b| {
        b.iter(|| black_box(&board).line_owner())
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_arrow", |b| {
        b.iter(|| classify_bytes(black_box(b"\x1b[C")))
    });
}

fn bench_encode_frame(c: &mut Criterion) {
    let state = GameState::new(PlayerMode::Two);
    let mut out = Vec::with_capacity(1024);

    c.bench_function("encode_frame_80x24", |b| {
        b.iter(|| {
            out.clear();
            encode_frame(black_box(&state), Viewport::new(80, 24), &mut out).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_cursor_move,
    bench_full_game,
    bench_line_owner,
    bench_classify,
    bench_encode_frame
);
criterion_main!(benches);
