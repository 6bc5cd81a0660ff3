use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Board, GameEngine, SequenceSource, Shape};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    c.bench_function("gravity_tick_full_descent", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(black_box(12345));
            engine.start();
            // Drop a handful of pieces through the full lock/clear/spawn path.
            for _ in 0..100 {
                if engine.game_over() {
                    engine.restart();
                }
                engine.tick();
            }
        })
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows())
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shape = Shape::template(PieceKind::T);
    c.bench_function("shape_rotate", |b| b.iter(|| black_box(shape).rotated()));
}

fn bench_move(c: &mut Criterion) {
    let mut engine = GameEngine::with_source(Box::new(SequenceSource::new(vec![PieceKind::T])));
    engine.start();

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            engine.move_piece(black_box(1));
            engine.move_piece(black_box(-1));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_four_rows,
    bench_rotate,
    bench_move
);
criterion_main!(benches);
