use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use tui_2048::engine::{Grid, Move, State};
use tui_2048::rng::Xorshift;

fn bench_make_move(c: &mut Criterion) {
    for (name, dir) in [
        ("make_move/up", Move::Up),
        ("make_move/down", Move::Down),
        ("make_move/left", Move::Left),
        ("make_move/right", Move::Right),
    ] {
        c.bench_function(name, |bch| {
            bch.iter_batched(
                || Grid::new(5, 42),
                |mut grid| {
                    for _ in 0..64 {
                        grid.make_move(dir);
                    }
                    black_box(grid.score())
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("game/random_to_completion", |bch| {
        bch.iter_batched(
            || (Grid::new(5, 42), Xorshift::new(1)),
            |(mut grid, mut dirs)| {
                while grid.state() != State::Ended {
                    let dir = match dirs.next() % 4 {
                        0 => Move::Up,
                        1 => Move::Down,
                        2 => Move::Left,
                        _ => Move::Right,
                    };
                    grid.make_move(dir);
                }
                black_box(grid.score())
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lifecycle(c: &mut Criterion) {
    c.bench_function("grid/new", |bch| {
        bch.iter(|| black_box(Grid::new(5, 42).empty_cells()))
    });
    c.bench_function("grid/reset", |bch| {
        bch.iter_batched(
            || Grid::new(5, 42),
            |mut grid| {
                grid.reset();
                black_box(grid.empty_cells())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(grid_ops, bench_make_move, bench_full_game, bench_lifecycle);
criterion_main!(grid_ops);
