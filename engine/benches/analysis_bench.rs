// engine/benches/analysis_bench.rs
#![forbid(unsafe_code)]

/**
 * Decision-engine micro-benchmarks.
 *
 * Focus:
 * - Placement enumeration and the fixed-cell scan
 * - Static evaluation (all colors / two colors)
 * - The tile-averaged reply-ply search, optimized vs. naive
 */
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

use box_engine::{
    calc_fixed, empty_grid, evaluate_second_ply, evaluate_second_ply_naive, execute_move,
    generate_placements, Analysis, Grid, Tile, DEFAULT_SCORE_WEIGHTS, INITIAL_PLACEMENT,
};

fn midgame_grid(seed: u64, moves: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tile: Tile = [1, 2, 3, 4, 5, 6];
    tile.shuffle(&mut rng);
    let mut grid = empty_grid();
    execute_move(&mut grid, &tile, INITIAL_PLACEMENT);
    for _ in 0..moves {
        let placements = generate_placements(&grid);
        if placements.is_empty() {
            break;
        }
        let placement = placements[rng.gen_range(0..placements.len())];
        tile.shuffle(&mut rng);
        execute_move(&mut grid, &tile, placement);
    }
    grid
}

fn bench_board_scans(c: &mut Criterion) {
    let grid = midgame_grid(20250101, 12);
    c.bench_function("board.generate_placements", |b| {
        b.iter(|| black_box(generate_placements(black_box(&grid))));
    });
    c.bench_function("board.calc_fixed", |b| {
        b.iter(|| black_box(calc_fixed(black_box(&grid))));
    });
}

fn bench_evaluation(c: &mut Criterion) {
    let analysis = Analysis::new(DEFAULT_SCORE_WEIGHTS);
    let grid = midgame_grid(20250101, 12);
    let fixed = calc_fixed(&grid);
    c.bench_function("eval.all_colors", |b| {
        b.iter(|| black_box(analysis.evaluate_all_colors(black_box(&grid), &fixed)));
    });
    c.bench_function("eval.two_colors", |b| {
        b.iter(|| black_box(analysis.evaluate_two_colors(black_box(&grid), &fixed, 1, 4)));
    });
}

fn bench_second_ply(c: &mut Criterion) {
    let analysis = Analysis::new(DEFAULT_SCORE_WEIGHTS);
    // Late-ish position: few enough placements that a single evaluation
    // stays in the millisecond range.
    let grid = midgame_grid(987, 30);
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    group.bench_function("second_ply.precomputed", |b| {
        b.iter(|| black_box(evaluate_second_ply(&analysis, 1, 4, black_box(&grid))));
    });
    group.bench_function("second_ply.naive", |b| {
        b.iter(|| black_box(evaluate_second_ply_naive(&analysis, 1, 4, black_box(&grid))));
    });
    group.finish();
}

criterion_group!(
    analysis_benches,
    bench_board_scans,
    bench_evaluation,
    bench_second_ply
);
criterion_main!(analysis_benches);
