//! Evaluator and full-grid walk timings, with and without the membership
//! shortcuts.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mandelbench_compute::{
    evaluate, render_grid, render_tiled, BenchConfig, EscapeTimeEvaluator, DEFAULT_TILE_SIZE,
};

fn benchmark(c: &mut Criterion) {
    c.bench_function("evaluate_boundary_point", |b| {
        b.iter(|| evaluate(black_box(-0.7436), black_box(0.1318), black_box(512)));
    });

    c.bench_function("evaluate_cardioid_point", |b| {
        b.iter(|| evaluate(black_box(-0.1), black_box(0.2), black_box(512)));
    });

    let config = BenchConfig::default();
    let grid = config.grid().expect("default grid is valid");
    let evaluator = EscapeTimeEvaluator::new(config.max_iterations);

    let mut group = c.benchmark_group("grid_1000x1000");
    group.sample_size(10);
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(render_grid::<f64>(&grid, &evaluator)));
    });
    group.bench_function("sequential_no_shortcuts", |b| {
        let plain = evaluator.with_shortcuts(false);
        b.iter(|| black_box(render_grid::<f64>(&grid, &plain)));
    });
    group.bench_function("tiled", |b| {
        b.iter(|| black_box(render_tiled::<f64>(&grid, &evaluator, DEFAULT_TILE_SIZE)));
    });
    group.bench_function("sequential_f32", |b| {
        b.iter(|| black_box(render_grid::<f32>(&grid, &evaluator)));
    });
    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
