//! Benchmark runner: validate, time the grid walk, build the report.

use crate::render::render_grid;
use crate::tiles::render_tiled;
use crate::{BenchError, EscapeFloat, EscapeTimeEvaluator};
use mandelbench_core::{BenchConfig, BenchReport, ExecutionMode, Grid, Precision, RenderStats};
use std::time::{Duration, Instant};

/// Run one benchmark described by `config`.
///
/// The timer brackets only the grid walk. Validation, thread pool setup and
/// report formatting happen outside it.
pub fn run_benchmark(config: &BenchConfig) -> Result<BenchReport, BenchError> {
    config.validate()?;
    let grid = config.grid()?;
    let evaluator = EscapeTimeEvaluator::new(config.max_iterations).with_shortcuts(config.shortcuts);

    log::debug!(
        "Grid {}x{} over x=[{}, {}] y=[{}, {}], max_iterations={}, shortcuts={}, precision={:?}",
        grid.width(),
        grid.height(),
        grid.region().x_min,
        grid.region().x_max,
        grid.region().y_min,
        grid.region().y_max,
        evaluator.max_iterations(),
        evaluator.shortcuts(),
        config.precision,
    );

    let (stats, elapsed) = match config.precision {
        Precision::F64 => dispatch::<f64>(&grid, &evaluator, config.mode)?,
        Precision::F32 => dispatch::<f32>(&grid, &evaluator, config.mode)?,
    };

    log::info!(
        "Walked {} pixels in {:.1}ms: {} interior, {} bulb hits, {} cardioid hits",
        stats.pixels,
        elapsed.as_secs_f64() * 1000.0,
        stats.interior,
        stats.bulb_hits,
        stats.cardioid_hits,
    );

    Ok(BenchReport {
        compute_time_secs: elapsed.as_secs_f64(),
        checksum: stats.checksum,
        width: grid.width(),
        height: grid.height(),
        max_iterations: config.max_iterations,
        shortcuts: config.shortcuts,
        precision: config.precision,
        mode: config.mode,
        stats,
    })
}

fn dispatch<T: EscapeFloat>(
    grid: &Grid,
    evaluator: &EscapeTimeEvaluator,
    mode: ExecutionMode,
) -> Result<(RenderStats, Duration), BenchError> {
    match mode {
        ExecutionMode::Sequential => Ok(timed(|| render_grid::<T>(grid, evaluator))),
        ExecutionMode::Parallel {
            tile_size,
            threads: None,
        } => Ok(timed(|| render_tiled::<T>(grid, evaluator, tile_size))),
        ExecutionMode::Parallel {
            tile_size,
            threads: Some(threads),
        } => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            Ok(pool.install(|| timed(|| render_tiled::<T>(grid, evaluator, tile_size))))
        }
    }
}

fn timed<R>(work: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = work();
    (result, start.elapsed())
}
