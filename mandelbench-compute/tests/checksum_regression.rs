//! Full-size checksum pinned against strict IEEE double arithmetic
//! (no fused multiply-add).

use mandelbench_compute::{
    render_grid, render_tiled, run_benchmark, BenchConfig, Checksum, EscapeTimeEvaluator,
    ExecutionMode, DEFAULT_TILE_SIZE,
};

const REFERENCE_CHECKSUM: Checksum = Checksum(90484563);

#[test]
fn default_run_matches_reference_checksum() {
    let report = run_benchmark(&BenchConfig::default()).unwrap();
    assert_eq!(report.checksum, REFERENCE_CHECKSUM);
    assert_eq!(report.stats.pixels, 1_000_000);
    assert_eq!(report.stats.interior, 167912);
    assert_eq!(report.stats.bulb_hits, 21774);
    assert_eq!(report.stats.cardioid_hits, 130612);
}

#[test]
fn repeated_runs_are_deterministic() {
    let first = run_benchmark(&BenchConfig::default()).unwrap();
    let second = run_benchmark(&BenchConfig::default()).unwrap();
    assert_eq!(first.checksum, second.checksum);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn tiled_run_matches_reference_checksum() {
    let config = BenchConfig::default().with_mode(ExecutionMode::Parallel {
        tile_size: DEFAULT_TILE_SIZE,
        threads: None,
    });
    let report = run_benchmark(&config).unwrap();
    assert_eq!(report.checksum, REFERENCE_CHECKSUM);
}

#[test]
fn shortcut_free_run_matches_reference_checksum() {
    let report = run_benchmark(&BenchConfig::default().with_shortcuts(false)).unwrap();
    assert_eq!(report.checksum, REFERENCE_CHECKSUM);
    assert_eq!(report.stats.interior, 167912);
    assert_eq!(report.stats.shortcut_hits(), 0);
}

#[test]
fn intermediate_grid_matches_reference() {
    let config = BenchConfig {
        width: 200,
        height: 200,
        max_iterations: 256,
        ..BenchConfig::default()
    };
    let grid = config.grid().unwrap();
    let evaluator = EscapeTimeEvaluator::new(256);

    assert_eq!(render_grid::<f64>(&grid, &evaluator).checksum, Checksum(1879448));
    assert_eq!(
        render_tiled::<f64>(&grid, &evaluator, 37).checksum,
        Checksum(1879448)
    );
}

#[test]
fn minimal_grid_samples_the_corners() {
    let config = BenchConfig {
        width: 2,
        height: 2,
        ..BenchConfig::default()
    };
    // Corners (-2, +-1.5) escape after 1 step, (1, +-1.5) after 2
    assert_eq!(run_benchmark(&config).unwrap().checksum, Checksum(6));
}
