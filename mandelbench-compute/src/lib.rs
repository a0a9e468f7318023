pub mod bench;
pub mod error;
pub mod float;
pub mod mandelbrot;
pub mod render;
pub mod tiles;

pub use bench::run_benchmark;
pub use error::BenchError;
pub use float::EscapeFloat;
pub use mandelbrot::{
    classify_shortcut, escape_time, evaluate, in_main_cardioid, in_period2_bulb,
    EscapeTimeEvaluator,
};
pub use render::{render_grid, render_rect};
pub use tiles::{generate_tiles, render_tiled};

// Re-export core types for convenience
pub use mandelbench_core::*;
