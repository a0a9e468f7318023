pub mod checksum;
pub mod compute_data;
pub mod config;
pub mod error;
pub mod grid;
pub mod pixel_rect;
pub mod region;
pub mod report;

pub use checksum::Checksum;
pub use compute_data::{EscapeResult, RenderStats, Shortcut};
pub use config::{BenchConfig, ExecutionMode, Precision, DEFAULT_TILE_SIZE};
pub use error::ConfigError;
pub use grid::{axis_coordinate, Grid};
pub use pixel_rect::PixelRect;
pub use region::Region;
pub use report::BenchReport;
