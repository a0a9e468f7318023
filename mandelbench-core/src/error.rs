//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 2x2 pixels, got {width}x{height}")]
    DegenerateGrid { width: u32, height: u32 },

    #[error("tile size must be at least 1 pixel")]
    InvalidTileSize,
}
