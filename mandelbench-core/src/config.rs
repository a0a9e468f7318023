//! Benchmark configuration.
//!
//! The region, resolution and iteration budget are fixed; only the execution
//! toggles (shortcuts, precision, sequential vs tiled) vary between runs.

use crate::{ConfigError, Grid, Region};
use serde::{Deserialize, Serialize};

/// Tile edge length for the parallel walk when none is given.
pub const DEFAULT_TILE_SIZE: u32 = 128;

/// Floating point width used by the iteration loop.
///
/// `F32` is a distinct variant: it produces a different checksum and exists
/// only for comparison against the double precision reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    #[default]
    F64,
    F32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ExecutionMode {
    /// Row-major walk on the calling thread
    #[default]
    Sequential,
    /// Tiles fanned out over a rayon pool. `threads: None` uses the global pool.
    Parallel {
        tile_size: u32,
        threads: Option<usize>,
    },
}

/// Configuration for one benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub region: Region,
    /// Enable the cardioid and period-2 bulb membership tests
    pub shortcuts: bool,
    pub precision: Precision,
    pub mode: ExecutionMode,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            max_iterations: 512,
            region: Region::DEFAULT,
            shortcuts: true,
            precision: Precision::F64,
            mode: ExecutionMode::Sequential,
        }
    }
}

impl BenchConfig {
    /// Build the sampling grid, rejecting dimensions below 2.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Grid::new(self.width, self.height, self.region)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid()?;
        if let ExecutionMode::Parallel { tile_size: 0, .. } = self.mode {
            return Err(ConfigError::InvalidTileSize);
        }
        Ok(())
    }

    pub fn with_shortcuts(mut self, enabled: bool) -> Self {
        self.shortcuts = enabled;
        self
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }
}
