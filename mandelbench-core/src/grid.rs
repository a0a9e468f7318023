//! Pixel grid to complex plane mapping.
//!
//! Each axis is sampled so that index `0` lands exactly on the lower bound
//! and index `dim - 1` exactly on the upper bound. Rows walk the imaginary
//! axis from `y_min` (row 0) upward.

use crate::{ConfigError, PixelRect, Region};
use serde::Serialize;

/// Map a pixel index on one axis to its coordinate.
///
/// Evaluated as `lo + ((hi - lo) * idx) / (dim - 1)` in f64. The operation
/// order is part of the checksum contract, so keep it as is.
#[inline]
pub fn axis_coordinate(lo: f64, hi: f64, idx: u32, dim: u32) -> f64 {
    lo + (hi - lo) * idx as f64 / (dim - 1) as f64
}

/// Uniform sampling of a [`Region`] at `width x height` pixels.
///
/// Only constructible through [`Grid::new`], so `width, height >= 2` always holds
/// and the mapping never divides by zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Grid {
    width: u32,
    height: u32,
    region: Region,
}

impl Grid {
    pub fn new(width: u32, height: u32, region: Region) -> Result<Self, ConfigError> {
        if width < 2 || height < 2 {
            return Err(ConfigError::DegenerateGrid { width, height });
        }
        Ok(Self {
            width,
            height,
            region,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Real coordinate of pixel column `px`
    #[inline]
    pub fn x_at(&self, px: u32) -> f64 {
        axis_coordinate(self.region.x_min, self.region.x_max, px, self.width)
    }

    /// Imaginary coordinate of pixel row `py`
    #[inline]
    pub fn y_at(&self, py: u32) -> f64 {
        axis_coordinate(self.region.y_min, self.region.y_max, py, self.height)
    }

    /// Complex sample point `(cx, cy)` for a pixel
    #[inline]
    pub fn point(&self, px: u32, py: u32) -> (f64, f64) {
        (self.x_at(px), self.y_at(py))
    }

    pub fn pixel_count(&self) -> u64 {
        self.bounds().area()
    }

    /// The whole grid as a pixel rectangle
    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width, self.height)
    }
}
