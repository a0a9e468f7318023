use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in the complex plane.
///
/// Bounds are inclusive: grid sampling places the first and last pixel
/// of each axis exactly on `min` and `max`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Region {
    /// The classic full view of the Mandelbrot set.
    pub const DEFAULT: Region = Region {
        x_min: -2.0,
        x_max: 1.0,
        y_min: -1.5,
        y_max: 1.5,
    };

    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Extent along the real axis
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Extent along the imaginary axis
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Check if a point lies inside the region (edges included)
    pub fn contains(&self, cx: f64, cy: f64) -> bool {
        cx >= self.x_min && cx <= self.x_max && cy >= self.y_min && cy <= self.y_max
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::DEFAULT
    }
}
