//! Sequential row-major grid walk.

use crate::{EscapeFloat, EscapeTimeEvaluator};
use mandelbench_core::{Grid, PixelRect, RenderStats};

/// Walk `rect` row by row and fold every pixel into a [`RenderStats`].
///
/// Coordinates come from the pixel's global indices in `grid`, so splitting
/// the grid into rectangles never changes any per-pixel value. Nothing is
/// allocated per pixel.
pub fn render_rect<T: EscapeFloat>(
    grid: &Grid,
    rect: PixelRect,
    evaluator: &EscapeTimeEvaluator,
) -> RenderStats {
    let max_iterations = evaluator.max_iterations();
    let mut stats = RenderStats::default();

    for py in rect.y..rect.y + rect.height {
        let cy = T::from_f64(grid.y_at(py));

        for px in rect.x..rect.x + rect.width {
            let cx = T::from_f64(grid.x_at(px));
            let result = evaluator.compute_point(cx, cy);
            stats.record(&result, max_iterations);
        }
    }

    stats
}

/// Walk the whole grid on the calling thread.
pub fn render_grid<T: EscapeFloat>(grid: &Grid, evaluator: &EscapeTimeEvaluator) -> RenderStats {
    render_rect::<T>(grid, grid.bounds(), evaluator)
}
