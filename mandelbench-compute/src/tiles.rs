use crate::render::render_rect;
use crate::{EscapeFloat, EscapeTimeEvaluator};
use mandelbench_core::{Grid, PixelRect, RenderStats};
use rayon::prelude::*;

/// Generate tiles covering the grid in row-major order.
///
/// Edge tiles are clipped, so the tiles cover every pixel exactly once.
/// `tile_size` must be non-zero.
pub fn generate_tiles(width: u32, height: u32, tile_size: u32) -> Vec<PixelRect> {
    let mut tiles = Vec::new();

    for y_start in (0..height).step_by(tile_size as usize) {
        for x_start in (0..width).step_by(tile_size as usize) {
            let w = tile_size.min(width - x_start);
            let h = tile_size.min(height - y_start);
            tiles.push(PixelRect::new(x_start, y_start, w, h));
        }
    }

    tiles
}

/// Walk the grid tile by tile on the current rayon pool.
///
/// Each tile folds into its own partial stats; the partials merge with a
/// wrapping checksum, so the result equals the sequential walk.
pub fn render_tiled<T: EscapeFloat>(
    grid: &Grid,
    evaluator: &EscapeTimeEvaluator,
    tile_size: u32,
) -> RenderStats {
    let tiles = generate_tiles(grid.width(), grid.height(), tile_size);
    log::debug!(
        "Rendering {} tiles of {}px on {} threads",
        tiles.len(),
        tile_size,
        rayon::current_num_threads()
    );

    tiles
        .into_par_iter()
        .map(|tile| render_rect::<T>(grid, tile, evaluator))
        .reduce(RenderStats::default, RenderStats::merge)
}
