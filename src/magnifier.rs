// Pixel-neighborhood extraction for the magnifier view.
//
// The window is a (2*margin+1)^2 square centered on the focus. It is clamped
// at the low edges and truncated at the high edges of the region: cells that
// would fall outside are simply not produced, so no read ever leaves the
// buffer. Cells come out row-major so a renderer can lay them straight into
// a fixed grid.

use crate::geometry::{Point2D, Rect2D};
use crate::pixels::Region;
use image::Rgba;

/// One magnified pixel, positioned relative to the visible window's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnifiedCell {
    pub column: u32,
    pub row: u32,
    pub color: Rgba<u8>,
    pub is_focus: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnifier {
    pub margin: u32,
}

impl Magnifier {
    pub fn new(margin: u32) -> Self {
        Self { margin }
    }

    /// Side length of the full (untruncated) window. Wider than `margin` so
    /// `u32::MAX` still fits.
    pub fn size(&self) -> u64 {
        2 * self.margin as u64 + 1
    }

    /// Visible part of the window around `focus`, in image space. Empty when
    /// the window misses the region entirely.
    pub fn window(&self, focus: Point2D, region: &Region<'_>) -> Rect2D {
        visible_window(focus, self.margin, region.readable_bounds())
    }

    pub fn extract(&self, focus: Point2D, region: &Region<'_>) -> Vec<MagnifiedCell> {
        extract(focus, self.margin, region)
    }
}

/// Row-major cells of the visible window around `focus`.
pub fn extract(focus: Point2D, margin: u32, region: &Region<'_>) -> Vec<MagnifiedCell> {
    let window = visible_window(focus, margin, region.readable_bounds());
    if window.is_empty() {
        return Vec::new();
    }

    let mut cells = Vec::with_capacity(window.width as usize * window.height as usize);
    for row in 0..window.height {
        for column in 0..window.width {
            let pixel = Point2D::new(window.x + column, window.y + row);
            // Inside readable bounds by construction.
            let Some(color) = region.pixel_at(pixel) else { continue };
            cells.push(MagnifiedCell { column, row, color, is_focus: pixel == focus });
        }
    }
    cells
}

// Clamp the origin up to the bounds, then truncate the far edge to the bounds.
fn visible_window(focus: Point2D, margin: u32, bounds: Rect2D) -> Rect2D {
    let margin = margin as i64;
    let (fx, fy) = (focus.x as i64, focus.y as i64);

    let x0 = (bounds.x as i64).max(fx - margin);
    let y0 = (bounds.y as i64).max(fy - margin);
    let x1 = (bounds.right() as i64).min(fx + margin + 1);
    let y1 = (bounds.bottom() as i64).min(fy + margin + 1);

    if x1 <= x0 || y1 <= y0 {
        return Rect2D::new(bounds.x, bounds.y, 0, 0);
    }
    Rect2D::new(x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32)
}
