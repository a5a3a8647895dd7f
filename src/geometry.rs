// Image-space geometry shared by the focus tracker and the magnifier.
// Everything here is in pixel units with (0,0) at the top-left corner.

/// A single pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point2D {
    pub x: u32,
    pub y: u32,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0, y: 0 };

    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Largest axis delta between two points (square distance).
    pub fn chebyshev_distance(self, other: Point2D) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

/// Axis-aligned box. `right()`/`bottom()` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect2D {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect2D {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    #[inline]
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.x && (p.x as u64) < self.right() && p.y >= self.y && (p.y as u64) < self.bottom()
    }

    /// Overlap of two boxes; an empty box (at the clamped origin) when they don't touch.
    pub fn intersection(&self, other: &Rect2D) -> Rect2D {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        Rect2D {
            x: x0,
            y: y0,
            width: x1.saturating_sub(x0 as u64) as u32,
            height: y1.saturating_sub(y0 as u64) as u32,
        }
    }
}

/// Dimensions of the loaded image; what nudges and pointer input get clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> Rect2D {
        Rect2D::new(0, 0, self.width, self.height)
    }

    /// Pull a point into `[0, width-1] x [0, height-1]`.
    pub fn clamp(&self, p: Point2D) -> Point2D {
        Point2D {
            x: p.x.min(self.width.saturating_sub(1)),
            y: p.y.min(self.height.saturating_sub(1)),
        }
    }

    /// Move `p` by a signed offset, stopping at the edges.
    pub fn offset(&self, p: Point2D, dx: i32, dy: i32) -> Point2D {
        let x = (p.x as i64 + dx as i64).max(0);
        let y = (p.y as i64 + dy as i64).max(0);
        self.clamp(Point2D {
            x: x.min(u32::MAX as i64) as u32,
            y: y.min(u32::MAX as i64) as u32,
        })
    }
}
