// Read-only pixel access for the magnifier.
// The decoder hands us RGBA bytes; nothing in here ever writes to them.

use crate::error::Error;
use crate::geometry::{Extent, Point2D, Rect2D};
use image::{Rgba, RgbaImage};

/// Anything that can answer "what color is pixel (x,y)".
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// `None` when (x,y) lies outside the buffer.
    fn pixel_at(&self, x: u32, y: u32) -> Option<Rgba<u8>>;

    fn extent(&self) -> Extent {
        Extent::new(self.width(), self.height())
    }
}

/// Decoded raster: row-major RGBA quadruples, `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap decoded bytes. Rejects zero dimensions and a length that doesn't match.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidBuffer(format!(
                "dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(Error::InvalidBuffer(format!(
                "{width}x{height} needs {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self { width, height, data })
    }

    /// Build a buffer by evaluating `f` for every pixel. Handy for synthetic images.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 4]) -> Result<Self, Error> {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self::new(width, height, data)
    }

    #[cfg(test)]
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl PixelSource for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel_at(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = 4 * (x as usize + y as usize * self.width as usize);
        let px = self.data.get(offset..offset + 4)?;
        Some(Rgba([px[0], px[1], px[2], px[3]]))
    }
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel_at(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.get_pixel_checked(x, y).copied()
    }
}

/// A bounds-limited, borrowed view over a pixel source.
#[derive(Clone, Copy)]
pub struct Region<'a> {
    pub bounds: Rect2D,
    source: &'a dyn PixelSource,
}

impl<'a> Region<'a> {
    pub fn new(bounds: Rect2D, source: &'a dyn PixelSource) -> Self {
        Self { bounds, source }
    }

    /// The whole buffer.
    pub fn whole(source: &'a dyn PixelSource) -> Self {
        Self::new(source.extent().rect(), source)
    }

    /// Bounds clipped to what the buffer actually holds.
    pub fn readable_bounds(&self) -> Rect2D {
        self.bounds.intersection(&self.source.extent().rect())
    }

    /// Pixel inside the readable bounds, `None` anywhere else.
    pub fn pixel_at(&self, p: Point2D) -> Option<Rgba<u8>> {
        if !self.readable_bounds().contains(p) {
            return None;
        }
        self.source.pixel_at(p.x, p.y)
    }
}
