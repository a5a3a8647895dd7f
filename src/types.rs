// Screen-side pixel types.

use image::Rgba;

/// What the window shows each frame.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    pub fn fill(&mut self, color: u32) {
        for p in &mut self.pixels { *p = color; }
    }
}

/// Pack RGBA into 0x00RRGGBB, compositing alpha over black
/// (the window has no alpha channel).
#[inline]
pub fn pack_rgba(c: Rgba<u8>) -> u32 {
    let [r, g, b, a] = c.0;
    let a = a as u32;
    let r = (r as u32 * a + 127) / 255;
    let g = (g as u32 * a + 127) / 255;
    let b = (b as u32 * a + 127) / 255;
    (r << 16) | (g << 8) | b
}
