// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the picked image next to the magnifier panel.
// 2) The magnifier grid itself, with the focus pixel boxed in red.
// 3) A crosshair at the focus, markup lines, and a tiny 5x7 bitmap font for the HUD.

use crate::error::Error;
use crate::geometry::Point2D;
use crate::magnifier::Magnifier;
use crate::pixels::{PixelSource, Region};
use crate::types::{pack_rgba, FrameBuffer};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub const GRID_LINE: u32 = 0x00_F0_F0_F0;
pub const BORDER: u32 = 0x00_C0_C0_C0; // silver
pub const FOCUS_BOX: u32 = 0x00_FF_00_00;
pub const BLANK: u32 = 0x00_20_20_20; // cells the truncated window doesn't cover

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in window pixels; `None` while the pointer is outside the window.
    pub fn mouse_pos(&self) -> Option<(usize, usize)> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| (x.max(0.0) as usize, y.max(0.0) as usize))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// True on press, then again on key-repeat while held, so nudges can slide.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, KeyRepeat::Yes)
    }

    /// Enter on either the main block or the keypad confirms the focus.
    pub fn enter_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::Enter, KeyRepeat::No)
            || self.window.is_key_pressed(Key::NumPadEnter, KeyRepeat::No)
    }

    /// Visual: when pressed, the entered coordinates (and their markup line) disappear.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }
}

/* ---------- Software drawing: pixels, lines, rects ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0, x1, y1) = (x0, y0, x1, y1);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Fill a rectangle, clipped to the framebuffer; work is bounded by the
/// visible part no matter how large (w,h) are.
pub fn fill_rect(fb: &mut FrameBuffer, x: i64, y: i64, w: i64, h: i64, color: u32) {
    if w <= 0 || h <= 0 { return; }
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = x.saturating_add(w).min(fb.width as i64);
    let y1 = y.saturating_add(h).min(fb.height as i64);
    for yy in y0..y1 {
        let row = yy as usize * fb.width;
        for xx in x0..x1 {
            fb.pixels[row + xx as usize] = color;
        }
    }
}

/// 1-pixel outline; (x,y) is the top-left pixel of the outline itself.
pub fn stroke_rect(fb: &mut FrameBuffer, x: i64, y: i64, w: i64, h: i64, color: u32) {
    if w <= 0 || h <= 0 { return; }
    fill_rect(fb, x, y, w, 1, color);
    fill_rect(fb, x, y.saturating_add(h - 1), w, 1, color);
    fill_rect(fb, x, y, 1, h, color);
    fill_rect(fb, x.saturating_add(w - 1), y, 1, h, color);
}

/// Draw a small crosshair centered at (cx,cy).
/// Visual: a "+" shape with a gap, so the pixel under it stays visible.
pub fn draw_crosshair(fb: &mut FrameBuffer, cx: i32, cy: i32, size: i32, color: u32) {
    draw_line(fb, cx - size, cy, cx - 2, cy, color);
    draw_line(fb, cx + 2, cy, cx + size, cy, color);
    draw_line(fb, cx, cy - size, cx, cy - 2, color);
    draw_line(fb, cx, cy + 2, cx, cy + size, color);
}

/// Copy a decoded image into the framebuffer with its top-left at (x,y).
pub fn blit_image(fb: &mut FrameBuffer, source: &dyn PixelSource, x: i32, y: i32) {
    for sy in 0..source.height() {
        for sx in 0..source.width() {
            if let Some(c) = source.pixel_at(sx, sy) {
                put_pixel(fb, x + sx as i32, y + sy as i32, pack_rgba(c));
            }
        }
    }
}

/* ---------- Markup ---------- */

/// Stateless overlay shapes drawn on top of the image, in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupElement {
    Line { from: Point2D, to: Point2D, color: u32 },
}

/// Draw markup with the image's origin at (ox,oy) on screen.
pub fn draw_markup(fb: &mut FrameBuffer, ox: i32, oy: i32, elements: &[MarkupElement]) {
    for element in elements {
        match *element {
            MarkupElement::Line { from, to, color } => draw_line(
                fb,
                ox + from.x as i32,
                oy + from.y as i32,
                ox + to.x as i32,
                oy + to.y as i32,
                color,
            ),
        }
    }
}

/* ---------- Magnifier panel ---------- */

/// Where and how large the magnifier grid is drawn.
#[derive(Debug, Clone, Copy)]
pub struct MagnifierView {
    pub x: i64,
    pub y: i64,
    pub cell_size: u32,
}

impl MagnifierView {
    /// Screen size of the panel including its 1-pixel border.
    pub fn extent(&self, magnifier: &Magnifier) -> usize {
        let side = magnifier.size().saturating_mul(self.cell_size as u64);
        usize::try_from(side).unwrap_or(usize::MAX).saturating_add(2)
    }

    /// Visual: a grid of big square pixels around the focus. The focus cell
    /// sits in the middle with a red box; near image edges the missing
    /// cells are left blank rather than shifting the grid.
    pub fn draw(&self, fb: &mut FrameBuffer, magnifier: &Magnifier, focus: Point2D, region: &Region<'_>) {
        let side = i64::try_from(magnifier.size().saturating_mul(self.cell_size as u64)).unwrap_or(i64::MAX / 2);
        let cell = self.cell_size as i64;
        let (gx, gy) = (self.x + 1, self.y + 1);

        fill_rect(fb, gx, gy, side, side, BLANK);
        stroke_rect(fb, self.x, self.y, side + 2, side + 2, BORDER);

        // Columns/rows the clamped window lost on its low side.
        let window = magnifier.window(focus, region);
        let lead_x = window.x as i64 - (focus.x as i64 - magnifier.margin as i64);
        let lead_y = window.y as i64 - (focus.y as i64 - magnifier.margin as i64);

        for c in magnifier.extract(focus, region) {
            let px = gx.saturating_add((lead_x + c.column as i64).saturating_mul(cell));
            let py = gy.saturating_add((lead_y + c.row as i64).saturating_mul(cell));
            if px >= fb.width as i64 || py >= fb.height as i64 {
                continue; // off-screen with a very wide margin
            }
            fill_rect(fb, px, py, cell, cell, pack_rgba(c.color));
            if cell >= 3 {
                // light grid on the right/bottom edge of each cell
                fill_rect(fb, px + cell - 1, py, 1, cell, GRID_LINE);
                fill_rect(fb, px, py + cell - 1, cell, 1, GRID_LINE);
            }
            if c.is_focus {
                stroke_rect(fb, px - 1, py - 1, cell + 1, cell + 1, FOCUS_BOX);
            }
        }
    }
}

/* ---------- 5x7 bitmap font (uppercase, digits, a little punctuation) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        ',' => g!(0b00000,0b00000,0b00000,0b00000,0b00110,0b00100,0b01000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '[' => g!(0b01110,0b01000,0b01000,0b01000,0b01000,0b01000,0b01110),
        ']' => g!(0b01110,0b00010,0b00010,0b00010,0b00010,0b00010,0b01110),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y) with a 1-pixel black shadow.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (pass_color, shift) in [(0x00000000, 1), (color, 0)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        put_pixel(fb, x + rx as i32 + shift, y + ry as i32 + shift, pass_color);
                    }
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs (6 pixels per character).
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
