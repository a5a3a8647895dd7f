// Host-side input translation: window keys and mouse samples become FocusEvents.
// minifb only gives us polled state, so edges (press, movement) are detected here.

use crate::focus::{Direction, FocusEvent};
use crate::geometry::{Extent, Point2D};
use minifb::Key;

/// Numeric keypad nudges, laid out like the keypad itself (8 = up, 3 = down-right).
pub fn nudge_for_key(key: Key) -> Option<Direction> {
    match key {
        Key::NumPad1 => Some(Direction::SouthWest),
        Key::NumPad2 => Some(Direction::South),
        Key::NumPad3 => Some(Direction::SouthEast),
        Key::NumPad4 => Some(Direction::West),
        Key::NumPad6 => Some(Direction::East),
        Key::NumPad7 => Some(Direction::NorthWest),
        Key::NumPad8 => Some(Direction::North),
        Key::NumPad9 => Some(Direction::NorthEast),
        _ => None,
    }
}

/// Keys polled for nudges each frame.
pub const NUDGE_KEYS: [Key; 8] = [
    Key::NumPad1,
    Key::NumPad2,
    Key::NumPad3,
    Key::NumPad4,
    Key::NumPad6,
    Key::NumPad7,
    Key::NumPad8,
    Key::NumPad9,
];

/// Remembers last frame's mouse sample so we only emit events on change.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_pos: Option<Point2D>,
    was_down: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's sample (window pixel coordinates, button state).
    /// The image is drawn at the window origin, so anything outside `image`
    /// is not over the picture and produces nothing.
    pub fn sample(&mut self, pos: Option<(usize, usize)>, down: bool, image: Extent) -> Vec<FocusEvent> {
        let mut events = Vec::new();
        let point = pos
            .filter(|&(x, y)| x < image.width as usize && y < image.height as usize)
            .map(|(x, y)| Point2D::new(x as u32, y as u32));

        if let Some(p) = point {
            // A stationary pointer must not keep re-sending its position,
            // or a keyboard nudge far from it would be undone next frame.
            if self.last_pos != Some(p) {
                events.push(FocusEvent::PointerMove(p));
            }
            if down && !self.was_down {
                events.push(FocusEvent::PointerDown(p));
            }
        }

        self.last_pos = point;
        self.was_down = down;
        events
    }
}
