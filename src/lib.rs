//! Pick exact pixel coordinates from an image.
//!
//! The core is two pure pieces: [`focus`] (where the user is looking, and
//! whether that point is pinned) and [`magnifier`] (the pixels around that
//! point, truncated at the image edges). The rest is the host around them:
//! decoding, a minifb window, and input translation.

pub mod cli;
pub mod draw;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod input;
pub mod loader;
pub mod magnifier;
pub mod pixels;
pub mod session;
pub mod types;

pub use error::Error;
pub use focus::{Direction, FocusEvent, FocusState, FocusTracker, ANCHOR_RELEASE_MARGIN};
pub use geometry::{Extent, Point2D, Rect2D};
pub use magnifier::{extract, MagnifiedCell, Magnifier};
pub use pixels::{PixelBuffer, PixelSource, Region};
