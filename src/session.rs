// One inspection session: the focus tracker for the current image plus
// every coordinate the user has entered so far.

use crate::focus::{FocusEvent, FocusState, FocusTracker};
use crate::geometry::{Extent, Point2D};
use log::info;

#[derive(Debug, Default)]
pub struct Session {
    tracker: FocusTracker,
    entered: Vec<Point2D>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh image replaces the old one; the focus starts over but entered
    /// coordinates are kept.
    pub fn load(&mut self, extent: Extent) {
        self.tracker.set_extent(Some(extent));
    }

    pub fn state(&self) -> FocusState {
        self.tracker.state()
    }

    pub fn extent(&self) -> Option<Extent> {
        self.tracker.extent()
    }

    pub fn handle(&mut self, event: FocusEvent) -> FocusState {
        self.tracker.apply(event)
    }

    /// Confirm the current focus: pin it and record it. `None` without an image.
    pub fn enter(&mut self) -> Option<Point2D> {
        self.tracker.extent()?;
        let focus = self.tracker.commit().focus;
        self.entered.push(focus);
        info!("Coordinate entered: [{}, {}]", focus.x, focus.y);
        Some(focus)
    }

    pub fn entered(&self) -> &[Point2D] {
        &self.entered
    }

    pub fn last_entered(&self) -> Option<Point2D> {
        self.entered.last().copied()
    }

    pub fn clear(&mut self) {
        self.entered.clear();
    }

    /// `[x, y], [x, y], ...`
    pub fn coordinates_text(&self) -> String {
        self.entered
            .iter()
            .map(|p| format!("[{}, {}]", p.x, p.y))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
