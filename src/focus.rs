// Focus/anchor state machine.
//
// Two modes: Free (focus follows the pointer) and Anchored (focus is pinned
// until the pointer leaves a small square dead zone around the anchor).
// Every transition returns a fresh `FocusState`; nothing is updated in place,
// so replaying the same events from INITIAL always lands on the same state.

use crate::geometry::{Extent, Point2D};
use log::debug;

/// How far (Chebyshev, in pixels) the pointer must move before an anchor lets go.
pub const ANCHOR_RELEASE_MARGIN: u32 = 8;

/// One of the eight compass nudges. Screen y grows downward, so North is (0,-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Unit (dx, dy) for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }
}

/// Input the host delivers to the tracker, already in image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    PointerDown(Point2D),
    PointerMove(Point2D),
    Nudge(Direction),
    Commit,
}

/// Current pixel under inspection plus the pinned point, if any.
/// While `anchor` is `Some`, `focus` equals it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusState {
    pub focus: Point2D,
    pub anchor: Option<Point2D>,
}

impl Default for FocusState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl FocusState {
    pub const INITIAL: FocusState = FocusState { focus: Point2D::ORIGIN, anchor: None };

    pub fn is_anchored(&self) -> bool {
        self.anchor.is_some()
    }

    fn anchored_at(p: Point2D) -> Self {
        Self { focus: p, anchor: Some(p) }
    }

    fn free_at(p: Point2D) -> Self {
        Self { focus: p, anchor: None }
    }

    /// Next state after `event`. `extent` is the loaded image, if any:
    /// pointer points are clamped into it and nudges need it to do anything.
    pub fn reduce(self, event: FocusEvent, extent: Option<Extent>) -> FocusState {
        let clamp = |p: Point2D| extent.map_or(p, |e| e.clamp(p));
        match event {
            FocusEvent::PointerDown(p) => {
                let p = clamp(p);
                debug!("anchor pinned at ({}, {})", p.x, p.y);
                Self::anchored_at(p)
            }
            FocusEvent::PointerMove(p) => {
                let p = clamp(p);
                match self.anchor {
                    None => Self::free_at(p),
                    Some(anchor) if anchor.chebyshev_distance(p) > ANCHOR_RELEASE_MARGIN => {
                        debug!("anchor at ({}, {}) released", anchor.x, anchor.y);
                        Self::free_at(p)
                    }
                    Some(_) => self,
                }
            }
            FocusEvent::Nudge(direction) => match extent {
                Some(e) => {
                    let (dx, dy) = direction.offset();
                    Self::anchored_at(e.offset(self.focus, dx, dy))
                }
                None => self,
            },
            FocusEvent::Commit => Self::anchored_at(self.focus),
        }
    }

    /// Fold `events` from INITIAL.
    pub fn replay<I>(events: I, extent: Option<Extent>) -> FocusState
    where
        I: IntoIterator<Item = FocusEvent>,
    {
        events
            .into_iter()
            .fold(FocusState::INITIAL, |state, event| state.reduce(event, extent))
    }
}

/// Host-side holder of the current state and the image extent it is clamped to.
#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    state: FocusState,
    extent: Option<Extent>,
}

impl FocusTracker {
    pub fn new(extent: Option<Extent>) -> Self {
        Self { state: FocusState::INITIAL, extent }
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn extent(&self) -> Option<Extent> {
        self.extent
    }

    /// A new image (or none) invalidates every coordinate we had; start over.
    pub fn set_extent(&mut self, extent: Option<Extent>) {
        self.extent = extent;
        self.state = FocusState::INITIAL;
    }

    pub fn apply(&mut self, event: FocusEvent) -> FocusState {
        self.state = self.state.reduce(event, self.extent);
        self.state
    }

    pub fn pointer_down(&mut self, p: Point2D) -> FocusState {
        self.apply(FocusEvent::PointerDown(p))
    }

    pub fn pointer_move(&mut self, p: Point2D) -> FocusState {
        self.apply(FocusEvent::PointerMove(p))
    }

    pub fn nudge(&mut self, direction: Direction) -> FocusState {
        self.apply(FocusEvent::Nudge(direction))
    }

    pub fn commit(&mut self) -> FocusState {
        self.apply(FocusEvent::Commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENT: Option<Extent> = Some(Extent::new(100, 80));

    fn anchored(x: u32, y: u32) -> FocusState {
        FocusState::INITIAL.reduce(FocusEvent::PointerDown(Point2D::new(x, y)), EXTENT)
    }

    #[test]
    fn starts_free_at_origin() {
        let tracker = FocusTracker::new(EXTENT);
        assert_eq!(tracker.state(), FocusState { focus: Point2D::ORIGIN, anchor: None });
    }

    #[test]
    fn free_focus_follows_pointer() {
        let s = FocusState::INITIAL.reduce(FocusEvent::PointerMove(Point2D::new(40, 30)), EXTENT);
        assert_eq!(s.focus, Point2D::new(40, 30));
        assert!(!s.is_anchored());
    }

    #[test]
    fn pointer_down_anchors_from_any_state() {
        let p = Point2D::new(12, 34);
        for prior in [FocusState::INITIAL, anchored(50, 50), anchored(12, 34)] {
            let s = prior.reduce(FocusEvent::PointerDown(p), EXTENT);
            assert_eq!(s.focus, p);
            assert_eq!(s.anchor, Some(p));
        }
    }

    #[test]
    fn dead_zone_holds_anchor() {
        let start = anchored(50, 50);
        for dy in -8i32..=8 {
            for dx in -8i32..=8 {
                let p = Point2D::new((50 + dx) as u32, (50 + dy) as u32);
                assert_eq!(start.reduce(FocusEvent::PointerMove(p), EXTENT), start, "moved to {p:?}");
            }
        }
    }

    #[test]
    fn leaving_dead_zone_releases_anchor() {
        let start = anchored(50, 50);
        for p in [Point2D::new(59, 50), Point2D::new(41, 50), Point2D::new(50, 59), Point2D::new(58, 41)] {
            let s = start.reduce(FocusEvent::PointerMove(p), EXTENT);
            assert_eq!(s, FocusState { focus: p, anchor: None });
        }
    }

    #[test]
    fn dead_zone_is_square_not_round() {
        // (8,8) away is Euclidean ~11.3 but Chebyshev 8: still held.
        let start = anchored(20, 20);
        let s = start.reduce(FocusEvent::PointerMove(Point2D::new(28, 28)), EXTENT);
        assert_eq!(s, start);
    }

    #[test]
    fn nudge_west_at_origin_stays_put() {
        let s = FocusState::INITIAL.reduce(FocusEvent::Nudge(Direction::West), EXTENT);
        assert_eq!(s.focus, Point2D::ORIGIN);
        assert_eq!(s.anchor, Some(Point2D::ORIGIN));
    }

    #[test]
    fn nudge_clamps_at_far_corner() {
        let corner = anchored(99, 79);
        for d in Direction::ALL {
            let s = corner.reduce(FocusEvent::Nudge(d), EXTENT);
            assert!(s.focus.x <= 99 && s.focus.y <= 79);
            assert_eq!(s.anchor, Some(s.focus));
        }
        let s = corner.reduce(FocusEvent::Nudge(Direction::NorthWest), EXTENT);
        assert_eq!(s.focus, Point2D::new(98, 78));
    }

    #[test]
    fn nudge_without_image_is_noop() {
        let s = FocusState::INITIAL.reduce(FocusEvent::PointerMove(Point2D::new(5, 5)), None);
        assert_eq!(s.reduce(FocusEvent::Nudge(Direction::East), None), s);
    }

    #[test]
    fn nudge_anchors_so_small_jitter_is_ignored() {
        let mut tracker = FocusTracker::new(EXTENT);
        tracker.pointer_move(Point2D::new(10, 10));
        tracker.nudge(Direction::SouthEast);
        assert_eq!(tracker.state().focus, Point2D::new(11, 11));
        let s = tracker.pointer_move(Point2D::new(13, 9));
        assert_eq!(s.focus, Point2D::new(11, 11));
    }

    #[test]
    fn commit_pins_without_moving() {
        let mut tracker = FocusTracker::new(EXTENT);
        tracker.pointer_move(Point2D::new(7, 9));
        let s = tracker.commit();
        assert_eq!(s, FocusState { focus: Point2D::new(7, 9), anchor: Some(Point2D::new(7, 9)) });
    }

    #[test]
    fn pointer_points_are_clamped_to_image() {
        let s = FocusState::INITIAL.reduce(FocusEvent::PointerMove(Point2D::new(500, 500)), EXTENT);
        assert_eq!(s.focus, Point2D::new(99, 79));
    }

    #[test]
    fn pointer_down_outside_image_anchors_at_edge() {
        let s = anchored(500, 500);
        assert_eq!(s, FocusState { focus: Point2D::new(99, 79), anchor: Some(Point2D::new(99, 79)) });
    }

    #[test]
    fn set_extent_resets_state() {
        let mut tracker = FocusTracker::new(EXTENT);
        tracker.pointer_down(Point2D::new(30, 30));
        tracker.set_extent(Some(Extent::new(10, 10)));
        assert_eq!(tracker.state(), FocusState::INITIAL);
    }

    #[test_log::test]
    fn replay_matches_live_tracker() {
        let events = [
            FocusEvent::PointerMove(Point2D::new(20, 20)),
            FocusEvent::PointerDown(Point2D::new(21, 22)),
            FocusEvent::PointerMove(Point2D::new(25, 25)),
            FocusEvent::Nudge(Direction::North),
            FocusEvent::PointerMove(Point2D::new(60, 5)),
            FocusEvent::Commit,
        ];
        let mut tracker = FocusTracker::new(EXTENT);
        for e in events {
            tracker.apply(e);
        }
        assert_eq!(FocusState::replay(events, EXTENT), tracker.state());
        assert_eq!(tracker.state(), FocusState { focus: Point2D::new(60, 5), anchor: Some(Point2D::new(60, 5)) });
    }
}
