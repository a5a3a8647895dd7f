use pixel_picker::{Direction, Extent, FocusEvent, FocusState, FocusTracker, Point2D, ANCHOR_RELEASE_MARGIN};

const EXTENT: Extent = Extent::new(64, 48);

fn anchored_at(p: Point2D) -> FocusState {
    FocusState::INITIAL.reduce(FocusEvent::PointerDown(p), Some(EXTENT))
}

#[cfg(test)]
mod anchor_tests {
    use super::*;

    #[test]
    fn test_every_point_in_dead_zone_keeps_anchor() {
        let anchor = Point2D::new(30, 20);
        let start = anchored_at(anchor);
        let m = ANCHOR_RELEASE_MARGIN;
        for y in anchor.y - m..=anchor.y + m {
            for x in anchor.x - m..=anchor.x + m {
                let next = start.reduce(FocusEvent::PointerMove(Point2D::new(x, y)), Some(EXTENT));
                assert_eq!(next.focus, anchor);
                assert_eq!(next.anchor, Some(anchor));
            }
        }
    }

    #[test]
    fn test_every_point_outside_dead_zone_releases() {
        let anchor = Point2D::new(30, 20);
        let start = anchored_at(anchor);
        for y in 0..EXTENT.height {
            for x in 0..EXTENT.width {
                let p = Point2D::new(x, y);
                if p.chebyshev_distance(anchor) <= ANCHOR_RELEASE_MARGIN {
                    continue;
                }
                let next = start.reduce(FocusEvent::PointerMove(p), Some(EXTENT));
                assert_eq!(next, FocusState { focus: p, anchor: None }, "pointer at {p:?}");
            }
        }
    }

    #[test]
    fn test_pointer_down_overrides_everything() {
        let targets = [Point2D::ORIGIN, Point2D::new(63, 47), Point2D::new(10, 40)];
        let priors = [FocusState::INITIAL, anchored_at(Point2D::new(5, 5))];
        for prior in priors {
            for p in targets {
                let next = prior.reduce(FocusEvent::PointerDown(p), Some(EXTENT));
                assert_eq!((next.focus, next.anchor), (p, Some(p)));
            }
        }
    }
}

#[cfg(test)]
mod nudge_tests {
    use super::*;

    #[test]
    fn test_nudges_never_leave_the_image() {
        let corners = [Point2D::ORIGIN, Point2D::new(63, 0), Point2D::new(0, 47), Point2D::new(63, 47)];
        for corner in corners {
            let start = anchored_at(corner);
            for d in Direction::ALL {
                let next = start.reduce(FocusEvent::Nudge(d), Some(EXTENT));
                assert!(next.focus.x < EXTENT.width && next.focus.y < EXTENT.height);
                assert_eq!(next.anchor, Some(next.focus));
            }
        }
    }

    #[test]
    fn test_west_from_origin_clamps() {
        let mut tracker = FocusTracker::new(Some(EXTENT));
        assert_eq!(tracker.nudge(Direction::West).focus, Point2D::ORIGIN);
        assert_eq!(tracker.nudge(Direction::North).focus, Point2D::ORIGIN);
        assert_eq!(tracker.nudge(Direction::SouthEast).focus, Point2D::new(1, 1));
    }

    #[test]
    fn test_walking_east_stops_at_last_column() {
        let mut tracker = FocusTracker::new(Some(EXTENT));
        for _ in 0..200 {
            tracker.nudge(Direction::East);
        }
        assert_eq!(tracker.state().focus, Point2D::new(63, 0));
    }

    #[test]
    fn test_nudge_before_image_loads_does_nothing() {
        let mut tracker = FocusTracker::new(None);
        assert_eq!(tracker.nudge(Direction::South), FocusState::INITIAL);
    }
}

#[cfg(test)]
mod replay_tests {
    use super::*;

    #[test]
    fn test_same_events_same_state() {
        let events: Vec<FocusEvent> = (0..50u32)
            .map(|i| match i % 5 {
                0 => FocusEvent::PointerMove(Point2D::new(i, i / 2)),
                1 => FocusEvent::PointerDown(Point2D::new(i, 3)),
                2 => FocusEvent::Nudge(Direction::ALL[(i % 8) as usize]),
                3 => FocusEvent::PointerMove(Point2D::new(i + 20, 40)),
                _ => FocusEvent::Commit,
            })
            .collect();
        let a = FocusState::replay(events.iter().copied(), Some(EXTENT));
        let b = FocusState::replay(events.iter().copied(), Some(EXTENT));
        assert_eq!(a, b);
    }
}
