// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag sessions: pan deltas with pan vs. page-scroll disambiguation.
//!
//! ## Usage
//!
//! 1) Start a session on pointer-down with [`DragSession::begin`].
//! 2) On each move, call [`DragSession::update`]; apply the delta of every
//!    [`DragUpdate::Pan`] to the transform controller.
//! 3) On pointer-up, call [`DragSession::finish`]; if the session panned,
//!    the host should schedule one full-detail re-render.

use kurbo::{Point, Vec2};

/// Cumulative movement below which a gesture stays unclassified, in pixels.
const DEADZONE: f64 = 5.0;
/// Cumulative vertical movement past which a vertical-dominant gesture is
/// handed back to the page, in pixels.
const PAGE_SCROLL_THRESHOLD: f64 = 10.0;

/// How a drag session has been classified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
enum DragClass {
    /// Not enough movement to decide yet.
    #[default]
    Undecided,
    /// Horizontal pan; moves yield deltas.
    Pan,
    /// Vertical page scroll; the timeline ignores the rest of the session.
    PageScroll,
}

/// Result of feeding one pointer move into a [`DragSession`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragUpdate {
    /// Still within the deadzone; nothing to apply.
    Undecided,
    /// Horizontal pan by `delta_x` pixels since the previous move.
    Pan {
        /// Horizontal movement since the last update, in pixels.
        delta_x: f64,
    },
    /// The gesture is a page scroll; the timeline must not pan.
    PageScroll,
}

/// Summary returned when a session ends.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragEnd {
    /// `true` if any [`DragUpdate::Pan`] was produced; the host performs a
    /// final full-detail re-render in that case.
    pub panned: bool,
    /// Total offset from the session start to the final position.
    pub total_offset: Vec2,
}

/// Tracks one pointer-drag session.
///
/// The session records the start and most recent pointer positions and
/// classifies the gesture from cumulative movement. Classification latches:
/// once a session is a pan it stays a pan, and once it is a page scroll
/// every further move is ignored, so a gesture cannot flip mid-flight.
#[derive(Copy, Clone, Debug)]
pub struct DragSession {
    start: Point,
    last: Point,
    class: DragClass,
    panned: bool,
}

impl DragSession {
    /// Starts a session at the given pointer position.
    #[must_use]
    pub fn begin(pos: Point) -> Self {
        Self {
            start: pos,
            last: pos,
            class: DragClass::Undecided,
            panned: false,
        }
    }

    /// Feeds a pointer move into the session.
    pub fn update(&mut self, pos: Point) -> DragUpdate {
        let delta_x = pos.x - self.last.x;
        self.last = pos;

        if self.class == DragClass::Undecided {
            let total = pos - self.start;
            let (dx, dy) = (total.x.abs(), total.y.abs());
            if dy > dx && dy > PAGE_SCROLL_THRESHOLD {
                self.class = DragClass::PageScroll;
            } else if dx >= DEADZONE || dy >= DEADZONE {
                self.class = DragClass::Pan;
            }
        }

        match self.class {
            DragClass::Undecided => DragUpdate::Undecided,
            DragClass::PageScroll => DragUpdate::PageScroll,
            DragClass::Pan => {
                self.panned = true;
                DragUpdate::Pan { delta_x }
            }
        }
    }

    /// Returns `true` while the session is classified as a pan.
    #[must_use]
    pub fn is_pan(&self) -> bool {
        self.class == DragClass::Pan
    }

    /// Ends the session at the given position.
    #[must_use]
    pub fn finish(self, pos: Point) -> DragEnd {
        DragEnd {
            panned: self.panned,
            total_offset: pos - self.start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_movement_becomes_a_pan() {
        let mut session = DragSession::begin(Point::new(0.0, 0.0));
        assert_eq!(
            session.update(Point::new(8.0, 1.0)),
            DragUpdate::Pan { delta_x: 8.0 }
        );
        assert_eq!(
            session.update(Point::new(11.0, 2.0)),
            DragUpdate::Pan { delta_x: 3.0 }
        );
        assert!(session.is_pan());
    }

    #[test]
    fn vertical_movement_is_handed_to_the_page() {
        let mut session = DragSession::begin(Point::new(50.0, 50.0));
        assert_eq!(
            session.update(Point::new(52.0, 65.0)),
            DragUpdate::PageScroll
        );
        // Later horizontal movement cannot reclaim the gesture.
        assert_eq!(
            session.update(Point::new(90.0, 66.0)),
            DragUpdate::PageScroll
        );
        assert!(!session.is_pan());
    }

    #[test]
    fn deadzone_movement_stays_undecided() {
        let mut session = DragSession::begin(Point::new(0.0, 0.0));
        assert_eq!(session.update(Point::new(2.0, 2.0)), DragUpdate::Undecided);
        assert_eq!(session.update(Point::new(3.0, 1.0)), DragUpdate::Undecided);
    }

    #[test]
    fn pan_classification_latches() {
        let mut session = DragSession::begin(Point::new(0.0, 0.0));
        session.update(Point::new(10.0, 0.0));
        // Strong vertical movement after the pan latched still pans.
        assert_eq!(
            session.update(Point::new(10.0, 100.0)),
            DragUpdate::Pan { delta_x: 0.0 }
        );
    }

    #[test]
    fn diagonal_movement_within_vertical_threshold_pans() {
        // dy > dx but dy below the page-scroll threshold: the gesture
        // leaves the deadzone, so it classifies as a pan.
        let mut session = DragSession::begin(Point::new(0.0, 0.0));
        assert_eq!(
            session.update(Point::new(3.0, 8.0)),
            DragUpdate::Pan { delta_x: 3.0 }
        );
    }

    #[test]
    fn finish_reports_pan_and_total_offset() {
        let mut session = DragSession::begin(Point::new(10.0, 10.0));
        session.update(Point::new(30.0, 12.0));
        let end = session.finish(Point::new(30.0, 12.0));
        assert!(end.panned);
        assert_eq!(end.total_offset, Vec2::new(20.0, 2.0));
    }

    #[test]
    fn finish_without_movement_reports_no_pan() {
        let session = DragSession::begin(Point::new(10.0, 10.0));
        let end = session.finish(Point::new(10.0, 10.0));
        assert!(!end.panned);
        assert_eq!(end.total_offset, Vec2::new(0.0, 0.0));
    }
}
