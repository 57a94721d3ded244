// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition with spatial tolerance.
//!
//! A pointer-down followed by a pointer-up within a small distance is a
//! click; anything that moved further is a drag and produces no click.
//! Clicks on a marker or label select that event and are consumed, so the
//! host must not also run its empty-canvas deselect path; clicks on empty
//! canvas clear the selection.

use kurbo::Point;

/// Default maximum pointer travel for a press to still count as a click,
/// in pixels.
pub const CLICK_TOLERANCE: f64 = 3.0;

/// Result of a completed click.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A marker or label was clicked; select this event. The click is
    /// consumed and must not propagate to the deselect handler.
    Select(usize),
    /// Empty canvas was clicked; clear the selection.
    Deselect,
}

/// Tracks one press/release pair.
#[derive(Copy, Clone, Debug, Default)]
pub struct ClickState {
    pressed: Option<(Point, Option<usize>)>,
}

impl ClickState {
    /// Records a pointer-down at `pos`, optionally over an event's marker
    /// or label.
    pub fn on_down(&mut self, target: Option<usize>, pos: Point) {
        self.pressed = Some((pos, target));
    }

    /// Records the matching pointer-up.
    ///
    /// Returns `None` when no press was recorded or when the pointer
    /// travelled beyond `tolerance` (the gesture was a drag).
    pub fn on_up(&mut self, pos: Point, tolerance: f64) -> Option<ClickOutcome> {
        let (down_pos, target) = self.pressed.take()?;
        if (pos - down_pos).hypot() > tolerance {
            return None;
        }
        Some(match target {
            Some(index) => ClickOutcome::Select(index),
            None => ClickOutcome::Deselect,
        })
    }

    /// Discards any recorded press.
    pub fn cancel(&mut self) {
        self.pressed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stationary_press_on_marker_selects() {
        let mut clicks = ClickState::default();
        clicks.on_down(Some(4), Point::new(100.0, 50.0));
        let outcome = clicks.on_up(Point::new(101.0, 51.0), CLICK_TOLERANCE);
        assert_eq!(outcome, Some(ClickOutcome::Select(4)));
    }

    #[test]
    fn press_on_empty_canvas_deselects() {
        let mut clicks = ClickState::default();
        clicks.on_down(None, Point::new(100.0, 50.0));
        let outcome = clicks.on_up(Point::new(100.0, 50.0), CLICK_TOLERANCE);
        assert_eq!(outcome, Some(ClickOutcome::Deselect));
    }

    #[test]
    fn dragged_press_is_not_a_click() {
        let mut clicks = ClickState::default();
        clicks.on_down(Some(4), Point::new(100.0, 50.0));
        let outcome = clicks.on_up(Point::new(140.0, 50.0), CLICK_TOLERANCE);
        assert_eq!(outcome, None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut clicks = ClickState::default();
        assert_eq!(clicks.on_up(Point::new(0.0, 0.0), CLICK_TOLERANCE), None);
    }

    #[test]
    fn cancel_discards_the_press() {
        let mut clicks = ClickState::default();
        clicks.on_down(Some(1), Point::new(0.0, 0.0));
        clicks.cancel();
        assert_eq!(clicks.on_up(Point::new(0.0, 0.0), CLICK_TOLERANCE), None);
    }
}
