// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard shortcuts to timeline actions.
//!
//! The global contract: `+`/`=` zoom in, `-` zoom out, arrow left/right
//! pan, `0`/Escape reset. All shortcuts are suppressed while focus is
//! inside a text input or textarea; the host reports that via
//! [`KeyContext::in_text_field`].

/// Zoom factor for keyboard zoom without a selection.
const KEY_ZOOM_FACTOR: f64 = 1.3;
/// Zoom factor for selection-centered keyboard zoom.
const KEY_ZOOM_FACTOR_SELECTED: f64 = 1.5;

/// Keys the timeline reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// `+` or `=`.
    Plus,
    /// `-`.
    Minus,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// `0`.
    Digit0,
    /// Escape.
    Escape,
}

/// Context a key press is interpreted in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KeyContext {
    /// Focus is inside a text input; all shortcuts are suppressed.
    pub in_text_field: bool,
    /// An event is selected; zoom becomes selection-centered.
    pub has_selection: bool,
    /// Current zoom factor, for pan-step scaling.
    pub scale_k: f64,
}

/// Action a key press maps to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum KeyAction {
    /// Multiply the scale by `factor`; center on the selection when
    /// `selection_centered` is set, otherwise anchor at the viewport
    /// center.
    Zoom {
        /// Multiplicative zoom factor (`> 1` zooms in).
        factor: f64,
        /// Anchor the zoom on the selected event's year.
        selection_centered: bool,
    },
    /// Pan by `delta_x` screen pixels.
    Pan {
        /// Signed horizontal pan, in pixels.
        delta_x: f64,
    },
    /// Reset the transform to identity.
    Reset,
}

/// Pan step for one arrow-key press at the given zoom factor, in pixels.
///
/// The step shrinks as the zoom grows so the perceived on-screen pan speed
/// stays roughly constant, with floors on both sides of the formula to
/// keep extreme zoom levels usable.
#[must_use]
pub fn pan_step(scale_k: f64) -> f64 {
    2.0 * f64::max(50.0, 150.0 / f64::max(scale_k, 0.5))
}

/// Maps a key press to a timeline action.
///
/// Returns `None` when focus is in a text field or the key is not part of
/// the shortcut contract; the host lets the platform handle it.
#[must_use]
pub fn action_for_key(key: Key, ctx: KeyContext) -> Option<KeyAction> {
    if ctx.in_text_field {
        return None;
    }
    let zoom = |factor: f64| KeyAction::Zoom {
        factor,
        selection_centered: ctx.has_selection,
    };
    let factor = if ctx.has_selection {
        KEY_ZOOM_FACTOR_SELECTED
    } else {
        KEY_ZOOM_FACTOR
    };
    Some(match key {
        Key::Plus => zoom(factor),
        Key::Minus => zoom(1.0 / factor),
        // Panning left brings earlier years into view: content moves right.
        Key::ArrowLeft => KeyAction::Pan {
            delta_x: pan_step(ctx.scale_k),
        },
        Key::ArrowRight => KeyAction::Pan {
            delta_x: -pan_step(ctx.scale_k),
        },
        Key::Digit0 | Key::Escape => KeyAction::Reset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(scale_k: f64) -> KeyContext {
        KeyContext {
            in_text_field: false,
            has_selection: false,
            scale_k,
        }
    }

    #[test]
    fn plus_and_minus_zoom() {
        let action = action_for_key(Key::Plus, ctx(1.0));
        assert_eq!(
            action,
            Some(KeyAction::Zoom {
                factor: 1.3,
                selection_centered: false
            })
        );
        let Some(KeyAction::Zoom { factor, .. }) = action_for_key(Key::Minus, ctx(1.0)) else {
            panic!("minus must zoom");
        };
        assert!(factor < 1.0);
    }

    #[test]
    fn selection_switches_to_centered_zoom() {
        let context = KeyContext {
            has_selection: true,
            ..ctx(1.0)
        };
        assert_eq!(
            action_for_key(Key::Plus, context),
            Some(KeyAction::Zoom {
                factor: 1.5,
                selection_centered: true
            })
        );
    }

    #[test]
    fn arrows_pan_in_opposite_directions() {
        let Some(KeyAction::Pan { delta_x: left }) = action_for_key(Key::ArrowLeft, ctx(1.0))
        else {
            panic!("left must pan");
        };
        let Some(KeyAction::Pan { delta_x: right }) = action_for_key(Key::ArrowRight, ctx(1.0))
        else {
            panic!("right must pan");
        };
        assert!(left > 0.0);
        assert_eq!(left, -right);
    }

    #[test]
    fn pan_step_shrinks_as_zoom_grows() {
        assert!(pan_step(0.5) > pan_step(1.0));
        assert!(pan_step(1.0) > pan_step(2.5));
        // Floored at 100 px per press for deep zoom.
        assert_eq!(pan_step(100.0), 100.0);
        // Below the scale floor the step stops growing.
        assert_eq!(pan_step(0.01), pan_step(0.5));
    }

    #[test]
    fn zero_and_escape_reset() {
        assert_eq!(action_for_key(Key::Digit0, ctx(1.0)), Some(KeyAction::Reset));
        assert_eq!(action_for_key(Key::Escape, ctx(1.0)), Some(KeyAction::Reset));
    }

    #[test]
    fn text_fields_suppress_all_shortcuts() {
        let context = KeyContext {
            in_text_field: true,
            ..ctx(1.0)
        };
        for key in [
            Key::Plus,
            Key::Minus,
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::Digit0,
            Key::Escape,
        ] {
            assert_eq!(action_for_key(key, context), None);
        }
    }
}
