// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signals returned from timeline entry points.

/// A state change the host should react to.
///
/// Entry points return these as values instead of invoking callbacks; the
/// host relays them to whatever owns the surrounding UI (selection
/// details, zoom indicators, frame pacing).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Signal {
    /// The selection changed; `Some` carries the dataset index of the now
    /// selected event.
    SelectionChanged(Option<usize>),
    /// The transform's scale factor changed.
    ZoomChanged(f64),
    /// A redraw was scheduled; the host should arrange one frame callback
    /// and call [`crate::Timeline::render_pending`] from it.
    FrameRequested,
}
