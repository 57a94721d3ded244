// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronicle_axis --heading-base-level=0

//! Chronicle Axis: year-axis scale mapping and pan/zoom transform control.
//!
//! This crate provides the headless coordinate model of a horizontal
//! timeline: a fixed base scale from a padded year domain to a pixel range,
//! and a clamped `{translate_x, scale_k}` transform layered on top of it.
//! It focuses on:
//!
//! - Year ↔ pixel conversion under the current transform ([`YearScale`]).
//! - Transform state with scale and translate extents ([`AxisView`]).
//! - Pointer-anchored and selection-centered zoom, pan, and reset.
//!
//! It does **not** own the event set, layout, or rendering. Callers wire
//! input events into [`AxisView`] operations at a higher layer and read the
//! resulting mapping back out each frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronicle_axis::AxisView;
//!
//! // Axis over 3139 BCE..=1950 CE in a 1000 px viewport.
//! let mut view = AxisView::new(-3139, 1950, 1000.0);
//!
//! // Zoom in, keeping the year under x=400 fixed at x=400.
//! let year_before = view.year_at_x(400.0);
//! view.zoom_by(2.0, 400.0);
//! assert!((view.x_for_year(year_before) - 400.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Only the horizontal axis is transformed; there is no vertical zoom.
//! - All operations clamp silently to the configured extents; nothing in
//!   this crate panics or returns errors on out-of-range input.
//! - A degenerate dataset (single year) is widened to a minimum one-year
//!   domain so the mapping never divides by zero.
//!
//! This crate is `no_std`.

#![no_std]

mod scale;
mod view;

pub use scale::{AXIS_MARGIN, YearScale};
pub use view::{AxisTransform, AxisView, AxisViewDebugInfo};
