// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronicle_timeline --heading-base-level=0

//! Chronicle Timeline: the interactive timeline visualization instance.
//!
//! This crate composes the focused `chronicle_*` building blocks into one
//! self-contained [`Timeline`]: an immutable event dataset behind a filter,
//! a selection, a clamped pan/zoom axis, a frame scheduler, and the input
//! state machines. Each render pass produces a retained
//! [`chronicle_scene::Scene`] that a thin platform adapter draws; the core
//! itself never touches a rendering API.
//!
//! Hosts drive the instance through three kinds of entry points:
//!
//! - **Data**: [`Timeline::set_filter`], [`Timeline::set_width`],
//!   [`Timeline::select`].
//! - **Input**: [`Timeline::on_wheel`], [`Timeline::on_pointer_down`] /
//!   [`Timeline::on_pointer_move`] / [`Timeline::on_pointer_up`],
//!   [`Timeline::on_key`], plus the imperative [`Timeline::zoom_in`] /
//!   [`Timeline::zoom_out`] / [`Timeline::reset`] surface for external
//!   buttons.
//! - **Frames**: entry points return [`Signal`]s; on
//!   [`Signal::FrameRequested`] the host arranges one callback from its
//!   frame-pacing primitive and calls [`Timeline::render_pending`] there.
//!
//! Everything is single-threaded and synchronous: all state changes happen
//! inside the entry points, at most one frame request is ever pending, and
//! dropping the instance drops any pending request with it — there is
//! nothing asynchronous to cancel beyond that.
//!
//! ## Example
//!
//! ```rust
//! use chronicle_events::TimelineEvent;
//! use chronicle_scene::Theme;
//! use chronicle_timeline::{Signal, Timeline};
//!
//! let events = vec![
//!     TimelineEvent::new("a", "Mauryan accession", -321),
//!     TimelineEvent::new("b", "Independence", 1947),
//! ];
//! let mut timeline = Timeline::new(events, 1000.0);
//!
//! // Wheel-zoom toward x=500, then render the requested frame.
//! let signals = timeline.on_wheel(-120.0, 500.0);
//! assert!(signals.contains(&Signal::FrameRequested));
//!
//! let theme = Theme::light();
//! let scene = timeline.render_pending(&theme).expect("a frame was pending");
//! assert!(!scene.is_empty());
//! ```

mod signal;
mod timeline;

pub use signal::Signal;
pub use timeline::Timeline;
