// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronicle_input --heading-base-level=0

//! Chronicle Input: interaction state machines for a pan/zoom timeline.
//!
//! This crate normalizes raw pointer, wheel, and keyboard input into the
//! small set of operations a timeline transform controller understands.
//! Each module handles one interaction pattern:
//!
//! - [`drag`]: drag sessions with pan vs. page-scroll disambiguation
//! - [`click`]: click recognition with a spatial tolerance, distinguishing
//!   clicks from the start of a drag
//! - [`wheel`]: wheel deltas to zoom factors
//! - [`keys`]: keyboard shortcuts to zoom/pan/reset actions
//!
//! The crate assumes no particular windowing system or event loop. Hosts
//! feed in positions and deltas in viewport pixels and apply the returned
//! operations to their transform controller. Whether an input was consumed
//! (and should be default-prevented on platforms where that matters, e.g.
//! wheel events that would otherwise scroll the page) is part of each
//! result.
//!
//! ## Drag disambiguation
//!
//! A drag that moves mostly vertically is the user scrolling the page, not
//! panning the timeline. [`drag::DragSession`] starts undecided, classifies
//! the gesture once the cumulative movement leaves a small deadzone, and
//! latches the decision for the rest of the session:
//!
//! ```rust
//! use kurbo::Point;
//! use chronicle_input::drag::{DragSession, DragUpdate};
//!
//! let mut session = DragSession::begin(Point::new(100.0, 100.0));
//!
//! // Mostly horizontal movement: the session becomes a pan and yields deltas.
//! let update = session.update(Point::new(112.0, 103.0));
//! assert_eq!(update, DragUpdate::Pan { delta_x: 12.0 });
//!
//! // A mostly-vertical session would instead yield DragUpdate::PageScroll
//! // for every subsequent move, and the host lets the page scroll.
//! ```

pub mod click;
pub mod drag;
pub mod keys;
pub mod wheel;
