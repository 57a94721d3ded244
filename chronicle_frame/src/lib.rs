// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronicle_frame --heading-base-level=0

//! Chronicle Frame: redraw coalescing and level-of-detail policy.
//!
//! Continuous pan/zoom gestures produce far more transform changes than
//! frames. This crate keeps the per-frame work bounded from two directions:
//!
//! - [`FrameScheduler`] coalesces invalidations into at most one pending
//!   redraw request. A new request supersedes the previous one; there is
//!   no frame queue and no backlog, and teardown cancels synchronously.
//! - [`LodPolicy`] decides how much detail a frame renders from the
//!   visible year span and whether the user is mid-gesture: tick step and
//!   tick count caps, whether event text labels are drawn at all, label
//!   thinning deep into a zoom, and a simplified single-line fallback for
//!   spans too wide to render tick-by-tick.
//!
//! The scheduler is platform-neutral: hosts drain it from whatever frame
//! pacing primitive they have (vsync callback, timer, or manual stepping
//! in tests).
//!
//! ## Minimal example
//!
//! ```rust
//! use chronicle_frame::{DetailLevel, FrameScheduler, LodPolicy};
//!
//! let mut scheduler = FrameScheduler::new();
//! scheduler.schedule(true);
//! scheduler.schedule(false); // supersedes: newest request wins
//!
//! let request = scheduler.take().unwrap();
//! assert!(!request.interacting);
//! assert!(scheduler.take().is_none());
//!
//! let policy = LodPolicy::default();
//! let frame = policy.decide(60_000.0, request.interacting);
//! assert_eq!(frame.detail, DetailLevel::Simplified);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod lod;
mod scheduler;

pub use lod::{DetailLevel, LodFrame, LodPolicy, grid_years, marker_zoom_factor, tick_step};
pub use scheduler::{FrameRequest, FrameScheduler};
