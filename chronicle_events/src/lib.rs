// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronicle_events --heading-base-level=0

//! Chronicle Events: event data model and filter engine.
//!
//! This crate defines the immutable event records a timeline is built from
//! and the filter predicate that reduces the full dataset to the visible
//! subset. It knows nothing about coordinates, layout, or rendering; those
//! live in the other `chronicle_*` crates.
//!
//! The core pieces are:
//!
//! - [`TimelineEvent`]: an immutable record with a signed year
//!   (negative = BCE, non-negative = CE), a [`Category`], an ordinal
//!   [`Importance`], and optional location/tags/sources.
//! - [`TimelineFilter`]: a plain value object combining category,
//!   year-range, importance, and substring-search restrictions.
//! - [`apply`]: evaluates a filter over a dataset and returns the indices
//!   of matching events, stably sorted ascending by year.
//!
//! ## Filter semantics
//!
//! Restrictions combine as AND across dimensions and OR within each
//! dimension's selected set. An empty category/importance set and an empty
//! search string mean "no restriction". A reversed year range is
//! normalized (swapped) rather than silently matching nothing.
//!
//! ```rust
//! use chronicle_events::{TimelineEvent, TimelineFilter, apply};
//!
//! let events = vec![
//!     TimelineEvent::new("a", "Indus seals", -3102),
//!     TimelineEvent::new("b", "Partition", 1947),
//! ];
//!
//! let mut filter = TimelineFilter::default();
//! filter.year_range = (0, 2000);
//!
//! let visible = apply(&events, &filter);
//! assert_eq!(visible, vec![1]);
//! ```
//!
//! ## Sort stability
//!
//! The output is sorted ascending by year with ties kept in dataset order,
//! so downstream layout is deterministic for identical inputs.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod filter;

pub use event::{Category, Importance, Location, TimelineEvent, format_tick_year, format_year};
pub use filter::{TimelineFilter, apply, matches};
