// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filter predicate and the visible-subset computation.

use alloc::string::String;
use alloc::vec::Vec;

use crate::event::{Category, Importance, TimelineEvent};

/// User-selected restrictions on the visible event set.
///
/// This is a pure value object: the filter UI mutates it, the core only
/// reads it. Each dimension is a whitelist; an empty whitelist (or an
/// empty search string) means "no restriction". Dimensions combine as AND.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineFilter {
    /// Categories to keep; empty keeps all.
    pub categories: Vec<Category>,
    /// Inclusive year range. A reversed range is normalized before use.
    pub year_range: (i32, i32),
    /// Importance tiers to keep; empty keeps all.
    pub importance: Vec<Importance>,
    /// Case-insensitive substring matched against title, description,
    /// tags, and location name; empty matches all.
    pub search_query: String,
}

impl Default for TimelineFilter {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            year_range: (i32::MIN, i32::MAX),
            importance: Vec::new(),
            search_query: String::new(),
        }
    }
}

impl TimelineFilter {
    /// Returns the year range with the endpoints in ascending order.
    #[must_use]
    pub fn normalized_year_range(&self) -> (i32, i32) {
        let (lo, hi) = self.year_range;
        if lo <= hi { (lo, hi) } else { (hi, lo) }
    }
}

/// Returns `true` if `event` passes every dimension of `filter`.
#[must_use]
pub fn matches(event: &TimelineEvent, filter: &TimelineFilter) -> bool {
    if !filter.categories.is_empty() && !filter.categories.contains(&event.category) {
        return false;
    }

    let (lo, hi) = filter.normalized_year_range();
    if event.year < lo || event.year > hi {
        return false;
    }

    if !filter.importance.is_empty() && !filter.importance.contains(&event.importance) {
        return false;
    }

    if !filter.search_query.is_empty() {
        let query = filter.search_query.to_lowercase();
        let hit = event.title.to_lowercase().contains(&query)
            || event.description.to_lowercase().contains(&query)
            || event
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
            || event
                .location
                .as_ref()
                .is_some_and(|loc| loc.name.to_lowercase().contains(&query));
        if !hit {
            return false;
        }
    }

    true
}

/// Applies `filter` to `events` and returns the matching indices, stably
/// sorted ascending by year.
///
/// Ties keep dataset order, so identical inputs always produce identical
/// output and downstream layout stays deterministic. `O(n log n)`; callers
/// are expected to recompute only when the filter or dataset changes.
#[must_use]
pub fn apply(events: &[TimelineEvent], filter: &TimelineFilter) -> Vec<usize> {
    let mut visible: Vec<usize> = events
        .iter()
        .enumerate()
        .filter(|(_, event)| matches(event, filter))
        .map(|(index, _)| index)
        .collect();
    visible.sort_by_key(|&index| events[index].year);
    visible
}
