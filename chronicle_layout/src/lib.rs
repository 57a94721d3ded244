// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronicle_layout --heading-base-level=0

//! Chronicle Layout: collision-free label placement on a timeline axis.
//!
//! Given the visible events and a candidate tick-year list, this crate
//! assigns every label a side of the axis (above/below) and a vertical
//! offset so that horizontal spans, padded by a configured gap, do not
//! overlap. The algorithm is a two-pass greedy sweep:
//!
//! 1. **Tick pass**: tick years (the requested grid union all visible
//!    event years, deduplicated and ascending) default to below the axis
//!    and flip above when the default side already has a conflicting
//!    neighbor; when both sides conflict, the side with fewer conflicts
//!    wins.
//! 2. **Event pass**: event labels default to above the axis, are checked
//!    against tick labels and previously placed event labels on both
//!    sides, prefer a conflict-free side, and otherwise stack outward one
//!    [`LayoutConfig::vertical_spacing`] step per conflicting neighbor on
//!    the chosen side.
//!
//! The sweep is deterministic and order-dependent: ticks are placed before
//! events and events are processed in year order. It is a heuristic, not a
//! global optimizer — dense clusters stack several levels deep rather than
//! finding a minimal arrangement. That behavior is part of the visual
//! contract and is deliberately preserved.
//!
//! Label widths are approximations (a per-character estimate, not shaped
//! text); see [`estimate_label_width`].
//!
//! ## Minimal example
//!
//! ```rust
//! use chronicle_layout::{EventLabel, LayoutConfig, layout};
//!
//! let config = LayoutConfig::default();
//! let events = [EventLabel { year: 1947.0, width: 100.0, key: 0 }];
//! let ticks = [1900.0, 1950.0, 2000.0];
//!
//! let result = layout(&events, &ticks, |year| year - 1800.0, &config);
//! assert_eq!(result.event_positions.len(), 1);
//! // Event years are always present in the tick set.
//! assert_eq!(result.year_positions.len(), 4);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use smallvec::SmallVec;

/// Width assumed for every tick (year) label, in pixels.
const YEAR_LABEL_WIDTH: f64 = 80.0;
/// Height assumed for every label, in pixels.
const LABEL_HEIGHT: f64 = 20.0;
/// Horizontal gap required between event labels, in pixels.
const EVENT_LABEL_GAP: f64 = 10.0;
/// Axis offset for tick labels on event years vs. plain grid years.
const YEAR_OFFSET_EVENT: f64 = 35.0;
const YEAR_OFFSET_GRID: f64 = 25.0;
/// Maximum characters of an event title before truncation.
const TITLE_MAX_CHARS: usize = 18;

/// Which side of the axis a label sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// Above the axis line.
    Above,
    /// Below the axis line.
    Below,
}

/// Geometry parameters for a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Total height of the drawing area, in pixels.
    pub height: f64,
    /// Y coordinate of the axis line.
    pub center_y: f64,
    /// Horizontal gap required between tick labels, in pixels.
    pub min_spacing: f64,
    /// Vertical distance between stack levels, in pixels.
    pub vertical_spacing: f64,
    /// Distance from the axis to the first event-label row, in pixels.
    pub default_offset: f64,
    /// Upper bound on side-search attempts, kept for config parity; the
    /// stacking pass derives its level from the conflict count and does
    /// not iterate.
    pub max_attempts: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            height: 350.0,
            center_y: 175.0,
            min_spacing: 15.0,
            vertical_spacing: 30.0,
            default_offset: 35.0,
            max_attempts: 8,
        }
    }
}

/// Input to the event pass: one label to place.
///
/// The caller resolves titles to widths up front (see
/// [`estimate_label_width`]); `key` is an opaque handle carried through to
/// the output, typically an index into the visible event slice.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EventLabel {
    /// Year the label is anchored to.
    pub year: f64,
    /// Approximate rendered width, in pixels.
    pub width: f64,
    /// Caller-defined handle identifying the event.
    pub key: usize,
}

/// Placement computed for one tick label.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct YearLabelPosition {
    /// Horizontal center, in pixels.
    pub x: f64,
    /// Baseline position, in pixels.
    pub y: f64,
    /// Assumed label width, in pixels.
    pub width: f64,
    /// Assumed label height, in pixels.
    pub height: f64,
    /// Year this tick marks; fractional at deep zoom.
    pub year: f64,
    /// Side of the axis the label was placed on.
    pub side: Side,
    /// Whether an event occurs exactly at this year.
    pub is_event_year: bool,
}

/// Placement computed for one event label.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EventLabelPosition {
    /// Horizontal center, in pixels.
    pub x: f64,
    /// Baseline position, in pixels.
    pub y: f64,
    /// Approximate label width, in pixels.
    pub width: f64,
    /// Assumed label height, in pixels.
    pub height: f64,
    /// Side of the axis the label was placed on.
    pub side: Side,
    /// Handle from the corresponding [`EventLabel`].
    pub key: usize,
}

/// Result of a layout pass: fresh arrays, never mutated in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    /// Placements for event labels, in input order.
    pub event_positions: Vec<EventLabelPosition>,
    /// Placements for tick labels, ascending by year.
    pub year_positions: Vec<YearLabelPosition>,
}

/// Truncates an event title for display, appending `...` past
/// [`TITLE_MAX_CHARS`] characters.
#[must_use]
pub fn truncate_title(title: &str) -> String {
    let mut chars = title.chars();
    let head: String = chars.by_ref().take(TITLE_MAX_CHARS).collect();
    if chars.next().is_some() {
        let mut out = head;
        out.push_str("...");
        out
    } else {
        head
    }
}

/// Approximates the rendered width of a label, in pixels.
///
/// A flat per-character estimate; exact typography metrics are out of
/// scope, and the layout gaps absorb the error.
#[must_use]
pub fn estimate_label_width(text: &str) -> f64 {
    text.chars().count() as f64 * 6.0 + 10.0
}

/// Returns `true` if two label spans, centered at `x1`/`x2` with widths
/// `w1`/`w2`, come closer than `gap` horizontally.
fn overlaps(x1: f64, w1: f64, x2: f64, w2: f64, gap: f64) -> bool {
    !(x1 + w1 * 0.5 + gap < x2 - w2 * 0.5 || x2 + w2 * 0.5 + gap < x1 - w1 * 0.5)
}

/// Computes a collision-free placement for event and tick labels.
///
/// `events` must be in year-ascending order (the order the filter engine
/// produces); `grid_years` is the requested tick grid. Event years are
/// always added to the tick set. `scale` maps a year to its screen X.
///
/// Identical inputs yield identical output; there is no hidden randomness
/// or time dependence.
#[must_use]
pub fn layout(
    events: &[EventLabel],
    grid_years: &[f64],
    scale: impl Fn(f64) -> f64,
    config: &LayoutConfig,
) -> Layout {
    let year_positions = place_year_labels(events, grid_years, &scale, config);
    let event_positions = place_event_labels(events, &year_positions, &scale, config);
    Layout {
        event_positions,
        year_positions,
    }
}

/// Tick pass: place year labels, alternating sides on conflict.
fn place_year_labels(
    events: &[EventLabel],
    grid_years: &[f64],
    scale: &impl Fn(f64) -> f64,
    config: &LayoutConfig,
) -> Vec<YearLabelPosition> {
    // Union of grid years and event years, deduplicated via bit patterns
    // (all values are exact halves or integers; negative zero normalized).
    let mut seen: HashSet<u64> = HashSet::new();
    let mut years: Vec<f64> = Vec::with_capacity(grid_years.len() + events.len());
    for &year in grid_years.iter().chain(events.iter().map(|e| &e.year)) {
        let year = if year == 0.0 { 0.0 } else { year };
        if seen.insert(year.to_bits()) {
            years.push(year);
        }
    }
    years.sort_unstable_by(f64::total_cmp);

    let mut event_years: HashSet<u64> = HashSet::new();
    for event in events {
        let year = if event.year == 0.0 { 0.0 } else { event.year };
        event_years.insert(year.to_bits());
    }

    let mut positions: Vec<YearLabelPosition> = Vec::with_capacity(years.len());
    for year in years {
        let x = scale(year);
        let is_event_year = event_years.contains(&year.to_bits());

        let conflicts: SmallVec<[Side; 8]> = positions
            .iter()
            .filter(|pos| overlaps(x, YEAR_LABEL_WIDTH, pos.x, pos.width, config.min_spacing))
            .map(|pos| pos.side)
            .collect();

        let mut side = Side::Below;
        if !conflicts.is_empty() {
            let below = conflicts.iter().filter(|&&s| s == Side::Below).count();
            let above = conflicts.len() - below;
            side = if below > 0 && above == 0 {
                Side::Above
            } else if above > 0 && below == 0 {
                Side::Below
            } else if below <= above {
                Side::Below
            } else {
                Side::Above
            };
        }

        let offset = if is_event_year {
            YEAR_OFFSET_EVENT
        } else {
            YEAR_OFFSET_GRID
        };
        let y = match side {
            Side::Below => config.center_y + offset,
            Side::Above => config.center_y - offset,
        };

        positions.push(YearLabelPosition {
            x,
            y,
            width: YEAR_LABEL_WIDTH,
            height: LABEL_HEIGHT,
            year,
            side,
            is_event_year,
        });
    }
    positions
}

/// Event pass: place event labels against ticks and one another.
fn place_event_labels(
    events: &[EventLabel],
    year_positions: &[YearLabelPosition],
    scale: &impl Fn(f64) -> f64,
    config: &LayoutConfig,
) -> Vec<EventLabelPosition> {
    let mut positions: Vec<EventLabelPosition> = Vec::with_capacity(events.len());

    for event in events {
        let x = scale(event.year);
        let width = event.width;

        // A tick on the exact event year always counts as a conflict,
        // even when the approximate widths would not touch.
        let year_conflicts: SmallVec<[Side; 8]> = year_positions
            .iter()
            .filter(|pos| {
                pos.year == event.year || overlaps(x, width, pos.x, pos.width, EVENT_LABEL_GAP)
            })
            .map(|pos| pos.side)
            .collect();
        let event_conflicts: SmallVec<[Side; 8]> = positions
            .iter()
            .filter(|pos| overlaps(x, width, pos.x, pos.width, EVENT_LABEL_GAP))
            .map(|pos| pos.side)
            .collect();

        let mut side = Side::Above;
        let above_any = year_conflicts
            .iter()
            .chain(event_conflicts.iter())
            .any(|&s| s == Side::Above);
        if above_any {
            let below = year_conflicts
                .iter()
                .chain(event_conflicts.iter())
                .filter(|&&s| s == Side::Below)
                .count();
            if below == 0 {
                side = Side::Below;
            } else {
                let above = year_conflicts.len() + event_conflicts.len() - below;
                side = if below < above { Side::Below } else { Side::Above };
            }
        }

        let mut y = match side {
            Side::Above => config.center_y - config.default_offset,
            Side::Below => config.center_y + config.default_offset,
        };

        // Stack outward one level per conflicting neighbor already on the
        // chosen side.
        let stack_level = year_positions
            .iter()
            .map(|pos| (pos.side, pos.x, pos.width))
            .chain(positions.iter().map(|pos| (pos.side, pos.x, pos.width)))
            .filter(|&(s, px, pw)| s == side && overlaps(x, width, px, pw, EVENT_LABEL_GAP))
            .count();
        if stack_level > 0 {
            let push = stack_level as f64 * config.vertical_spacing;
            y = match side {
                Side::Above => y - push,
                Side::Below => y + push,
            };
        }

        positions.push(EventLabelPosition {
            x,
            y,
            width,
            height: LABEL_HEIGHT,
            side,
            key: event.key,
        });
    }
    positions
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn linear(year: f64) -> f64 {
        400.0 + year * 2.0
    }

    #[test]
    fn truncation_keeps_short_titles() {
        assert_eq!(truncate_title("Gupta Empire"), "Gupta Empire");
        assert_eq!(
            truncate_title("Construction of the Brihadeeswarar Temple"),
            "Construction of th..."
        );
    }

    #[test]
    fn width_estimate_grows_with_length() {
        assert_eq!(estimate_label_width(""), 10.0);
        assert_eq!(estimate_label_width("abcd"), 34.0);
    }

    #[test]
    fn event_years_are_always_ticks() {
        let events = [EventLabel {
            year: 712.0,
            width: 60.0,
            key: 0,
        }];
        let result = layout(&events, &[500.0, 1000.0], linear, &LayoutConfig::default());
        let years: Vec<f64> = result.year_positions.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![500.0, 712.0, 1000.0]);
        assert!(result.year_positions[1].is_event_year);
        assert!(!result.year_positions[0].is_event_year);
    }

    #[test]
    fn duplicate_tick_years_are_deduplicated() {
        let events = [EventLabel {
            year: 500.0,
            width: 40.0,
            key: 0,
        }];
        let result = layout(
            &events,
            &[500.0, 500.0, 600.0],
            linear,
            &LayoutConfig::default(),
        );
        assert_eq!(result.year_positions.len(), 2);
    }

    #[test]
    fn isolated_labels_take_default_sides() {
        let config = LayoutConfig::default();
        let events = [EventLabel {
            year: 100.0,
            width: 50.0,
            key: 7,
        }];
        let result = layout(&events, &[-200.0], linear, &config);

        // Ticks default below, events above.
        assert!(
            result
                .year_positions
                .iter()
                .all(|p| p.side == Side::Below || p.is_event_year)
        );
        let event = &result.event_positions[0];
        assert_eq!(event.side, Side::Above);
        assert_eq!(event.y, config.center_y - config.default_offset);
        assert_eq!(event.key, 7);
    }

    #[test]
    fn crowded_ticks_alternate_sides() {
        // Two ticks 20 px apart with 80 px labels must split across the axis.
        let result = layout(
            &[],
            &[0.0, 10.0],
            linear,
            &LayoutConfig::default(),
        );
        assert_eq!(result.year_positions[0].side, Side::Below);
        assert_eq!(result.year_positions[1].side, Side::Above);
    }

    #[test]
    fn event_year_ticks_sit_further_from_the_axis() {
        let config = LayoutConfig::default();
        let events = [EventLabel {
            year: 0.0,
            width: 40.0,
            key: 0,
        }];
        let result = layout(&events, &[1000.0], linear, &config);
        let event_tick = result.year_positions.iter().find(|p| p.is_event_year);
        let grid_tick = result.year_positions.iter().find(|p| !p.is_event_year);
        let event_tick = event_tick.expect("event tick present");
        let grid_tick = grid_tick.expect("grid tick present");
        assert!(
            (event_tick.y - config.center_y).abs() > (grid_tick.y - config.center_y).abs(),
            "event-year ticks use the larger offset"
        );
    }

    #[test]
    fn coincident_long_titles_split_or_stack() {
        // Scenario: two events at the same year with long titles must not
        // end up at the same position.
        let events = [
            EventLabel {
                year: 1000.0,
                width: 118.0,
                key: 0,
            },
            EventLabel {
                year: 1000.0,
                width: 118.0,
                key: 1,
            },
        ];
        let result = layout(&events, &[], linear, &LayoutConfig::default());
        let [a, b] = [&result.event_positions[0], &result.event_positions[1]];
        assert!(
            a.side != b.side || a.y != b.y,
            "coincident labels must differ in side or stack level"
        );
    }

    #[test]
    fn same_side_same_row_labels_never_overlap() {
        let config = LayoutConfig::default();
        let events: Vec<EventLabel> = (0..6)
            .map(|i| EventLabel {
                year: i as f64 * 12.0,
                width: 70.0,
                key: i,
            })
            .collect();
        let result = layout(&events, &[-100.0, 0.0, 100.0], linear, &config);

        for (i, a) in result.event_positions.iter().enumerate() {
            for b in result.event_positions.iter().skip(i + 1) {
                if a.side == b.side && a.y == b.y {
                    assert!(
                        !overlaps(a.x, a.width, b.x, b.width, 0.0),
                        "labels for {} and {} overlap at y={}",
                        a.key,
                        b.key,
                        a.y
                    );
                }
            }
        }
    }

    #[test]
    fn stacking_pushes_away_from_the_axis() {
        let config = LayoutConfig::default();
        // Three wide labels at nearly the same position: the third must be
        // at least one level further out than the default row on its side.
        let events = [
            EventLabel {
                year: 0.0,
                width: 118.0,
                key: 0,
            },
            EventLabel {
                year: 1.0,
                width: 118.0,
                key: 1,
            },
            EventLabel {
                year: 2.0,
                width: 118.0,
                key: 2,
            },
        ];
        let result = layout(&events, &[], linear, &config);
        let deepest = result
            .event_positions
            .iter()
            .map(|p| (p.y - config.center_y).abs())
            .fold(0.0, f64::max);
        assert!(
            deepest >= config.default_offset + config.vertical_spacing,
            "a third coincident label must stack at least one level out"
        );
    }

    #[test]
    fn layout_is_deterministic() {
        let events = [
            EventLabel {
                year: -500.0,
                width: 90.0,
                key: 0,
            },
            EventLabel {
                year: -490.0,
                width: 64.0,
                key: 1,
            },
            EventLabel {
                year: 320.0,
                width: 110.0,
                key: 2,
            },
        ];
        let ticks = [-500.0, -250.0, 0.0, 250.0, 500.0];
        let config = LayoutConfig::default();

        let first = layout(&events, &ticks, linear, &config);
        let second = layout(&events, &ticks, linear, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_inputs_produce_empty_layout() {
        let result = layout(&[], &[], linear, &LayoutConfig::default());
        assert!(result.event_positions.is_empty());
        assert!(result.year_positions.is_empty());
    }
}
