// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event records and the small vocabulary types attached to them.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Subject area an event belongs to.
///
/// The set is fixed; filters select subsets of it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Philosophical schools and thinkers.
    Philosophy,
    /// Saints and religious figures.
    Saints,
    /// Rulers, dynasties, and courts.
    Rulers,
    /// Invasions and conquests.
    Invasions,
    /// Scriptures and canonical texts.
    Scriptures,
    /// Architecture and monuments.
    Architecture,
    /// Science and mathematics.
    Science,
    /// Arts and cultural movements.
    Culture,
    /// Wars and battles.
    Wars,
    /// Social and religious reforms.
    Reforms,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 10] = [
        Self::Philosophy,
        Self::Saints,
        Self::Rulers,
        Self::Invasions,
        Self::Scriptures,
        Self::Architecture,
        Self::Science,
        Self::Culture,
        Self::Wars,
        Self::Reforms,
    ];

    /// Lower-case label for the category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Philosophy => "philosophy",
            Self::Saints => "saints",
            Self::Rulers => "rulers",
            Self::Invasions => "invasions",
            Self::Scriptures => "scriptures",
            Self::Architecture => "architecture",
            Self::Science => "science",
            Self::Culture => "culture",
            Self::Wars => "wars",
            Self::Reforms => "reforms",
        }
    }
}

/// Ordinal importance of an event, `Low < Medium < High < Critical`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Importance {
    /// Minor event.
    Low,
    /// Notable event.
    Medium,
    /// Major event.
    High,
    /// Landmark event; always kept visible by detail-reduction policies.
    Critical,
}

impl Importance {
    /// Marker radius in pixels for this importance tier.
    #[must_use]
    pub fn marker_radius(self) -> f64 {
        match self {
            Self::Critical => 10.0,
            Self::High => 8.0,
            Self::Medium | Self::Low => 6.0,
        }
    }

    /// Base marker opacity for this importance tier.
    ///
    /// Rendering multiplies this by a zoom-dependent factor, clamped so
    /// markers stay visible at every scale.
    #[must_use]
    pub fn marker_opacity(self) -> f32 {
        match self {
            Self::Critical => 1.0,
            Self::High => 0.95,
            Self::Medium => 0.9,
            Self::Low => 0.85,
        }
    }
}

/// Geographic location attached to an event.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Human-readable place name; participates in text search.
    pub name: String,
}

/// A single immutable timeline event.
///
/// Events are supplied once by the host and never mutated by the core. The
/// `year` field is a signed integer: negative years are BCE, non-negative
/// years are CE. The dataset may arrive unsorted; the core always operates
/// on a year-ascending, stably-sorted view (see [`crate::apply`]).
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEvent {
    /// Unique identifier, host-assigned.
    pub id: String,
    /// Short title shown as the event's label.
    pub title: String,
    /// Longer description; participates in text search only.
    pub description: String,
    /// Signed year (negative = BCE, non-negative = CE).
    pub year: i32,
    /// Subject area.
    pub category: Category,
    /// Ordinal importance; drives marker sizing and detail reduction.
    pub importance: Importance,
    /// Optional geographic location.
    pub location: Option<Location>,
    /// Free-form tags; participate in text search.
    pub tags: Vec<String>,
    /// Source references; not interpreted by the core.
    pub sources: Vec<String>,
}

impl TimelineEvent {
    /// Creates a minimal event with the given id, title, and year.
    ///
    /// Defaults: empty description, [`Category::Culture`],
    /// [`Importance::Medium`], no location, no tags, no sources. Intended
    /// for tests and small fixtures; hosts building real datasets populate
    /// the fields directly.
    #[must_use]
    pub fn new(id: &str, title: &str, year: i32) -> Self {
        Self {
            id: String::from(id),
            title: String::from(title),
            description: String::new(),
            year,
            category: Category::Culture,
            importance: Importance::Medium,
            location: None,
            tags: Vec::new(),
            sources: Vec::new(),
        }
    }
}

/// Formats a signed year using the BCE/CE convention.
///
/// Negative years render as their absolute value with a `BCE` suffix;
/// non-negative years render with a `CE` suffix.
#[must_use]
pub fn format_year(year: i32) -> String {
    if year < 0 {
        format!("{} BCE", year.unsigned_abs())
    } else {
        format!("{year} CE")
    }
}

/// Formats a (possibly fractional) tick year using the BCE/CE convention.
///
/// Grid ticks at deep zoom can land on half years; those render with one
/// decimal place. Whole years defer to [`format_year`].
#[must_use]
pub fn format_tick_year(year: f64) -> String {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "tick years come from the padded i32 domain; used only for a wholeness check"
    )]
    let rounded = year as i64;
    if year == rounded as f64 {
        // In-range whole ticks go through the integer path.
        if let Ok(y) = i32::try_from(rounded) {
            return format_year(y);
        }
    }
    let magnitude = if year < 0.0 { -year } else { year };
    if year < 0.0 {
        format!("{magnitude:.1} BCE")
    } else {
        format!("{magnitude:.1} CE")
    }
}
