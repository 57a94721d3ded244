// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::view::AxisTransform;

/// Horizontal margin, in pixels, between the viewport edge and the base
/// pixel range on each side.
pub const AXIS_MARGIN: f64 = 80.0;

/// Fraction of the year span added as padding on each side of the domain.
const DOMAIN_PADDING: f64 = 0.1;

/// Linear scale from a padded year domain to a fixed pixel range.
///
/// The base mapping is independent of pan/zoom state; the current
/// [`AxisTransform`] is composed on top of it, so `x = base_x(year) *
/// scale_k + translate_x`. Only the horizontal axis is ever transformed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl YearScale {
    /// Creates a scale over `min_year..=max_year` for a viewport of the
    /// given pixel width.
    ///
    /// The domain is the year extent padded by 10% of the span on each
    /// side. A degenerate extent (`min_year == max_year`, or a reversed
    /// pair) is widened to a span of at least one year so the mapping
    /// stays invertible. The pixel range is `[AXIS_MARGIN, width -
    /// AXIS_MARGIN]`, with a one-pixel floor for very narrow viewports.
    #[must_use]
    pub fn new(min_year: i32, max_year: i32, width: f64) -> Self {
        let (lo, hi) = if min_year <= max_year {
            (f64::from(min_year), f64::from(max_year))
        } else {
            (f64::from(max_year), f64::from(min_year))
        };
        let span = (hi - lo).max(1.0);
        let center = (lo + hi) * 0.5;
        let pad = span * DOMAIN_PADDING;
        let half = span * 0.5 + pad;

        let range_min = AXIS_MARGIN;
        let range_max = (width - AXIS_MARGIN).max(range_min + 1.0);

        Self {
            domain_min: center - half,
            domain_max: center + half,
            range_min,
            range_max,
        }
    }

    /// Padded year domain as `(min, max)`.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    /// Base pixel range as `(min, max)`.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    /// Maps a year to its untransformed base pixel position.
    #[must_use]
    pub fn base_x(&self, year: f64) -> f64 {
        let t = (year - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    /// Inverse of [`YearScale::base_x`].
    #[must_use]
    pub fn base_invert(&self, x: f64) -> f64 {
        let t = (x - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }

    /// Maps a year to a screen position under the given transform.
    #[must_use]
    pub fn x(&self, year: f64, transform: AxisTransform) -> f64 {
        self.base_x(year) * transform.scale_k + transform.translate_x
    }

    /// Maps a screen position back to a year under the given transform.
    #[must_use]
    pub fn invert(&self, x: f64, transform: AxisTransform) -> f64 {
        self.base_invert((x - transform.translate_x) / transform.scale_k)
    }

    /// Year range currently visible through the base pixel range, as
    /// `(min, max)`.
    #[must_use]
    pub fn visible_years(&self, transform: AxisTransform) -> (f64, f64) {
        let a = self.invert(self.range_min, transform);
        let b = self.invert(self.range_max, transform);
        if a <= b { (a, b) } else { (b, a) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_domain_and_fixed_range() {
        let scale = YearScale::new(-3000, 2000, 1000.0);
        let (lo, hi) = scale.domain();
        // 10% of the 5000-year span on each side.
        assert_eq!(lo, -3500.0);
        assert_eq!(hi, 2500.0);
        assert_eq!(scale.range(), (80.0, 920.0));
    }

    #[test]
    fn base_round_trip() {
        let scale = YearScale::new(-3000, 2000, 1000.0);
        for year in [-3000.0, -1.0, 0.0, 712.5, 2000.0] {
            let back = scale.base_invert(scale.base_x(year));
            assert!((back - year).abs() < 1e-9, "round trip failed for {year}");
        }
    }

    #[test]
    fn transformed_round_trip() {
        let scale = YearScale::new(0, 100, 800.0);
        let transform = AxisTransform {
            translate_x: -250.0,
            scale_k: 3.0,
        };
        let x = scale.x(50.0, transform);
        assert!((scale.invert(x, transform) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_extent_widens_to_one_year() {
        let scale = YearScale::new(1947, 1947, 1000.0);
        let (lo, hi) = scale.domain();
        assert!(hi - lo >= 1.0, "domain must have non-zero width");
        // The single year sits at the center of the widened domain.
        let x = scale.base_x(1947.0);
        assert!((x - 500.0).abs() < 1e-9);
    }

    #[test]
    fn narrow_viewport_keeps_positive_range() {
        let scale = YearScale::new(0, 10, 100.0);
        let (lo, hi) = scale.range();
        assert!(hi > lo, "range must not collapse");
    }

    #[test]
    fn identity_transform_matches_base() {
        let scale = YearScale::new(0, 100, 800.0);
        let identity = AxisTransform::IDENTITY;
        assert_eq!(scale.x(25.0, identity), scale.base_x(25.0));
    }
}
