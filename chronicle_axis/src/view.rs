// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::scale::YearScale;

/// Default minimum zoom factor.
const SCALE_MIN: f64 = 0.01;
/// Default maximum zoom factor.
const SCALE_MAX: f64 = 500.0;
/// Translate extent multipliers, in viewport widths, on each side.
///
/// The extent allows generous overscroll while keeping the domain
/// reachable; panning can never move the view indefinitely off the data.
const TRANSLATE_BEFORE: f64 = 4.0;
const TRANSLATE_AFTER: f64 = 5.0;

/// Pan/zoom state of the axis: a horizontal translation and a uniform
/// horizontal scale factor.
///
/// The vertical axis is never transformed. Values are meaningful only
/// together with the [`YearScale`] they were produced against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTransform {
    /// Horizontal translation in pixels.
    pub translate_x: f64,
    /// Zoom factor; `1.0` shows the base mapping.
    pub scale_k: f64,
}

impl AxisTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        scale_k: 1.0,
    };
}

impl Default for AxisTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Transform controller for a timeline axis.
///
/// `AxisView` owns the current [`AxisTransform`] together with the scale
/// extent and the translate extent derived from the viewport width. Every
/// operation clamps silently; no sequence of calls can move the transform
/// outside its bounds. Operations are idempotent given identical inputs
/// and touch nothing but the transform.
#[derive(Clone, Debug)]
pub struct AxisView {
    scale: YearScale,
    transform: AxisTransform,
    min_year: i32,
    max_year: i32,
    width: f64,
    min_k: f64,
    max_k: f64,
    translate_min: f64,
    translate_max: f64,
}

impl AxisView {
    /// Creates a view over the given year extent and viewport width, at
    /// the identity transform.
    #[must_use]
    pub fn new(min_year: i32, max_year: i32, width: f64) -> Self {
        let width = width.max(1.0);
        Self {
            scale: YearScale::new(min_year, max_year, width),
            transform: AxisTransform::IDENTITY,
            min_year,
            max_year,
            width,
            min_k: SCALE_MIN,
            max_k: SCALE_MAX,
            translate_min: -width * TRANSLATE_BEFORE,
            translate_max: width * TRANSLATE_AFTER,
        }
    }

    /// Returns the base scale for the current extent and width.
    #[must_use]
    pub fn scale(&self) -> &YearScale {
        &self.scale
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> AxisTransform {
        self.transform
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn scale_k(&self) -> f64 {
        self.transform.scale_k
    }

    /// Returns the viewport width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Replaces the year extent, keeping the current transform.
    ///
    /// The transform is re-clamped against the (unchanged) translate
    /// extent; the view deliberately does not recenter, so zoom state
    /// survives dataset and filter changes.
    pub fn set_year_extent(&mut self, min_year: i32, max_year: i32) {
        self.min_year = min_year;
        self.max_year = max_year;
        self.scale = YearScale::new(min_year, max_year, self.width);
        self.clamp();
    }

    /// Replaces the viewport width, rebuilding the base scale and the
    /// translate extent.
    pub fn set_width(&mut self, width: f64) {
        let width = width.max(1.0);
        if self.width == width {
            return;
        }
        self.width = width;
        self.scale = YearScale::new(self.min_year, self.max_year, width);
        self.translate_min = -width * TRANSLATE_BEFORE;
        self.translate_max = width * TRANSLATE_AFTER;
        self.clamp();
    }

    /// Zooms by `factor`, keeping the year under `anchor_x` fixed at
    /// `anchor_x`.
    ///
    /// The new scale is clamped into the scale extent first, then the
    /// translation is solved so the anchor's year does not move, then the
    /// translation is clamped into the translate extent.
    pub fn zoom_by(&mut self, factor: f64, anchor_x: f64) {
        if factor <= 0.0 || !factor.is_finite() {
            return;
        }
        let old_k = self.transform.scale_k;
        let new_k = (old_k * factor).clamp(self.min_k, self.max_k);
        // Base-space coordinate under the anchor before the zoom.
        let base_at_anchor = (anchor_x - self.transform.translate_x) / old_k;
        self.transform.scale_k = new_k;
        self.transform.translate_x = anchor_x - base_at_anchor * new_k;
        self.clamp();
    }

    /// Zooms by `factor`, centering the given year at the middle of the
    /// viewport.
    ///
    /// Used for selection-centered zoom: the anchored year is the selected
    /// event's year and the anchor position is the viewport center.
    pub fn zoom_centered_on_year(&mut self, factor: f64, year: f64) {
        if factor <= 0.0 || !factor.is_finite() {
            return;
        }
        let new_k = (self.transform.scale_k * factor).clamp(self.min_k, self.max_k);
        self.transform.scale_k = new_k;
        self.transform.translate_x = self.width * 0.5 - self.scale.base_x(year) * new_k;
        self.clamp();
    }

    /// Pans by a delta in screen pixels, clamping to the translate extent.
    pub fn pan_by(&mut self, delta_x: f64) {
        if delta_x == 0.0 || !delta_x.is_finite() {
            return;
        }
        self.transform.translate_x += delta_x;
        self.clamp();
    }

    /// Resets the transform to identity.
    pub fn reset(&mut self) {
        self.transform = AxisTransform::IDENTITY;
    }

    /// Maps a year to its screen position under the current transform.
    #[must_use]
    pub fn x_for_year(&self, year: f64) -> f64 {
        self.scale.x(year, self.transform)
    }

    /// Maps a screen position to a year under the current transform.
    #[must_use]
    pub fn year_at_x(&self, x: f64) -> f64 {
        self.scale.invert(x, self.transform)
    }

    /// Convenience conversion from a `Point`, using its X coordinate.
    ///
    /// The Y coordinate is ignored; the year axis is horizontal.
    #[must_use]
    pub fn year_at_point(&self, pt: Point) -> f64 {
        self.year_at_x(pt.x)
    }

    /// Year range currently visible through the base pixel range.
    #[must_use]
    pub fn visible_year_range(&self) -> (f64, f64) {
        self.scale.visible_years(self.transform)
    }

    /// Width of the visible year range.
    #[must_use]
    pub fn visible_span(&self) -> f64 {
        let (lo, hi) = self.visible_year_range();
        hi - lo
    }

    /// Snapshot of the current view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> AxisViewDebugInfo {
        AxisViewDebugInfo {
            transform: self.transform,
            visible_year_range: self.visible_year_range(),
            width: self.width,
            min_k: self.min_k,
            max_k: self.max_k,
            translate_extent: (self.translate_min, self.translate_max),
        }
    }

    fn clamp(&mut self) {
        self.transform.scale_k = self.transform.scale_k.clamp(self.min_k, self.max_k);
        self.transform.translate_x = self
            .transform
            .translate_x
            .clamp(self.translate_min, self.translate_max);
    }
}

/// Debug snapshot of an [`AxisView`] state.
#[derive(Clone, Debug)]
pub struct AxisViewDebugInfo {
    /// Current transform.
    pub transform: AxisTransform,
    /// Year range currently visible.
    pub visible_year_range: (f64, f64),
    /// Viewport width in pixels.
    pub width: f64,
    /// Minimum zoom factor.
    pub min_k: f64,
    /// Maximum zoom factor.
    pub max_k: f64,
    /// Translate extent as `(min, max)`.
    pub translate_extent: (f64, f64),
}
