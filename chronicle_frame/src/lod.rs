// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Level-of-detail decisions keyed by the visible year span.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`

/// How much of the timeline a frame should render.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DetailLevel {
    /// The span is too wide for a tick grid: draw a single simplified
    /// axis with a "zoom in for details" notice and nothing else.
    Simplified,
    /// Render ticks, markers, and labels per the rest of the frame
    /// parameters.
    Full,
}

/// Detail parameters for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LodFrame {
    /// Overall detail level.
    pub detail: DetailLevel,
    /// Year step between grid ticks.
    pub tick_step: f64,
    /// Upper bound on generated grid ticks (event-year ticks are always
    /// added on top).
    pub max_grid_ticks: usize,
    /// Omit event text labels entirely (markers still render). Selected
    /// events keep their labels regardless.
    pub skip_event_labels: bool,
    /// Keep every `label_stride`-th unselected, non-critical label;
    /// `1` keeps all.
    pub label_stride: usize,
}

/// Thresholds for detail reduction.
///
/// The defaults reproduce the tuning the policy was extracted with; hosts
/// normally use them as-is.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LodPolicy {
    /// Visible span above which rendering falls back to the simplified
    /// axis, in years.
    pub detail_ceiling: f64,
    /// Same ceiling while a gesture is in flight; slightly lower so
    /// interaction never renders the most expensive frames.
    pub interacting_detail_ceiling: f64,
    /// Grid-tick cap when idle.
    pub max_grid_ticks: usize,
    /// While interacting, spans wider than this render no event labels.
    pub label_skip_wide: f64,
    /// While interacting, spans narrower than this render no event labels.
    pub label_skip_narrow: f64,
    /// While interacting, spans narrower than this thin labels to every
    /// [`LodPolicy::thinning_stride`]-th.
    pub thinning_span: f64,
    /// Stride used by label thinning.
    pub thinning_stride: usize,
}

impl Default for LodPolicy {
    fn default() -> Self {
        Self {
            detail_ceiling: 50_000.0,
            interacting_detail_ceiling: 45_000.0,
            max_grid_ticks: 50,
            label_skip_wide: 8_000.0,
            label_skip_narrow: 200.0,
            thinning_span: 100.0,
            thinning_stride: 3,
        }
    }
}

impl LodPolicy {
    /// Chooses detail parameters for a frame.
    #[must_use]
    pub fn decide(&self, visible_span: f64, interacting: bool) -> LodFrame {
        let ceiling = if interacting {
            self.interacting_detail_ceiling
        } else {
            self.detail_ceiling
        };

        let step = tick_step(visible_span, interacting);
        if visible_span > ceiling {
            return LodFrame {
                detail: DetailLevel::Simplified,
                tick_step: step,
                max_grid_ticks: 0,
                skip_event_labels: true,
                label_stride: 1,
            };
        }

        // During interaction the tick budget shrinks with the span, down
        // to a tenth of the idle cap.
        let max_grid_ticks = if interacting {
            let reduction = (visible_span / 1000.0).clamp(0.1, 1.0);
            #[expect(
                clippy::cast_possible_truncation,
                reason = "product of a small cap and a [0.1, 1.0] factor"
            )]
            {
                (self.max_grid_ticks as f64 * reduction).floor() as usize
            }
        } else {
            self.max_grid_ticks
        };

        let skip_event_labels = interacting
            && (visible_span > self.label_skip_wide || visible_span < self.label_skip_narrow);
        let label_stride = if interacting && visible_span < self.thinning_span {
            self.thinning_stride
        } else {
            1
        };

        LodFrame {
            detail: DetailLevel::Full,
            tick_step: step,
            max_grid_ticks,
            skip_event_labels,
            label_stride,
        }
    }
}

/// Year step between grid ticks for a visible span.
///
/// The table is monotonic: wider spans take coarser steps. During
/// interaction the fine end of the table is coarsened one notch to bound
/// frame time.
#[must_use]
pub fn tick_step(visible_span: f64, interacting: bool) -> f64 {
    if visible_span > 10_000.0 {
        2_000.0
    } else if visible_span > 5_000.0 {
        1_000.0
    } else if visible_span > 2_000.0 {
        500.0
    } else if visible_span > 1_000.0 {
        250.0
    } else if visible_span > 500.0 {
        100.0
    } else if visible_span > 200.0 {
        50.0
    } else if visible_span > 100.0 {
        if interacting { 50.0 } else { 25.0 }
    } else if visible_span > 50.0 {
        if interacting { 25.0 } else { 10.0 }
    } else if visible_span > 20.0 {
        if interacting { 10.0 } else { 5.0 }
    } else if visible_span > 10.0 {
        if interacting { 5.0 } else { 2.0 }
    } else if visible_span > 5.0 {
        if interacting { 2.0 } else { 1.0 }
    } else if interacting {
        1.0
    } else {
        0.5
    }
}

/// Generates grid tick years covering `min_year..=max_year`.
///
/// Ticks start at the step multiple at or below `min_year` and advance by
/// `step` until one step past `max_year` or until `cap` ticks were
/// produced, whichever comes first. Event years are not included here;
/// the layout engine adds them.
#[must_use]
pub fn grid_years(min_year: f64, max_year: f64, step: f64, cap: usize) -> Vec<f64> {
    let mut years = Vec::new();
    if step <= 0.0 || !min_year.is_finite() || !max_year.is_finite() || max_year < min_year {
        return years;
    }
    let mut year = (min_year / step).floor() * step;
    while year <= max_year + step && years.len() < cap {
        years.push(year);
        year += step;
    }
    years
}

/// Zoom-dependent scale applied to marker radii.
///
/// Stays at `1.0` for the identity zoom and flattens toward both extremes
/// so markers neither vanish when zoomed far out nor dominate when zoomed
/// far in.
#[must_use]
pub fn marker_zoom_factor(scale_k: f64) -> f64 {
    (2.0 * scale_k / (1.0 + scale_k)).clamp(0.85, 1.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_span_falls_back_to_simplified() {
        let policy = LodPolicy::default();
        let frame = policy.decide(60_000.0, false);
        assert_eq!(frame.detail, DetailLevel::Simplified);
    }

    #[test]
    fn interaction_lowers_the_ceiling() {
        let policy = LodPolicy::default();
        // 47k years renders fully when idle but not mid-gesture.
        assert_eq!(policy.decide(47_000.0, false).detail, DetailLevel::Full);
        assert_eq!(
            policy.decide(47_000.0, true).detail,
            DetailLevel::Simplified
        );
    }

    #[test]
    fn tick_step_is_monotonic_in_span() {
        let spans = [
            4.0, 8.0, 15.0, 30.0, 80.0, 150.0, 300.0, 800.0, 1_500.0, 3_000.0, 8_000.0, 20_000.0,
        ];
        for interacting in [false, true] {
            let mut last = 0.0;
            for span in spans {
                let step = tick_step(span, interacting);
                assert!(
                    step >= last,
                    "step must not shrink as the span grows (span {span})"
                );
                last = step;
            }
        }
    }

    #[test]
    fn tick_step_table_boundaries() {
        assert_eq!(tick_step(20_000.0, false), 2_000.0);
        assert_eq!(tick_step(7_000.0, false), 1_000.0);
        assert_eq!(tick_step(300.0, false), 50.0);
        assert_eq!(tick_step(150.0, false), 25.0);
        assert_eq!(tick_step(150.0, true), 50.0);
        assert_eq!(tick_step(3.0, false), 0.5);
        assert_eq!(tick_step(3.0, true), 1.0);
    }

    #[test]
    fn interaction_caps_tick_budget_by_span() {
        let policy = LodPolicy::default();
        assert_eq!(policy.decide(2_000.0, false).max_grid_ticks, 50);
        assert_eq!(policy.decide(2_000.0, true).max_grid_ticks, 50);
        assert_eq!(policy.decide(500.0, true).max_grid_ticks, 25);
        // Floor of a tenth of the idle cap.
        assert_eq!(policy.decide(10.0, true).max_grid_ticks, 5);
    }

    #[test]
    fn label_skip_band_applies_only_while_interacting() {
        let policy = LodPolicy::default();
        assert!(policy.decide(10_000.0, true).skip_event_labels);
        assert!(policy.decide(150.0, true).skip_event_labels);
        assert!(!policy.decide(1_000.0, true).skip_event_labels);
        assert!(!policy.decide(10_000.0, false).skip_event_labels);
    }

    #[test]
    fn deep_zoom_thins_labels_during_interaction() {
        let policy = LodPolicy::default();
        assert_eq!(policy.decide(80.0, true).label_stride, 3);
        assert_eq!(policy.decide(80.0, false).label_stride, 1);
        assert_eq!(policy.decide(500.0, true).label_stride, 1);
    }

    #[test]
    fn grid_starts_on_a_step_multiple_below_the_span() {
        let years = grid_years(-3_139.0, -3_000.0, 50.0, 50);
        assert_eq!(years.first(), Some(&-3_150.0));
        assert!(years.contains(&-3_100.0));
        assert!(*years.last().expect("non-empty grid") >= -3_000.0);
    }

    #[test]
    fn grid_respects_the_cap() {
        let years = grid_years(0.0, 100_000.0, 1.0, 10);
        assert_eq!(years.len(), 10);
    }

    #[test]
    fn grid_rejects_degenerate_input() {
        assert!(grid_years(0.0, 100.0, 0.0, 50).is_empty());
        assert!(grid_years(100.0, 0.0, 10.0, 50).is_empty());
        assert!(grid_years(f64::NAN, 100.0, 10.0, 50).is_empty());
    }

    #[test]
    fn marker_zoom_factor_is_bounded_and_centered() {
        assert_eq!(marker_zoom_factor(1.0), 1.0);
        assert_eq!(marker_zoom_factor(500.0), 1.2);
        assert_eq!(marker_zoom_factor(0.01), 0.85);
        assert!(marker_zoom_factor(2.0) > 1.0);
        assert!(marker_zoom_factor(0.5) < 1.0);
    }
}
