// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The timeline instance: dataset, filter, selection, transform, frames.

use kurbo::Point;

use chronicle_axis::AxisView;
use chronicle_events::{TimelineEvent, TimelineFilter, apply, format_tick_year};
use chronicle_frame::{
    DetailLevel, FrameRequest, FrameScheduler, LodPolicy, grid_years, marker_zoom_factor,
};
use chronicle_input::click::{CLICK_TOLERANCE, ClickOutcome, ClickState};
use chronicle_input::drag::{DragSession, DragUpdate};
use chronicle_input::keys::{Key, KeyAction, KeyContext, action_for_key};
use chronicle_input::wheel;
use chronicle_layout::{
    EventLabel, LayoutConfig, Side, estimate_label_width, layout, truncate_title,
};
use chronicle_scene::{FontWeight, Scene, SceneNode, Theme};

use crate::signal::Signal;

/// Zoom factor used by the imperative `zoom_in`/`zoom_out` surface.
const BUTTON_ZOOM_FACTOR: f64 = 1.5;
/// Horizontal slack outside the axis range within which nodes still
/// render, in pixels.
const CULL_MARGIN: f64 = 100.0;
/// Extra marker radius for the selected event, in pixels.
const SELECTED_RADIUS_BONUS: f64 = 4.0;
/// Vertical inset between a connector end and its label baseline.
const CONNECTOR_LABEL_INSET: f64 = 8.0;

/// Where a zoom operation is anchored.
enum ZoomAnchor {
    /// Keep the year under this viewport X fixed.
    At(f64),
    /// Keep the year under the viewport center fixed; when an event is
    /// selected, center on that event's year instead.
    CenterOrSelection,
}

/// An interactive pan/zoom timeline over an immutable event dataset.
///
/// One instance owns its transform, selection, and pending frame
/// exclusively; nothing is shared across instances. See the crate docs
/// for the host protocol.
#[derive(Debug)]
pub struct Timeline {
    events: Vec<TimelineEvent>,
    filter: TimelineFilter,
    /// Indices into `events`, ascending by year (stable).
    visible: Vec<usize>,
    selected: Option<usize>,
    view: AxisView,
    scheduler: FrameScheduler,
    lod: LodPolicy,
    layout_config: LayoutConfig,
    drag: Option<DragSession>,
    clicks: ClickState,
    /// Scene from the most recent render pass; also the hit-test surface.
    scene: Scene,
}

impl Timeline {
    /// Creates a timeline over `events` for a viewport of the given pixel
    /// width, with no filter restrictions and the identity transform.
    #[must_use]
    pub fn new(events: Vec<TimelineEvent>, width: f64) -> Self {
        let filter = TimelineFilter::default();
        let visible = apply(&events, &filter);
        let (min_year, max_year) = extent(&events, &visible);
        Self {
            events,
            filter,
            visible,
            selected: None,
            view: AxisView::new(min_year, max_year, width),
            scheduler: FrameScheduler::new(),
            lod: LodPolicy::default(),
            layout_config: LayoutConfig::default(),
            drag: None,
            clicks: ClickState::default(),
            scene: Scene::new(),
        }
    }

    /// The full dataset, in host order.
    #[must_use]
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Number of events passing the current filter.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Events passing the current filter, ascending by year.
    pub fn visible_events(&self) -> impl Iterator<Item = &TimelineEvent> {
        self.visible.iter().map(|&index| &self.events[index])
    }

    /// Dataset index of the selected event, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected event, if any.
    #[must_use]
    pub fn selected_event(&self) -> Option<&TimelineEvent> {
        self.selected.map(|index| &self.events[index])
    }

    /// Current zoom factor, for external zoom indicators.
    #[must_use]
    pub fn scale_k(&self) -> f64 {
        self.view.scale_k()
    }

    /// The axis view, for coordinate conversions in host overlays.
    #[must_use]
    pub fn view(&self) -> &AxisView {
        &self.view
    }

    /// Replaces the filter, recomputing the visible subset.
    ///
    /// The base year extent follows the visible subset, but the transform
    /// is kept so zoom state survives filter changes. The selection is
    /// also kept; a filtered-out selected event simply does not render
    /// until the filter readmits it.
    pub fn set_filter(&mut self, filter: TimelineFilter) -> Vec<Signal> {
        if filter == self.filter {
            return Vec::new();
        }
        self.filter = filter;
        self.visible = apply(&self.events, &self.filter);
        let (min_year, max_year) = extent(&self.events, &self.visible);
        self.view.set_year_extent(min_year, max_year);
        self.request_frame(false)
    }

    /// Current filter.
    #[must_use]
    pub fn filter(&self) -> &TimelineFilter {
        &self.filter
    }

    /// Updates the viewport width after a host resize.
    pub fn set_width(&mut self, width: f64) -> Vec<Signal> {
        self.view.set_width(width);
        self.request_frame(false)
    }

    /// Sets or clears the selection directly (e.g. from a list beside the
    /// timeline). Out-of-range indices are ignored.
    pub fn select(&mut self, index: Option<usize>) -> Vec<Signal> {
        if let Some(index) = index
            && index >= self.events.len()
        {
            return Vec::new();
        }
        if index == self.selected {
            return Vec::new();
        }
        self.selected = index;
        let mut signals = vec![Signal::SelectionChanged(self.selected)];
        signals.extend(self.request_frame(false));
        signals
    }

    /// Zooms in one step; selection-centered when an event is selected.
    pub fn zoom_in(&mut self) -> Vec<Signal> {
        self.apply_zoom(BUTTON_ZOOM_FACTOR, ZoomAnchor::CenterOrSelection)
    }

    /// Zooms out one step; selection-centered when an event is selected.
    pub fn zoom_out(&mut self) -> Vec<Signal> {
        self.apply_zoom(1.0 / BUTTON_ZOOM_FACTOR, ZoomAnchor::CenterOrSelection)
    }

    /// Resets the transform to identity and clears the selection.
    pub fn reset(&mut self) -> Vec<Signal> {
        let mut signals = Vec::new();
        let old_k = self.view.scale_k();
        self.view.reset();
        if self.view.scale_k() != old_k {
            signals.push(Signal::ZoomChanged(self.view.scale_k()));
        }
        if self.selected.take().is_some() {
            signals.push(Signal::SelectionChanged(None));
        }
        signals.extend(self.request_frame(false));
        signals
    }

    /// Handles a wheel tick at the given pointer position.
    ///
    /// Scroll up zooms in. The host must default-prevent the platform
    /// event so the page does not scroll.
    pub fn on_wheel(&mut self, delta_y: f64, pointer_x: f64) -> Vec<Signal> {
        let factor = wheel::zoom_factor(delta_y);
        match self.selected {
            Some(_) => self.apply_zoom(factor, ZoomAnchor::CenterOrSelection),
            None => self.apply_zoom(factor, ZoomAnchor::At(pointer_x)),
        }
    }

    /// Handles a primary-button pointer press.
    pub fn on_pointer_down(&mut self, pos: Point) {
        let target = self.scene.hit_test(pos);
        self.clicks.on_down(target, pos);
        self.drag = Some(DragSession::begin(pos));
    }

    /// Handles a pointer move while the primary button is held.
    ///
    /// Moves classified as page scroll are ignored so the host page keeps
    /// scrolling normally.
    pub fn on_pointer_move(&mut self, pos: Point) -> Vec<Signal> {
        let Some(drag) = self.drag.as_mut() else {
            return Vec::new();
        };
        match drag.update(pos) {
            DragUpdate::Pan { delta_x } => {
                self.view.pan_by(delta_x);
                self.request_frame(true)
            }
            DragUpdate::Undecided | DragUpdate::PageScroll => Vec::new(),
        }
    }

    /// Handles the pointer release ending a press or drag.
    ///
    /// A short, near-stationary press is a click: on a marker or label it
    /// selects that event and is consumed; on empty canvas it clears the
    /// selection. A drag instead triggers one final full-detail render.
    pub fn on_pointer_up(&mut self, pos: Point) -> Vec<Signal> {
        let drag = self.drag.take();
        match self.clicks.on_up(pos, CLICK_TOLERANCE) {
            Some(ClickOutcome::Select(index)) => self.select(Some(index)),
            Some(ClickOutcome::Deselect) => self.select(None),
            None => {
                if drag.is_some_and(|d| d.finish(pos).panned) {
                    self.request_frame(false)
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Handles a key press. `in_text_field` suppresses every shortcut.
    pub fn on_key(&mut self, key: Key, in_text_field: bool) -> Vec<Signal> {
        let ctx = KeyContext {
            in_text_field,
            has_selection: self.selected.is_some(),
            scale_k: self.view.scale_k(),
        };
        match action_for_key(key, ctx) {
            Some(KeyAction::Zoom {
                factor,
                selection_centered: _,
            }) => self.apply_zoom(factor, ZoomAnchor::CenterOrSelection),
            Some(KeyAction::Pan { delta_x }) => {
                self.view.pan_by(delta_x);
                self.request_frame(false)
            }
            Some(KeyAction::Reset) => self.reset(),
            None => Vec::new(),
        }
    }

    /// Takes the pending frame request, if any.
    ///
    /// Most hosts use [`Timeline::render_pending`] instead; this exists
    /// for hosts that separate draining from drawing.
    pub fn take_frame(&mut self) -> Option<FrameRequest> {
        self.scheduler.take()
    }

    /// Renders the pending frame, if one was requested.
    ///
    /// Called from the host's frame callback. Returns `None` when nothing
    /// was pending (a superseded callback), in which case the previous
    /// scene remains valid.
    pub fn render_pending(&mut self, theme: &Theme) -> Option<&Scene> {
        let request = self.scheduler.take()?;
        Some(self.render_with(theme, request.interacting))
    }

    /// Renders a full-detail frame immediately, bypassing the scheduler.
    pub fn render(&mut self, theme: &Theme) -> &Scene {
        self.render_with(theme, false)
    }

    /// The scene from the most recent render pass.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    fn request_frame(&mut self, interacting: bool) -> Vec<Signal> {
        self.scheduler.schedule(interacting);
        vec![Signal::FrameRequested]
    }

    fn apply_zoom(&mut self, factor: f64, anchor: ZoomAnchor) -> Vec<Signal> {
        let old_k = self.view.scale_k();
        match anchor {
            ZoomAnchor::At(x) => self.view.zoom_by(factor, x),
            ZoomAnchor::CenterOrSelection => match self.selected {
                Some(index) => {
                    let year = f64::from(self.events[index].year);
                    self.view.zoom_centered_on_year(factor, year);
                }
                None => self.view.zoom_by(factor, self.view.width() * 0.5),
            },
        }
        let mut signals = Vec::new();
        if self.view.scale_k() != old_k {
            signals.push(Signal::ZoomChanged(self.view.scale_k()));
        }
        signals.extend(self.request_frame(false));
        signals
    }

    fn render_with(&mut self, theme: &Theme, interacting: bool) -> &Scene {
        let (visible_min, visible_max) = self.view.visible_year_range();
        let span = visible_max - visible_min;
        let frame = self.lod.decide(span, interacting);
        let (range_min, range_max) = self.view.scale().range();
        let center_y = self.layout_config.center_y;

        let mut scene = Scene::new();
        scene.push(SceneNode::AxisLine {
            x0: range_min,
            x1: range_max,
            y: center_y,
            stroke_width: 3.0,
            color: theme.axis,
        });

        if frame.detail == DetailLevel::Simplified {
            scene.push(SceneNode::Notice {
                x: (range_min + range_max) * 0.5,
                y: center_y - 20.0,
                text: format!("Showing {span:.0} years - zoom in for details"),
                size: 14.0,
                color: theme.text_secondary,
            });
            self.scene = scene;
            return &self.scene;
        }

        scene.push(SceneNode::Band {
            x: range_min,
            y: center_y - 40.0,
            width: range_max - range_min,
            height: 80.0,
            corner_radius: 4.0,
            color: theme.band,
            opacity: 0.1,
        });

        // Events and ticks inside the (rounded-out) visible year window.
        let window_min = visible_min.floor();
        let window_max = visible_max.ceil();
        let in_view: Vec<usize> = self
            .visible
            .iter()
            .copied()
            .filter(|&index| {
                let year = f64::from(self.events[index].year);
                year >= window_min && year <= window_max
            })
            .collect();

        let grid = grid_years(
            window_min,
            window_max,
            frame.tick_step,
            frame.max_grid_ticks,
        );
        let labels: Vec<EventLabel> = in_view
            .iter()
            .map(|&index| EventLabel {
                year: f64::from(self.events[index].year),
                width: estimate_label_width(&truncate_title(&self.events[index].title)),
                key: index,
            })
            .collect();

        let view = &self.view;
        let placed = layout(&labels, &grid, |year| view.x_for_year(year), &self.layout_config);

        let culled = |x: f64| x < range_min - CULL_MARGIN || x > range_max + CULL_MARGIN;

        for tick in &placed.year_positions {
            if culled(tick.x) {
                continue;
            }
            let (mark_top, mark_bottom) = match tick.side {
                Side::Above => (
                    center_y - if tick.is_event_year { 15.0 } else { 8.0 },
                    center_y - if tick.is_event_year { 5.0 } else { 3.0 },
                ),
                Side::Below => (
                    center_y - if tick.is_event_year { 8.0 } else { 5.0 },
                    center_y + if tick.is_event_year { 15.0 } else { 8.0 },
                ),
            };
            scene.push(SceneNode::TickMark {
                x: tick.x,
                y0: mark_top,
                y1: mark_bottom,
                stroke_width: if tick.is_event_year { 3.0 } else { 1.0 },
                color: if tick.is_event_year {
                    theme.tick_event
                } else {
                    theme.tick_grid
                },
                opacity: if tick.is_event_year { 0.8 } else { 0.6 },
            });
            scene.push(SceneNode::Label {
                x: tick.x,
                y: tick.y,
                text: format_tick_year(tick.year),
                size: if tick.is_event_year { 11.0 } else { 10.0 },
                weight: if tick.is_event_year {
                    FontWeight::SemiBold
                } else {
                    FontWeight::Normal
                },
                color: if tick.is_event_year {
                    theme.text_event
                } else {
                    theme.text_secondary
                },
                width: tick.width,
                height: tick.height,
                event: None,
            });
        }

        let zoom_scale = marker_zoom_factor(self.view.scale_k());
        for (position_index, label) in placed.event_positions.iter().enumerate() {
            if culled(label.x) {
                continue;
            }
            let event = &self.events[label.key];
            let is_selected = self.selected == Some(label.key);
            let is_critical = event.importance == chronicle_events::Importance::Critical;

            // Deep-zoom thinning drops a share of unselected, non-critical
            // events entirely while the gesture is in flight.
            if frame.label_stride > 1
                && !is_selected
                && !is_critical
                && position_index % frame.label_stride != 0
            {
                continue;
            }

            let mut radius = event.importance.marker_radius() * zoom_scale;
            if is_selected {
                radius += SELECTED_RADIUS_BONUS;
            }
            #[expect(
                clippy::cast_possible_truncation,
                reason = "opacity stays within f32 range by construction"
            )]
            let opacity =
                (f64::from(event.importance.marker_opacity()) * zoom_scale).clamp(0.6, 1.0) as f32;
            scene.push(SceneNode::Marker {
                x: label.x,
                y: center_y,
                radius,
                fill: if is_selected {
                    theme.marker_selected
                } else {
                    theme.marker
                },
                stroke: if is_selected {
                    theme.marker_stroke_selected
                } else {
                    theme.marker_stroke
                },
                stroke_width: if is_selected { 3.0 } else { 2.0 },
                opacity: if is_selected { 1.0 } else { opacity },
                event: label.key,
            });

            if frame.skip_event_labels && !is_selected {
                continue;
            }

            let (connector_start, connector_end) = match label.side {
                Side::Above => (center_y - radius, label.y + CONNECTOR_LABEL_INSET),
                Side::Below => (center_y + radius, label.y - CONNECTOR_LABEL_INSET),
            };
            scene.push(SceneNode::Connector {
                x: label.x,
                y0: connector_start,
                y1: connector_end,
                stroke_width: if is_selected { 2.0 } else { 1.0 },
                color: if is_selected {
                    theme.connector_selected
                } else {
                    theme.connector
                },
                opacity: if is_selected { 0.8 } else { 0.6 },
                dashed: true,
            });
            scene.push(SceneNode::Label {
                x: label.x,
                y: label.y,
                text: truncate_title(&event.title),
                size: if is_critical { 11.0 } else { 10.0 },
                weight: if is_selected {
                    FontWeight::Bold
                } else {
                    FontWeight::SemiBold
                },
                color: if is_selected {
                    theme.text_selected
                } else {
                    theme.text
                },
                width: label.width,
                height: label.height,
                event: Some(label.key),
            });
        }

        self.scene = scene;
        &self.scene
    }
}

/// Year extent of the visible subset, falling back to the full dataset
/// and then to a token one-year extent for empty inputs.
fn extent(events: &[TimelineEvent], visible: &[usize]) -> (i32, i32) {
    let years: Vec<i32> = if visible.is_empty() {
        events.iter().map(|event| event.year).collect()
    } else {
        visible.iter().map(|&index| events[index].year).collect()
    };
    match (years.iter().min(), years.iter().max()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => (0, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<TimelineEvent> {
        vec![
            TimelineEvent::new("a", "Kali Yuga epoch", -3102),
            TimelineEvent::new("b", "Late Harappan phase", -3139),
            TimelineEvent::new("c", "Independence", 1947),
            TimelineEvent::new("d", "Republic groundwork", 1950),
        ]
    }

    #[test]
    fn visible_events_are_year_sorted() {
        let timeline = Timeline::new(fixture(), 1000.0);
        let years: Vec<i32> = timeline.visible_events().map(|e| e.year).collect();
        assert_eq!(years, vec![-3139, -3102, 1947, 1950]);
    }

    #[test]
    fn extent_falls_back_for_empty_datasets() {
        let timeline = Timeline::new(Vec::new(), 1000.0);
        assert_eq!(timeline.visible_len(), 0);
        // Still renders an axis without panicking.
        let mut timeline = timeline;
        let scene = timeline.render(&Theme::light());
        assert!(!scene.is_empty());
    }

    #[test]
    fn select_rejects_out_of_range_indices() {
        let mut timeline = Timeline::new(fixture(), 1000.0);
        assert!(timeline.select(Some(99)).is_empty());
        assert_eq!(timeline.selected_index(), None);
    }

    #[test]
    fn select_is_idempotent() {
        let mut timeline = Timeline::new(fixture(), 1000.0);
        assert!(!timeline.select(Some(2)).is_empty());
        assert!(timeline.select(Some(2)).is_empty());
    }

    #[test]
    fn filter_change_keeps_zoom_state() {
        let mut timeline = Timeline::new(fixture(), 1000.0);
        timeline.on_wheel(-200.0, 300.0);
        let k = timeline.scale_k();
        assert!(k > 1.0);

        let filter = TimelineFilter {
            year_range: (0, 2000),
            ..TimelineFilter::default()
        };
        timeline.set_filter(filter);
        assert_eq!(timeline.scale_k(), k);
        assert_eq!(timeline.visible_len(), 2);
    }

    #[test]
    fn unchanged_filter_is_a_no_op() {
        let mut timeline = Timeline::new(fixture(), 1000.0);
        assert!(timeline.set_filter(TimelineFilter::default()).is_empty());
    }
}
