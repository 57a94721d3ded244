// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronicle_scene --heading-base-level=0

//! Chronicle Scene: backend-agnostic retained scene description.
//!
//! Each render pass of the timeline core produces a [`Scene`]: an ordered
//! list of plain‑old‑data draw primitives ([`SceneNode`]) with resolved
//! positions, colors, and stroke metrics. A thin adapter replays the list
//! onto whatever drawing surface the target platform offers — SVG, canvas,
//! or a GUI toolkit's vector layer. The core never touches a rendering API
//! and never inspects ambient state; colors come from a [`Theme`] passed
//! explicitly into the render call.
//!
//! Nodes that represent an event (markers and event labels) carry the
//! event's index as hit metadata, and [`Scene::hit_test`] resolves a
//! pointer position to the topmost such node. That is what click routing
//! uses to decide between selecting an event and clearing the selection.
//!
//! ## Example
//!
//! ```rust
//! use chronicle_scene::{Scene, SceneNode, Theme};
//! use kurbo::Point;
//!
//! let theme = Theme::light();
//! let mut scene = Scene::new();
//! scene.push(SceneNode::Marker {
//!     x: 400.0,
//!     y: 175.0,
//!     radius: 8.0,
//!     fill: theme.marker,
//!     stroke: theme.marker_stroke,
//!     stroke_width: 2.0,
//!     opacity: 1.0,
//!     event: 3,
//! });
//!
//! assert_eq!(scene.hit_test(Point::new(403.0, 177.0)), Some(3));
//! assert_eq!(scene.hit_test(Point::new(500.0, 175.0)), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod theme;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use peniko::Color;

pub use theme::Theme;

/// Font weight for text nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FontWeight {
    /// Regular text.
    Normal,
    /// Semi-bold text; the default for event labels.
    SemiBold,
    /// Bold text; used for the selected event's label.
    Bold,
}

/// One draw primitive in a rendered frame.
///
/// Coordinates are in viewport pixels; the list order is the paint order.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    /// The horizontal axis line.
    AxisLine {
        /// Left end of the line.
        x0: f64,
        /// Right end of the line.
        x1: f64,
        /// Vertical position.
        y: f64,
        /// Stroke width in pixels.
        stroke_width: f64,
        /// Stroke color.
        color: Color,
    },
    /// The translucent highlight band behind the axis.
    Band {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width in pixels.
        width: f64,
        /// Height in pixels.
        height: f64,
        /// Corner radius in pixels.
        corner_radius: f64,
        /// Fill color.
        color: Color,
        /// Fill opacity in `[0, 1]`.
        opacity: f32,
    },
    /// A vertical tick mark on the axis.
    TickMark {
        /// Horizontal position.
        x: f64,
        /// Top end of the mark.
        y0: f64,
        /// Bottom end of the mark.
        y1: f64,
        /// Stroke width in pixels.
        stroke_width: f64,
        /// Stroke color.
        color: Color,
        /// Stroke opacity in `[0, 1]`.
        opacity: f32,
    },
    /// An event marker circle on the axis.
    Marker {
        /// Center X.
        x: f64,
        /// Center Y.
        y: f64,
        /// Radius in pixels.
        radius: f64,
        /// Fill color.
        fill: Color,
        /// Outline color.
        stroke: Color,
        /// Outline width in pixels.
        stroke_width: f64,
        /// Fill opacity in `[0, 1]`.
        opacity: f32,
        /// Index of the event this marker represents; hit metadata.
        event: usize,
    },
    /// The dashed line connecting a marker to its label.
    Connector {
        /// Horizontal position.
        x: f64,
        /// Marker-side end.
        y0: f64,
        /// Label-side end.
        y1: f64,
        /// Stroke width in pixels.
        stroke_width: f64,
        /// Stroke color.
        color: Color,
        /// Stroke opacity in `[0, 1]`.
        opacity: f32,
        /// Render with a short dash pattern.
        dashed: bool,
    },
    /// A text label, horizontally centered on `x`.
    Label {
        /// Horizontal center.
        x: f64,
        /// Baseline position.
        y: f64,
        /// Text to draw.
        text: String,
        /// Font size in pixels.
        size: f64,
        /// Font weight.
        weight: FontWeight,
        /// Text color.
        color: Color,
        /// Approximate width for hit testing, in pixels.
        width: f64,
        /// Approximate height for hit testing, in pixels.
        height: f64,
        /// Index of the event this label belongs to, if any; hit metadata.
        event: Option<usize>,
    },
    /// A standalone informational message (e.g. "zoom in for details").
    Notice {
        /// Horizontal center.
        x: f64,
        /// Baseline position.
        y: f64,
        /// Text to draw.
        text: String,
        /// Font size in pixels.
        size: f64,
        /// Text color.
        color: Color,
    },
}

/// An ordered list of draw primitives for one frame.
///
/// Scenes are produced fresh every render pass and never mutated
/// afterwards by the core.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Appends a node; later nodes paint over earlier ones.
    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    /// The nodes in paint order.
    #[must_use]
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the scene has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolves a pointer position to the topmost event-bearing node.
    ///
    /// Markers hit within their radius; event labels hit within their
    /// approximate text box. Nodes without hit metadata are transparent
    /// to hit testing.
    #[must_use]
    pub fn hit_test(&self, pos: Point) -> Option<usize> {
        for node in self.nodes.iter().rev() {
            match *node {
                SceneNode::Marker {
                    x,
                    y,
                    radius,
                    event,
                    ..
                } => {
                    let d = pos - Point::new(x, y);
                    if d.hypot2() <= radius * radius {
                        return Some(event);
                    }
                }
                SceneNode::Label {
                    x,
                    y,
                    width,
                    height,
                    event: Some(event),
                    ..
                } => {
                    let d = pos - Point::new(x, y);
                    if within_box(d, width, height) {
                        return Some(event);
                    }
                }
                _ => {}
            }
        }
        None
    }
}

fn within_box(d: Vec2, width: f64, height: f64) -> bool {
    d.x.abs() <= width * 0.5 && d.y.abs() <= height * 0.5
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn marker(x: f64, event: usize) -> SceneNode {
        SceneNode::Marker {
            x,
            y: 175.0,
            radius: 6.0,
            fill: Color::from_rgb8(0xf9, 0x73, 0x16),
            stroke: Color::WHITE,
            stroke_width: 2.0,
            opacity: 1.0,
            event,
        }
    }

    #[test]
    fn push_preserves_paint_order() {
        let mut scene = Scene::new();
        scene.push(marker(100.0, 0));
        scene.push(marker(200.0, 1));
        assert_eq!(scene.len(), 2);
        assert!(matches!(scene.nodes()[0], SceneNode::Marker { event: 0, .. }));
    }

    #[test]
    fn hit_test_finds_markers_within_radius() {
        let mut scene = Scene::new();
        scene.push(marker(100.0, 7));
        assert_eq!(scene.hit_test(Point::new(104.0, 177.0)), Some(7));
        assert_eq!(scene.hit_test(Point::new(110.0, 175.0)), None);
    }

    #[test]
    fn hit_test_prefers_the_topmost_node() {
        let mut scene = Scene::new();
        scene.push(marker(100.0, 0));
        scene.push(marker(103.0, 1));
        assert_eq!(scene.hit_test(Point::new(101.0, 175.0)), Some(1));
    }

    #[test]
    fn labels_hit_within_their_box() {
        let mut scene = Scene::new();
        scene.push(SceneNode::Label {
            x: 300.0,
            y: 140.0,
            text: "Mauryan accession".to_string(),
            size: 10.0,
            weight: FontWeight::SemiBold,
            color: Color::BLACK,
            width: 112.0,
            height: 20.0,
            event: Some(2),
        });
        assert_eq!(scene.hit_test(Point::new(350.0, 145.0)), Some(2));
        assert_eq!(scene.hit_test(Point::new(380.0, 145.0)), None);
    }

    #[test]
    fn year_labels_are_transparent_to_hit_testing() {
        let mut scene = Scene::new();
        scene.push(SceneNode::Label {
            x: 300.0,
            y: 200.0,
            text: "500 CE".to_string(),
            size: 10.0,
            weight: FontWeight::Normal,
            color: Color::BLACK,
            width: 80.0,
            height: 20.0,
            event: None,
        });
        assert_eq!(scene.hit_test(Point::new(300.0, 200.0)), None);
    }
}
