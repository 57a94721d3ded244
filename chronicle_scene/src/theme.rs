// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color palettes for rendering.

use peniko::Color;

/// Colors used when assembling a scene.
///
/// The theme is an explicit input to every render call; the core never
/// detects or observes the ambient theme itself. The two stock palettes
/// share the axis, band, and marker hues and differ in text colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Primary label text.
    pub text: Color,
    /// Secondary text: grid-year labels and notices.
    pub text_secondary: Color,
    /// Year labels on event years.
    pub text_event: Color,
    /// The selected event's label.
    pub text_selected: Color,
    /// Axis line.
    pub axis: Color,
    /// Highlight band behind the axis.
    pub band: Color,
    /// Grid tick marks.
    pub tick_grid: Color,
    /// Tick marks on event years.
    pub tick_event: Color,
    /// Event markers.
    pub marker: Color,
    /// The selected event's marker.
    pub marker_selected: Color,
    /// Marker outline.
    pub marker_stroke: Color,
    /// The selected event's marker outline.
    pub marker_stroke_selected: Color,
    /// Marker-to-label connectors.
    pub connector: Color,
    /// The selected event's connector.
    pub connector_selected: Color,
}

impl Theme {
    /// Palette for light backgrounds.
    #[must_use]
    pub fn light() -> Self {
        Self {
            text: Color::from_rgb8(0x37, 0x41, 0x51),
            text_secondary: Color::from_rgb8(0x6b, 0x72, 0x80),
            text_event: Color::from_rgb8(0xea, 0x58, 0x0c),
            text_selected: Color::from_rgb8(0xdc, 0x26, 0x26),
            ..Self::base()
        }
    }

    /// Palette for dark backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            text: Color::from_rgb8(0xe5, 0xe7, 0xeb),
            text_secondary: Color::from_rgb8(0x9c, 0xa3, 0xaf),
            text_event: Color::from_rgb8(0xfb, 0xbf, 0x24),
            text_selected: Color::from_rgb8(0xef, 0x44, 0x44),
            ..Self::base()
        }
    }

    /// Shared non-text colors.
    fn base() -> Self {
        Self {
            text: Color::BLACK,
            text_secondary: Color::BLACK,
            text_event: Color::BLACK,
            text_selected: Color::BLACK,
            axis: Color::from_rgb8(0xe5, 0xe7, 0xeb),
            band: Color::from_rgb8(0xfe, 0xf3, 0xc7),
            tick_grid: Color::from_rgb8(0x9c, 0xa3, 0xaf),
            tick_event: Color::from_rgb8(0xf9, 0x73, 0x16),
            marker: Color::from_rgb8(0xf9, 0x73, 0x16),
            marker_selected: Color::from_rgb8(0xdc, 0x26, 0x26),
            marker_stroke: Color::WHITE,
            marker_stroke_selected: Color::from_rgb8(0xfe, 0xf2, 0xf2),
            connector: Color::from_rgb8(0xd1, 0xd5, 0xdb),
            connector_selected: Color::from_rgb8(0xdc, 0x26, 0x26),
        }
    }
}
