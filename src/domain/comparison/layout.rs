// SPDX-License-Identifier: MPL-2.0
//! Geometry of the inline comparison box.
//!
//! The box is as wide as the wider of the build and approved images and is
//! centered in the viewport. It never rises into the header band and its
//! height stops at the footer margin.

use crate::config::{DEFAULT_FOOTER_MARGIN_PX, DEFAULT_HEADER_BAND_PX, DEFAULT_SLIDER_WIDTH_PX};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Current window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Fixed page bands the box must respect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub header_band: f32,
    pub footer_margin: f32,
    pub slider_width: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            header_band: DEFAULT_HEADER_BAND_PX,
            footer_margin: DEFAULT_FOOTER_MARGIN_PX,
            slider_width: DEFAULT_SLIDER_WIDTH_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InlineLayout {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Tallest of the build and approved images.
    pub content_height: f32,
    /// Difference mask size, matching the build image box exactly.
    pub diff: Option<Size>,
    /// Horizontal offset of the slider bar.
    pub slider_left: f32,
}

/// Computes the inline box geometry once every image has settled.
///
/// Images that failed to load or are absent contribute a zero size.
#[must_use]
pub fn inline_layout(
    viewport: Viewport,
    build: Option<Size>,
    approved: Option<Size>,
    has_diff: bool,
    metrics: LayoutMetrics,
) -> InlineLayout {
    let build_size = build.unwrap_or_default();
    let approved_size = approved.unwrap_or_default();

    let max_width = build_size.width.max(approved_size.width);
    let max_height = build_size.height.max(approved_size.height);

    let top = (viewport.height / 2.0 - max_height / 2.0 - metrics.header_band / 2.0)
        .max(metrics.header_band);
    let left = (viewport.width / 2.0 - max_width / 2.0).max(0.0);
    let height = (viewport.height - metrics.header_band - metrics.footer_margin).max(0.0);
    let slider_left = (viewport.width / 2.0 - metrics.slider_width / 2.0).max(0.0);

    InlineLayout {
        left,
        top,
        width: max_width,
        height,
        content_height: max_height,
        diff: has_diff.then_some(build_size),
        slider_left,
    }
}
