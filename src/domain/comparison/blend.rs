// SPDX-License-Identifier: MPL-2.0
//! Opacity blending between two stacked images.
//!
//! A single 0–100 slider drives two complementary opacities. The difference
//! mask has its own on/off toggle and is never fully transparent: the hidden
//! value is a tiny non-zero sentinel so the layer keeps its place in layout.

/// Lowest slider value.
pub const SLIDER_MIN: u8 = 0;

/// Highest slider value.
pub const SLIDER_MAX: u8 = 100;

/// Slider position when a comparison opens.
pub const SLIDER_DEFAULT: u8 = 50;

/// Difference mask opacity while the toggle is checked.
pub const DIFF_VISIBLE_OPACITY: f64 = 0.5;

/// Difference mask opacity while the toggle is unchecked. Must stay non-zero.
pub const DIFF_HIDDEN_OPACITY: f64 = 0.0001;

/// Which physical layer receives which side of the blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerPairing {
    /// Inline title-box comparison: the build screenshot takes the left side.
    Inline,
    /// Full-screen overlay: the approved baseline takes the left side.
    Overlay,
}

/// Two complementary opacities derived from one slider value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendState {
    left: f64,
    right: f64,
}

impl BlendState {
    /// Maps a slider value to the blend. Values above [`SLIDER_MAX`] are clamped.
    #[must_use]
    pub fn from_slider(value: u8) -> Self {
        let right = f64::from(value.min(SLIDER_MAX)) / 100.0;
        Self {
            left: (1.0 - right).abs(),
            right,
        }
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Resolves the blend onto physical layers.
    #[must_use]
    pub fn layers(&self, pairing: LayerPairing) -> LayerOpacities {
        match pairing {
            LayerPairing::Inline => LayerOpacities {
                build: self.left,
                approved: self.right,
            },
            LayerPairing::Overlay => LayerOpacities {
                build: self.right,
                approved: self.left,
            },
        }
    }
}

impl Default for BlendState {
    fn default() -> Self {
        Self::from_slider(SLIDER_DEFAULT)
    }
}

/// Opacities as applied to the build and approved layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerOpacities {
    pub build: f64,
    pub approved: f64,
}

/// Slider handler: value in `0..=100` to blend state.
#[must_use]
pub fn on_slide(value: u8) -> BlendState {
    BlendState::from_slider(value)
}

/// Checkbox handler: difference mask opacity.
#[must_use]
pub fn on_toggle(checked: bool) -> f64 {
    if checked {
        DIFF_VISIBLE_OPACITY
    } else {
        DIFF_HIDDEN_OPACITY
    }
}
