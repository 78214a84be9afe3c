// SPDX-License-Identifier: MPL-2.0
//! Comparison domain types.
//!
//! Everything here is a pure function of its inputs: the presenter feeds
//! slider values, checkbox states, image sizes and the viewport in, and
//! renders whatever comes out.

pub mod blend;
pub mod cursor;
pub mod image_set;
pub mod layout;
pub mod paths;

pub use blend::{BlendState, LayerOpacities, LayerPairing};
pub use cursor::{NavigationError, ScreenCursor};
pub use image_set::{ImageRole, ImageSet};
pub use layout::{InlineLayout, LayoutMetrics, Size, Viewport};
pub use paths::{DerivedPaths, APPROVED_PREFIX, BUILD_PREFIX, DIFF_PREFIX};
