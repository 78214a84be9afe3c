// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each one
//! renders from a borrowed `ViewContext` and emits its own `Message`.
//!
//! # Views
//!
//! - [`screen_list`] - Report header and the list of compared screens
//! - [`inline`] - Inline comparison box and its dimming mask
//! - [`overlay`] - Full-screen comparison with previous/next navigation
//! - [`loading`] - Indicator shown while the overlay loads
//!
//! # Shared Infrastructure
//!
//! - [`layers`] - Build, approved and difference images stacked by opacity
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and status colors
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod inline;
pub mod layers;
pub mod loading;
pub mod notifications;
pub mod overlay;
pub mod screen_list;
pub mod theming;
