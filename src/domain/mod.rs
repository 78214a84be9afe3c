// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core comparison logic with no UI or I/O dependencies.
//!
//! # Modules
//!
//! - [`screen`]: Screen records and the prepared screen list
//!   ([`ScreenRecord`](screen::ScreenRecord), [`ScreenList`](screen::ScreenList))
//! - [`comparison`]: Blend math, navigation cursor, inline layout and the
//!   derived image paths of a comparison

pub mod comparison;
pub mod screen;
