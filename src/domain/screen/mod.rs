// SPDX-License-Identifier: MPL-2.0
//! Screen domain types.
//!
//! A screen is one logical screenshot comparison unit: a build image, an
//! approved baseline and an optional difference mask, all sharing the same
//! image name.

pub mod list;
pub mod record;

pub use list::{ScreenList, ScreenSummary};
pub use record::{ExistingState, NewScreenState, ScreenRecord};
