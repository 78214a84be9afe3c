// SPDX-License-Identifier: MPL-2.0
//! Comparison image loading.
//!
//! - [`image`]: decoded images and deferred [`RemoteImage`] handles
//! - [`loader`]: [`ImageLoadWaiter`] and whole-set loading

pub mod image;
pub mod loader;

pub use image::{ImageData, RemoteImage, Settled};
pub use loader::{load_image_set, ImageHandle, ImageLoadWaiter, LoadedSet, WaitOutcome};
