// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) implemented by the report backends.
//!
//! - [`source`]: screen list loading and image fetching
//! - [`remote`]: approve / delete / delete-all
//!
//! Traits use domain types only and are `Send + Sync` so one backend can be
//! shared across iced tasks behind an `Arc`.

pub mod remote;
pub mod source;

pub use remote::{RemoteAction, RemoteActionBridge, RemoteError};
pub use source::{FetchError, ImageFetcher, ScreenSource};
