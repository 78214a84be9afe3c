// SPDX-License-Identifier: MPL-2.0
//! `vdiff_viewer` is a visual-regression screen comparison viewer built with
//! the Iced GUI framework.
//!
//! A report holds, per screen, a build screenshot, an approved baseline and
//! a difference mask. The viewer lists the screens of a report and blends
//! the images of one screen inline or in a full-screen overlay, with
//! approve/delete actions that write back to the report.
//!
//! # Layers
//!
//! - [`domain`] - Screen records, blending, cursor and layout math
//! - [`application`] - Backend ports and the comparison presenter
//! - [`infrastructure`] - HTTP and local-directory report backends
//! - [`media`] - Image fetching and the load waiter
//! - [`app`] / [`ui`] - The iced shell and its views

#![doc(html_root_url = "https://docs.rs/vdiff_viewer/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
