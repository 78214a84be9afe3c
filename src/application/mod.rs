// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions that report backends implement
//! - [`presenter`]: The comparison lifecycle as a pure state machine
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the presenter and runs its effects

pub mod port;
pub mod presenter;

pub use presenter::{ComparisonPresenter, Effect, LoadTarget};
