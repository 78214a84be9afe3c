// SPDX-License-Identifier: MPL-2.0
//! Bounded in-memory record of comparison activity.
//!
//! - [`CircularBuffer`]: ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: user actions, operations, warnings and errors
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: channel-fed storage

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AppOperation, DiagnosticEvent, DiagnosticEventKind, SerializableEvent, UserAction};
