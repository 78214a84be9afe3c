// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for the comparison lifecycle.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;

/// User-initiated actions.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    OpenInline { image_name: String },
    CloseInline,
    OpenOverlay { index: usize },
    NavigateNext,
    NavigatePrevious,
    CloseOverlay,
    /// Ignored because another comparison is still loading.
    OpenIgnored,
    ToggleDiff { visible: bool },
    ConfirmationDeclined { remote_action: String },
}

/// Application operations with their outcome.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum AppOperation {
    ScreenListLoaded { count: usize },
    ImagesSettled { images: usize, checks: u32 },
    Revealed { target: String },
    StaleSettleDiscarded { ticket: u64 },
    RemoteDispatched { action: String },
    RemoteCompleted { action: String },
    RemoteFailed { action: String, reason: String },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    Operation { operation: AppOperation },
    Warning { message: String },
    Error { message: String },
}

/// A single diagnostic event with its timestamps.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic clock, for durations.
    pub timestamp: Instant,
    /// Wall clock, for exported reports.
    pub recorded_at: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            recorded_at: Utc::now(),
            kind,
        }
    }
}

/// Serializable view of an event.
#[derive(Debug, Serialize)]
pub struct SerializableEvent<'a> {
    pub recorded_at: String,
    #[serde(flatten)]
    pub kind: &'a DiagnosticEventKind,
}

impl<'a> From<&'a DiagnosticEvent> for SerializableEvent<'a> {
    fn from(event: &'a DiagnosticEvent) -> Self {
        Self {
            recorded_at: event.recorded_at.to_rfc3339(),
            kind: &event.kind,
        }
    }
}
