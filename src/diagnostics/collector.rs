// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Events arrive through a bounded channel and are stored in a
//! [`CircularBuffer`]. Every event is also emitted as a `tracing` event.

use std::path::Path;

use tokio::sync::mpsc::{channel, error::TrySendError, Receiver, Sender};

use super::{
    AppOperation, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    SerializableEvent, UserAction,
};
use crate::error::Result;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block; events are dropped when the channel
/// is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        tracing::debug!(?action, "user action");
        self.send(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_operation(&self, operation: AppOperation) {
        tracing::debug!(?operation, "operation");
        self.send(DiagnosticEventKind::Operation { operation });
    }

    pub fn log_warning(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "diagnostic warning");
        self.send(DiagnosticEventKind::Warning { message });
    }

    pub fn log_error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(%message, "diagnostic error");
        self.send(DiagnosticEventKind::Error { message });
    }

    /// Sends an action, reporting whether it was accepted.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the channel is full, or
    /// `TrySendError::Closed` if the collector has been dropped.
    pub fn try_log_action(
        &self,
        action: UserAction,
    ) -> std::result::Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx
            .try_send(DiagnosticEvent::new(DiagnosticEventKind::UserAction {
                action,
            }))
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Central collector for diagnostic events.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = channel(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer. Call on each UI tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Exports buffered events as a JSON array, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_json(&self) -> Result<String> {
        let events: Vec<SerializableEvent<'_>> = self.iter().map(SerializableEvent::from).collect();
        Ok(serde_json::to_string_pretty(&events)?)
    }

    /// Writes [`Self::export_json`] to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.export_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_events_reach_buffer_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::NavigateNext);
        handle.log_operation(AppOperation::ImagesSettled {
            images: 3,
            checks: 1,
        });
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn buffer_evicts_beyond_capacity() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
        let handle = collector.handle();
        for _ in 0..20 {
            handle.log_action(UserAction::CloseOverlay);
        }
        collector.process_pending();
        assert_eq!(collector.len(), 16);
    }

    #[test]
    fn full_channel_drops_events() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        for _ in 0..DEFAULT_CHANNEL_CAPACITY {
            handle.log_action(UserAction::NavigatePrevious);
        }
        assert!(matches!(
            handle.try_log_action(UserAction::NavigatePrevious),
            Err(TrySendError::Full(_))
        ));
    }

    #[test]
    fn export_json_lists_events_in_order() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log_warning("first");
        handle.log_error("second");
        collector.process_pending();

        let json: serde_json::Value =
            serde_json::from_str(&collector.export_json().expect("export")).expect("parse");
        let events = json.as_array().expect("array");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["type"], "warning");
        assert_eq!(events[1]["message"], "second");
    }

    #[test]
    fn export_to_file_writes_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("diagnostics.json");
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_action(UserAction::CloseInline);
        collector.process_pending();

        collector.export_to_file(&path).expect("export");
        let content = std::fs::read_to_string(&path).expect("read");
        assert!(content.contains("close_inline"));
    }
}
