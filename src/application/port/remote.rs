// SPDX-License-Identifier: MPL-2.0
//! Remote mutations of a report: approve, delete, delete all.
//!
//! Calls are fire-and-forget from the viewer's point of view: success
//! triggers a full reload, failure leaves the UI untouched.

use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteAction {
    /// Promote the build screenshot to the approved baseline.
    Approve(String),
    /// Remove the approved baseline of one screen.
    Delete(String),
    /// Remove every approved baseline.
    DeleteAll,
}

impl RemoteAction {
    /// Destructive actions need an interactive confirmation first.
    #[must_use]
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, RemoteAction::Delete(_) | RemoteAction::DeleteAll)
    }

    /// i18n key of the confirmation prompt.
    #[must_use]
    pub fn confirm_key(&self) -> Option<&'static str> {
        match self {
            RemoteAction::Approve(_) => None,
            RemoteAction::Delete(_) => Some("confirm-delete"),
            RemoteAction::DeleteAll => Some("confirm-delete-all"),
        }
    }

    /// i18n key of the optional failure notice.
    #[must_use]
    pub fn failure_key(&self) -> &'static str {
        match self {
            RemoteAction::Approve(_) => "notification-approve-failed",
            RemoteAction::Delete(_) => "notification-delete-failed",
            RemoteAction::DeleteAll => "notification-delete-all-failed",
        }
    }

    /// Endpoint name on a report server.
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        match self {
            RemoteAction::Approve(_) => "approve",
            RemoteAction::Delete(_) => "delete",
            RemoteAction::DeleteAll => "deleteAll",
        }
    }

    #[must_use]
    pub fn image_name(&self) -> Option<&str> {
        match self {
            RemoteAction::Approve(name) | RemoteAction::Delete(name) => Some(name),
            RemoteAction::DeleteAll => None,
        }
    }
}

impl fmt::Display for RemoteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.image_name() {
            Some(name) => write!(f, "{} {name}", self.endpoint()),
            None => f.write_str(self.endpoint()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The request could not be sent or timed out.
    Transport(String),
    /// The server answered with a non-success status.
    Rejected { status: u16 },
    /// A local file operation failed.
    Io(String),
    /// The screen has no build image to approve.
    MissingBuildImage(String),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Transport(msg) => write!(f, "Transport error: {msg}"),
            RemoteError::Rejected { status } => write!(f, "Rejected with status {status}"),
            RemoteError::Io(msg) => write!(f, "I/O error: {msg}"),
            RemoteError::MissingBuildImage(name) => write!(f, "No build image for {name}"),
        }
    }
}

impl std::error::Error for RemoteError {}

/// Performs remote actions against a report.
#[async_trait]
pub trait RemoteActionBridge: Send + Sync {
    async fn dispatch(&self, action: &RemoteAction) -> Result<(), RemoteError>;
}
