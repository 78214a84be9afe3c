// SPDX-License-Identifier: MPL-2.0
//! Read side of a report: the screen list and the image bytes.

use crate::domain::screen::ScreenList;
use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    NotFound(String),
    Transport(String),
    Io(String),
    /// The screen list could not be parsed.
    InvalidList(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound(path) => write!(f, "Not found: {path}"),
            FetchError::Transport(msg) => write!(f, "Transport error: {msg}"),
            FetchError::Io(msg) => write!(f, "I/O error: {msg}"),
            FetchError::InvalidList(msg) => write!(f, "Invalid screen list: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Loads the ordered screen list of a report.
#[async_trait]
pub trait ScreenSource: Send + Sync {
    async fn load_screens(&self) -> Result<ScreenList, FetchError>;
}

/// Fetches image bytes by path relative to the report base.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, relative_path: &str) -> Result<Vec<u8>, FetchError>;
}
