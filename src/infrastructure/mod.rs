// SPDX-License-Identifier: MPL-2.0
//! Report backends implementing the `application::port` traits.
//!
//! - [`http`]: report served by a visual-diff report page (`reqwest`)
//! - [`local`]: report stored in a local directory (`tokio::fs`)
//!
//! [`Report`] picks one from the configured base.

pub mod http;
pub mod local;
mod wire;

pub use http::HttpReport;
pub use local::LocalReport;
pub use wire::parse_screen_list;

use crate::application::port::{
    FetchError, ImageFetcher, RemoteAction, RemoteActionBridge, RemoteError, ScreenSource,
};
use crate::domain::screen::ScreenList;
use crate::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum Report {
    Http(HttpReport),
    Local(LocalReport),
}

impl Report {
    /// `http://` and `https://` bases are remote; anything else is a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a remote base is not a valid URL.
    pub fn from_base(base: &str, list_path: &str) -> Result<Self> {
        let lower = base.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Http(HttpReport::new(base, list_path)?))
        } else {
            Ok(Self::Local(LocalReport::new(base, list_path)))
        }
    }

    /// Human-readable location for the header.
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            Self::Http(report) => report.base().to_string(),
            Self::Local(report) => report.base().display().to_string(),
        }
    }
}

#[async_trait]
impl ScreenSource for Report {
    async fn load_screens(&self) -> std::result::Result<ScreenList, FetchError> {
        match self {
            Self::Http(report) => report.load_screens().await,
            Self::Local(report) => report.load_screens().await,
        }
    }
}

#[async_trait]
impl ImageFetcher for Report {
    async fn fetch(&self, relative_path: &str) -> std::result::Result<Vec<u8>, FetchError> {
        match self {
            Self::Http(report) => report.fetch(relative_path).await,
            Self::Local(report) => report.fetch(relative_path).await,
        }
    }
}

#[async_trait]
impl RemoteActionBridge for Report {
    async fn dispatch(&self, action: &RemoteAction) -> std::result::Result<(), RemoteError> {
        match self {
            Self::Http(report) => report.dispatch(action).await,
            Self::Local(report) => report.dispatch(action).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_bases_are_remote() {
        assert!(matches!(
            Report::from_base("HTTPS://ci.local/vdiff/", "data/JSONData"),
            Ok(Report::Http(_))
        ));
    }

    #[test]
    fn other_bases_are_local() {
        let report = Report::from_base("/srv/reports/42", "data/JSONData").expect("report");
        assert!(matches!(report, Report::Local(_)));
        assert_eq!(report.location(), "/srv/reports/42");
    }
}
