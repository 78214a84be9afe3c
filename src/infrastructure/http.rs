// SPDX-License-Identifier: MPL-2.0
//! Report served over HTTP by a visual-diff report page.

use crate::application::port::{
    FetchError, ImageFetcher, RemoteAction, RemoteActionBridge, RemoteError, ScreenSource,
};
use crate::domain::screen::ScreenList;
use crate::error::{Error, Result};
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, StatusCode, Url};

use super::wire::parse_screen_list;

/// Images larger than this are treated as failed loads.
const MAX_IMAGE_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct HttpReport {
    client: Client,
    base: Url,
    list_path: String,
}

impl HttpReport {
    /// `base` is the report directory or a page inside it. A last path
    /// segment with an extension (`index.html`) names a page and is
    /// dropped, so paths resolve next to it.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not a valid URL or the client cannot
    /// be built.
    pub fn new(base: &str, list_path: &str) -> Result<Self> {
        let mut base =
            Url::parse(base).map_err(|e| Error::Config(format!("invalid report URL: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!("not a base URL: {base}")));
        }
        let names_page = base
            .path_segments()
            .and_then(|segments| segments.last())
            .is_some_and(|last| last.contains('.'));
        if names_page {
            if let Ok(mut segments) = base.path_segments_mut() {
                segments.pop();
            }
            base.set_query(None);
            base.set_fragment(None);
        }
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("vdiff-viewer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base,
            list_path: list_path.to_string(),
        })
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolves a `/`-separated path below the base, encoding each segment.
    #[must_use]
    pub fn resolve(&self, relative_path: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(relative_path.split('/').filter(|s| !s.is_empty()));
        }
        url
    }

    /// URL of the endpoint performing `action`, with the name query-encoded.
    #[must_use]
    pub fn action_url(&self, action: &RemoteAction) -> Url {
        let mut url = self.resolve(action.endpoint());
        if let Some(name) = action.image_name() {
            url.query_pairs_mut().append_pair("name", name);
        }
        url
    }
}

fn transport(err: reqwest::Error) -> FetchError {
    FetchError::Transport(err.to_string())
}

#[async_trait]
impl ScreenSource for HttpReport {
    async fn load_screens(&self) -> std::result::Result<ScreenList, FetchError> {
        let url = self.resolve(&self.list_path);
        tracing::debug!(%url, "fetching screen list");
        let response = self.client.get(url.clone()).send().await.map_err(transport)?;
        match response.status() {
            StatusCode::NOT_FOUND => return Err(FetchError::NotFound(url.to_string())),
            status if !status.is_success() => {
                return Err(FetchError::Transport(format!("HTTP status: {status}")))
            }
            _ => {}
        }
        let body = response.bytes().await.map_err(transport)?;
        parse_screen_list(&body)
    }
}

#[async_trait]
impl ImageFetcher for HttpReport {
    async fn fetch(&self, relative_path: &str) -> std::result::Result<Vec<u8>, FetchError> {
        let url = self.resolve(relative_path);
        let response = self.client.get(url.clone()).send().await.map_err(transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(relative_path.to_string()));
        }
        if !response.status().is_success() {
            return Err(FetchError::Transport(format!(
                "HTTP status: {}",
                response.status()
            )));
        }

        let mut bytes = Vec::with_capacity(response.content_length().unwrap_or(0) as usize);
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(transport)?;
            if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
                return Err(FetchError::Transport(format!(
                    "{relative_path} exceeds {MAX_IMAGE_BYTES} bytes"
                )));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait]
impl RemoteActionBridge for HttpReport {
    async fn dispatch(&self, action: &RemoteAction) -> std::result::Result<(), RemoteError> {
        let url = self.action_url(action);
        tracing::info!(%url, "dispatching remote action");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(RemoteError::Rejected {
                status: response.status().as_u16(),
            })
        }
    }
}
