// SPDX-License-Identifier: MPL-2.0
//! Waits for a set of images to finish loading.
//!
//! Fetches start only when a comparison opens: the waiter first assigns
//! every pending real source, then checks all handles, sleeping a fixed
//! interval between checks. A failed load counts as loaded. There is no
//! timeout; a load that never settles keeps the waiter pending.

use crate::application::port::ImageFetcher;
use crate::domain::comparison::ImageSet;
use std::sync::Arc;
use std::time::Duration;

use super::image::{RemoteImage, Settled};

/// A deferred image resource.
pub trait ImageHandle {
    /// Starts the real fetch. Calling it again has no effect.
    fn assign_real_source(&mut self);
    /// True once the fetch completed, successfully or not.
    fn is_loaded(&self) -> bool;
}

/// How a wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOutcome {
    /// Number of times every handle was checked. Zero for an empty set.
    pub checks: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct ImageLoadWaiter {
    poll_interval: Duration,
}

impl ImageLoadWaiter {
    #[must_use]
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    /// Resolves once every handle reports loaded.
    pub async fn wait_all<H: ImageHandle>(&self, handles: &mut [H]) -> WaitOutcome {
        for handle in handles.iter_mut() {
            handle.assign_real_source();
        }
        if handles.is_empty() {
            return WaitOutcome { checks: 0 };
        }

        let mut checks = 0;
        loop {
            checks += 1;
            if handles.iter().all(ImageHandle::is_loaded) {
                return WaitOutcome { checks };
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

/// Images of one comparison after they all settled.
#[derive(Debug, Clone, Default)]
pub struct LoadedSet {
    pub images: ImageSet<Settled>,
    pub checks: u32,
}

/// Fetches every present role of `paths` and waits for all of them.
pub async fn load_image_set(
    fetcher: Arc<dyn ImageFetcher>,
    paths: ImageSet<String>,
    waiter: ImageLoadWaiter,
) -> LoadedSet {
    let mut roles = Vec::new();
    let mut handles = Vec::new();
    for (role, path) in paths.iter() {
        roles.push(role);
        handles.push(RemoteImage::new(Arc::clone(&fetcher), path.clone()));
    }

    let outcome = waiter.wait_all(&mut handles).await;

    let mut images = ImageSet::default();
    for (role, handle) in roles.into_iter().zip(handles) {
        images.set(role, handle.into_settled());
    }
    LoadedSet {
        images,
        checks: outcome.checks,
    }
}
