// SPDX-License-Identifier: MPL-2.0
//! Fetched comparison images and their deferred loading.

use crate::application::port::ImageFetcher;
use crate::domain::comparison::Size;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{ImageError, ImageReader};
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use super::loader::ImageHandle;

/// A decoded image ready to render.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Reads the intrinsic size from encoded bytes and wraps them in a
    /// render handle. Pixels are decoded by the renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if the format is unknown or the header is invalid.
    pub fn from_encoded(bytes: Vec<u8>) -> Result<Self> {
        let (width, height) = ImageReader::new(Cursor::new(&bytes))
            .with_guessed_format()?
            .into_dimensions()?;
        if width == 0 || height == 0 {
            return Err(Error::Data(format!("empty image: {width}x{height}")));
        }
        Ok(Self {
            handle: image::Handle::from_bytes(bytes),
            width,
            height,
        })
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Data(err.to_string())
    }
}

/// Outcome of one image fetch. Both variants count as loaded.
#[derive(Debug, Clone)]
pub enum Settled {
    Ready(ImageData),
    Failed(String),
}

impl Settled {
    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        match self {
            Settled::Ready(data) => Some(data),
            Settled::Failed(_) => None,
        }
    }

    /// Intrinsic size; a failed image has none.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.image().map(ImageData::size)
    }
}

#[derive(Debug)]
enum Slot {
    /// Source not assigned yet; nothing fetched.
    Placeholder,
    Fetching,
    Done(Settled),
}

/// An image whose real source is assigned only when a comparison opens.
pub struct RemoteImage {
    fetcher: Arc<dyn ImageFetcher>,
    source: String,
    slot: Arc<Mutex<Slot>>,
}

impl std::fmt::Debug for RemoteImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteImage")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl RemoteImage {
    pub fn new(fetcher: Arc<dyn ImageFetcher>, source: impl Into<String>) -> Self {
        Self {
            fetcher,
            source: source.into(),
            slot: Arc::new(Mutex::new(Slot::Placeholder)),
        }
    }

    /// The settled result, once loaded.
    #[must_use]
    pub fn settled(&self) -> Option<Settled> {
        match &*self.slot.lock().ok()? {
            Slot::Done(settled) => Some(settled.clone()),
            Slot::Placeholder | Slot::Fetching => None,
        }
    }

    /// Consumes the handle; a never-settled image counts as failed.
    #[must_use]
    pub fn into_settled(self) -> Settled {
        self.settled()
            .unwrap_or_else(|| Settled::Failed(format!("{} did not settle", self.source)))
    }
}

impl ImageHandle for RemoteImage {
    /// Spawns the fetch on the tokio runtime.
    fn assign_real_source(&mut self) {
        let Ok(mut slot) = self.slot.lock() else {
            return;
        };
        if !matches!(*slot, Slot::Placeholder) {
            return;
        }
        *slot = Slot::Fetching;
        drop(slot);

        let fetcher = Arc::clone(&self.fetcher);
        let source = self.source.clone();
        let slot = Arc::clone(&self.slot);
        tokio::spawn(async move {
            let settled = match fetcher.fetch(&source).await {
                Ok(bytes) => match ImageData::from_encoded(bytes) {
                    Ok(data) => Settled::Ready(data),
                    Err(err) => Settled::Failed(err.to_string()),
                },
                Err(err) => Settled::Failed(err.to_string()),
            };
            if let Settled::Failed(reason) = &settled {
                tracing::debug!(%source, %reason, "image failed to load");
            }
            if let Ok(mut slot) = slot.lock() {
                *slot = Slot::Done(settled);
            }
        });
    }

    fn is_loaded(&self) -> bool {
        self.slot
            .lock()
            .map(|slot| matches!(*slot, Slot::Done(_)))
            // A poisoned slot will never settle; treat it as done.
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::FetchError;
    use async_trait::async_trait;
    use image_rs::{ImageFormat, RgbaImage};

    pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbaImage::new(width, height)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    struct StaticFetcher;

    #[async_trait]
    impl ImageFetcher for StaticFetcher {
        async fn fetch(&self, relative_path: &str) -> std::result::Result<Vec<u8>, FetchError> {
            match relative_path {
                "buildScreens/a.png" => Ok(png_bytes(40, 30)),
                "buildDiffs/garbage.png" => Ok(b"not an image".to_vec()),
                other => Err(FetchError::NotFound(other.to_string())),
            }
        }
    }

    #[test]
    fn from_encoded_reads_dimensions() {
        let data = ImageData::from_encoded(png_bytes(12, 7)).expect("decode");
        assert_eq!((data.width, data.height), (12, 7));
        assert_eq!(data.size(), Size::new(12.0, 7.0));
    }

    #[test]
    fn from_encoded_rejects_garbage() {
        assert!(ImageData::from_encoded(b"nope".to_vec()).is_err());
    }

    #[test]
    fn placeholder_is_not_loaded() {
        let image = RemoteImage::new(Arc::new(StaticFetcher), "buildScreens/a.png");
        assert!(!image.is_loaded());
        assert!(image.settled().is_none());
    }

    async fn settle(mut image: RemoteImage) -> Settled {
        image.assign_real_source();
        while !image.is_loaded() {
            tokio::task::yield_now().await;
        }
        image.into_settled()
    }

    #[tokio::test]
    async fn fetch_success_settles_ready() {
        let image = RemoteImage::new(Arc::new(StaticFetcher), "buildScreens/a.png");
        let settled = settle(image).await;
        assert_eq!(settled.size(), Some(Size::new(40.0, 30.0)));
    }

    #[tokio::test]
    async fn missing_and_undecodable_images_still_settle() {
        let missing = RemoteImage::new(Arc::new(StaticFetcher), "approvedScreens/a.png");
        assert!(matches!(settle(missing).await, Settled::Failed(_)));

        let garbage = RemoteImage::new(Arc::new(StaticFetcher), "buildDiffs/garbage.png");
        assert!(settle(garbage).await.size().is_none());
    }
}
