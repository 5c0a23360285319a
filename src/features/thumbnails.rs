//! Video thumbnails
//!
//! Each list row loads its thumbnail URL. A failed load switches to the
//! placeholder image exactly once; if that fails too the row keeps a static
//! fallback tile.

use std::io::Cursor;

use anyhow::{Context, Result};
use iced::widget::image::Handle;
use reqwest::Url;

use crate::api::VideoEntry;

/// Which URL a slot is currently loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailSource {
    Original,
    Placeholder,
}

#[derive(Debug, Clone)]
pub enum ThumbnailStatus {
    Loading(ThumbnailSource),
    Ready(Handle),
    /// Both the original and the placeholder failed
    Unavailable,
}

/// Thumbnail state of one list row
#[derive(Debug, Clone)]
pub struct ThumbnailSlot {
    status: ThumbnailStatus,
}

impl ThumbnailSlot {
    fn new() -> Self {
        Self {
            status: ThumbnailStatus::Loading(ThumbnailSource::Original),
        }
    }

    pub fn status(&self) -> &ThumbnailStatus {
        &self.status
    }

    fn is_loading(&self, source: ThumbnailSource) -> bool {
        matches!(self.status, ThumbnailStatus::Loading(s) if s == source)
    }

    /// Store a loaded image. Ignored unless `source` is the pending load.
    pub fn loaded(&mut self, source: ThumbnailSource, handle: Handle) -> bool {
        if !self.is_loading(source) {
            return false;
        }
        self.status = ThumbnailStatus::Ready(handle);
        true
    }

    /// Record a failed load.
    ///
    /// Returns `Some(Placeholder)` the first time the original fails; a failed
    /// placeholder settles on `Unavailable` and requests nothing further.
    pub fn failed(&mut self, source: ThumbnailSource) -> Option<ThumbnailSource> {
        if !self.is_loading(source) {
            return None;
        }
        match source {
            ThumbnailSource::Original => {
                self.status = ThumbnailStatus::Loading(ThumbnailSource::Placeholder);
                Some(ThumbnailSource::Placeholder)
            }
            ThumbnailSource::Placeholder => {
                self.status = ThumbnailStatus::Unavailable;
                None
            }
        }
    }
}

/// One download the caller should start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailFetch {
    pub generation: u64,
    pub index: usize,
    pub source: ThumbnailSource,
    pub url: String,
}

/// Thumbnails for the currently committed report
#[derive(Debug, Clone)]
pub struct ThumbnailBoard {
    generation: u64,
    placeholder_url: String,
    originals: Vec<String>,
    slots: Vec<ThumbnailSlot>,
}

impl ThumbnailBoard {
    pub fn new(placeholder_url: impl Into<String>) -> Self {
        Self {
            generation: 0,
            placeholder_url: placeholder_url.into(),
            originals: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// Replace all slots for a newly committed report
    pub fn reset(&mut self, generation: u64, videos: &[VideoEntry]) -> Vec<ThumbnailFetch> {
        self.generation = generation;
        self.originals = videos.iter().map(|v| v.thumbnail_url.clone()).collect();
        self.slots = vec![ThumbnailSlot::new(); videos.len()];

        self.originals
            .iter()
            .enumerate()
            .map(|(index, url)| ThumbnailFetch {
                generation,
                index,
                source: ThumbnailSource::Original,
                url: url.clone(),
            })
            .collect()
    }

    /// Apply a finished download, returning the fallback fetch if one is due.
    ///
    /// Results tagged with a superseded generation are dropped.
    pub fn apply(
        &mut self,
        generation: u64,
        index: usize,
        source: ThumbnailSource,
        result: Result<Handle, String>,
    ) -> Option<ThumbnailFetch> {
        if generation != self.generation {
            tracing::trace!("Dropping thumbnail from superseded report {}", generation);
            return None;
        }
        let slot = self.slots.get_mut(index)?;

        match result {
            Ok(handle) => {
                slot.loaded(source, handle);
                None
            }
            Err(e) => {
                let next = slot.failed(source)?;
                tracing::debug!(
                    "Thumbnail {} failed ({}), falling back to placeholder",
                    index,
                    e
                );
                Some(ThumbnailFetch {
                    generation,
                    index,
                    source: next,
                    url: self.placeholder_url.clone(),
                })
            }
        }
    }

    pub fn status(&self, index: usize) -> Option<&ThumbnailStatus> {
        self.slots.get(index).map(ThumbnailSlot::status)
    }
}

/// Download a thumbnail and check that it is a decodable image
pub async fn fetch_thumbnail(client: reqwest::Client, url: String) -> Result<Handle> {
    let parsed =
        Url::parse(url.trim()).with_context(|| format!("invalid thumbnail url '{}'", url))?;

    let response = client
        .get(parsed)
        .send()
        .await
        .context("thumbnail request failed")?
        .error_for_status()
        .context("thumbnail request rejected")?;
    let bytes = response
        .bytes()
        .await
        .context("failed to read thumbnail body")?;

    let (width, height) = image::ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .context("failed to probe thumbnail format")?
        .into_dimensions()
        .context("thumbnail is not a decodable image")?;
    tracing::trace!("Loaded thumbnail {} ({}x{})", url, width, height);

    Ok(Handle::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PLACEHOLDER: &str = "https://placeholder.test/100x100";

    fn videos(n: usize) -> Vec<VideoEntry> {
        (0..n)
            .map(|i| VideoEntry {
                title: format!("video {}", i),
                views: i as u64,
                thumbnail_url: format!("https://i.ytimg.com/{}.jpg", i),
            })
            .collect()
    }

    fn handle() -> Handle {
        Handle::from_bytes(vec![0u8; 4])
    }

    fn png_bytes() -> Vec<u8> {
        let img = image::DynamicImage::ImageRgba8(image::RgbaImage::new(2, 3));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_reset_requests_every_original() {
        let mut board = ThumbnailBoard::new(PLACEHOLDER);
        let fetches = board.reset(1, &videos(3));
        assert_eq!(fetches.len(), 3);
        assert!(
            fetches
                .iter()
                .all(|f| f.source == ThumbnailSource::Original && f.generation == 1)
        );
        assert_eq!(fetches[2].url, "https://i.ytimg.com/2.jpg");
        assert!(matches!(
            board.status(0),
            Some(ThumbnailStatus::Loading(ThumbnailSource::Original))
        ));
    }

    #[test]
    fn test_fallback_happens_once() {
        let mut board = ThumbnailBoard::new(PLACEHOLDER);
        board.reset(1, &videos(1));

        let fallback = board
            .apply(1, 0, ThumbnailSource::Original, Err("404".to_string()))
            .unwrap();
        assert_eq!(fallback.source, ThumbnailSource::Placeholder);
        assert_eq!(fallback.url, PLACEHOLDER);

        // Placeholder fails as well: no further fetch
        assert!(
            board
                .apply(1, 0, ThumbnailSource::Placeholder, Err("404".to_string()))
                .is_none()
        );
        assert!(matches!(board.status(0), Some(ThumbnailStatus::Unavailable)));

        // Duplicate failure reports do not re-arm the fallback
        assert!(
            board
                .apply(1, 0, ThumbnailSource::Original, Err("404".to_string()))
                .is_none()
        );
    }

    #[test]
    fn test_placeholder_success() {
        let mut board = ThumbnailBoard::new(PLACEHOLDER);
        board.reset(1, &videos(1));
        board.apply(1, 0, ThumbnailSource::Original, Err("dns".to_string()));
        board.apply(1, 0, ThumbnailSource::Placeholder, Ok(handle()));
        assert!(matches!(board.status(0), Some(ThumbnailStatus::Ready(_))));
    }

    #[test]
    fn test_superseded_generation_dropped() {
        let mut board = ThumbnailBoard::new(PLACEHOLDER);
        board.reset(1, &videos(2));
        board.reset(2, &videos(2));

        assert!(
            board
                .apply(1, 0, ThumbnailSource::Original, Err("late".to_string()))
                .is_none()
        );
        board.apply(1, 1, ThumbnailSource::Original, Ok(handle()));
        assert!(matches!(
            board.status(0),
            Some(ThumbnailStatus::Loading(ThumbnailSource::Original))
        ));
        assert!(matches!(
            board.status(1),
            Some(ThumbnailStatus::Loading(ThumbnailSource::Original))
        ));
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let mut board = ThumbnailBoard::new(PLACEHOLDER);
        board.reset(1, &videos(1));
        assert!(
            board
                .apply(1, 5, ThumbnailSource::Original, Err("x".to_string()))
                .is_none()
        );
        assert!(board.status(5).is_none());
    }

    #[tokio::test]
    async fn test_fetch_thumbnail_accepts_image() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thumb.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes()))
            .mount(&server)
            .await;

        let url = format!("{}/thumb.png", server.uri());
        assert!(fetch_thumbnail(reqwest::Client::new(), url).await.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_thumbnail_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing.jpg"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/garbage.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not an image</html>"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        for url in [
            String::new(),
            format!("{}/missing.jpg", server.uri()),
            format!("{}/garbage.jpg", server.uri()),
        ] {
            assert!(
                fetch_thumbnail(client.clone(), url.clone()).await.is_err(),
                "{:?} should fail",
                url
            );
        }
    }
}
