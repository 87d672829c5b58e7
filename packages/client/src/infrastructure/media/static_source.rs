//! Media source for headless runs.
//!
//! Hands out a fixed stream handle instead of opening capture devices.

use async_trait::async_trait;

use crate::domain::{MediaError, MediaSource, MediaStreamHandle, TrackKind};

/// MediaSource returning a preconfigured handle
#[derive(Debug, Clone)]
pub struct StaticMediaSource {
    stream: Option<MediaStreamHandle>,
}

impl StaticMediaSource {
    /// Source yielding an audio + video stream labelled `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            stream: Some(MediaStreamHandle::new(id, vec![TrackKind::Audio, TrackKind::Video])),
        }
    }

    /// Source that reports the capture as unavailable
    pub fn unavailable() -> Self {
        Self { stream: None }
    }
}

#[async_trait]
impl MediaSource for StaticMediaSource {
    async fn acquire(&self) -> Result<MediaStreamHandle, MediaError> {
        self.stream
            .clone()
            .ok_or_else(|| MediaError::Unavailable("no capture device configured".to_string()))
    }
}
