//! Seams to the host's media stack. The host supplies implementations; this
//! crate only orchestrates them.

use crate::{MediaConstraints, Result};

use std::sync::Arc;

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Video,
    Audio,
}

/// One live track of a granted media stream.
pub trait MediaTrack: Send + Sync {
    fn kind(&self) -> TrackKind;

    /// Must be a no-op on a track that has already ended.
    fn stop(&self);

    fn is_live(&self) -> bool;
}

/// Grants camera streams.
#[async_trait]
pub trait MediaDevices: Send + Sync {
    /// Resolves once the user or platform grants or denies access. Denial is
    /// `CaptureError::PermissionDenied`.
    async fn get_user_media(
        &self,
        constraints: &MediaConstraints,
    ) -> Result<Vec<Arc<dyn MediaTrack>>>;
}

/// Raw pixels of a drawn frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Something showing a live video stream.
pub trait VideoSource: Send + Sync {
    /// Zero until the stream has reported its size.
    fn video_width(&self) -> u32;

    fn video_height(&self) -> u32;

    /// Draw the current frame scaled to `width` x `height`.
    fn draw_frame(&self, width: u32, height: u32) -> Result<Frame>;
}

/// Still-image encoder, e.g. the platform's JPEG codec.
#[async_trait]
pub trait ImageEncoder: Send + Sync {
    async fn encode(&self, frame: &Frame, mime: &str, quality: f32) -> Result<Vec<u8>>;
}
