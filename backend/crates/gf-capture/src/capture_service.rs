use crate::{
    CameraHandle, CaptureError, CapturedImage, ImageEncoder, JPEG_MIME, MediaConstraints,
    MediaDevices, Result as CaptureErrorResult, VideoSource,
};

use gf_config::CaptureConfig;

use std::sync::Arc;

/// Camera acquisition and still capture over the host's media services.
pub struct CaptureService {
    devices: Option<Arc<dyn MediaDevices>>,
    encoder: Option<Arc<dyn ImageEncoder>>,
    config: CaptureConfig,
}

impl CaptureService {
    pub fn new(
        devices: Arc<dyn MediaDevices>,
        encoder: Arc<dyn ImageEncoder>,
        config: CaptureConfig,
    ) -> Self {
        Self {
            devices: Some(devices),
            encoder: Some(encoder),
            config,
        }
    }

    /// A platform with no camera API at all.
    pub fn unsupported(config: CaptureConfig) -> Self {
        Self {
            devices: None,
            encoder: None,
            config,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.devices.is_some()
    }

    pub fn constraints(&self) -> MediaConstraints {
        MediaConstraints::from(&self.config)
    }

    /// Request a video stream. Suspends until the platform grants or denies it.
    pub async fn acquire(&self) -> CaptureErrorResult<CameraHandle> {
        let Some(devices) = self.devices.as_ref() else {
            return Err(CaptureError::capability_unavailable(
                "no media devices available",
            ));
        };

        let constraints = self.constraints();
        log::debug!(
            "Requesting camera {}x{} facing {}",
            constraints.width,
            constraints.height,
            constraints.facing_mode.as_str()
        );

        let tracks = devices.get_user_media(&constraints).await.inspect_err(|e| {
            log::warn!("Camera acquisition failed: {}", e);
        })?;

        if tracks.is_empty() {
            return Err(CaptureError::device_failure("stream has no tracks"));
        }

        log::info!("Camera acquired with {} track(s)", tracks.len());
        Ok(CameraHandle::new(tracks, constraints))
    }

    /// Stop every track of `handle`. Safe to call repeatedly or with `None`.
    pub fn release(&self, handle: Option<&CameraHandle>) {
        if let Some(handle) = handle {
            handle.stop_all();
            log::debug!("Camera released ({} track(s))", handle.track_count());
        }
    }

    /// Snapshot the current frame of `source` as a JPEG. Any draw or encode
    /// failure yields `None`.
    pub async fn capture_frame(&self, source: &dyn VideoSource) -> Option<CapturedImage> {
        let Some(encoder) = self.encoder.as_ref() else {
            log::warn!("Frame capture skipped: no image encoder");
            return None;
        };

        let width = match source.video_width() {
            0 => self.config.width,
            w => w,
        };
        let height = match source.video_height() {
            0 => self.config.height,
            h => h,
        };

        let frame = match source.draw_frame(width, height) {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("Frame draw failed: {}", e);
                return None;
            }
        };

        match encoder
            .encode(&frame, JPEG_MIME, self.config.jpeg_quality)
            .await
        {
            Ok(bytes) => Some(CapturedImage {
                bytes,
                mime: JPEG_MIME.to_string(),
                width,
                height,
            }),
            Err(e) => {
                log::warn!("Frame encode failed: {}", e);
                None
            }
        }
    }
}
