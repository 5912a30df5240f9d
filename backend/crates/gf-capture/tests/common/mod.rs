#![allow(dead_code)]

use gf_capture::{
    CaptureError, Frame, ImageEncoder, MediaConstraints, MediaDevices, MediaTrack, Result,
    TrackKind, VideoSource,
};

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

pub struct FakeTrack {
    kind: TrackKind,
    live: AtomicBool,
    pub stop_calls: AtomicUsize,
}

impl FakeTrack {
    pub fn new(kind: TrackKind) -> Arc<Self> {
        Arc::new(Self {
            kind,
            live: AtomicBool::new(true),
            stop_calls: AtomicUsize::new(0),
        })
    }
}

impl MediaTrack for FakeTrack {
    fn kind(&self) -> TrackKind {
        self.kind
    }

    fn stop(&self) {
        self.stop_calls.fetch_add(1, Ordering::SeqCst);
        self.live.store(false, Ordering::SeqCst);
    }

    fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }
}

pub enum Grant {
    Tracks(Vec<Arc<FakeTrack>>),
    Deny,
    Busy,
}

pub struct FakeDevices {
    grant: Grant,
    pub requests: Mutex<Vec<MediaConstraints>>,
}

impl FakeDevices {
    pub fn new(grant: Grant) -> Arc<Self> {
        Arc::new(Self {
            grant,
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl MediaDevices for FakeDevices {
    async fn get_user_media(
        &self,
        constraints: &MediaConstraints,
    ) -> Result<Vec<Arc<dyn MediaTrack>>> {
        self.requests.lock().unwrap().push(*constraints);
        match &self.grant {
            Grant::Tracks(tracks) => Ok(tracks
                .iter()
                .map(|t| Arc::clone(t) as Arc<dyn MediaTrack>)
                .collect()),
            Grant::Deny => Err(CaptureError::permission_denied("NotAllowedError")),
            Grant::Busy => Err(CaptureError::device_failure("NotReadableError")),
        }
    }
}

pub struct FakeSource {
    pub width: u32,
    pub height: u32,
    pub broken: bool,
}

impl VideoSource for FakeSource {
    fn video_width(&self) -> u32 {
        self.width
    }

    fn video_height(&self) -> u32 {
        self.height
    }

    fn draw_frame(&self, width: u32, height: u32) -> Result<Frame> {
        if self.broken {
            return Err(CaptureError::frame("canvas tainted"));
        }
        Ok(Frame {
            width,
            height,
            pixels: vec![0; 4],
        })
    }
}

/// Encodes a frame as `[quality * 100]` followed by the pixels.
pub struct FakeEncoder {
    pub fail: bool,
}

#[async_trait]
impl ImageEncoder for FakeEncoder {
    async fn encode(&self, frame: &Frame, _mime: &str, quality: f32) -> Result<Vec<u8>> {
        if self.fail {
            return Err(CaptureError::frame("encoder returned no blob"));
        }
        let mut bytes = vec![(quality * 100.0).round() as u8];
        bytes.extend_from_slice(&frame.pixels);
        Ok(bytes)
    }
}
