use crate::{MediaConstraints, MediaTrack, TrackKind};

use std::fmt;
use std::sync::Arc;

/// A granted camera stream. Dropping the handle does not stop the camera;
/// pass it to `CaptureService::release`.
#[derive(Clone)]
pub struct CameraHandle {
    tracks: Vec<Arc<dyn MediaTrack>>,
    constraints: MediaConstraints,
}

impl CameraHandle {
    pub(crate) fn new(tracks: Vec<Arc<dyn MediaTrack>>, constraints: MediaConstraints) -> Self {
        Self {
            tracks,
            constraints,
        }
    }

    pub fn constraints(&self) -> &MediaConstraints {
        &self.constraints
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// True while any video track is still live.
    pub fn is_live(&self) -> bool {
        self.tracks
            .iter()
            .any(|t| t.kind() == TrackKind::Video && t.is_live())
    }

    pub(crate) fn stop_all(&self) {
        for track in &self.tracks {
            track.stop();
        }
    }
}

impl fmt::Debug for CameraHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraHandle")
            .field("tracks", &self.tracks.len())
            .field("constraints", &self.constraints)
            .finish()
    }
}
