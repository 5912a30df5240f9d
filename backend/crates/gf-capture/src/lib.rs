pub mod camera_handle;
pub mod capture_service;
pub mod captured_image;
pub mod data_url;
pub mod error;
pub mod media_constraints;
pub mod platform;

#[cfg(test)]
mod tests;

pub use camera_handle::CameraHandle;
pub use capture_service::CaptureService;
pub use captured_image::{CapturedImage, JPEG_MIME};
pub use data_url::{decode_text, encode_to_text};
pub use error::{CaptureError, Result};
pub use media_constraints::MediaConstraints;
pub use platform::{Frame, ImageEncoder, MediaDevices, MediaTrack, TrackKind, VideoSource};
