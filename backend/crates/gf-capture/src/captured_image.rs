use crate::encode_to_text;

pub const JPEG_MIME: &str = "image/jpeg";

/// An encoded still taken from a video source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub bytes: Vec<u8>,
    pub mime: String,
    pub width: u32,
    pub height: u32,
}

impl CapturedImage {
    /// Text form stored in a user's enrollment images.
    pub fn to_data_url(&self) -> String {
        encode_to_text(&self.bytes, &self.mime)
    }
}
