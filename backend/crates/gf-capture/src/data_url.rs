use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const DATA_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Encode image bytes as an embeddable `data:<mime>;base64,<payload>` string.
pub fn encode_to_text(bytes: &[u8], mime: &str) -> String {
    format!("{DATA_PREFIX}{mime}{BASE64_MARKER}{}", STANDARD.encode(bytes))
}

/// Split a base64 data URL back into its mime type and bytes. Returns `None`
/// for anything that is not a well-formed base64 data URL.
pub fn decode_text(text: &str) -> Option<(String, Vec<u8>)> {
    let rest = text.strip_prefix(DATA_PREFIX)?;
    let (mime, payload) = rest.split_once(BASE64_MARKER)?;

    match STANDARD.decode(payload) {
        Ok(bytes) => Some((mime.to_string(), bytes)),
        Err(e) => {
            log::debug!("Rejected data URL payload: {}", e);
            None
        }
    }
}
