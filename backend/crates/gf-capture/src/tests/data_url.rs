use crate::{CapturedImage, JPEG_MIME, decode_text, encode_to_text};

use googletest::prelude::*;

#[test]
fn given_bytes_when_encode_to_text_then_data_url_with_mime() {
    let text = encode_to_text(b"hi!", JPEG_MIME);

    assert_that!(text, eq("data:image/jpeg;base64,aGkh"));
}

#[test]
fn given_empty_bytes_when_encode_to_text_then_empty_payload() {
    assert_that!(encode_to_text(&[], "image/png"), eq("data:image/png;base64,"));
}

#[test]
fn given_data_url_when_decode_text_then_mime_and_bytes() {
    let (mime, bytes) = decode_text("data:image/jpeg;base64,aGkh").unwrap();

    assert_that!(mime.as_str(), eq("image/jpeg"));
    assert_that!(bytes, eq(&b"hi!".to_vec()));
}

#[test]
fn given_malformed_text_when_decode_text_then_none() {
    assert_that!(decode_text("not a data url"), none());
    assert_that!(decode_text("data:image/jpeg,plain"), none());
    assert_that!(decode_text("data:image/jpeg;base64,@@@"), none());
}

#[test]
fn given_captured_image_when_to_data_url_then_decodes_to_same_bytes() {
    let image = CapturedImage {
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
        mime: JPEG_MIME.to_string(),
        width: 2,
        height: 2,
    };

    let (mime, bytes) = decode_text(&image.to_data_url()).unwrap();

    assert_that!(mime.as_str(), eq(JPEG_MIME));
    assert_that!(bytes, eq(&image.bytes));
}
