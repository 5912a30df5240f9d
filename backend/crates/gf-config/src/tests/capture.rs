use crate::{CaptureConfig, FacingMode};

use googletest::prelude::*;

#[test]
fn given_default_capture_config_when_validate_then_ok() {
    assert_that!(CaptureConfig::default().validate(), ok(anything()));
}

#[test]
fn given_quality_above_one_when_validate_then_error() {
    let config = CaptureConfig {
        jpeg_quality: 1.5,
        ..CaptureConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_zero_width_when_validate_then_error() {
    let config = CaptureConfig {
        width: 0,
        ..CaptureConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_facing_mode_strings_when_parse_then_case_insensitive() {
    assert_that!("USER".parse::<FacingMode>().unwrap(), eq(FacingMode::User));
    assert_that!(
        "environment".parse::<FacingMode>().unwrap(),
        eq(FacingMode::Environment)
    );
    assert!("rear".parse::<FacingMode>().is_err());
}
