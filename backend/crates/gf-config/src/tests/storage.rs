use crate::StorageConfig;

use googletest::prelude::*;

#[test]
fn given_default_storage_config_when_validate_then_ok() {
    assert_that!(StorageConfig::default().validate(), ok(anything()));
}

#[test]
fn given_origin_with_slash_when_validate_then_error() {
    let config = StorageConfig {
        origin: "a/b".to_string(),
        ..StorageConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_zero_channel_capacity_when_validate_then_error() {
    let config = StorageConfig {
        change_channel_capacity: 0,
        ..StorageConfig::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("change_channel_capacity")
    );
}
