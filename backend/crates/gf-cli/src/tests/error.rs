use crate::CliError;

use gf_store::StoreError;

use googletest::prelude::*;

#[test]
fn given_not_found_when_displayed_then_names_entity_and_id() {
    let err = CliError::not_found("User", "S001");

    assert_that!(err.to_string(), contains_substring("User 'S001' not found"));
}

#[test]
fn given_store_error_when_converted_then_wrapped() {
    let err: CliError = StoreError::duplicate_user("S001").into();

    assert!(matches!(err, CliError::Store(_)));
    assert_that!(err.to_string(), contains_substring("S001"));
}

#[test]
fn given_bad_json_when_converted_then_json_variant() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let err: CliError = parse_err.into();

    assert!(matches!(err, CliError::Json { .. }));
}
