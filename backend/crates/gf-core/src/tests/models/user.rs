use crate::User;

use googletest::prelude::*;

#[test]
fn given_mixed_case_id_when_has_id_then_matches_ignoring_case() {
    let user = User::new("AB12", "Alice", "student");

    assert_that!(user.has_id("ab12"), eq(true));
    assert_that!(user.has_id("AB12"), eq(true));
    assert_that!(user.has_id("AB13"), eq(false));
}

#[test]
fn given_empty_name_when_display_name_then_falls_back_to_id() {
    let user = User::new("T-7", "", "teacher");

    assert_that!(user.display_name(), eq("T-7"));
}

#[test]
fn given_record_without_images_when_deserialize_then_images_empty() {
    let json = r#"{"id":"S1","name":"Bo","role":"student"}"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_that!(user.images, is_empty());
}

#[test]
fn given_user_with_images_when_serialize_then_uses_persisted_field_names() {
    let user = User::new("S1", "Bo", "student")
        .with_images(vec!["data:image/jpeg;base64,AAAA".to_string()]);

    let value = serde_json::to_value(&user).unwrap();

    assert_that!(value["id"].as_str(), some(eq("S1")));
    assert_that!(value["role"].as_str(), some(eq("student")));
    assert_that!(value["images"].as_array().map(|a| a.len()), some(eq(1)));
}

#[test]
fn given_record_without_name_or_role_when_deserialize_then_fields_default_to_empty() {
    let user: User = serde_json::from_str(r#"{"id":"S9"}"#).unwrap();

    assert_that!(user.id, eq("S9"));
    assert_that!(user.name, eq(""));
    assert_that!(user.role, eq(""));
    assert_that!(user.images, is_empty());
    assert_that!(user.display_name(), eq("S9"));
}
