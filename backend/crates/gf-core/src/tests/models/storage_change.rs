use crate::{ChangeKind, Collection, StorageChange};

use googletest::prelude::*;

#[test]
fn given_change_when_serialize_then_uses_snake_case_names() {
    let change = StorageChange::new(Collection::Attendance, ChangeKind::Cleared);

    let json = serde_json::to_string(&change).unwrap();

    assert_that!(json, eq(r#"{"collection":"attendance","kind":"cleared"}"#));
}

#[test]
fn given_collection_when_display_then_lowercase_name() {
    assert_that!(Collection::Users.to_string(), eq("users"));
    assert_that!(Collection::Schedules.to_string(), eq("schedules"));
}
