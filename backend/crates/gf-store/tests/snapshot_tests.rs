mod common;

use common::{create_test_storage, create_test_user};

use gf_core::{CURRENT_SCHEMA_VERSION, ScheduleEntry};
use gf_store::{DemoStorage, StoreError};

use googletest::prelude::*;

#[test]
fn given_populated_storage_when_export_then_snapshot_contains_all_collections() {
    let (storage, _clock) = create_test_storage();
    storage
        .users()
        .register(create_test_user("S1", "Ann", "student"))
        .unwrap();
    storage.attendance().record("student", "S1", "Present").unwrap();
    storage
        .schedules()
        .add(ScheduleEntry::new("7A", "Art", "T1", "Tue", "11:00", "12:00"))
        .unwrap();

    let snapshot = storage.export_snapshot("gf-store-tests");

    assert_that!(snapshot.schema_version, eq(CURRENT_SCHEMA_VERSION));
    assert_that!(snapshot.exported_by, eq("gf-store-tests"));
    assert_that!(snapshot.users, len(eq(1)));
    assert_that!(snapshot.attendance, len(eq(1)));
    assert_that!(snapshot.schedules, len(eq(1)));
}

#[test]
fn given_snapshot_when_imported_into_fresh_storage_then_collections_match() {
    // Given
    let (source, _clock) = create_test_storage();
    source
        .users()
        .register(create_test_user("S1", "Ann", "student"))
        .unwrap();
    source.attendance().record("student", "S1", "Present").unwrap();
    source.attendance().record("student", "S1", "Late").unwrap();
    let snapshot = source.export_snapshot("test");

    // When
    let target = DemoStorage::in_memory();
    target
        .users()
        .register(create_test_user("OLD", "Old", "student"))
        .unwrap();
    let counts = target.import_snapshot(&snapshot).unwrap();

    // Then
    assert_that!(counts.users, eq(1));
    assert_that!(counts.attendance, eq(2));
    assert_that!(target.users().list_all(), eq(&source.users().list_all()));
    assert_that!(
        target.attendance().list_all(),
        eq(&source.attendance().list_all())
    );
}

#[test]
fn given_future_schema_when_import_then_rejected_and_storage_untouched() {
    let (storage, _clock) = create_test_storage();
    storage
        .users()
        .register(create_test_user("S1", "Ann", "student"))
        .unwrap();
    let mut snapshot = storage.export_snapshot("test");
    snapshot.schema_version = CURRENT_SCHEMA_VERSION + 1;
    snapshot.users.clear();

    let result = storage.import_snapshot(&snapshot);

    assert!(matches!(result, Err(StoreError::UnsupportedSchema { .. })));
    assert_that!(storage.users().list_all(), len(eq(1)));
}
