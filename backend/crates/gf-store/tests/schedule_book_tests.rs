mod common;

use common::create_test_storage;

use gf_core::ScheduleEntry;

use googletest::prelude::*;
use uuid::Uuid;

fn slot(class_id: &str, teacher_id: &str) -> ScheduleEntry {
    ScheduleEntry::new(class_id, "Maths", teacher_id, "Mon", "09:00", "10:00")
}

#[test]
fn given_added_slots_when_list_all_then_insertion_order() {
    let (storage, _clock) = create_test_storage();
    let book = storage.schedules();
    let a = slot("7A", "T1");
    let b = slot("7B", "T2");

    book.add(a.clone()).unwrap();
    book.add(b.clone()).unwrap();

    assert_that!(book.list_all(), eq(&vec![a, b]));
}

#[test]
fn given_slots_when_list_by_teacher_then_matches_ignoring_case() {
    let (storage, _clock) = create_test_storage();
    let book = storage.schedules();
    book.add(slot("7A", "T1")).unwrap();
    book.add(slot("7B", "t1")).unwrap();
    book.add(slot("8A", "T2")).unwrap();

    let slots = book.list_by_teacher("T1");

    assert_that!(slots, len(eq(2)));
}

#[test]
fn given_slot_when_remove_by_id_then_only_that_slot_removed() {
    let (storage, _clock) = create_test_storage();
    let book = storage.schedules();
    let keep = slot("7A", "T1");
    let gone = slot("7B", "T1");
    book.add(keep.clone()).unwrap();
    book.add(gone.clone()).unwrap();

    let removed = book.remove(gone.id).unwrap();

    assert_that!(removed, eq(1));
    assert_that!(book.list_all(), eq(&vec![keep]));
}

#[test]
fn given_unknown_id_when_remove_then_nothing_removed() {
    let (storage, _clock) = create_test_storage();
    let book = storage.schedules();
    book.add(slot("7A", "T1")).unwrap();

    let removed = book.remove(Uuid::new_v4()).unwrap();

    assert_that!(removed, eq(0));
    assert_that!(book.list_all(), len(eq(1)));
}

#[test]
fn given_slots_when_user_directory_cleared_then_schedules_survive() {
    let (storage, _clock) = create_test_storage();
    storage.schedules().add(slot("7A", "T1")).unwrap();

    storage.users().clear_all().unwrap();

    assert_that!(storage.schedules().list_all(), len(eq(1)));
}

#[test]
fn given_slots_when_clear_all_then_empty() {
    let (storage, _clock) = create_test_storage();
    storage.schedules().add(slot("7A", "T1")).unwrap();

    storage.schedules().clear_all().unwrap();

    assert_that!(storage.schedules().list_all(), is_empty());
}
