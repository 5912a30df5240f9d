use crate::AttendanceEntry;

use chrono::NaiveDate;
use googletest::prelude::*;

fn at(h: u32, m: u32, s: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

#[test]
fn given_timestamp_when_new_then_formats_date_and_time() {
    let entry = AttendanceEntry::new("student", "S1", "Bo", at(8, 4, 9), "Present");

    assert_that!(entry.date, eq("2024-03-05"));
    assert_that!(entry.time, eq("08:04:09"));
}

#[test]
fn given_entry_when_serialize_then_kind_is_written_as_type() {
    let entry = AttendanceEntry::new("teacher", "T1", "Cy", at(12, 0, 0), "Late");

    let value = serde_json::to_value(&entry).unwrap();

    assert_that!(value["type"].as_str(), some(eq("teacher")));
    assert_that!(value.get("kind"), none());
}

#[test]
fn given_persisted_json_when_deserialize_then_reads_type_field() {
    let json = r#"{"type":"student","id":"s1","name":"s1","date":"2024-01-01","time":"09:00:00","status":"Present"}"#;

    let entry: AttendanceEntry = serde_json::from_str(json).unwrap();

    assert_that!(entry.kind, eq("student"));
    assert_that!(entry.status, eq("Present"));
}

#[test]
fn given_record_without_status_or_name_when_deserialize_then_fields_default_to_empty() {
    let entry: AttendanceEntry = serde_json::from_str(
        r#"{"type":"student","id":"S1","date":"2024-03-05","time":"08:04:09"}"#,
    )
    .unwrap();

    assert_that!(entry.kind, eq("student"));
    assert_that!(entry.name, eq(""));
    assert_that!(entry.status, eq(""));
}
