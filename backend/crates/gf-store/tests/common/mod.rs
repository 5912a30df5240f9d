#![allow(dead_code)]

use gf_store::{DemoStorage, FixedClock};

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use gf_core::User;

/// 2024-09-02 08:15:00 local
pub fn morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 9, 2)
        .unwrap()
        .and_hms_opt(8, 15, 0)
        .unwrap()
}

/// In-memory session with a manually driven clock
pub fn create_test_storage() -> (DemoStorage, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(morning()));
    let storage = DemoStorage::in_memory().with_clock(clock.clone());
    (storage, clock)
}

pub fn create_test_user(id: &str, name: &str, role: &str) -> User {
    User::new(id, name, role).with_images(vec![format!("data:image/jpeg;base64,{id}")])
}
