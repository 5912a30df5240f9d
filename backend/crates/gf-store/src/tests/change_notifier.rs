use crate::ChangeNotifier;

use gf_core::{ChangeKind, Collection, StorageChange};

use googletest::prelude::*;
use tokio::sync::broadcast::error::TryRecvError;

#[test]
fn given_no_subscribers_when_notify_then_returns_zero() {
    let notifier = ChangeNotifier::default();

    let delivered = notifier.notify(StorageChange::new(Collection::Users, ChangeKind::Inserted));

    assert_that!(delivered, eq(0));
}

#[test]
fn given_two_subscribers_when_notify_then_both_receive() {
    let notifier = ChangeNotifier::default();
    let mut a = notifier.subscribe();
    let mut b = notifier.subscribe();
    let change = StorageChange::new(Collection::Attendance, ChangeKind::Cleared);

    let delivered = notifier.notify(change);

    assert_that!(delivered, eq(2));
    assert_that!(a.try_recv().unwrap(), eq(change));
    assert_that!(b.try_recv().unwrap(), eq(change));
}

#[test]
fn given_slow_subscriber_when_capacity_exceeded_then_lags() {
    let notifier = ChangeNotifier::new(1);
    let mut rx = notifier.subscribe();

    notifier.notify(StorageChange::new(Collection::Users, ChangeKind::Inserted));
    notifier.notify(StorageChange::new(Collection::Users, ChangeKind::Removed));

    assert!(matches!(rx.try_recv(), Err(TryRecvError::Lagged(1))));
}

#[test]
fn given_zero_capacity_when_new_then_clamped_to_one() {
    let notifier = ChangeNotifier::new(0);
    let mut rx = notifier.subscribe();

    notifier.notify(StorageChange::new(Collection::Schedules, ChangeKind::Inserted));

    assert!(rx.try_recv().is_ok());
}
