//! Error handling specs

use crate::prelude::*;

#[test]
fn releasing_an_unheld_write_lock_fails_unchanged() {
    let h = Harness::new(100, 0);
    assert_eq!(h.lock.write_lock().unlock(), Err(LockError::NotWriteOwner));
}

#[test]
fn releasing_an_unheld_read_lock_fails_unchanged() {
    let h = Harness::new(100, 0);
    assert_eq!(h.lock.read_lock().unlock(), Err(LockError::NotReadOwner));
}

#[test]
fn upgrading_a_read_hold_fails_unchanged() {
    let h = Harness::new(100, 0);
    h.lock.read_lock().lock().unwrap();
    assert_eq!(h.lock.write_lock().lock(), Err(LockError::UpgradeRefused));
    assert_eq!(h.lock.write_lock().held_since(), None);
    h.lock.read_lock().unlock().unwrap();
}

#[test]
fn misconfigured_lock_never_runs() {
    let result = InstrumentedRwLock::with_clock(LockConfig::new(""), FakeClock::new());
    assert!(matches!(result, Err(ConfigError::EmptyName)));
}

#[test]
fn failing_sink_never_reaches_the_caller() {
    let h = Harness::new(100, 0);
    h.sink.set_failing(true);

    h.write_hold(0, 500);

    assert!(!h.lock.inner().is_write_locked());
    assert!(h.sink.warnings().is_empty());
}
