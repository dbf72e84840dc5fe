//! Contention specs
//!
//! A blocked thread's wait is its own; it never lengthens the holder's hold.

use crate::prelude::*;
use std::thread;

#[test]
fn blocked_writer_does_not_extend_the_holders_hold() {
    let h = Harness::new(100, 0);
    h.lock.write_lock().lock().unwrap();

    let waiter = {
        let lock = Arc::clone(&h.lock);
        let clock = h.clock.clone();
        thread::spawn(move || {
            lock.write_lock().lock().unwrap();
            clock.advance_ms(30);
            lock.write_lock().unlock().unwrap();
        })
    };
    while h.lock.inner().queued_writers() == 0 {
        thread::yield_now();
    }

    h.clock.set_ms(400);
    h.lock.write_lock().unlock().unwrap();
    waiter.join().unwrap();

    // Holder: 0..400. Waiter: blocked 0..400, then held 400..430.
    assert_eq!(h.held_ms(), vec![400]);
    let waited: Vec<_> = h.sink.waited().iter().map(|w| w.duration_ms()).collect();
    assert_eq!(waited, vec![400]);
}

#[test]
fn uncontended_acquire_reports_no_wait() {
    let h = Harness::new(100, 0);
    h.write_hold(0, 50);
    assert!(h.sink.waited().is_empty());
}

#[test]
fn queued_writer_reports_wait_and_slow_hold_under_gap() {
    let h = Harness::new(100, 1000);
    h.lock.read_lock().lock().unwrap();

    let writer = {
        let lock = Arc::clone(&h.lock);
        let clock = h.clock.clone();
        thread::spawn(move || {
            lock.write_lock().lock().unwrap();
            clock.set_ms(400);
            lock.write_lock().unlock().unwrap();
        })
    };
    while h.lock.inner().queued_writers() == 0 {
        thread::yield_now();
    }

    h.clock.set_ms(150);
    h.lock.read_lock().unlock().unwrap();
    writer.join().unwrap();

    // Writer: blocked 0..150, then held 150..400. The wait warning leaves the
    // first slow write hold unthrottled.
    let waited: Vec<_> = h
        .sink
        .waited()
        .iter()
        .map(|w| (w.kind, w.duration_ms()))
        .collect();
    assert_eq!(waited, vec![(LockKind::Write, 150)]);
    let held_write: Vec<_> = h
        .sink
        .held()
        .iter()
        .filter(|w| w.kind == LockKind::Write)
        .map(|w| w.duration_ms())
        .collect();
    assert_eq!(held_write, vec![250]);
    assert_eq!(h.last_write_warning_ms(), Some(400));
    assert_eq!(h.lock.write_lock().suppressed_warnings(), 0);
}
