//! Reentrancy specs
//!
//! Only the outermost acquire starts timing and only the outermost release
//! reports.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn nested_write_holds_report_once_on_final_release() {
    let h = Harness::new(100, 0);
    let write = h.lock.write_lock();

    write.lock().unwrap();
    let started = write.held_since();
    h.clock.set_ms(40);
    write.lock().unwrap();
    assert_eq!(write.held_since(), started);

    h.clock.set_ms(180);
    write.unlock().unwrap();
    assert!(h.sink.warnings().is_empty());

    h.clock.set_ms(220);
    write.unlock().unwrap();
    assert_eq!(h.held_ms(), vec![220]);
    assert_eq!(write.held_since(), None);
}

#[test]
fn nested_read_holds_report_once_on_final_release() {
    let h = Harness::new(100, 0);
    let read = h.lock.read_lock();

    for _ in 0..3 {
        read.lock().unwrap();
        h.clock.advance_ms(50);
    }
    for _ in 0..3 {
        read.unlock().unwrap();
    }

    let warnings = h.sink.held();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, LockKind::Read);
    assert_eq!(warnings[0].duration_ms(), 150);
}

#[test]
fn guards_nest_like_explicit_calls() {
    let h = Harness::new(100, 0);
    {
        let _outer = h.lock.write_lock().guard().unwrap();
        h.clock.advance_ms(60);
        {
            let _inner = h.lock.write_lock().guard().unwrap();
            h.clock.advance_ms(60);
        }
        assert!(h.sink.warnings().is_empty());
    }
    assert_eq!(h.held_ms(), vec![120]);
}
