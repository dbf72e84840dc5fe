//! Throttle gap specs
//!
//! The gap is measured from the last warning that was actually logged.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn first_slow_hold_is_logged() {
    let h = Harness::new(100, 1000);
    h.write_hold(0, 150);

    assert_eq!(h.held_ms(), vec![150]);
    assert_eq!(h.last_write_warning_ms(), Some(150));
}

#[test]
fn slow_hold_inside_gap_is_suppressed() {
    let h = Harness::new(100, 1000);
    h.write_hold(0, 150);
    h.write_hold(200, 400);

    assert_eq!(h.held_ms(), vec![150]);
    assert_eq!(h.last_write_warning_ms(), Some(150));
}

#[test]
fn slow_hold_after_gap_is_logged() {
    let h = Harness::new(100, 1000);
    h.write_hold(0, 150);
    h.write_hold(200, 400);
    h.write_hold(1200, 1400);

    assert_eq!(h.held_ms(), vec![150, 200]);
    assert_eq!(h.last_write_warning_ms(), Some(1400));
}

#[test]
fn logged_warning_reports_how_many_were_suppressed() {
    let h = Harness::new(100, 1000);
    h.write_hold(0, 150);
    h.write_hold(200, 400);
    h.write_hold(500, 700);
    h.write_hold(1200, 1400);

    let suppressed: Vec<_> = h.sink.held().iter().map(|w| w.suppressed).collect();
    assert_eq!(suppressed, vec![0, 2]);
}
