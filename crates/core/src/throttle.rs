// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Warning throttle
//!
//! Admits at most one warning per gap, measured from the last warning that
//! was actually emitted. Suppressed warnings are counted and handed to the
//! next admitted one. Safe to call from many threads at once: the timestamp
//! is only moved by a successful compare-and-set, so two callers can never
//! both be admitted inside the same gap.

use crate::stamp::AtomicInstant;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Throttle {
    min_gap: Duration,
    last_logged: AtomicInstant,
    suppressed: AtomicU64,
}

impl Throttle {
    pub fn new(min_gap: Duration, origin: Instant) -> Self {
        Self {
            min_gap,
            last_logged: AtomicInstant::new(origin),
            suppressed: AtomicU64::new(0),
        }
    }

    /// Decide whether a warning observed at `at` may be emitted.
    ///
    /// Returns the number of warnings suppressed since the last admitted one,
    /// or `None` when the warning falls inside the gap.
    pub fn admit(&self, at: Instant) -> Option<u64> {
        let admitted = self.last_logged.fetch_update(|last| match last {
            Some(last) if at.saturating_duration_since(last) < self.min_gap => None,
            Some(last) => Some(last.max(at)),
            None => Some(at),
        });

        match admitted {
            Ok(_) => Some(self.suppressed.swap(0, Ordering::AcqRel)),
            Err(_) => {
                self.suppressed.fetch_add(1, Ordering::AcqRel);
                None
            }
        }
    }

    /// When the last warning was admitted
    pub fn last_logged(&self) -> Option<Instant> {
        self.last_logged.load()
    }

    /// Warnings suppressed since the last admitted one
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Acquire)
    }
}

#[cfg(test)]
#[path = "throttle_tests.rs"]
mod tests;
