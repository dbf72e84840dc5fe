// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monotonic clock abstraction for hold-time measurement
//!
//! Every duration the instrumentation reports is the difference of two
//! readings from one [`Clock`]. `Instant` never goes backwards and ignores
//! wall-clock corrections, so neither does any implementation here.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A monotonic time source
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> Instant;
}

/// The process monotonic clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Fake clock for testing with controllable time
///
/// Time starts at [`FakeClock::origin`] and only moves when advanced. Clones
/// share the same reading, so a test can keep one handle while the lock under
/// test holds another. Reading the clock never takes a lock.
#[derive(Clone, Debug)]
pub struct FakeClock {
    origin: Instant,
    elapsed_nanos: Arc<AtomicU64>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed_nanos: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The instant this clock reports before it is first advanced
    pub fn origin(&self) -> Instant {
        self.origin
    }

    /// Time elapsed since the origin
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos.load(Ordering::Acquire))
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        self.elapsed_nanos
            .fetch_add(saturating_nanos(duration), Ordering::AcqRel);
    }

    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    /// Move the clock to `millis` after the origin; earlier readings are kept
    pub fn set_ms(&self, millis: u64) {
        let target = saturating_nanos(Duration::from_millis(millis));
        self.elapsed_nanos.fetch_max(target, Ordering::AcqRel);
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }
}

fn saturating_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
