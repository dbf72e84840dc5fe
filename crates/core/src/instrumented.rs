// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instrumented lock
//!
//! Wraps one [`LockSide`] and measures each outermost hold: from the acquire
//! that takes the calling thread's hold count 0→1 to the release that takes
//! it 1→0. Holds longer than the configured threshold are reported through a
//! [`WarningSink`], at most once per `min_log_gap`. Time spent blocked in
//! [`InstrumentedLock::lock`] is checked against the same threshold with a
//! throttle of its own, and never counts toward a hold.

use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, LockConfig};
use crate::side::{HeldSince, LockKind, LockSide, ReadSide, WriteSide};
use crate::sink::{HoldEvent, HoldWarning, TracingSink, WarningSink};
use crate::throttle::Throttle;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

/// Instrumented exclusive side of a `ReentrantRwLock`
pub type InstrumentedWriteLock<C = SystemClock> = InstrumentedLock<WriteSide, C>;

/// Instrumented shared side of a `ReentrantRwLock`
pub type InstrumentedReadLock<C = SystemClock> = InstrumentedLock<ReadSide, C>;

/// One side of a lock, reporting outermost holds and waits above the threshold
pub struct InstrumentedLock<S: LockSide, C: Clock = SystemClock> {
    config: LockConfig,
    side: S,
    clock: C,
    held_since: S::HeldSince,
    hold_throttle: Throttle,
    wait_throttle: Throttle,
    sink: Arc<dyn WarningSink>,
}

impl<S: LockSide> InstrumentedLock<S, SystemClock> {
    /// Instrument `side` timed by the system clock; fails on an invalid config
    pub fn new(config: LockConfig, side: S) -> Result<Self, ConfigError> {
        Self::with_clock(config, side, SystemClock)
    }
}

impl<S: LockSide, C: Clock> InstrumentedLock<S, C> {
    /// Instrument `side` timed by `clock`; fails on an invalid config
    pub fn with_clock(config: LockConfig, side: S, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let origin = clock.now();
        Ok(Self {
            hold_throttle: Throttle::new(config.min_log_gap, origin),
            wait_throttle: Throttle::new(config.min_log_gap, origin),
            held_since: S::HeldSince::new(origin),
            config,
            side,
            clock,
            sink: Arc::new(TracingSink),
        })
    }

    /// Send warnings to `sink` instead of `tracing`
    pub fn with_sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Block until the calling thread holds the lock.
    ///
    /// Errors from the underlying lock are returned unchanged.
    pub fn lock(&self) -> Result<(), S::Error> {
        let wait_start = self.clock.now();
        self.side.acquire()?;
        self.check(wait_start, self.clock.now(), HoldEvent::Waited);

        // Read after the wait report so the sink's cost stays out of the hold.
        if self.side.hold_count() == 1 {
            self.held_since.start(self.clock.now());
        }
        Ok(())
    }

    /// Release one hold of the calling thread, reporting if it was the outermost.
    ///
    /// The release time is read before the underlying release so the hold
    /// does not include whatever the scheduler does once waiters wake up.
    pub fn unlock(&self) -> Result<(), S::Error> {
        let need_report = self.side.hold_count() == 1;
        let released = self.clock.now();

        // Cleared while still held: after the release another thread may
        // start its own hold in the same slot.
        let acquired = if need_report {
            self.held_since.take()
        } else {
            None
        };

        if let Err(e) = self.side.release() {
            if let Some(acquired) = acquired {
                self.held_since.start(acquired);
            }
            return Err(e);
        }

        if let Some(acquired) = acquired {
            self.check(acquired, released, HoldEvent::Held);
        }
        Ok(())
    }

    /// Acquire and return a guard that releases on drop
    pub fn guard(&self) -> Result<HoldGuard<'_, S, C>, S::Error> {
        self.lock()?;
        Ok(HoldGuard {
            lock: self,
            _not_send: PhantomData,
        })
    }

    fn check(&self, start: Instant, end: Instant, event: HoldEvent) {
        let duration = end.saturating_duration_since(start);
        if duration <= self.config.warning_threshold {
            return;
        }
        let throttle = match event {
            HoldEvent::Held => &self.hold_throttle,
            HoldEvent::Waited => &self.wait_throttle,
        };
        let Some(suppressed) = throttle.admit(end) else {
            return;
        };

        let warning = HoldWarning {
            lock: self.config.name.clone(),
            kind: S::KIND,
            event,
            duration,
            threshold: self.config.warning_threshold,
            suppressed,
        };
        if let Err(e) = self.sink.emit(&warning) {
            tracing::debug!(lock = %self.config.name, error = %e, "dropped lock warning");
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn kind(&self) -> LockKind {
        S::KIND
    }

    pub fn config(&self) -> &LockConfig {
        &self.config
    }

    pub fn side(&self) -> &S {
        &self.side
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Holds of the calling thread
    pub fn hold_count(&self) -> usize {
        self.side.hold_count()
    }

    /// Start of the calling thread's outermost hold (for the write side, of
    /// the current writer's)
    pub fn held_since(&self) -> Option<Instant> {
        self.held_since.get()
    }

    /// When the last hold warning was emitted
    pub fn last_warning_at(&self) -> Option<Instant> {
        self.hold_throttle.last_logged()
    }

    /// Over-threshold holds dropped since the last emitted hold warning
    pub fn suppressed_warnings(&self) -> u64 {
        self.hold_throttle.suppressed()
    }

    /// When the last wait warning was emitted
    pub fn last_wait_warning_at(&self) -> Option<Instant> {
        self.wait_throttle.last_logged()
    }

    /// Over-threshold waits dropped since the last emitted wait warning
    pub fn suppressed_wait_warnings(&self) -> u64 {
        self.wait_throttle.suppressed()
    }
}

impl<S: LockSide, C: Clock> std::fmt::Debug for InstrumentedLock<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstrumentedLock")
            .field("name", &self.config.name)
            .field("kind", &S::KIND)
            .field("warning_threshold", &self.config.warning_threshold)
            .field("min_log_gap", &self.config.min_log_gap)
            .finish_non_exhaustive()
    }
}

/// Releases the lock when dropped; stays on the acquiring thread
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct HoldGuard<'a, S: LockSide, C: Clock> {
    lock: &'a InstrumentedLock<S, C>,
    _not_send: PhantomData<*const ()>,
}

impl<S: LockSide, C: Clock> HoldGuard<'_, S, C> {
    pub fn lock(&self) -> &InstrumentedLock<S, C> {
        self.lock
    }
}

impl<S: LockSide, C: Clock> Drop for HoldGuard<'_, S, C> {
    fn drop(&mut self) {
        if let Err(e) = self.lock.unlock() {
            tracing::error!(lock = %self.lock.name(), error = %e, "failed to release lock guard");
        }
    }
}

#[cfg(test)]
#[path = "instrumented_tests.rs"]
mod tests;
