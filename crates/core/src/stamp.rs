// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lock-free optional `Instant`
//!
//! Stores an instant as nanoseconds past a fixed origin plus one, keeping 0
//! for "unset". Instants before the origin are clamped to it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

const UNSET: u64 = 0;

#[derive(Debug)]
pub struct AtomicInstant {
    origin: Instant,
    raw: AtomicU64,
}

impl AtomicInstant {
    pub fn new(origin: Instant) -> Self {
        Self {
            origin,
            raw: AtomicU64::new(UNSET),
        }
    }

    pub fn load(&self) -> Option<Instant> {
        self.decode(self.raw.load(Ordering::Acquire))
    }

    pub fn store(&self, at: Instant) {
        self.raw.store(self.encode(at), Ordering::Release);
    }

    /// Clear the value, returning what was stored
    pub fn take(&self) -> Option<Instant> {
        self.decode(self.raw.swap(UNSET, Ordering::AcqRel))
    }

    /// Compare-and-set loop; `f` returning `None` leaves the value untouched
    /// and reports the current value as the error
    pub fn fetch_update<F>(&self, mut f: F) -> Result<Option<Instant>, Option<Instant>>
    where
        F: FnMut(Option<Instant>) -> Option<Instant>,
    {
        self.raw
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |raw| {
                f(self.decode(raw)).map(|at| self.encode(at))
            })
            .map(|raw| self.decode(raw))
            .map_err(|raw| self.decode(raw))
    }

    fn encode(&self, at: Instant) -> u64 {
        let nanos = at.saturating_duration_since(self.origin).as_nanos();
        u64::try_from(nanos).unwrap_or(u64::MAX).min(u64::MAX - 1) + 1
    }

    fn decode(&self, raw: u64) -> Option<Instant> {
        (raw != UNSET).then(|| self.origin + Duration::from_nanos(raw - 1))
    }
}

#[cfg(test)]
#[path = "stamp_tests.rs"]
mod tests;
