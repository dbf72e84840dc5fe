// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Destinations for lock warnings
//!
//! Emitting a warning is best-effort: a sink error is logged at debug level
//! and dropped, never returned to the thread releasing the lock.

mod traced;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use traced::TracingSink;

#[cfg(any(test, feature = "test-support"))]
pub use fake::RecordingSink;

use crate::config::duration_ms;
use crate::side::LockKind;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("warning sink unavailable: {0}")]
    Unavailable(String),
}

/// What was measured
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoldEvent {
    /// Time between the outermost acquire and the outermost release
    Held,
    /// Time a caller spent blocked before acquiring
    Waited,
}

/// One throttled warning about a lock
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoldWarning {
    pub lock: String,
    pub kind: LockKind,
    pub event: HoldEvent,
    pub duration: Duration,
    pub threshold: Duration,
    /// Warnings dropped by the throttle since the previous emitted one
    pub suppressed: u64,
}

impl HoldWarning {
    pub fn duration_ms(&self) -> u64 {
        duration_ms(self.duration)
    }

    pub fn threshold_ms(&self) -> u64 {
        duration_ms(self.threshold)
    }
}

impl std::fmt::Display for HoldWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let what = match self.event {
            HoldEvent::Held => "held",
            HoldEvent::Waited => "waited for",
        };
        write!(
            f,
            "{} lock {} {} {}ms (threshold {}ms, {} suppressed)",
            self.kind,
            self.lock,
            what,
            self.duration_ms(),
            self.threshold_ms(),
            self.suppressed
        )
    }
}

/// Receives warnings that passed the threshold and the throttle
pub trait WarningSink: Send + Sync {
    fn emit(&self, warning: &HoldWarning) -> Result<(), SinkError>;
}
