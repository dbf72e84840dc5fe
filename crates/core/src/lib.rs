// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! holdwatch-core: instrumented locks that warn when held too long
//!
//! This crate provides:
//! - A monotonic [`Clock`] abstraction with a controllable fake
//! - [`InstrumentedLock`], generic over the [`LockSide`] it wraps, with
//!   write and read variants over a reentrant read-write lock
//! - Throttled warnings delivered to a [`WarningSink`] (`tracing` by default)
//! - TOML lock configuration

pub mod clock;
pub mod config;
pub mod instrumented;
pub mod rwlock;
pub mod side;
pub mod sink;

mod stamp;
mod throttle;

#[cfg(test)]
mod test_support;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, LockConfig, LocksConfig};
pub use instrumented::{HoldGuard, InstrumentedLock, InstrumentedReadLock, InstrumentedWriteLock};
pub use rwlock::InstrumentedRwLock;
pub use side::{HeldSince, LockKind, LockSide, PerThreadStamp, ReadSide, SharedStamp, WriteSide};
pub use sink::{HoldEvent, HoldWarning, SinkError, TracingSink, WarningSink};

#[cfg(any(test, feature = "test-support"))]
pub use sink::RecordingSink;

pub use holdwatch_sync::{LockError, ReentrantRwLock};
