// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A reentrant read-write lock with both sides instrumented
//!
//! Both sides report under the same lock name and each keeps its own
//! throttle, so a burst of slow readers cannot hide a slow writer.

use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, LockConfig};
use crate::instrumented::{InstrumentedLock, InstrumentedReadLock, InstrumentedWriteLock};
use crate::side::{ReadSide, WriteSide};
use crate::sink::WarningSink;
use holdwatch_sync::ReentrantRwLock;
use std::sync::Arc;

#[derive(Debug)]
pub struct InstrumentedRwLock<C: Clock = SystemClock> {
    inner: Arc<ReentrantRwLock>,
    read: InstrumentedReadLock<C>,
    write: InstrumentedWriteLock<C>,
}

impl InstrumentedRwLock<SystemClock> {
    pub fn new(config: LockConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> InstrumentedRwLock<C> {
    pub fn with_clock(config: LockConfig, clock: C) -> Result<Self, ConfigError> {
        Self::wrap(config, Arc::new(ReentrantRwLock::new()), clock)
    }

    /// Instrument an existing lock
    pub fn wrap(
        config: LockConfig,
        inner: Arc<ReentrantRwLock>,
        clock: C,
    ) -> Result<Self, ConfigError> {
        let read = InstrumentedLock::with_clock(
            config.clone(),
            ReadSide::new(Arc::clone(&inner)),
            clock.clone(),
        )?;
        let write = InstrumentedLock::with_clock(config, WriteSide::new(Arc::clone(&inner)), clock)?;
        Ok(Self { inner, read, write })
    }

    /// Send warnings from both sides to `sink`
    pub fn with_sink(self, sink: Arc<dyn WarningSink>) -> Self {
        Self {
            read: self.read.with_sink(Arc::clone(&sink)),
            write: self.write.with_sink(sink),
            inner: self.inner,
        }
    }

    pub fn read_lock(&self) -> &InstrumentedReadLock<C> {
        &self.read
    }

    pub fn write_lock(&self) -> &InstrumentedWriteLock<C> {
        &self.write
    }

    /// The underlying lock, for hold-count queries
    pub fn inner(&self) -> &Arc<ReentrantRwLock> {
        &self.inner
    }

    pub fn name(&self) -> &str {
        self.write.name()
    }
}

#[cfg(test)]
#[path = "rwlock_tests.rs"]
mod tests;
