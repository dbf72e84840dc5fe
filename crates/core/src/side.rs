// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lock sides: the capability an instrumented lock wraps
//!
//! A [`LockSide`] acquires, releases and reports the calling thread's hold
//! count for one side of an underlying lock. It also picks where the start
//! of a hold is remembered: a single slot for an exclusive side, one slot
//! per thread for a shared side.

use crate::stamp::AtomicInstant;
use dashmap::DashMap;
use holdwatch_sync::{LockError, ReentrantRwLock};
use std::sync::Arc;
use std::thread::{self, ThreadId};
use std::time::Instant;

/// Which side of a read-write lock is instrumented
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LockKind {
    Read,
    Write,
}

impl std::fmt::Display for LockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LockKind::Read => write!(f, "read"),
            LockKind::Write => write!(f, "write"),
        }
    }
}

/// Where the start of the current outermost hold is kept
pub trait HeldSince: Send + Sync {
    fn new(origin: Instant) -> Self
    where
        Self: Sized;

    /// Record the start of the calling thread's hold
    fn start(&self, at: Instant);

    /// Start of the calling thread's hold, if any
    fn get(&self) -> Option<Instant>;

    /// Clear the calling thread's hold, returning its start
    fn take(&self) -> Option<Instant>;
}

/// One side of an underlying reentrant lock
pub trait LockSide: Send + Sync {
    type HeldSince: HeldSince;
    type Error: std::error::Error + Send + Sync + 'static;

    const KIND: LockKind;

    /// Block until the calling thread holds this side
    fn acquire(&self) -> Result<(), Self::Error>;

    /// Drop one hold of the calling thread
    fn release(&self) -> Result<(), Self::Error>;

    /// Holds of the calling thread on this side
    fn hold_count(&self) -> usize;
}

/// Single start timestamp, for sides only one thread can hold at a time
#[derive(Debug)]
pub struct SharedStamp(AtomicInstant);

impl HeldSince for SharedStamp {
    fn new(origin: Instant) -> Self {
        Self(AtomicInstant::new(origin))
    }

    fn start(&self, at: Instant) {
        self.0.store(at);
    }

    fn get(&self) -> Option<Instant> {
        self.0.load()
    }

    fn take(&self) -> Option<Instant> {
        self.0.take()
    }
}

/// Start timestamp per holding thread, for shared sides
#[derive(Debug, Default)]
pub struct PerThreadStamp {
    starts: DashMap<ThreadId, Instant>,
}

impl PerThreadStamp {
    /// Number of threads with an open hold
    pub fn holders(&self) -> usize {
        self.starts.len()
    }
}

impl HeldSince for PerThreadStamp {
    fn new(_origin: Instant) -> Self {
        Self::default()
    }

    fn start(&self, at: Instant) {
        self.starts.insert(thread::current().id(), at);
    }

    fn get(&self) -> Option<Instant> {
        self.starts.get(&thread::current().id()).map(|start| *start)
    }

    fn take(&self) -> Option<Instant> {
        self.starts
            .remove(&thread::current().id())
            .map(|(_, start)| start)
    }
}

/// Exclusive side of a [`ReentrantRwLock`]
#[derive(Clone, Debug)]
pub struct WriteSide {
    lock: Arc<ReentrantRwLock>,
}

impl WriteSide {
    pub fn new(lock: Arc<ReentrantRwLock>) -> Self {
        Self { lock }
    }

    pub fn lock(&self) -> &Arc<ReentrantRwLock> {
        &self.lock
    }
}

impl LockSide for WriteSide {
    type HeldSince = SharedStamp;
    type Error = LockError;

    const KIND: LockKind = LockKind::Write;

    fn acquire(&self) -> Result<(), LockError> {
        self.lock.write()
    }

    fn release(&self) -> Result<(), LockError> {
        self.lock.write_unlock()
    }

    fn hold_count(&self) -> usize {
        self.lock.write_hold_count()
    }
}

/// Shared side of a [`ReentrantRwLock`]
#[derive(Clone, Debug)]
pub struct ReadSide {
    lock: Arc<ReentrantRwLock>,
}

impl ReadSide {
    pub fn new(lock: Arc<ReentrantRwLock>) -> Self {
        Self { lock }
    }

    pub fn lock(&self) -> &Arc<ReentrantRwLock> {
        &self.lock
    }
}

impl LockSide for ReadSide {
    type HeldSince = PerThreadStamp;
    type Error = LockError;

    const KIND: LockKind = LockKind::Read;

    fn acquire(&self) -> Result<(), LockError> {
        self.lock.read()
    }

    fn release(&self) -> Result<(), LockError> {
        self.lock.read_unlock()
    }

    fn hold_count(&self) -> usize {
        self.lock.read_hold_count()
    }
}

#[cfg(test)]
#[path = "side_tests.rs"]
mod tests;
