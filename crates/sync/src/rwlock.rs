// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reentrant read-write lock
//!
//! Unlike `std::sync::RwLock` this lock does not own the data it protects and
//! is released explicitly, so the same thread may take either side several
//! times and release it the same number of times. Rules:
//!
//! - A writer may re-acquire the write side and may also take the read side.
//! - A thread holding only a read lock is refused the write side
//!   ([`LockError::UpgradeRefused`]) instead of deadlocking.
//! - New readers queue behind waiting writers, except threads that already
//!   hold a read lock.

use crate::error::LockError;
use parking_lot::{Condvar, Mutex};
use std::collections::HashMap;
use std::thread::{self, ThreadId};

/// Upper bound on a single thread's hold count for either side
const MAX_HOLDS: usize = 65_535;

#[derive(Debug, Default)]
struct State {
    writer: Option<ThreadId>,
    write_holds: usize,
    readers: HashMap<ThreadId, usize>,
    waiting_writers: usize,
}

impl State {
    fn read_holds(&self, id: ThreadId) -> usize {
        self.readers.get(&id).copied().unwrap_or(0)
    }

    fn can_read(&self, id: ThreadId) -> bool {
        match self.writer {
            Some(writer) => writer == id,
            None => self.waiting_writers == 0 || self.readers.contains_key(&id),
        }
    }

    fn can_write(&self) -> bool {
        self.writer.is_none() && self.readers.is_empty()
    }
}

/// A blocking read-write lock with reentrant read and write sides
#[derive(Debug, Default)]
pub struct ReentrantRwLock {
    state: Mutex<State>,
    changed: Condvar,
}

impl ReentrantRwLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the write side, blocking until no other thread holds either side
    pub fn write(&self) -> Result<(), LockError> {
        let id = thread::current().id();
        let mut state = self.state.lock();

        if state.writer == Some(id) {
            if state.write_holds >= MAX_HOLDS {
                return Err(LockError::HoldCountOverflow);
            }
            state.write_holds += 1;
            return Ok(());
        }
        if state.readers.contains_key(&id) {
            return Err(LockError::UpgradeRefused);
        }

        state.waiting_writers += 1;
        while !state.can_write() {
            self.changed.wait(&mut state);
        }
        state.waiting_writers -= 1;
        state.writer = Some(id);
        state.write_holds = 1;
        Ok(())
    }

    /// Release one write hold of the calling thread
    pub fn write_unlock(&self) -> Result<(), LockError> {
        let id = thread::current().id();
        let mut state = self.state.lock();

        if state.writer != Some(id) {
            return Err(LockError::NotWriteOwner);
        }
        state.write_holds -= 1;
        if state.write_holds == 0 {
            state.writer = None;
            drop(state);
            self.changed.notify_all();
        }
        Ok(())
    }

    /// Acquire the read side, blocking while another thread writes
    pub fn read(&self) -> Result<(), LockError> {
        let id = thread::current().id();
        let mut state = self.state.lock();

        while !state.can_read(id) {
            self.changed.wait(&mut state);
        }
        let holds = state.readers.entry(id).or_insert(0);
        if *holds >= MAX_HOLDS {
            return Err(LockError::HoldCountOverflow);
        }
        *holds += 1;
        Ok(())
    }

    /// Release one read hold of the calling thread
    pub fn read_unlock(&self) -> Result<(), LockError> {
        let id = thread::current().id();
        let mut state = self.state.lock();

        let Some(holds) = state.readers.get_mut(&id) else {
            return Err(LockError::NotReadOwner);
        };
        *holds -= 1;
        if *holds == 0 {
            state.readers.remove(&id);
            if state.readers.is_empty() {
                drop(state);
                self.changed.notify_all();
            }
        }
        Ok(())
    }

    /// Write holds of the calling thread (0 if it is not the writer)
    pub fn write_hold_count(&self) -> usize {
        let id = thread::current().id();
        let state = self.state.lock();
        if state.writer == Some(id) {
            state.write_holds
        } else {
            0
        }
    }

    /// Read holds of the calling thread
    pub fn read_hold_count(&self) -> usize {
        self.state.lock().read_holds(thread::current().id())
    }

    /// Whether any thread holds the write side
    pub fn is_write_locked(&self) -> bool {
        self.state.lock().writer.is_some()
    }

    /// Number of threads currently holding the read side
    pub fn reader_count(&self) -> usize {
        self.state.lock().readers.len()
    }

    /// Number of threads blocked waiting for the write side
    pub fn queued_writers(&self) -> usize {
        self.state.lock().waiting_writers
    }
}

#[cfg(test)]
#[path = "rwlock_tests.rs"]
mod tests;
