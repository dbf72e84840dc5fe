// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! holdwatch-sync: blocking lock primitives for holdwatch
//!
//! Provides a reentrant read-write lock that exposes per-thread hold counts,
//! which the instrumentation layer uses to find outermost acquires and
//! releases.

mod error;
mod rwlock;

pub use error::LockError;
pub use rwlock::ReentrantRwLock;
