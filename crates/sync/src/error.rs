// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Misuse of a [`ReentrantRwLock`](crate::ReentrantRwLock)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LockError {
    #[error("write lock released by a thread that does not hold it")]
    NotWriteOwner,
    #[error("read lock released by a thread that does not hold it")]
    NotReadOwner,
    #[error("write lock requested while the calling thread holds only a read lock")]
    UpgradeRefused,
    #[error("maximum hold count exceeded")]
    HoldCountOverflow,
}
