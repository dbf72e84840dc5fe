// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lock configuration
//!
//! A [`LockConfig`] is validated when an instrumented lock is built from it,
//! so a misconfigured lock never runs.

mod file;
mod lock;

pub use file::LocksConfig;
pub use lock::{LockConfig, DEFAULT_MIN_LOG_GAP, DEFAULT_WARNING_THRESHOLD};
pub(crate) use lock::duration_ms;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("lock name must not be empty")]
    EmptyName,
    #[error("lock configured more than once: {0}")]
    DuplicateName(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid lock configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
