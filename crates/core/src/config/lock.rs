// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Held duration above which a hold is reported
pub const DEFAULT_WARNING_THRESHOLD: Duration = Duration::from_millis(300);

/// Minimum time between two reported warnings of one lock
pub const DEFAULT_MIN_LOG_GAP: Duration = Duration::from_secs(10);

/// Settings of one instrumented lock
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LockConfig {
    /// Name included in every warning
    pub name: String,
    /// Holds (and waits) longer than this are reported
    #[serde(with = "humantime_serde", default = "default_warning_threshold")]
    pub warning_threshold: Duration,
    /// Minimum gap between two emitted warnings
    #[serde(with = "humantime_serde", default = "default_min_log_gap")]
    pub min_log_gap: Duration,
}

fn default_warning_threshold() -> Duration {
    DEFAULT_WARNING_THRESHOLD
}

fn default_min_log_gap() -> Duration {
    DEFAULT_MIN_LOG_GAP
}

impl LockConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
            min_log_gap: DEFAULT_MIN_LOG_GAP,
        }
    }

    pub fn with_warning_threshold(mut self, threshold: Duration) -> Self {
        self.warning_threshold = threshold;
        self
    }

    pub fn with_min_log_gap(mut self, gap: Duration) -> Self {
        self.min_log_gap = gap;
        self
    }

    pub fn warning_threshold_ms(&self) -> u64 {
        duration_ms(self.warning_threshold)
    }

    pub fn min_log_gap_ms(&self) -> u64 {
        duration_ms(self.min_log_gap)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        Ok(())
    }
}

pub(crate) fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
