// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{HoldEvent, HoldWarning, SinkError, WarningSink};

/// Default sink: one WARN event per warning on the current `tracing` subscriber
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn emit(&self, warning: &HoldWarning) -> Result<(), SinkError> {
        match warning.event {
            HoldEvent::Held => tracing::warn!(
                lock = %warning.lock,
                kind = %warning.kind,
                held_ms = warning.duration_ms(),
                threshold_ms = warning.threshold_ms(),
                suppressed = warning.suppressed,
                "lock held above threshold"
            ),
            HoldEvent::Waited => tracing::warn!(
                lock = %warning.lock,
                kind = %warning.kind,
                waited_ms = warning.duration_ms(),
                threshold_ms = warning.threshold_ms(),
                suppressed = warning.suppressed,
                "waited above threshold to acquire lock"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
