// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{HoldEvent, HoldWarning, SinkError, WarningSink};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Records every emitted warning; can be switched to fail
#[derive(Clone, Default)]
pub struct RecordingSink {
    warnings: Arc<Mutex<Vec<HoldWarning>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent emits record nothing and return an error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// All recorded warnings, oldest first
    pub fn warnings(&self) -> Vec<HoldWarning> {
        self.warnings
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Recorded warnings about hold durations
    pub fn held(&self) -> Vec<HoldWarning> {
        self.filtered(HoldEvent::Held)
    }

    /// Recorded warnings about wait durations
    pub fn waited(&self) -> Vec<HoldWarning> {
        self.filtered(HoldEvent::Waited)
    }

    pub fn clear(&self) {
        self.warnings
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    fn filtered(&self, event: HoldEvent) -> Vec<HoldWarning> {
        self.warnings()
            .into_iter()
            .filter(|warning| warning.event == event)
            .collect()
    }
}

impl WarningSink for RecordingSink {
    fn emit(&self, warning: &HoldWarning) -> Result<(), SinkError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SinkError::Unavailable("recording sink set to fail".to_string()));
        }
        self.warnings
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(warning.clone());
        Ok(())
    }
}
