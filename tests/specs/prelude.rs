//! Shared helpers for specs

pub use holdwatch_core::{
    ConfigError, FakeClock, InstrumentedRwLock, LockConfig, LockError, LockKind,
    RecordingSink,
};
pub use std::sync::Arc;
pub use std::time::Duration;

/// An instrumented read-write lock on a fake clock, recording its warnings
pub struct Harness {
    pub lock: Arc<InstrumentedRwLock<FakeClock>>,
    pub clock: FakeClock,
    pub sink: RecordingSink,
}

impl Harness {
    pub fn new(threshold_ms: u64, gap_ms: u64) -> Self {
        let clock = FakeClock::new();
        let sink = RecordingSink::new();
        let config = LockConfig::new("metadata")
            .with_warning_threshold(Duration::from_millis(threshold_ms))
            .with_min_log_gap(Duration::from_millis(gap_ms));
        let lock = InstrumentedRwLock::with_clock(config, clock.clone())
            .unwrap()
            .with_sink(Arc::new(sink.clone()));
        Self {
            lock: Arc::new(lock),
            clock,
            sink,
        }
    }

    /// Take the write lock at `from` ms and release it at `to` ms
    pub fn write_hold(&self, from: u64, to: u64) {
        self.clock.set_ms(from);
        self.lock.write_lock().lock().unwrap();
        self.clock.set_ms(to);
        self.lock.write_lock().unlock().unwrap();
    }

    /// Milliseconds since the fake clock's origin of the last emitted write warning
    pub fn last_write_warning_ms(&self) -> Option<u128> {
        self.lock
            .write_lock()
            .last_warning_at()
            .map(|at| at.duration_since(self.clock.origin()).as_millis())
    }

    /// Durations (ms) of the emitted hold warnings, oldest first
    pub fn held_ms(&self) -> Vec<u64> {
        self.sink.held().iter().map(|w| w.duration_ms()).collect()
    }
}
