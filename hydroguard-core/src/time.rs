//! Time handling for thermal trend monitoring
//!
//! The diagnostic core has no clock of its own. Callers hand in millisecond
//! timestamps, either directly or through a [`TimeSource`]:
//! - System clock (when std is available)
//! - Manual clock (replaying recorded SCADA logs, tests)

use crate::constants::time::MS_PER_MINUTE;

/// Timestamp in milliseconds since epoch (or since acquisition start)
pub type Timestamp = u64;

/// Source of time for thermal sampling
pub trait TimeSource {
    /// Current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// System wall clock (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Manually driven clock for log replay and tests
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    timestamp: Timestamp,
}

impl ManualClock {
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    pub fn advance(&mut self, ms: u64) {
        self.timestamp = self.timestamp.saturating_add(ms);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// Elapsed milliseconds between two timestamps; a clock that went backwards
/// yields zero.
pub fn elapsed_ms(earlier: Timestamp, later: Timestamp) -> u64 {
    later.saturating_sub(earlier)
}

/// Convert a value delta over `elapsed_ms` into a per-minute rate.
///
/// Zero elapsed time yields a zero rate.
pub fn rate_per_minute(value_delta: f32, elapsed_ms: u64) -> f32 {
    if elapsed_ms == 0 {
        return 0.0;
    }

    value_delta * MS_PER_MINUTE as f32 / elapsed_ms as f32
}
