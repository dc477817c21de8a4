//! Time-Related Constants
//!
//! Conversion factors used when turning millisecond timestamps into the
//! per-minute rates field engineers read off bearing trend charts.

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * SECONDS_PER_MINUTE as u64;
