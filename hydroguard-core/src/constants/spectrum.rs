//! Vibration Spectrum Constants
//!
//! Frequency-matching parameters for locating machine-derived reference
//! frequencies (1×, 2×, blade-pass) inside a list of detected peaks.

/// Relative tolerance window around a target frequency (fraction of target).
///
/// A peak matches when `|f_peak - f_target| <= f_target * 0.05`. The window
/// scales with speed, so at 428.6 rpm (f0 ≈ 7.14 Hz) it is only ±0.36 Hz wide.
///
/// Source: ISO 10816-5 practice for synchronous component identification
pub const PEAK_MATCH_RELATIVE_TOLERANCE: f32 = 0.05;

/// Absolute tolerance used when a check is configured with a fixed Hz band (Hz).
///
/// Older field tooling matched 1×/2× components with a fixed ±0.5 Hz band.
/// Not the default for any check, kept selectable through configuration.
pub const PEAK_MATCH_ABSOLUTE_TOLERANCE_HZ: f32 = 0.5;

/// Seconds per minute, used for rpm → Hz conversion.
pub const SECONDS_PER_MINUTE_F32: f32 = 60.0;

/// Default runner blade count (Francis reference unit, 15 blades).
pub const DEFAULT_BLADE_COUNT: u16 = 15;

/// Kaplan reference unit blade count.
pub const KAPLAN_BLADE_COUNT: u16 = 5;

/// Frequency above which broadband content is treated as cavitation noise (Hz).
///
/// Vapour bubble collapse shows up as broadband energy above ~150 Hz on
/// Francis runners; below that the spectrum is dominated by rotor dynamics.
pub const CAVITATION_NOISE_BAND_MIN_HZ: f32 = 150.0;
