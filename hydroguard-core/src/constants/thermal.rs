//! Bearing Thermal Trend Constants

/// Minimum elapsed time between samples before a rate is computed (ms).
///
/// Samples at or below this spacing replace the stored sample without
/// producing a rate, which rejects jitter from sub-second polling.
pub const THERMAL_MIN_ELAPSED_MS: u64 = 1000;

/// Rate above which a bearing is reported as in thermal runaway (°C/min).
///
/// Strict inequality: exactly 2.0 °C/min does not fire.
///
/// Source: friction escalation exceeding oil cooler capacity on guide bearings
pub const THERMAL_RUNAWAY_RATE_C_PER_MIN: f32 = 2.0;

/// Default number of independently monitored thermal points per unit.
///
/// Upper guide, lower guide, thrust, turbine guide bearings plus spares.
pub const DEFAULT_THERMAL_POINTS: usize = 8;

/// Maximum length of a thermal point identifier (bytes).
pub const MAX_POINT_ID_LEN: usize = 16;
