//! Constants for HydroGuard Core
//!
//! Every threshold, weight and physical limit used by the diagnostics lives
//! here instead of being scattered through the heuristics as magic numbers.
//!
//! ## Organization
//!
//! - **Spectrum**: frequency matching and band limits
//! - **Thermal**: bearing temperature trend limits
//! - **Chemistry**: erosion-corrosion synergy factors
//! - **Hypotheses**: evidence weights and activation thresholds
//! - **Commissioning**: baseline field limits
//! - **Time**: unit conversions

/// Frequency matching tolerances and spectral bands.
pub mod spectrum;

/// Bearing thermal trend thresholds.
pub mod thermal;

/// Erosion-corrosion synergy factors.
pub mod chemistry;

/// Evidence weights and activation thresholds per fault hypothesis.
pub mod hypotheses;

/// Commissioning baseline field limits.
pub mod commissioning;

/// Time unit conversions.
pub mod time;

pub use hypotheses::{ACTIVATION_THRESHOLD, CONFIDENCE_CEILING};

pub use spectrum::{
    PEAK_MATCH_RELATIVE_TOLERANCE, PEAK_MATCH_ABSOLUTE_TOLERANCE_HZ,
    DEFAULT_BLADE_COUNT, CAVITATION_NOISE_BAND_MIN_HZ,
};

pub use thermal::THERMAL_RUNAWAY_RATE_C_PER_MIN;

pub use time::{MS_PER_SECOND, SECONDS_PER_MINUTE, MS_PER_MINUTE};
