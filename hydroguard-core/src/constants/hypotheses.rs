//! Fault Hypothesis Weights and Thresholds
//!
//! Every weight added to a hypothesis score and every threshold that gates
//! it lives here, so a tuning change shows up as a one-line diff.
//!
//! Scores are a bounded additive heuristic, not probabilities.

// ===== SHARED =====

/// Score a hypothesis must exceed to be reported.
pub const ACTIVATION_THRESHOLD: f32 = 0.4;

/// Confidence ceiling. Nothing is ever reported as certain.
pub const CONFIDENCE_CEILING: f32 = 0.99;

// ===== DYNAMIC SHAFT MISALIGNMENT =====

/// 2× RPM amplitude above which misalignment is suspected (mm/s).
pub const MISALIGNMENT_2X_PEAK_THRESHOLD_MMS: f32 = 1.5;

/// Weight added for a 2× RPM peak.
pub const MISALIGNMENT_2X_PEAK_WEIGHT: f32 = 0.4;

/// Bearing temperature rate above which misalignment is suspected (°C/min).
pub const MISALIGNMENT_THERMAL_RATE_C_PER_MIN: f32 = 0.5;

/// Weight added for a rising bearing temperature.
pub const MISALIGNMENT_THERMAL_WEIGHT: f32 = 0.3;

/// Commissioning plumbness deviation that contributes evidence (mm).
pub const MISALIGNMENT_PLUMBNESS_THRESHOLD_MM: f32 = 0.05;

/// Weight added for a plumbness deviation.
pub const MISALIGNMENT_PLUMBNESS_WEIGHT: f32 = 0.25;

/// Bearing clearance spread (max - min) that contributes evidence (mm).
pub const MISALIGNMENT_CLEARANCE_ASYMMETRY_MM: f32 = 0.05;

/// Weight added for asymmetric bearing clearances.
pub const MISALIGNMENT_CLEARANCE_WEIGHT: f32 = 0.2;

/// Score above which misalignment is Critical rather than Warning.
pub const MISALIGNMENT_CRITICAL_SCORE: f32 = 0.7;

// ===== STRUCTURAL LOOSENESS =====

/// 1× RPM amplitude above which looseness is suspected (mm/s).
pub const LOOSENESS_1X_PEAK_THRESHOLD_MMS: f32 = 2.0;

/// Weight added for a dominant 1× RPM peak.
pub const LOOSENESS_1X_PEAK_WEIGHT: f32 = 0.4;

/// Amplitude a peak must exceed to count toward a comb spectrum (mm/s).
pub const LOOSENESS_COMB_PEAK_AMPLITUDE_MMS: f32 = 0.5;

/// Distinct significant peaks must exceed this count to form a comb.
pub const LOOSENESS_COMB_MIN_PEAKS: usize = 4;

/// Weight added for a comb spectrum.
pub const LOOSENESS_COMB_WEIGHT: f32 = 0.35;

/// Score above which looseness is Warning rather than Watch.
pub const LOOSENESS_WARNING_SCORE: f32 = 0.6;

// ===== HYDRAULIC CAVITATION =====

/// Efficiency below which cavitation is suspected (%).
pub const CAVITATION_EFFICIENCY_THRESHOLD_PCT: f32 = 88.0;

/// Weight added for an efficiency drop.
pub const CAVITATION_EFFICIENCY_WEIGHT: f32 = 0.4;

/// High-frequency noise threshold for soft runners (Bronze, Cast Steel) (mm/s).
pub const CAVITATION_NOISE_THRESHOLD_SOFT_MMS: f32 = 0.3;

/// High-frequency noise threshold for 13Cr4Ni runners (mm/s).
pub const CAVITATION_NOISE_THRESHOLD_STANDARD_MMS: f32 = 0.5;

/// Weight added for high-frequency noise.
pub const CAVITATION_NOISE_WEIGHT: f32 = 0.45;

/// Extra weight when noise is present on a soft runner.
pub const CAVITATION_SOFT_MATERIAL_WEIGHT: f32 = 0.15;

/// Score above which cavitation is Warning rather than Watch.
pub const CAVITATION_WARNING_SCORE: f32 = 0.7;
