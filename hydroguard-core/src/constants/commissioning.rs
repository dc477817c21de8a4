//! Commissioning Baseline Limits
//!
//! Field limits applied when a baseline is captured at unit commissioning.

/// Golden standard for shaft plumbness (mm/m).
///
/// Source: vertical Francis alignment protocol, "Max allowed: 0.05 mm/m"
pub const PLUMBNESS_GOLDEN_STANDARD_MM: f32 = 0.05;

/// Plumbness deviation graded critical (4× golden standard, mm/m).
pub const PLUMBNESS_CRITICAL_MM: f32 = PLUMBNESS_GOLDEN_STANDARD_MM * 4.0;

/// Largest plumbness deviation accepted as a measurement (mm/m).
pub const PLUMBNESS_FIELD_MAX_MM: f32 = 2.0;

/// Largest bearing clearance accepted as a measurement (mm).
pub const CLEARANCE_FIELD_MAX_MM: f32 = 5.0;

/// Clearance spread ratio above which a bearing is flagged asymmetric.
///
/// (max - min) / max > 15% causes unbalanced load on the guide bearing.
pub const CLEARANCE_ASYMMETRY_RATIO: f32 = 0.15;

/// Efficiency field range (%).
pub const EFFICIENCY_FIELD_MAX_PCT: f32 = 100.0;

/// Bearing temperature field range (°C).
pub const BEARING_TEMP_FIELD_MIN_C: f32 = -40.0;

/// Bearing temperature field range (°C).
pub const BEARING_TEMP_FIELD_MAX_C: f32 = 200.0;
