//! Erosion-Corrosion Synergy Constants
//!
//! Erosion strips the passive oxide film; acidic water then attacks bare
//! metal far faster than either mechanism alone.

/// Erosion rate above which the oxide layer is considered stripped (µm/year).
pub const OXIDE_STRIPPED_EROSION_UM_PER_YEAR: f32 = 2000.0;

/// Erosion rate above which the oxide layer is considered damaged (µm/year).
pub const OXIDE_DAMAGED_EROSION_UM_PER_YEAR: f32 = 500.0;

/// pH below which water is treated as mildly acidic.
pub const ACIDIC_PH: f32 = 6.5;

/// pH below which water is treated as strongly acidic.
pub const STRONGLY_ACIDIC_PH: f32 = 5.5;

/// Upper bound of the pH scale.
pub const PH_MAX: f32 = 14.0;

/// Neutral synergy factor (intact oxide).
pub const SYNERGY_FACTOR_INTACT: f32 = 1.0;

/// Base factor with a stripped oxide layer.
pub const SYNERGY_FACTOR_STRIPPED: f32 = 5.0;

/// Added to the stripped factor in mildly acidic water.
pub const SYNERGY_STRIPPED_ACIDIC_BONUS: f32 = 5.0;

/// Added on top in strongly acidic water (chain reaches 25.0).
pub const SYNERGY_STRIPPED_STRONG_ACID_BONUS: f32 = 15.0;

/// Base factor with a damaged oxide layer.
pub const SYNERGY_FACTOR_DAMAGED: f32 = 2.0;

/// Added to the damaged factor in mildly acidic water.
pub const SYNERGY_DAMAGED_ACIDIC_BONUS: f32 = 2.0;
