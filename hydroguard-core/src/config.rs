//! Engine configuration
//!
//! Every weight and threshold the hypothesis engine applies, gathered in one
//! value. `Default` reproduces the constants in [`crate::constants`]; presets
//! adjust the machine geometry for common unit types.
//!
//! With the `std` feature a configuration can be loaded from JSON. Missing
//! fields fall back to their defaults, so a site override only needs to name
//! what it changes. The result is checked with [`EngineConfig::validate`]
//! before it is returned:
//!
//! ```rust
//! # #[cfg(feature = "std")] {
//! use hydroguard_core::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{ "blade_count": 13 }"#).unwrap();
//! assert_eq!(config.blade_count, 13);
//! assert_eq!(config.activation_threshold, 0.4);
//! # }
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{hypotheses::*, spectrum::*},
    errors::{DiagnosticError, DiagnosticResult},
    spectrum::ToleranceWindow,
};

/// Tunable parameters for [`crate::FaultHypothesisEngine`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Runner blade count, for blade-pass frequency
    pub blade_count: u16,
    /// Score a hypothesis must exceed to be reported
    pub activation_threshold: f32,
    /// Confidence ceiling
    pub confidence_ceiling: f32,

    /// Window for the 1× RPM (looseness) check
    pub rotational_window: ToleranceWindow,
    /// Window for the 2× RPM (misalignment) check
    pub second_harmonic_window: ToleranceWindow,
    /// Window for the blade-pass check
    pub blade_pass_window: ToleranceWindow,

    pub misalignment: MisalignmentWeights,
    pub looseness: LoosenessWeights,
    pub cavitation: CavitationWeights,
}

/// Dynamic shaft misalignment weights
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MisalignmentWeights {
    pub peak_2x_threshold_mm_s: f32,
    pub peak_2x_weight: f32,
    pub thermal_rate_c_per_min: f32,
    pub thermal_weight: f32,
    pub plumbness_threshold_mm: f32,
    pub plumbness_weight: f32,
    pub clearance_asymmetry_mm: f32,
    pub clearance_weight: f32,
    pub critical_score: f32,
}

impl Default for MisalignmentWeights {
    fn default() -> Self {
        Self {
            peak_2x_threshold_mm_s: MISALIGNMENT_2X_PEAK_THRESHOLD_MMS,
            peak_2x_weight: MISALIGNMENT_2X_PEAK_WEIGHT,
            thermal_rate_c_per_min: MISALIGNMENT_THERMAL_RATE_C_PER_MIN,
            thermal_weight: MISALIGNMENT_THERMAL_WEIGHT,
            plumbness_threshold_mm: MISALIGNMENT_PLUMBNESS_THRESHOLD_MM,
            plumbness_weight: MISALIGNMENT_PLUMBNESS_WEIGHT,
            clearance_asymmetry_mm: MISALIGNMENT_CLEARANCE_ASYMMETRY_MM,
            clearance_weight: MISALIGNMENT_CLEARANCE_WEIGHT,
            critical_score: MISALIGNMENT_CRITICAL_SCORE,
        }
    }
}

/// Structural looseness weights
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoosenessWeights {
    pub peak_1x_threshold_mm_s: f32,
    pub peak_1x_weight: f32,
    pub comb_peak_amplitude_mm_s: f32,
    pub comb_min_peaks: usize,
    pub comb_weight: f32,
    pub warning_score: f32,
}

impl Default for LoosenessWeights {
    fn default() -> Self {
        Self {
            peak_1x_threshold_mm_s: LOOSENESS_1X_PEAK_THRESHOLD_MMS,
            peak_1x_weight: LOOSENESS_1X_PEAK_WEIGHT,
            comb_peak_amplitude_mm_s: LOOSENESS_COMB_PEAK_AMPLITUDE_MMS,
            comb_min_peaks: LOOSENESS_COMB_MIN_PEAKS,
            comb_weight: LOOSENESS_COMB_WEIGHT,
            warning_score: LOOSENESS_WARNING_SCORE,
        }
    }
}

/// Hydraulic cavitation weights
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CavitationWeights {
    pub efficiency_threshold_pct: f32,
    pub efficiency_weight: f32,
    pub noise_band_min_hz: f32,
    pub noise_threshold_soft_mm_s: f32,
    pub noise_threshold_standard_mm_s: f32,
    pub noise_weight: f32,
    pub soft_material_weight: f32,
    pub warning_score: f32,
}

impl Default for CavitationWeights {
    fn default() -> Self {
        Self {
            efficiency_threshold_pct: CAVITATION_EFFICIENCY_THRESHOLD_PCT,
            efficiency_weight: CAVITATION_EFFICIENCY_WEIGHT,
            noise_band_min_hz: CAVITATION_NOISE_BAND_MIN_HZ,
            noise_threshold_soft_mm_s: CAVITATION_NOISE_THRESHOLD_SOFT_MMS,
            noise_threshold_standard_mm_s: CAVITATION_NOISE_THRESHOLD_STANDARD_MMS,
            noise_weight: CAVITATION_NOISE_WEIGHT,
            soft_material_weight: CAVITATION_SOFT_MATERIAL_WEIGHT,
            warning_score: CAVITATION_WARNING_SCORE,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            blade_count: DEFAULT_BLADE_COUNT,
            activation_threshold: ACTIVATION_THRESHOLD,
            confidence_ceiling: CONFIDENCE_CEILING,
            rotational_window: ToleranceWindow::Relative(PEAK_MATCH_RELATIVE_TOLERANCE),
            second_harmonic_window: ToleranceWindow::Relative(PEAK_MATCH_RELATIVE_TOLERANCE),
            blade_pass_window: ToleranceWindow::Relative(PEAK_MATCH_RELATIVE_TOLERANCE),
            misalignment: MisalignmentWeights::default(),
            looseness: LoosenessWeights::default(),
            cavitation: CavitationWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Francis reference unit (15 blades)
    pub fn francis() -> Self {
        Self::default()
    }

    /// Kaplan unit (5 blades)
    pub fn kaplan() -> Self {
        Self {
            blade_count: KAPLAN_BLADE_COUNT,
            ..Self::default()
        }
    }

    pub fn with_blade_count(mut self, blade_count: u16) -> Self {
        self.blade_count = blade_count;
        self
    }

    /// Match 1× and 2× with the legacy fixed ±0.5 Hz band instead of ±5%
    pub fn with_absolute_unbalance_windows(mut self) -> Self {
        self.rotational_window = ToleranceWindow::Absolute(PEAK_MATCH_ABSOLUTE_TOLERANCE_HZ);
        self.second_harmonic_window = ToleranceWindow::Absolute(PEAK_MATCH_ABSOLUTE_TOLERANCE_HZ);
        self
    }

    /// Reject settings that would break the output guarantees.
    ///
    /// The ceiling must lie in (0, 0.99] so nothing is reported as certain,
    /// the blade count must be non-zero and every tolerance window finite.
    pub fn validate(&self) -> DiagnosticResult<()> {
        if self.blade_count == 0 {
            return Err(DiagnosticError::InvalidCount {
                field: "blade_count",
                value: 0,
            });
        }
        if !(self.confidence_ceiling > 0.0 && self.confidence_ceiling <= CONFIDENCE_CEILING) {
            return Err(DiagnosticError::invalid("confidence_ceiling", self.confidence_ceiling));
        }
        if !(0.0..1.0).contains(&self.activation_threshold) {
            return Err(DiagnosticError::invalid("activation_threshold", self.activation_threshold));
        }

        check_window("rotational_window", self.rotational_window)?;
        check_window("second_harmonic_window", self.second_harmonic_window)?;
        check_window("blade_pass_window", self.blade_pass_window)
    }

    /// Parse a (possibly partial) JSON configuration and validate it
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> DiagnosticResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| DiagnosticError::MalformedConfig {
            line: e.line(),
            column: e.column(),
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn check_window(field: &'static str, window: ToleranceWindow) -> DiagnosticResult<()> {
    let (ToleranceWindow::Relative(width) | ToleranceWindow::Absolute(width)) = window;
    if width.is_finite() && width >= 0.0 {
        Ok(())
    } else {
        Err(DiagnosticError::invalid(field, width))
    }
}
