//! Telemetry data model
//!
//! One [`TelemetrySnapshot`] is produced per evaluation cycle by the external
//! telemetry source. The diagnostic core only ever reads it.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::commissioning::{
        BEARING_TEMP_FIELD_MAX_C, BEARING_TEMP_FIELD_MIN_C, EFFICIENCY_FIELD_MAX_PCT,
    },
    errors::{DiagnosticError, DiagnosticResult},
};

/// One detected spectral peak
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpectralPeak {
    /// Peak frequency (Hz)
    pub frequency_hz: f32,
    /// Vibration velocity amplitude (mm/s)
    pub amplitude_mm_s: f32,
}

impl SpectralPeak {
    pub const fn new(frequency_hz: f32, amplitude_mm_s: f32) -> Self {
        Self { frequency_hz, amplitude_mm_s }
    }
}

/// Runner material, which sets cavitation noise sensitivity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum MaterialProfile {
    /// Martensitic 13Cr4Ni stainless, the standard modern runner material
    #[default]
    StainlessSteel13Cr4Ni,
    /// Plain cast steel (older runners)
    CastSteel,
    /// Bronze (small and heritage units)
    Bronze,
}

impl MaterialProfile {
    /// Soft materials erode quickly under cavitation and need a lower noise
    /// threshold
    pub const fn is_soft(&self) -> bool {
        matches!(self, MaterialProfile::CastSteel | MaterialProfile::Bronze)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            MaterialProfile::StainlessSteel13Cr4Ni => "13Cr4Ni stainless",
            MaterialProfile::CastSteel => "cast steel",
            MaterialProfile::Bronze => "bronze",
        }
    }
}

/// Immutable telemetry for one evaluation cycle
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TelemetrySnapshot {
    /// Rotational speed (rev/min)
    pub rpm: f32,
    /// Detected spectral peaks, in detection order
    pub peaks: Vec<SpectralPeak>,
    /// Hydraulic efficiency (%), if measured
    pub efficiency_pct: Option<f32>,
    /// Bearing temperature (°C), if measured
    pub bearing_temp_c: Option<f32>,
    /// Most recent bearing temperature rate of change (°C/min), if known
    pub bearing_temp_rate_c_per_min: Option<f32>,
}

impl TelemetrySnapshot {
    /// Snapshot with speed and spectrum only
    pub fn new(rpm: f32, peaks: Vec<SpectralPeak>) -> Self {
        Self {
            rpm,
            peaks,
            ..Self::default()
        }
    }

    pub fn with_efficiency(mut self, efficiency_pct: f32) -> Self {
        self.efficiency_pct = Some(efficiency_pct);
        self
    }

    pub fn with_bearing_temp(mut self, temp_c: f32) -> Self {
        self.bearing_temp_c = Some(temp_c);
        self
    }

    pub fn with_bearing_temp_rate(mut self, rate_c_per_min: f32) -> Self {
        self.bearing_temp_rate_c_per_min = Some(rate_c_per_min);
        self
    }

    /// Optional pre-flight check for callers.
    ///
    /// The engine itself never calls this; it tolerates anything and simply
    /// drops evidence it cannot use.
    pub fn validate(&self) -> DiagnosticResult<()> {
        if !self.rpm.is_finite() || self.rpm < 0.0 {
            return Err(DiagnosticError::invalid("rpm", self.rpm));
        }

        if let Some(eff) = self.efficiency_pct {
            if !(0.0..=EFFICIENCY_FIELD_MAX_PCT).contains(&eff) {
                return Err(DiagnosticError::invalid("efficiency_pct", eff));
            }
        }

        if let Some(temp) = self.bearing_temp_c {
            if !(BEARING_TEMP_FIELD_MIN_C..=BEARING_TEMP_FIELD_MAX_C).contains(&temp) {
                return Err(DiagnosticError::invalid("bearing_temp_c", temp));
            }
        }

        if let Some(rate) = self.bearing_temp_rate_c_per_min {
            if !rate.is_finite() {
                return Err(DiagnosticError::invalid("bearing_temp_rate_c_per_min", rate));
            }
        }

        for peak in &self.peaks {
            if !peak.frequency_hz.is_finite() || peak.frequency_hz < 0.0 {
                return Err(DiagnosticError::invalid("peak.frequency_hz", peak.frequency_hz));
            }
            if !peak.amplitude_mm_s.is_finite() || peak.amplitude_mm_s < 0.0 {
                return Err(DiagnosticError::invalid("peak.amplitude_mm_s", peak.amplitude_mm_s));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn soft_materials() {
        assert!(MaterialProfile::Bronze.is_soft());
        assert!(MaterialProfile::CastSteel.is_soft());
        assert!(!MaterialProfile::StainlessSteel13Cr4Ni.is_soft());
        assert_eq!(MaterialProfile::default(), MaterialProfile::StainlessSteel13Cr4Ni);
    }

    #[test]
    fn healthy_snapshot_validates() {
        let snapshot = TelemetrySnapshot::new(428.6, vec![SpectralPeak::new(7.14, 0.8)])
            .with_efficiency(94.5)
            .with_bearing_temp(65.0)
            .with_bearing_temp_rate(0.2);

        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn rejects_bad_readings() {
        let nan_rpm = TelemetrySnapshot::new(f32::NAN, vec![]);
        assert!(matches!(
            nan_rpm.validate(),
            Err(DiagnosticError::InvalidInput { field: "rpm", .. })
        ));

        let bad_eff = TelemetrySnapshot::new(400.0, vec![]).with_efficiency(120.0);
        assert!(bad_eff.validate().is_err());

        let hot = TelemetrySnapshot::new(400.0, vec![]).with_bearing_temp(350.0);
        assert!(hot.validate().is_err());

        let negative_peak = TelemetrySnapshot::new(400.0, vec![SpectralPeak::new(-1.0, 0.2)]);
        assert!(matches!(
            negative_peak.validate(),
            Err(DiagnosticError::InvalidInput { field: "peak.frequency_hz", .. })
        ));
    }

    #[test]
    fn stopped_unit_is_valid_telemetry() {
        // rpm = 0 is a legitimate reading; only frequency analysis refuses it
        assert!(TelemetrySnapshot::new(0.0, vec![]).validate().is_ok());
    }
}
