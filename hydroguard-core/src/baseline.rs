//! Commissioning baseline
//!
//! Shaft plumbness and bearing clearances are measured once, when a unit is
//! commissioned, and then frozen. The diagnostics read them as evidence but
//! never modify them; only an explicit re-commissioning replaces a baseline.
//!
//! The field limits mirror the gates of the commissioning procedure:
//! - Plumbness: 0-2.0 mm/m measurable, golden standard 0.05 mm/m,
//!   critical beyond 4× the standard
//! - Clearances: 0-5.0 mm measurable, asymmetric above 15% spread

use libm::{fmaxf, fminf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::commissioning::*,
    errors::{DiagnosticError, DiagnosticResult},
    time::Timestamp,
};

/// Guide bearing clearances at the four gauge positions (mm)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BearingClearances {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl BearingClearances {
    pub const fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self { top, bottom, left, right }
    }

    fn values(&self) -> [f32; 4] {
        [self.top, self.bottom, self.left, self.right]
    }

    /// Spread between the largest and smallest clearance (mm).
    ///
    /// NaN if any gauge reading is non-finite.
    pub fn asymmetry_mm(&self) -> f32 {
        let values = self.values();
        if values.iter().any(|v| !v.is_finite()) {
            return f32::NAN;
        }

        let max = values.iter().copied().fold(f32::NEG_INFINITY, fmaxf);
        let min = values.iter().copied().fold(f32::INFINITY, fminf);
        max - min
    }

    /// Spread relative to the largest clearance
    pub fn asymmetry_ratio(&self) -> f32 {
        let max = self.values().iter().copied().fold(f32::NEG_INFINITY, fmaxf);
        if max <= 0.0 {
            return 0.0;
        }
        self.asymmetry_mm() / max
    }

    pub fn is_asymmetric(&self) -> bool {
        self.asymmetry_ratio() > CLEARANCE_ASYMMETRY_RATIO
    }
}

/// Maintenance baseline captured at commissioning
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaintenanceBaseline {
    /// Shaft plumbness deviation (mm per metre of shaft)
    pub shaft_plumbness_deviation_mm: f32,
    pub bearing_clearances: Option<BearingClearances>,
}

/// Plumbness grade from the alignment gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AlignmentGrade {
    /// Within the 0.05 mm/m golden standard
    Nominal,
    /// Above the golden standard, accepted for heritage units
    HeritageDeviation,
    /// More than 4× the golden standard
    Critical,
}

/// Outcome of baseline validation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BaselineReport {
    pub alignment: AlignmentGrade,
    /// `None` when no clearances were recorded
    pub clearances_asymmetric: Option<bool>,
}

impl MaintenanceBaseline {
    pub fn new(shaft_plumbness_deviation_mm: f32) -> Self {
        Self {
            shaft_plumbness_deviation_mm,
            bearing_clearances: None,
        }
    }

    pub fn with_clearances(mut self, clearances: BearingClearances) -> Self {
        self.bearing_clearances = Some(clearances);
        self
    }

    /// Grade the plumbness deviation
    pub fn alignment_grade(&self) -> AlignmentGrade {
        let deviation = self.shaft_plumbness_deviation_mm;
        if deviation > PLUMBNESS_CRITICAL_MM {
            AlignmentGrade::Critical
        } else if deviation > PLUMBNESS_GOLDEN_STANDARD_MM {
            AlignmentGrade::HeritageDeviation
        } else {
            AlignmentGrade::Nominal
        }
    }

    /// Apply the commissioning field limits.
    ///
    /// Out-of-range deviations are measurement errors, not severe faults,
    /// and are refused. In-range values are graded.
    pub fn validate(&self) -> DiagnosticResult<BaselineReport> {
        check_field(
            "shaft_plumbness_deviation_mm",
            self.shaft_plumbness_deviation_mm,
            PLUMBNESS_FIELD_MAX_MM,
        )?;

        if let Some(clearances) = &self.bearing_clearances {
            check_field("clearance.top", clearances.top, CLEARANCE_FIELD_MAX_MM)?;
            check_field("clearance.bottom", clearances.bottom, CLEARANCE_FIELD_MAX_MM)?;
            check_field("clearance.left", clearances.left, CLEARANCE_FIELD_MAX_MM)?;
            check_field("clearance.right", clearances.right, CLEARANCE_FIELD_MAX_MM)?;
        }

        Ok(BaselineReport {
            alignment: self.alignment_grade(),
            clearances_asymmetric: self.bearing_clearances.map(|c| c.is_asymmetric()),
        })
    }
}

fn check_field(field: &'static str, value: f32, max: f32) -> DiagnosticResult<()> {
    if (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(DiagnosticError::BaselineOutOfRange {
            field,
            value,
            min: 0.0,
            max,
        })
    }
}

/// Anything that can hand the diagnostics a frozen baseline
pub trait BaselineProvider {
    /// Current baseline, if the unit has been commissioned
    fn baseline(&self) -> Option<&MaintenanceBaseline>;
}

impl BaselineProvider for MaintenanceBaseline {
    fn baseline(&self) -> Option<&MaintenanceBaseline> {
        Some(self)
    }
}

/// A baseline together with when it was captured
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommissioningRecord {
    pub baseline: MaintenanceBaseline,
    pub commissioned_at: Timestamp,
}

/// Holds the single frozen baseline of one unit
#[derive(Debug, Clone, Default)]
pub struct CommissioningRegister {
    record: Option<CommissioningRecord>,
}

impl CommissioningRegister {
    pub fn new() -> Self {
        Self { record: None }
    }

    /// Freeze the birth baseline. Refused if one already exists.
    pub fn commission(
        &mut self,
        baseline: MaintenanceBaseline,
        at: Timestamp,
    ) -> DiagnosticResult<BaselineReport> {
        if self.record.is_some() {
            return Err(DiagnosticError::BaselineAlreadyCommissioned);
        }

        let report = baseline.validate()?;
        self.record = Some(CommissioningRecord {
            baseline,
            commissioned_at: at,
        });
        Ok(report)
    }

    /// Explicit re-commissioning: replace the baseline, returning the old record
    pub fn recommission(
        &mut self,
        baseline: MaintenanceBaseline,
        at: Timestamp,
    ) -> DiagnosticResult<Option<CommissioningRecord>> {
        baseline.validate()?;

        let previous = self.record.replace(CommissioningRecord {
            baseline,
            commissioned_at: at,
        });
        log_debug!(
            "Baseline re-commissioned at {} (replaced: {})",
            at,
            previous.is_some()
        );
        Ok(previous)
    }

    pub fn record(&self) -> Option<&CommissioningRecord> {
        self.record.as_ref()
    }
}

impl BaselineProvider for CommissioningRegister {
    fn baseline(&self) -> Option<&MaintenanceBaseline> {
        self.record.as_ref().map(|record| &record.baseline)
    }
}
