//! Erosion-corrosion synergy
//!
//! A passive oxide film protects runner steel from chemical attack. Sediment
//! erosion strips that film, and acidic water then corrodes the bare metal.
//! The two mechanisms multiply rather than add:
//!
//! ```text
//! erosion (µm/yr)   oxide     factor (pH ≥ 6.5 / < 6.5 / < 5.5)
//! > 2000            Stripped  5 / 10 / 25
//! > 500             Damaged   2 / 4  / 4
//! otherwise         Intact    1 / 1  / 1
//! ```
//!
//! pH has no effect without erosion: an intact film holds regardless.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::chemistry::*,
    errors::{DiagnosticError, DiagnosticResult},
};

/// State of the passive oxide layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum OxideState {
    Intact,
    Damaged,
    Stripped,
}

impl OxideState {
    /// Classify from erosion rate (µm/year)
    pub fn from_erosion(erosion_um_per_year: f32) -> Self {
        if erosion_um_per_year > OXIDE_STRIPPED_EROSION_UM_PER_YEAR {
            OxideState::Stripped
        } else if erosion_um_per_year > OXIDE_DAMAGED_EROSION_UM_PER_YEAR {
            OxideState::Damaged
        } else {
            OxideState::Intact
        }
    }
}

/// Result of the synergy model
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SynergyAssessment {
    /// Corrosion acceleration multiplier
    pub factor: f32,
    pub oxide_state: OxideState,
    /// Base corrosion rate × factor (mm/year)
    pub effective_rate_mm_per_year: f32,
    /// Operator-facing chemistry alert, if any
    pub alert: Option<&'static str>,
}

/// Combine erosion severity and water pH into a corrosion multiplier.
///
/// Fails with `InvalidInput` for negative or non-finite erosion, pH outside
/// 0-14 and negative or non-finite base corrosion rates.
pub fn synergy(
    erosion_um_per_year: f32,
    ph: f32,
    base_corrosion_mm_per_year: f32,
) -> DiagnosticResult<SynergyAssessment> {
    if !erosion_um_per_year.is_finite() || erosion_um_per_year < 0.0 {
        return Err(DiagnosticError::invalid("erosion_um_per_year", erosion_um_per_year));
    }
    if !(0.0..=PH_MAX).contains(&ph) {
        return Err(DiagnosticError::invalid("ph", ph));
    }
    if !base_corrosion_mm_per_year.is_finite() || base_corrosion_mm_per_year < 0.0 {
        return Err(DiagnosticError::invalid(
            "base_corrosion_mm_per_year",
            base_corrosion_mm_per_year,
        ));
    }

    let oxide_state = OxideState::from_erosion(erosion_um_per_year);
    let acidic = ph < ACIDIC_PH;

    let (factor, alert) = match oxide_state {
        OxideState::Stripped => {
            let mut factor = SYNERGY_FACTOR_STRIPPED;
            if acidic {
                factor += SYNERGY_STRIPPED_ACIDIC_BONUS;
            }
            if ph < STRONGLY_ACIDIC_PH {
                factor += SYNERGY_STRIPPED_STRONG_ACID_BONUS;
            }
            let alert = if acidic {
                "Oxide layer stripped in acidic water: bare metal corroding at accelerated rate"
            } else {
                "Oxide layer stripped by erosion: passivation lost"
            };
            (factor, Some(alert))
        }
        OxideState::Damaged => {
            let mut factor = SYNERGY_FACTOR_DAMAGED;
            let mut alert = None;
            if acidic {
                factor += SYNERGY_DAMAGED_ACIDIC_BONUS;
                alert = Some("Oxide layer damaged and water acidic: monitor corrosion coupons");
            }
            (factor, alert)
        }
        OxideState::Intact => (SYNERGY_FACTOR_INTACT, None),
    };

    Ok(SynergyAssessment {
        factor,
        oxide_state,
        effective_rate_mm_per_year: base_corrosion_mm_per_year * factor,
        alert,
    })
}
