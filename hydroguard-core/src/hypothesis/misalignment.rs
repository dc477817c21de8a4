//! Dynamic shaft misalignment
//!
//! Signature: a strong 2× RPM component, a bearing that keeps warming, and
//! a shaft that was never quite plumb or sits in an uneven bearing.

use alloc::format;

use crate::{config::MisalignmentWeights, spectrum::ReferenceFrequency};

use super::{Assessment, EvaluationContext, EvidenceTrail, Severity};

const RECOMMENDATION: &str =
    "Verify hot alignment after 4 hours at load; check coupling offset against the commissioning plumbness record.";

pub(super) fn assess(ctx: &EvaluationContext<'_>, weights: &MisalignmentWeights) -> Assessment {
    let mut trail = EvidenceTrail::new();

    if let Some(matcher) = &ctx.matcher {
        let peak = matcher.find_peak(
            &ctx.snapshot.peaks,
            ReferenceFrequency::SecondHarmonic,
            ctx.config.second_harmonic_window,
        );
        if let Some(peak) = peak {
            if peak.amplitude_mm_s > weights.peak_2x_threshold_mm_s {
                trail.add(
                    weights.peak_2x_weight,
                    format!(
                        "2x RPM peak {:.2} mm/s at {:.2} Hz exceeds {:.1} mm/s",
                        peak.amplitude_mm_s, peak.frequency_hz, weights.peak_2x_threshold_mm_s
                    ),
                );
            }
        }
    }

    if let Some(rate) = ctx.snapshot.bearing_temp_rate_c_per_min {
        if rate > weights.thermal_rate_c_per_min {
            trail.add(
                weights.thermal_weight,
                format!(
                    "Bearing temperature rising {:.2} °C/min (limit {:.1} °C/min)",
                    rate, weights.thermal_rate_c_per_min
                ),
            );
        }
    }

    if let Some(baseline) = ctx.baseline {
        let deviation = baseline.shaft_plumbness_deviation_mm;
        if deviation > weights.plumbness_threshold_mm {
            trail.add(
                weights.plumbness_weight,
                format!(
                    "Commissioning plumbness deviation {:.3} mm exceeds {:.2} mm",
                    deviation, weights.plumbness_threshold_mm
                ),
            );
        }

        if let Some(clearances) = &baseline.bearing_clearances {
            let asymmetry = clearances.asymmetry_mm();
            if asymmetry > weights.clearance_asymmetry_mm {
                trail.add(
                    weights.clearance_weight,
                    format!(
                        "Bearing clearance asymmetry {:.3} mm exceeds {:.2} mm",
                        asymmetry, weights.clearance_asymmetry_mm
                    ),
                );
            }
        }
    }

    Assessment {
        trail,
        recommendation: RECOMMENDATION,
    }
}

pub(super) fn severity(score: f32, weights: &MisalignmentWeights) -> Severity {
    if score > weights.critical_score {
        Severity::Critical
    } else {
        Severity::Warning
    }
}
