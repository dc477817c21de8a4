//! Hydraulic cavitation
//!
//! Signature: an efficiency drop together with broadband noise above
//! 150 Hz. Soft runner materials (bronze, cast steel) pit long before a
//! 13Cr4Ni runner would, so they get a lower noise threshold and an extra
//! weight.

use alloc::format;

use crate::{config::CavitationWeights, telemetry::SpectralPeak};

use super::{Assessment, EvaluationContext, EvidenceTrail, Severity};

const COATING_ADVISORY: &str =
    "Soft runner material: apply cavitation-resistant coating (Stellite 6 or WC-Co HVOF) at the next outage.";

const AIR_ADMISSION_ADVISORY: &str =
    "Admit air into the draft tube and reduce head drop to restore cavitation margin.";

pub(super) fn assess(ctx: &EvaluationContext<'_>, weights: &CavitationWeights) -> Assessment {
    let mut trail = EvidenceTrail::new();
    let soft = ctx.material.is_soft();

    if let Some(efficiency) = ctx.snapshot.efficiency_pct {
        if efficiency > 0.0 && efficiency < weights.efficiency_threshold_pct {
            trail.add(
                weights.efficiency_weight,
                format!(
                    "Efficiency {:.1}% below {:.0}% design band",
                    efficiency, weights.efficiency_threshold_pct
                ),
            );
        }
    }

    let threshold = if soft {
        weights.noise_threshold_soft_mm_s
    } else {
        weights.noise_threshold_standard_mm_s
    };

    if let Some(peak) = strongest_noise_peak(&ctx.snapshot.peaks, weights.noise_band_min_hz, threshold) {
        trail.add(
            weights.noise_weight,
            format!(
                "High-frequency noise {:.2} mm/s at {:.0} Hz exceeds {:.1} mm/s",
                peak.amplitude_mm_s, peak.frequency_hz, threshold
            ),
        );

        if soft {
            trail.add(
                weights.soft_material_weight,
                format!("Runner material {} is cavitation-sensitive", ctx.material.name()),
            );
        }
    }

    Assessment {
        trail,
        recommendation: if soft { COATING_ADVISORY } else { AIR_ADMISSION_ADVISORY },
    }
}

/// Strongest peak above `band_min_hz` whose amplitude exceeds `threshold`
fn strongest_noise_peak(
    peaks: &[SpectralPeak],
    band_min_hz: f32,
    threshold: f32,
) -> Option<&SpectralPeak> {
    peaks
        .iter()
        .filter(|peak| peak.frequency_hz > band_min_hz && peak.amplitude_mm_s > threshold)
        .fold(None, |best: Option<&SpectralPeak>, peak| match best {
            Some(current) if current.amplitude_mm_s >= peak.amplitude_mm_s => Some(current),
            _ => Some(peak),
        })
}

pub(super) fn severity(score: f32, weights: &CavitationWeights) -> Severity {
    if score > weights.warning_score {
        Severity::Warning
    } else {
        Severity::Watch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strongest_noise_peak_ignores_low_band() {
        let peaks = [
            SpectralPeak::new(120.0, 5.0),
            SpectralPeak::new(200.0, 0.6),
            SpectralPeak::new(250.0, 0.9),
            SpectralPeak::new(300.0, 0.9),
        ];

        let peak = strongest_noise_peak(&peaks, 150.0, 0.5).unwrap();
        assert_eq!(peak.frequency_hz, 250.0);
        assert!(strongest_noise_peak(&peaks, 150.0, 1.0).is_none());
    }
}
