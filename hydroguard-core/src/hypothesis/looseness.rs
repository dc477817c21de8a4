//! Structural looseness / anchor failure
//!
//! Signature: a dominant 1× component and a "comb" of many significant
//! peaks, the non-linear response of a machine rattling on its foundation.

use alloc::{format, vec::Vec};

use crate::{
    config::LoosenessWeights,
    spectrum::ReferenceFrequency,
    telemetry::SpectralPeak,
};

use super::{Assessment, EvaluationContext, EvidenceTrail, Severity};

const RECOMMENDATION: &str =
    "Torque-verify anchor bolts and inspect grout and shims for soft foot.";

pub(super) fn assess(ctx: &EvaluationContext<'_>, weights: &LoosenessWeights) -> Assessment {
    let mut trail = EvidenceTrail::new();

    if let Some(matcher) = &ctx.matcher {
        let peak = matcher.find_peak(
            &ctx.snapshot.peaks,
            ReferenceFrequency::Rotational,
            ctx.config.rotational_window,
        );
        if let Some(peak) = peak {
            if peak.amplitude_mm_s > weights.peak_1x_threshold_mm_s {
                trail.add(
                    weights.peak_1x_weight,
                    format!(
                        "1x RPM peak {:.2} mm/s at {:.2} Hz exceeds {:.1} mm/s",
                        peak.amplitude_mm_s, peak.frequency_hz, weights.peak_1x_threshold_mm_s
                    ),
                );
            }
        }
    }

    let comb = significant_peak_count(&ctx.snapshot.peaks, weights.comb_peak_amplitude_mm_s);
    if comb > weights.comb_min_peaks {
        trail.add(
            weights.comb_weight,
            format!(
                "Comb spectrum: {} distinct peaks above {:.1} mm/s",
                comb, weights.comb_peak_amplitude_mm_s
            ),
        );
    }

    Assessment {
        trail,
        recommendation: RECOMMENDATION,
    }
}

/// Peaks above `amplitude_mm_s`, counting each frequency once
fn significant_peak_count(peaks: &[SpectralPeak], amplitude_mm_s: f32) -> usize {
    let mut seen: Vec<f32> = Vec::with_capacity(peaks.len());
    for peak in peaks {
        let significant = peak.frequency_hz.is_finite() && peak.amplitude_mm_s > amplitude_mm_s;
        if significant && !seen.contains(&peak.frequency_hz) {
            seen.push(peak.frequency_hz);
        }
    }
    seen.len()
}

pub(super) fn severity(score: f32, weights: &LoosenessWeights) -> Severity {
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
    fn duplicate_frequencies_count_once() {
        let peaks = [
            SpectralPeak::new(7.14, 1.0),
            SpectralPeak::new(7.14, 1.2),
            SpectralPeak::new(14.28, 0.9),
            SpectralPeak::new(21.42, 0.4),
            SpectralPeak::new(f32::NAN, 3.0),
            SpectralPeak::new(28.56, f32::NAN),
        ];
        assert_eq!(significant_peak_count(&peaks, 0.5), 2);
    }
}
