//! Root-cause analysis engine
//!
//! ## Overview
//!
//! [`FaultHypothesisEngine`] takes one telemetry snapshot, the commissioning
//! baseline and the runner material, evaluates every [`FaultCause`]
//! independently and returns the active ones ranked by confidence.
//!
//! ```text
//! TelemetrySnapshot ─┬─> SpectrumMatcher (1×, 2×, BPF)
//!                    ├─> thermal rate (from ThermalRateMonitor upstream)
//! MaintenanceBaseline┤
//! MaterialProfile ───┴─> Misalignment | Looseness | Cavitation ─> rank ─> Vec<FaultHypothesis>
//! ```
//!
//! ## Guarantees
//!
//! - **Total**: never fails and never panics. A stopped unit, an empty
//!   spectrum, a missing baseline or NaN readings simply remove the
//!   evidence that needed them.
//! - **Pure**: no interior state. The same inputs give the same output, so
//!   one engine can be shared across threads and units.
//! - **No suppression**: misalignment and looseness often co-exist, so every
//!   cause above the threshold is reported.
//! - **Stable ranking**: equal confidences keep generation order
//!   (Misalignment, Looseness, Cavitation).
//!
//! ## Usage
//!
//! ```rust
//! use hydroguard_core::{
//!     FaultHypothesisEngine, MaintenanceBaseline, MaterialProfile,
//!     SpectralPeak, TelemetrySnapshot,
//! };
//!
//! let engine = FaultHypothesisEngine::default();
//! let snapshot = TelemetrySnapshot::new(428.6, vec![SpectralPeak::new(428.6 / 30.0, 2.0)])
//!     .with_bearing_temp_rate(0.6);
//! let baseline = MaintenanceBaseline::new(0.08);
//!
//! let results = engine.analyze(&snapshot, Some(&baseline), Some(MaterialProfile::CastSteel));
//! assert_eq!(results[0].evidence().len(), 3);
//! ```

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{
    baseline::MaintenanceBaseline,
    config::EngineConfig,
    errors::DiagnosticResult,
    hypothesis::{EvaluationContext, FaultCause, FaultHypothesis},
    spectrum::{ReferenceFrequency, SpectrumMatcher},
    telemetry::{MaterialProfile, TelemetrySnapshot},
};

/// Stateless hypothesis scorer
#[derive(Debug, Clone, Default)]
pub struct FaultHypothesisEngine {
    config: EngineConfig,
}

impl FaultHypothesisEngine {
    /// Engine with a custom configuration, refused unless it validates
    pub fn new(config: EngineConfig) -> DiagnosticResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate every fault cause and return the active ones, highest
    /// confidence first.
    ///
    /// A missing baseline means "no baseline evidence"; a missing material
    /// means the standard 13Cr4Ni profile.
    pub fn analyze(
        &self,
        snapshot: &TelemetrySnapshot,
        baseline: Option<&MaintenanceBaseline>,
        material: Option<MaterialProfile>,
    ) -> Vec<FaultHypothesis> {
        let ctx = self.context(snapshot, baseline, material.unwrap_or_default());

        let mut results: Vec<FaultHypothesis> = FaultCause::ALL
            .iter()
            .filter_map(|cause| cause.evaluate(&ctx))
            .collect();

        // sort_by is stable: ties keep generation order
        results.sort_by(|a, b| {
            b.confidence()
                .partial_cmp(&a.confidence())
                .unwrap_or(Ordering::Equal)
        });

        for hypothesis in &results {
            log_debug!(
                "{} active: confidence {:.2}, severity {}, {} facts",
                hypothesis.cause(),
                hypothesis.confidence(),
                hypothesis.severity(),
                hypothesis.evidence().len()
            );
        }

        results
    }

    /// Build the shared evaluation context.
    ///
    /// Frequency analysis of a stopped unit is insufficient data, not a
    /// fault: the matcher is left out and spectral-reference checks skip.
    pub fn context<'a>(
        &'a self,
        snapshot: &'a TelemetrySnapshot,
        baseline: Option<&'a MaintenanceBaseline>,
        material: MaterialProfile,
    ) -> EvaluationContext<'a> {
        let matcher = match SpectrumMatcher::new(snapshot.rpm, self.config.blade_count) {
            Ok(matcher) => {
                if let Some(amplitude) = matcher.match_amplitude(
                    &snapshot.peaks,
                    ReferenceFrequency::BladePass,
                    self.config.blade_pass_window,
                ) {
                    log_debug!(
                        "{} component {:.2} mm/s at {:.2} Hz",
                        ReferenceFrequency::BladePass.label(),
                        amplitude,
                        matcher.blade_pass_hz()
                    );
                }
                Some(matcher)
            }
            Err(_e) => {
                log_debug!("Spectral reference checks skipped: {}", _e);
                None
            }
        };

        EvaluationContext {
            snapshot,
            matcher,
            baseline,
            material,
            config: &self.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{baseline::BearingClearances, hypothesis::Severity, telemetry::SpectralPeak};
    use alloc::vec;

    fn f0(rpm: f32) -> f32 {
        rpm / 60.0
    }

    #[test]
    fn healthy_unit_has_no_hypotheses() {
        let engine = FaultHypothesisEngine::default();
        let snapshot = TelemetrySnapshot::new(428.6, vec![]).with_efficiency(94.5);

        assert!(engine.analyze(&snapshot, None, None).is_empty());
    }

    #[test]
    fn co_activation_is_not_suppressed() {
        let engine = FaultHypothesisEngine::default();
        let rpm = 428.6;
        let snapshot = TelemetrySnapshot::new(
            rpm,
            vec![
                SpectralPeak::new(f0(rpm), 2.5),
                SpectralPeak::new(f0(rpm) * 2.0, 2.0),
                SpectralPeak::new(f0(rpm) * 3.0, 1.0),
                SpectralPeak::new(f0(rpm) * 4.0, 0.9),
                SpectralPeak::new(f0(rpm) * 5.0, 0.8),
            ],
        )
        .with_bearing_temp_rate(0.6);

        let results = engine.analyze(&snapshot, None, None);
        let causes: Vec<FaultCause> = results.iter().map(|h| h.cause()).collect();

        // Looseness 0.75, Misalignment 0.7
        assert_eq!(causes, vec![FaultCause::StructuralLooseness, FaultCause::DynamicShaftMisalignment]);
        assert_eq!(results[0].severity(), Severity::Warning);

        // Exactly 0.7 is not above the critical line
        assert_eq!(results[1].confidence(), 0.7);
        assert_eq!(results[1].severity(), Severity::Warning);
    }

    #[test]
    fn equal_confidence_keeps_generation_order() {
        // Both capped at 0.99
        let engine = FaultHypothesisEngine::default();
        let rpm = 428.6;
        let snapshot = TelemetrySnapshot::new(
            rpm,
            vec![
                SpectralPeak::new(f0(rpm) * 2.0, 2.0),
                SpectralPeak::new(200.0, 0.6),
            ],
        )
        .with_efficiency(85.0)
        .with_bearing_temp_rate(0.6);
        let baseline = MaintenanceBaseline::new(0.08)
            .with_clearances(BearingClearances::new(0.20, 0.10, 0.15, 0.15));

        let results = engine.analyze(&snapshot, Some(&baseline), Some(MaterialProfile::Bronze));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].cause(), FaultCause::DynamicShaftMisalignment);
        assert_eq!(results[1].cause(), FaultCause::HydraulicCavitation);
        assert_eq!(results[0].confidence(), results[1].confidence());
    }

    #[test]
    fn nan_readings_fail_checks_quietly() {
        let engine = FaultHypothesisEngine::default();
        let snapshot = TelemetrySnapshot::new(f32::NAN, vec![SpectralPeak::new(f32::NAN, f32::NAN)])
            .with_efficiency(f32::NAN)
            .with_bearing_temp_rate(f32::NAN);
        let baseline = MaintenanceBaseline::new(f32::NAN);

        assert!(engine.analyze(&snapshot, Some(&baseline), None).is_empty());
    }

    #[test]
    fn invalid_config_is_refused() {
        assert!(FaultHypothesisEngine::new(EngineConfig::default().with_blade_count(0)).is_err());

        let mut config = EngineConfig::default();
        config.confidence_ceiling = 1.5;
        assert!(FaultHypothesisEngine::new(config).is_err());
    }

    #[test]
    fn blade_count_does_not_gate_unbalance_checks() {
        // 2x at 2.0 mm/s plus a warming bearing: 0.4 + 0.3
        let rpm = 428.6;
        let snapshot = TelemetrySnapshot::new(rpm, vec![SpectralPeak::new(f0(rpm) * 2.0, 2.0)])
            .with_bearing_temp_rate(0.6);
        for blades in [1, 5, 15, u16::MAX] {
            let engine = FaultHypothesisEngine::new(EngineConfig::default().with_blade_count(blades)).unwrap();
            let results = engine.analyze(&snapshot, None, None);
            assert_eq!(results.len(), 1, "blades = {blades}");
            assert_eq!(results[0].cause(), FaultCause::DynamicShaftMisalignment);
            assert_eq!(results[0].confidence(), 0.7);
        }
    }

    #[test]
    fn zero_efficiency_is_not_a_reading() {
        let engine = FaultHypothesisEngine::default();
        let snapshot = TelemetrySnapshot::new(428.6, vec![SpectralPeak::new(200.0, 0.6)])
            .with_efficiency(0.0);

        let results = engine.analyze(&snapshot, None, None);
        // Noise alone: 0.45 -> active, but only one fact
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].evidence().len(), 1);
    }
}
