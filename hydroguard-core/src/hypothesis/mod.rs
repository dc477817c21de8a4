//! Fault hypotheses
//!
//! ## Overview
//!
//! Each probable root cause is a variant of [`FaultCause`] with its own
//! evaluation function. A hypothesis is built by summing the weights of
//! independent checks:
//!
//! ```text
//! Misalignment   2× peak (0.4) + thermal rate (0.3) + plumbness (0.25) + clearances (0.2)
//! Looseness      1× peak (0.4) + comb spectrum (0.35)
//! Cavitation     efficiency (0.4) + HF noise (0.45) + soft runner (0.15)
//! ```
//!
//! A cause is reported only when its score exceeds the activation threshold
//! (0.4). Confidence is the score capped at 0.99; severity is derived from
//! the score by a per-cause rule and is never chosen by the caller.
//!
//! ## Invariants
//!
//! - Every [`FaultHypothesis`] carries at least one evidence fact
//! - `0 < confidence <= 0.99`
//! - Evidence order equals check order, so output is reproducible

mod cavitation;
mod evidence;
mod looseness;
mod misalignment;

pub use evidence::EvidenceTrail;

use alloc::{string::String, vec::Vec};
use core::fmt;

use libm::fminf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    baseline::MaintenanceBaseline,
    config::EngineConfig,
    constants::CONFIDENCE_CEILING,
    spectrum::SpectrumMatcher,
    telemetry::{MaterialProfile, TelemetrySnapshot},
};

/// Probable root cause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum FaultCause {
    DynamicShaftMisalignment,
    StructuralLooseness,
    HydraulicCavitation,
}

/// Operator-facing urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Severity {
    Critical,
    Warning,
    Watch,
}

impl Severity {
    pub const fn name(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Warning => "WARNING",
            Severity::Watch => "WATCH",
        }
    }
}

/// Inputs shared by every hypothesis during one evaluation
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    pub snapshot: &'a TelemetrySnapshot,
    /// `None` when the unit is stopped; spectral-reference checks are skipped
    pub matcher: Option<SpectrumMatcher>,
    pub baseline: Option<&'a MaintenanceBaseline>,
    pub material: MaterialProfile,
    pub config: &'a EngineConfig,
}

/// Score and recommendation produced by one cause's checks
#[derive(Debug, Clone)]
pub(crate) struct Assessment {
    pub(crate) trail: EvidenceTrail,
    pub(crate) recommendation: &'static str,
}

impl FaultCause {
    /// All causes, in generation (and tie-break) order
    pub const ALL: [FaultCause; 3] = [
        FaultCause::DynamicShaftMisalignment,
        FaultCause::StructuralLooseness,
        FaultCause::HydraulicCavitation,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            FaultCause::DynamicShaftMisalignment => "Dynamic Shaft Misalignment",
            FaultCause::StructuralLooseness => "Structural Looseness",
            FaultCause::HydraulicCavitation => "Hydraulic Cavitation",
        }
    }

    /// Short field tip for the technician. Display only, no effect on scoring.
    pub const fn field_tip(&self) -> &'static str {
        match self {
            FaultCause::DynamicShaftMisalignment =>
                "Cold alignment means nothing to a hot machine. If the 2x peak grows faster than 1x, check the coupling first.",
            FaultCause::StructuralLooseness =>
                "If 1x dominates but wanders in phase, check the anchor bolts before anything else.",
            FaultCause::HydraulicCavitation =>
                "Cavitation whispers before it screams. A 2% efficiency drop is the whisper.",
        }
    }

    /// Run this cause's checks without applying the activation threshold
    pub fn assess(&self, ctx: &EvaluationContext<'_>) -> EvidenceTrail {
        self.assessment(ctx).trail
    }

    fn assessment(&self, ctx: &EvaluationContext<'_>) -> Assessment {
        match self {
            FaultCause::DynamicShaftMisalignment => misalignment::assess(ctx, &ctx.config.misalignment),
            FaultCause::StructuralLooseness => looseness::assess(ctx, &ctx.config.looseness),
            FaultCause::HydraulicCavitation => cavitation::assess(ctx, &ctx.config.cavitation),
        }
    }

    /// Severity rule for this cause
    pub fn severity(&self, score: f32, config: &EngineConfig) -> Severity {
        match self {
            FaultCause::DynamicShaftMisalignment => misalignment::severity(score, &config.misalignment),
            FaultCause::StructuralLooseness => looseness::severity(score, &config.looseness),
            FaultCause::HydraulicCavitation => cavitation::severity(score, &config.cavitation),
        }
    }

    /// Evaluate this cause; `None` unless the score exceeds the activation
    /// threshold
    pub fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Option<FaultHypothesis> {
        let Assessment { trail, recommendation } = self.assessment(ctx);
        let score = trail.score();

        if trail.is_empty() || score <= ctx.config.activation_threshold {
            log_trace!("{} inactive (score {})", self.name(), score);
            return None;
        }

        Some(FaultHypothesis {
            cause: *self,
            confidence: fminf(score, fminf(ctx.config.confidence_ceiling, CONFIDENCE_CEILING)),
            severity: self.severity(score, ctx.config),
            evidence: trail.into_facts(),
            recommendation: String::from(recommendation),
        })
    }
}

impl fmt::Display for FaultCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ranked, evidence-backed root-cause hypothesis.
///
/// Only constructed by [`FaultCause::evaluate`], which guarantees a
/// non-empty evidence trail and a bounded confidence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FaultHypothesis {
    cause: FaultCause,
    confidence: f32,
    severity: Severity,
    evidence: Vec<String>,
    recommendation: String,
}

impl FaultHypothesis {
    pub fn cause(&self) -> FaultCause {
        self.cause
    }

    /// Capped score in (activation threshold, 0.99]
    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Supporting facts, in check order
    pub fn evidence(&self) -> &[String] {
        &self.evidence
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::SpectralPeak;
    use alloc::vec;

    fn context<'a>(
        snapshot: &'a TelemetrySnapshot,
        baseline: Option<&'a MaintenanceBaseline>,
        material: MaterialProfile,
        config: &'a EngineConfig,
    ) -> EvaluationContext<'a> {
        EvaluationContext {
            snapshot,
            matcher: SpectrumMatcher::new(snapshot.rpm, config.blade_count).ok(),
            baseline,
            material,
            config,
        }
    }

    #[test]
    fn single_weight_at_threshold_is_not_reported() {
        // 0.4 alone is not strictly above 0.4
        let config = EngineConfig::default();
        let snapshot = TelemetrySnapshot::new(428.6, vec![]).with_efficiency(85.0);
        let ctx = context(&snapshot, None, MaterialProfile::default(), &config);

        let trail = FaultCause::HydraulicCavitation.assess(&ctx);
        assert_eq!(trail.facts().len(), 1);
        assert_eq!(FaultCause::HydraulicCavitation.evaluate(&ctx), None);
    }

    #[test]
    fn misalignment_severity_rule() {
        let config = EngineConfig::default();
        let cause = FaultCause::DynamicShaftMisalignment;
        assert_eq!(cause.severity(0.95, &config), Severity::Critical);
        assert_eq!(cause.severity(0.7, &config), Severity::Warning);
        assert_eq!(cause.severity(0.45, &config), Severity::Warning);
    }

    #[test]
    fn looseness_and_cavitation_severity_rules() {
        let config = EngineConfig::default();
        assert_eq!(FaultCause::StructuralLooseness.severity(0.75, &config), Severity::Warning);
        assert_eq!(FaultCause::StructuralLooseness.severity(0.6, &config), Severity::Watch);
        assert_eq!(FaultCause::HydraulicCavitation.severity(0.85, &config), Severity::Warning);
        assert_eq!(FaultCause::HydraulicCavitation.severity(0.7, &config), Severity::Watch);
    }

    #[test]
    fn confidence_is_capped() {
        let config = EngineConfig::default();
        let baseline = MaintenanceBaseline::new(0.1)
            .with_clearances(crate::baseline::BearingClearances::new(0.2, 0.1, 0.15, 0.15));
        let f2 = 428.6 / 60.0 * 2.0;
        let snapshot = TelemetrySnapshot::new(428.6, vec![SpectralPeak::new(f2, 3.0)])
            .with_bearing_temp_rate(1.0);
        let ctx = context(&snapshot, Some(&baseline), MaterialProfile::default(), &config);

        let hypothesis = FaultCause::DynamicShaftMisalignment.evaluate(&ctx).unwrap();
        assert_eq!(hypothesis.confidence(), 0.99);
        assert_eq!(hypothesis.evidence().len(), 4);
        assert_eq!(hypothesis.severity(), Severity::Critical);
    }

    #[test]
    fn unchecked_ceiling_never_exceeds_cap() {
        // A hand-built context bypasses EngineConfig::validate
        let mut config = EngineConfig::default();
        config.confidence_ceiling = 1.5;
        let baseline = MaintenanceBaseline::new(0.1)
            .with_clearances(crate::baseline::BearingClearances::new(0.2, 0.1, 0.15, 0.15));
        let f2 = 428.6 / 60.0 * 2.0;
        let snapshot = TelemetrySnapshot::new(428.6, vec![SpectralPeak::new(f2, 3.0)])
            .with_bearing_temp_rate(1.0);
        let ctx = context(&snapshot, Some(&baseline), MaterialProfile::default(), &config);

        let hypothesis = FaultCause::DynamicShaftMisalignment.evaluate(&ctx).unwrap();
        assert_eq!(hypothesis.confidence(), 0.99);

        config.confidence_ceiling = f32::NAN;
        let ctx = context(&snapshot, Some(&baseline), MaterialProfile::default(), &config);
        assert_eq!(FaultCause::DynamicShaftMisalignment.evaluate(&ctx).unwrap().confidence(), 0.99);
    }

    #[test]
    fn stopped_unit_skips_reference_checks() {
        let config = EngineConfig::default();
        let snapshot = TelemetrySnapshot::new(0.0, vec![SpectralPeak::new(0.0, 9.0)]);
        let ctx = context(&snapshot, None, MaterialProfile::default(), &config);

        assert!(ctx.matcher.is_none());
        assert!(FaultCause::StructuralLooseness.assess(&ctx).is_empty());
        assert!(FaultCause::DynamicShaftMisalignment.assess(&ctx).is_empty());
    }

    #[test]
    fn display_names() {
        assert_eq!(alloc::format!("{}", FaultCause::HydraulicCavitation), "Hydraulic Cavitation");
        assert_eq!(alloc::format!("{}", Severity::Watch), "WATCH");
        assert!(!FaultCause::StructuralLooseness.field_tip().is_empty());
    }
}
