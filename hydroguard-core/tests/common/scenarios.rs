//! Field scenarios
//!
//! Each scenario bundles the snapshot, commissioning baseline and runner
//! material an operator would feed the engine for one evaluation cycle.

use hydroguard_core::{MaintenanceBaseline, MaterialProfile, SpectralPeak, TelemetrySnapshot};

use super::{f0, UNIT_RPM};

pub struct Scenario {
    pub name: &'static str,
    pub snapshot: TelemetrySnapshot,
    pub baseline: Option<MaintenanceBaseline>,
    pub material: MaterialProfile,
}

/// Healthy unit: modest 1×/2×, clean BPF, good efficiency
pub fn nominal() -> Scenario {
    Scenario {
        name: "nominal",
        snapshot: TelemetrySnapshot::new(
            UNIT_RPM,
            vec![
                SpectralPeak::new(f0(), 1.2),
                SpectralPeak::new(f0() * 2.0, 0.6),
                SpectralPeak::new(f0() * 15.0, 0.4),
            ],
        )
        .with_efficiency(92.5)
        .with_bearing_temp(58.0)
        .with_bearing_temp_rate(0.1),
        baseline: Some(MaintenanceBaseline::new(0.02)),
        material: MaterialProfile::StainlessSteel13Cr4Ni,
    }
}

/// Bronze runner losing efficiency with broadband noise at 250 Hz
pub fn bronze_cavitation() -> Scenario {
    Scenario {
        name: "bronze cavitation",
        snapshot: TelemetrySnapshot::new(
            UNIT_RPM,
            vec![SpectralPeak::new(f0(), 1.0), SpectralPeak::new(250.0, 0.8)],
        )
        .with_efficiency(85.0),
        baseline: None,
        material: MaterialProfile::Bronze,
    }
}

/// Strong 2×, warming guide bearing and a poor commissioning plumbness
pub fn hot_misalignment() -> Scenario {
    Scenario {
        name: "hot misalignment",
        snapshot: TelemetrySnapshot::new(
            UNIT_RPM,
            vec![SpectralPeak::new(f0(), 1.5), SpectralPeak::new(f0() * 2.0, 2.4)],
        )
        .with_efficiency(91.0)
        .with_bearing_temp(71.0)
        .with_bearing_temp_rate(0.8),
        baseline: Some(MaintenanceBaseline::new(0.35)),
        material: MaterialProfile::CastSteel,
    }
}

/// Dominant 1× with a harmonic comb up to 5×
pub fn loose_foundation() -> Scenario {
    Scenario {
        name: "loose foundation",
        snapshot: TelemetrySnapshot::new(
            UNIT_RPM,
            vec![
                SpectralPeak::new(f0(), 3.1),
                SpectralPeak::new(f0() * 2.0, 0.9),
                SpectralPeak::new(f0() * 3.0, 0.8),
                SpectralPeak::new(f0() * 4.0, 0.7),
                SpectralPeak::new(f0() * 5.0, 0.6),
            ],
        )
        .with_efficiency(90.0),
        baseline: Some(MaintenanceBaseline::new(0.03)),
        material: MaterialProfile::StainlessSteel13Cr4Ni,
    }
}

pub fn all() -> Vec<Scenario> {
    vec![nominal(), bronze_cavitation(), hot_misalignment(), loose_foundation()]
}
