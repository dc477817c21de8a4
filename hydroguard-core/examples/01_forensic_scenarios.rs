//! Forensic Scenarios Example
//!
//! Runs the fault hypothesis engine over four field situations of a
//! 428.6 rpm Francis unit and prints the ranked hypotheses.
//!
//! ## What You'll Learn
//!
//! - Freezing a commissioning baseline
//! - Feeding a bearing temperature rate from a thermal monitor
//! - Reading confidence, severity and evidence from each hypothesis
//! - Assessing erosion-corrosion synergy for the water chemistry
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_forensic_scenarios
//! ```

use hydroguard_core::{
    synergy, BearingClearances, CommissioningRegister, FaultHypothesis, FaultHypothesisEngine,
    MaintenanceBaseline, MaterialProfile, SpectralPeak, TelemetrySnapshot, ThermalRateMonitor,
};

const RPM: f32 = 428.6;

fn report(title: &str, hypotheses: &[FaultHypothesis]) {
    println!("{title}");
    println!("{}", "-".repeat(title.len()));

    if hypotheses.is_empty() {
        println!("  No active hypotheses. Unit healthy.\n");
        return;
    }

    for (rank, hypothesis) in hypotheses.iter().enumerate() {
        println!(
            "  #{} {} [{}] {:.0}%",
            rank + 1,
            hypothesis.cause(),
            hypothesis.severity(),
            hypothesis.confidence() * 100.0
        );
        for fact in hypothesis.evidence() {
            println!("      - {fact}");
        }
        println!("      > {}", hypothesis.recommendation());
        println!("      tip: {}", hypothesis.cause().field_tip());
    }
    println!();
}

fn main() {
    println!("HydroGuard Forensic Scenarios");
    println!("=============================\n");

    let f0 = RPM / 60.0;
    let engine = FaultHypothesisEngine::default();

    // Birth certificate of the unit
    let mut register = CommissioningRegister::new();
    let baseline = MaintenanceBaseline::new(0.35)
        .with_clearances(BearingClearances::new(0.30, 0.22, 0.26, 0.27));
    match register.commission(baseline, 0) {
        Ok(report) => println!(
            "Commissioned: alignment {:?}, asymmetric clearances {:?}\n",
            report.alignment, report.clearances_asymmetric
        ),
        Err(e) => {
            eprintln!("Commissioning rejected: {e}");
            return;
        }
    }
    let baseline = register.record().map(|record| record.baseline);

    // 1. Healthy unit
    let nominal = TelemetrySnapshot::new(
        RPM,
        vec![SpectralPeak::new(f0, 1.2), SpectralPeak::new(f0 * 2.0, 0.6)],
    )
    .with_efficiency(92.5);
    report("Nominal operation", &engine.analyze(&nominal, None, None));

    // 2. Bronze runner, efficiency loss and HF noise
    let cavitation = TelemetrySnapshot::new(RPM, vec![SpectralPeak::new(250.0, 0.8)])
        .with_efficiency(85.0);
    report(
        "Cavitation on a bronze runner",
        &engine.analyze(&cavitation, None, Some(MaterialProfile::Bronze)),
    );

    // 3. Guide bearing warming after start-up
    let mut monitor = ThermalRateMonitor::new();
    for (minute, temp) in [(0u64, 61.0f32), (1, 61.9), (2, 62.8)] {
        if let Some(runaway) = monitor.observe(temp, minute * 60_000) {
            println!(
                "Thermal runaway: {:.1} °C/min at {:.1} °C",
                runaway.rate_c_per_min, runaway.temperature_c
            );
        }
    }
    let mut misaligned = TelemetrySnapshot::new(
        RPM,
        vec![SpectralPeak::new(f0, 1.5), SpectralPeak::new(f0 * 2.0, 2.4)],
    )
    .with_efficiency(91.0)
    .with_bearing_temp(62.8);
    misaligned.bearing_temp_rate_c_per_min = monitor.last_rate();
    report(
        "Hot misalignment against the commissioning record",
        &engine.analyze(&misaligned, baseline.as_ref(), Some(MaterialProfile::CastSteel)),
    );

    // 4. Loose foundation: dominant 1x plus a comb up to 5x
    let comb = [3.1, 0.9, 0.8, 0.7, 0.6];
    let loose = TelemetrySnapshot::new(
        RPM,
        comb.iter()
            .enumerate()
            .map(|(i, amplitude)| SpectralPeak::new(f0 * (i + 1) as f32, *amplitude))
            .collect(),
    );
    report("Structural looseness", &engine.analyze(&loose, None, None));

    // Water chemistry for the cavitating runner
    match synergy(2500.0, 6.0, 0.1) {
        Ok(assessment) => {
            println!(
                "Erosion-corrosion synergy: x{:.1} ({:?}), effective {:.2} mm/year",
                assessment.factor, assessment.oxide_state, assessment.effective_rate_mm_per_year
            );
            if let Some(alert) = assessment.alert {
                println!("  ALERT: {alert}");
            }
        }
        Err(e) => eprintln!("Chemistry input rejected: {e}"),
    }
}
