//! Root-cause diagnostics for hydropower units
//!
//! Turns noisy, multi-domain readings from a turbine/generator unit into a
//! ranked list of probable fault causes, each with its evidence trail and a
//! field recommendation:
//!
//! - [`SpectrumMatcher`]: tolerant lookup of 1×, 2× and blade-pass peaks
//! - [`ThermalRateMonitor`]: bearing temperature rate and runaway detection
//! - [`synergy`]: erosion-corrosion acceleration from erosion rate and pH
//! - [`FaultHypothesisEngine`]: fuses the above with the commissioning
//!   baseline and runner material into ranked [`FaultHypothesis`] values
//!
//! Key properties:
//! - Pure and synchronous, no I/O
//! - Never panics on extreme numeric input
//! - Builds `no_std` with `alloc`
//!
//! ```no_run
//! use hydroguard_core::{
//!     FaultHypothesisEngine, MaterialProfile, SpectralPeak, TelemetrySnapshot,
//!     ThermalRateMonitor,
//! };
//!
//! let engine = FaultHypothesisEngine::default();
//! let mut upper_guide = ThermalRateMonitor::new();
//!
//! upper_guide.observe(64.0, 0);
//! upper_guide.observe(65.0, 60_000);
//!
//! let mut snapshot = TelemetrySnapshot::new(428.6, vec![SpectralPeak::new(250.0, 0.8)])
//!     .with_efficiency(86.0);
//! snapshot.bearing_temp_rate_c_per_min = upper_guide.last_rate();
//!
//! for hypothesis in engine.analyze(&snapshot, None, Some(MaterialProfile::CastSteel)) {
//!     println!("{} {:.0}%", hypothesis.cause(), hypothesis.confidence() * 100.0);
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod baseline;
pub mod chemistry;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod hypothesis;
pub mod spectrum;
pub mod telemetry;
pub mod thermal;
pub mod time;

// Public API
pub use baseline::{
    AlignmentGrade, BaselineProvider, BaselineReport, BearingClearances,
    CommissioningRecord, CommissioningRegister, MaintenanceBaseline,
};
pub use chemistry::{synergy, OxideState, SynergyAssessment};
pub use config::EngineConfig;
pub use engine::FaultHypothesisEngine;
pub use errors::{DiagnosticError, DiagnosticResult};
pub use hypothesis::{FaultCause, FaultHypothesis, Severity};
pub use spectrum::{ReferenceFrequency, SpectrumMatcher, ToleranceWindow};
pub use telemetry::{MaterialProfile, SpectralPeak, TelemetrySnapshot};
pub use thermal::{ThermalMonitorBank, ThermalRateMonitor, ThermalRunaway, ThermalSample};
pub use time::{Timestamp, TimeSource};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
