//! Shared fixtures for integration tests
//!
//! Field scenarios are taken from a 428.6 rpm Francis unit with a 15-blade
//! runner (f0 ≈ 7.14 Hz, 2× ≈ 14.29 Hz, BPF ≈ 107.15 Hz).

#![allow(dead_code)]

pub mod scenarios;

use hydroguard_core::{FaultCause, FaultHypothesis};

/// Rated speed used by every field scenario
pub const UNIT_RPM: f32 = 428.6;

/// Rotational fundamental for [`UNIT_RPM`]
pub fn f0() -> f32 {
    UNIT_RPM / 60.0
}

/// Find a hypothesis by cause, panicking with the full result if absent
pub fn expect_cause(results: &[FaultHypothesis], cause: FaultCause) -> &FaultHypothesis {
    results
        .iter()
        .find(|h| h.cause() == cause)
        .unwrap_or_else(|| panic!("expected {cause} in {results:#?}"))
}

/// Assert the ranking contract on any engine output
pub fn assert_well_formed(results: &[FaultHypothesis]) {
    for hypothesis in results {
        assert!(!hypothesis.evidence().is_empty(), "{hypothesis:?}");
        assert!(hypothesis.confidence() > 0.4, "{hypothesis:?}");
        assert!(hypothesis.confidence() <= 0.99, "{hypothesis:?}");
    }
    for pair in results.windows(2) {
        assert!(pair[0].confidence() >= pair[1].confidence(), "unsorted: {results:#?}");
    }
}
