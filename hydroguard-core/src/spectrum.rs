//! Tolerant spectral peak matching
//!
//! Hydro units turn slowly (a 428.6 rpm Francis runner has f0 ≈ 7.14 Hz),
//! so detected peaks rarely sit exactly on the theoretical frequencies.
//! The matcher finds the peak that lies inside a tolerance window around
//! each machine-derived reference:
//!
//! ```text
//! f0   = rpm / 60            (1×, unbalance / looseness)
//! 2×f0                       (classic misalignment signature)
//! fBPF = f0 × blade_count    (blade-pass, hydraulic excitation)
//! ```
//!
//! Two window rules exist in the field:
//! - **Relative**: `|f_peak - f_target| <= f_target × 0.05`, boundary inclusive
//! - **Absolute**: `|f_peak - f_target| <= hz`
//!
//! Every check picks exactly one rule (see `EngineConfig`); the defaults are
//! relative ±5% everywhere. The two rules disagree at low speed, where 5%
//! is well under a hertz.

use libm::fabsf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::spectrum::{PEAK_MATCH_RELATIVE_TOLERANCE, SECONDS_PER_MINUTE_F32},
    errors::{DiagnosticError, DiagnosticResult},
    telemetry::SpectralPeak,
};

/// Frequency window used to accept a peak as matching a target
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ToleranceWindow {
    /// Fraction of the target frequency (0.05 = ±5%)
    Relative(f32),
    /// Fixed band in Hz
    Absolute(f32),
}

impl Default for ToleranceWindow {
    fn default() -> Self {
        ToleranceWindow::Relative(PEAK_MATCH_RELATIVE_TOLERANCE)
    }
}

impl ToleranceWindow {
    /// Half-width of the window around `target_hz` (Hz)
    pub fn half_width_hz(&self, target_hz: f32) -> f32 {
        match *self {
            ToleranceWindow::Relative(fraction) => target_hz * fraction,
            ToleranceWindow::Absolute(hz) => hz,
        }
    }

    /// Boundary-inclusive containment test.
    ///
    /// NaN never matches, and neither does anything against a target or
    /// window that overflowed to infinity.
    pub fn contains(&self, frequency_hz: f32, target_hz: f32) -> bool {
        let half_width = self.half_width_hz(target_hz);
        if !target_hz.is_finite() || !half_width.is_finite() {
            return false;
        }

        fabsf(frequency_hz - target_hz) <= half_width
    }
}

/// Machine-derived reference frequencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceFrequency {
    /// 1× rotational frequency
    Rotational,
    /// 2× rotational frequency
    SecondHarmonic,
    /// Runner blade-pass frequency
    BladePass,
}

impl ReferenceFrequency {
    pub const fn label(&self) -> &'static str {
        match self {
            ReferenceFrequency::Rotational => "1x RPM",
            ReferenceFrequency::SecondHarmonic => "2x RPM",
            ReferenceFrequency::BladePass => "BPF",
        }
    }
}

/// Reference frequencies for one machine at one speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumMatcher {
    rotational_hz: f32,
    blade_count: u16,
}

impl SpectrumMatcher {
    /// Build a matcher for a running machine.
    ///
    /// A stopped (rpm ≤ 0) or unreadable speed is insufficient data, not a
    /// peak at 0 Hz, so it is rejected rather than producing zero targets.
    pub fn new(rpm: f32, blade_count: u16) -> DiagnosticResult<Self> {
        if !rpm.is_finite() || rpm <= 0.0 {
            return Err(DiagnosticError::invalid("rpm", rpm));
        }
        if blade_count == 0 {
            return Err(DiagnosticError::InvalidCount {
                field: "blade_count",
                value: 0,
            });
        }

        Ok(Self {
            rotational_hz: rpm / SECONDS_PER_MINUTE_F32,
            blade_count,
        })
    }

    /// Rotational fundamental f0 (Hz)
    pub fn rotational_hz(&self) -> f32 {
        self.rotational_hz
    }

    /// Blade-pass frequency f0 × blade count (Hz)
    pub fn blade_pass_hz(&self) -> f32 {
        self.rotational_hz * self.blade_count as f32
    }

    pub fn blade_count(&self) -> u16 {
        self.blade_count
    }

    /// Target frequency for a reference (Hz)
    pub fn target_hz(&self, reference: ReferenceFrequency) -> f32 {
        match reference {
            ReferenceFrequency::Rotational => self.rotational_hz,
            ReferenceFrequency::SecondHarmonic => self.rotational_hz * 2.0,
            ReferenceFrequency::BladePass => self.blade_pass_hz(),
        }
    }

    /// First peak, in detection order, inside `window` around the reference
    pub fn find_peak<'a>(
        &self,
        peaks: &'a [SpectralPeak],
        reference: ReferenceFrequency,
        window: ToleranceWindow,
    ) -> Option<&'a SpectralPeak> {
        find_peak_near(peaks, self.target_hz(reference), window)
    }

    /// Amplitude of the matching peak, or `None` for "no match"
    pub fn match_amplitude(
        &self,
        peaks: &[SpectralPeak],
        reference: ReferenceFrequency,
        window: ToleranceWindow,
    ) -> Option<f32> {
        self.find_peak(peaks, reference, window)
            .map(|peak| peak.amplitude_mm_s)
    }
}

/// First peak inside `window` around `target_hz`
pub fn find_peak_near(
    peaks: &[SpectralPeak],
    target_hz: f32,
    window: ToleranceWindow,
) -> Option<&SpectralPeak> {
    peaks
        .iter()
        .find(|peak| window.contains(peak.frequency_hz, target_hz))
}
