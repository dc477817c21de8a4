//! Bearing thermal rate monitoring
//!
//! Converts a temperature series into a rate of change (°C/min) and flags
//! thermal runaway.
//!
//! ## State Machine
//!
//! ```text
//! NoPriorSample --observe--> HasPriorSample
//!                              |  elapsed <= 1 s : replace sample, emit nothing
//!                              |  elapsed  > 1 s : compute rate, replace sample,
//!                              |                   emit runaway if rate > 2.0
//! ```
//!
//! The monitor remembers exactly one previous sample. A single noisy
//! reading can therefore trigger or mask a runaway for one step; callers
//! wanting smoothing must filter upstream.
//!
//! One monitor belongs to one physical measurement point. Use
//! [`ThermalMonitorBank`] to keep monitors for several bearings apart.

use heapless::{LinearMap, String as PointId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::thermal::{
        DEFAULT_THERMAL_POINTS, MAX_POINT_ID_LEN, THERMAL_MIN_ELAPSED_MS,
        THERMAL_RUNAWAY_RATE_C_PER_MIN,
    },
    errors::{DiagnosticError, DiagnosticResult},
    time::{elapsed_ms, rate_per_minute, TimeSource, Timestamp},
};

/// A single temperature reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThermalSample {
    pub temperature_c: f32,
    pub timestamp_ms: Timestamp,
}

/// Monitor state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThermalState {
    #[default]
    NoPriorSample,
    HasPriorSample(ThermalSample),
}

/// Emitted when the bearing heats faster than the runaway threshold
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThermalRunaway {
    /// Computed heating rate (°C/min)
    pub rate_c_per_min: f32,
    /// Temperature of the sample that triggered detection (°C)
    pub temperature_c: f32,
    pub timestamp_ms: Timestamp,
}

/// Single-step derivative estimator for one measurement point
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalRateMonitor {
    state: ThermalState,
    last_rate: Option<f32>,
    runaway_rate_c_per_min: f32,
}

impl Default for ThermalRateMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ThermalRateMonitor {
    pub fn new() -> Self {
        Self {
            state: ThermalState::NoPriorSample,
            last_rate: None,
            runaway_rate_c_per_min: THERMAL_RUNAWAY_RATE_C_PER_MIN,
        }
    }

    /// Override the runaway threshold (°C/min)
    pub fn with_runaway_rate(mut self, rate_c_per_min: f32) -> Self {
        self.runaway_rate_c_per_min = rate_c_per_min;
        self
    }

    pub fn state(&self) -> ThermalState {
        self.state
    }

    /// Rate from the last computing step (°C/min), if any
    pub fn last_rate(&self) -> Option<f32> {
        self.last_rate
    }

    /// Feed a new reading. Returns a runaway signal or nothing.
    ///
    /// The stored sample is always replaced by this one, whether or not a
    /// rate was computed.
    pub fn observe(&mut self, temperature_c: f32, timestamp_ms: Timestamp) -> Option<ThermalRunaway> {
        let sample = ThermalSample { temperature_c, timestamp_ms };
        let previous = core::mem::replace(&mut self.state, ThermalState::HasPriorSample(sample));

        let ThermalState::HasPriorSample(prior) = previous else {
            log_trace!("Thermal monitor primed at {} °C", temperature_c);
            return None;
        };

        let elapsed = elapsed_ms(prior.timestamp_ms, timestamp_ms);
        if elapsed <= THERMAL_MIN_ELAPSED_MS {
            return None;
        }

        let rate = rate_per_minute(temperature_c - prior.temperature_c, elapsed);
        self.last_rate = Some(rate);

        if rate > self.runaway_rate_c_per_min {
            log_warn!(
                "Thermal runaway: {} °C/min at {} °C (limit {} °C/min)",
                rate, temperature_c, self.runaway_rate_c_per_min
            );
            return Some(ThermalRunaway {
                rate_c_per_min: rate,
                temperature_c,
                timestamp_ms,
            });
        }

        None
    }

    /// Feed a reading stamped by `clock`
    pub fn observe_now<T: TimeSource>(&mut self, temperature_c: f32, clock: &T) -> Option<ThermalRunaway> {
        self.observe(temperature_c, clock.now())
    }

    /// Forget the stored sample and rate
    pub fn reset(&mut self) {
        self.state = ThermalState::NoPriorSample;
        self.last_rate = None;
    }
}

/// One [`ThermalRateMonitor`] per measurement point, keyed by point id.
///
/// Bounded to `N` points so it can live on the stack of an edge gateway.
#[derive(Debug, Clone, Default)]
pub struct ThermalMonitorBank<const N: usize = DEFAULT_THERMAL_POINTS> {
    monitors: LinearMap<PointId<MAX_POINT_ID_LEN>, ThermalRateMonitor, N>,
}

impl<const N: usize> ThermalMonitorBank<N> {
    pub fn new() -> Self {
        Self {
            monitors: LinearMap::new(),
        }
    }

    /// Route a reading to the monitor owned by `point`, creating it on first use
    pub fn observe(
        &mut self,
        point: &str,
        temperature_c: f32,
        timestamp_ms: Timestamp,
    ) -> DiagnosticResult<Option<ThermalRunaway>> {
        let id = point_id(point)?;

        if !self.monitors.contains_key(&id) {
            self.monitors
                .insert(id.clone(), ThermalRateMonitor::new())
                .map_err(|_| DiagnosticError::CapacityExceeded { capacity: N })?;
        }

        let monitor = self
            .monitors
            .get_mut(&id)
            .ok_or(DiagnosticError::CapacityExceeded { capacity: N })?;

        Ok(monitor.observe(temperature_c, timestamp_ms))
    }

    /// Last computed rate for a point (°C/min)
    pub fn last_rate(&self, point: &str) -> Option<f32> {
        let id = point_id(point).ok()?;
        self.monitors.get(&id).and_then(ThermalRateMonitor::last_rate)
    }

    /// Forget the history of one point
    pub fn reset(&mut self, point: &str) {
        if let Ok(id) = point_id(point) {
            if let Some(monitor) = self.monitors.get_mut(&id) {
                monitor.reset();
            }
        }
    }

    /// Number of points seen so far
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

fn point_id(point: &str) -> DiagnosticResult<PointId<MAX_POINT_ID_LEN>> {
    PointId::try_from(point).map_err(|_| DiagnosticError::InvalidCount {
        field: "point_id.len",
        value: point.len() as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    #[test]
    fn first_sample_only_primes() {
        let mut monitor = ThermalRateMonitor::new();

        assert_eq!(monitor.observe(60.0, 0), None);
        assert!(matches!(monitor.state(), ThermalState::HasPriorSample(_)));
        assert_eq!(monitor.last_rate(), None);
    }

    #[test]
    fn runaway_fires_above_threshold() {
        let mut monitor = ThermalRateMonitor::new();
        monitor.observe(60.0, 0);

        // +3 °C in 60 s = 3 °C/min
        let signal = monitor.observe(63.0, 60_000);
        let runaway = signal.expect("runaway expected");
        assert_eq!(runaway.rate_c_per_min, 3.0);
        assert_eq!(runaway.temperature_c, 63.0);
    }

    #[test]
    fn exactly_threshold_does_not_fire() {
        let mut monitor = ThermalRateMonitor::new();
        monitor.observe(60.0, 0);

        // +2 °C in 60 s = exactly 2.0 °C/min
        assert_eq!(monitor.observe(62.0, 60_000), None);
        assert_eq!(monitor.last_rate(), Some(2.0));
    }

    #[test]
    fn sub_second_samples_replace_silently() {
        let mut monitor = ThermalRateMonitor::new();
        monitor.observe(60.0, 0);

        // Exactly 1 s elapsed: no rate, even for a huge jump
        assert_eq!(monitor.observe(90.0, 1000), None);
        assert_eq!(monitor.last_rate(), None);

        // Stored sample was replaced: next rate is measured from 90 °C
        assert_eq!(monitor.observe(90.5, 61_000), None);
        assert_eq!(monitor.last_rate(), Some(0.5));
    }

    #[test]
    fn single_noisy_sample_causes_transient_false_positive() {
        // Accepted limitation: one-step memory means a spike fires once,
        // and the return to normal reads as cooling.
        let mut monitor = ThermalRateMonitor::new();
        monitor.observe(60.0, 0);

        assert!(monitor.observe(65.0, 2_000).is_some());
        assert!(monitor.observe(60.0, 4_000).is_none());
        assert!(monitor.last_rate().unwrap() < 0.0);
    }

    #[test]
    fn cooling_never_fires() {
        let mut monitor = ThermalRateMonitor::new();
        monitor.observe(80.0, 0);
        assert_eq!(monitor.observe(70.0, 60_000), None);
    }

    #[test]
    fn clock_going_backwards_is_silent() {
        let mut monitor = ThermalRateMonitor::new();
        monitor.observe(60.0, 10_000);
        assert_eq!(monitor.observe(99.0, 5_000), None);
        assert_eq!(monitor.last_rate(), None);
    }

    #[test]
    fn observe_with_clock_and_reset() {
        let mut clock = ManualClock::new(0);
        let mut monitor = ThermalRateMonitor::new().with_runaway_rate(1.0);

        monitor.observe_now(50.0, &clock);
        clock.advance(30_000);
        assert!(monitor.observe_now(51.0, &clock).is_some());

        monitor.reset();
        assert_eq!(monitor.state(), ThermalState::NoPriorSample);
        assert_eq!(monitor.last_rate(), None);
    }

    #[test]
    fn bank_keeps_points_independent() {
        let mut bank: ThermalMonitorBank<4> = ThermalMonitorBank::new();

        bank.observe("UGB", 60.0, 0).unwrap();
        bank.observe("TGB", 40.0, 0).unwrap();

        // Without isolation this would read as a 20 °C jump
        assert_eq!(bank.observe("UGB", 60.5, 60_000).unwrap(), None);
        assert_eq!(bank.last_rate("UGB"), Some(0.5));
        assert_eq!(bank.last_rate("TGB"), None);
        assert_eq!(bank.len(), 2);

        bank.reset("UGB");
        assert_eq!(bank.last_rate("UGB"), None);
    }

    #[test]
    fn bank_capacity_and_id_length() {
        let mut bank: ThermalMonitorBank<2> = ThermalMonitorBank::new();
        bank.observe("A", 1.0, 0).unwrap();
        bank.observe("B", 1.0, 0).unwrap();

        assert_eq!(
            bank.observe("C", 1.0, 0),
            Err(DiagnosticError::CapacityExceeded { capacity: 2 })
        );
        assert!(bank.observe("a-very-long-bearing-identifier", 1.0, 0).is_err());
    }
}
