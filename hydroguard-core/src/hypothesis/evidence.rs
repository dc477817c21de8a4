//! Evidence accumulation
//!
//! A hypothesis score is the sum of the weights of every check that fired.
//! Each fired check leaves one human-readable fact, in evaluation order, so
//! the trail can be audited against the score.
//!
//! Weights are summed in fixed point (thousandths). In binary floating point
//! 0.4 + 0.3 lands just above 0.7, which would flip a `score > 0.7` severity
//! rule; integer accumulation keeps sums exactly on the decimal grid the
//! thresholds are written in.

use alloc::{string::String, vec::Vec};

use libm::roundf;

/// Fixed-point resolution of a score
const SCORE_SCALE: f32 = 1000.0;

/// Additive score plus the facts that produced it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvidenceTrail {
    score_milli: i32,
    facts: Vec<String>,
}

impl EvidenceTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fired check
    pub fn add(&mut self, weight: f32, fact: String) {
        self.score_milli = self
            .score_milli
            .saturating_add(roundf(weight * SCORE_SCALE) as i32);
        self.facts.push(fact);
    }

    pub fn score(&self) -> f32 {
        self.score_milli as f32 / SCORE_SCALE
    }

    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub(crate) fn into_facts(self) -> Vec<String> {
        self.facts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn weights_accumulate_in_order() {
        let mut trail = EvidenceTrail::new();
        assert!(trail.is_empty());
        assert_eq!(trail.score(), 0.0);

        trail.add(0.4, "first".to_string());
        trail.add(0.25, "second".to_string());

        assert_eq!(trail.score(), 0.65);
        assert_eq!(trail.facts(), &["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn sums_stay_on_the_decimal_grid() {
        let mut trail = EvidenceTrail::new();
        trail.add(0.4, "2x".to_string());
        trail.add(0.3, "thermal".to_string());

        assert_eq!(trail.score(), 0.7);
        assert!(trail.score() <= 0.7);
    }
}
