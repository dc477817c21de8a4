//! Error Types for Diagnostic Input Failures
//!
//! ## Design Philosophy
//!
//! The diagnostic core is a pure computation, so very little can go wrong.
//! Errors are reserved for inputs that would otherwise silently turn into a
//! zero or NaN result and poison the output:
//!
//! 1. **Small Size**: all data inline, `&'static str` for field names, `Copy`
//!    so errors can be returned from hot paths without moves.
//!
//! 2. **Boundary Only**: errors are raised by the leaf models
//!    (`SpectrumMatcher`, `synergy`, baseline validation). The hypothesis
//!    engine never fails; a bad input just drops the evidence that needed it.
//!
//! ## Error Categories
//!
//! ### Invalid Input
//! - `InvalidInput`: negative pH, negative erosion rate, rpm ≤ 0, NaN
//! - `InvalidCount`: zero blade count
//!
//! ### Commissioning Baseline
//! - `BaselineOutOfRange`: a field measurement outside its physical range
//! - `BaselineAlreadyCommissioned`: a second `commission` without an explicit
//!   re-commissioning
//!
//! ### Capacity
//! - `CapacityExceeded`: a bounded collection is full
//!
//! ### Configuration
//! - `MalformedConfig`: JSON that does not parse as an engine configuration
//! - Out-of-range weights and thresholds reuse `InvalidInput` / `InvalidCount`
//!
//! ## Handling Strategy
//!
//! ```rust
//! use hydroguard_core::{DiagnosticError, SpectrumMatcher};
//!
//! match SpectrumMatcher::new(0.0, 15) {
//!     Ok(_) => {}
//!     Err(DiagnosticError::InvalidInput { .. }) => {
//!         // Unit is stopped - report "no diagnosis available"
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for diagnostic operations
pub type DiagnosticResult<T> = Result<T, DiagnosticError>;

/// Diagnostic errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DiagnosticError {
    /// A numeric input is negative, non-finite or otherwise meaningless
    #[error("Invalid input: {field} = {value}")]
    InvalidInput {
        /// Name of the offending input
        field: &'static str,
        /// The rejected value
        value: f32,
    },

    /// An integer count is outside its valid range
    #[error("Invalid count: {field} = {value}")]
    InvalidCount {
        /// Name of the offending input
        field: &'static str,
        /// The rejected value
        value: u32,
    },

    /// Commissioning measurement outside its physical range
    #[error("Baseline {field} = {value} outside range [{min}, {max}]")]
    BaselineOutOfRange {
        /// Name of the baseline field
        field: &'static str,
        /// The measured value
        value: f32,
        /// Minimum acceptable value
        min: f32,
        /// Maximum acceptable value
        max: f32,
    },

    /// A baseline is already frozen for this unit
    #[error("Baseline already commissioned; use recommission to replace it")]
    BaselineAlreadyCommissioned,

    /// Bounded collection is full
    #[error("Capacity exceeded: {capacity} entries")]
    CapacityExceeded {
        /// Maximum number of entries
        capacity: usize,
    },

    /// Configuration text could not be parsed
    #[error("Malformed configuration at line {line}, column {column}")]
    MalformedConfig {
        line: usize,
        column: usize,
    },
}

impl DiagnosticError {
    /// Shorthand for an `InvalidInput` error
    pub const fn invalid(field: &'static str, value: f32) -> Self {
        Self::InvalidInput { field, value }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DiagnosticError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidInput { field, value } =>
                defmt::write!(fmt, "Invalid {} = {}", field, value),
            Self::InvalidCount { field, value } =>
                defmt::write!(fmt, "Invalid {} = {}", field, value),
            Self::BaselineOutOfRange { field, value, min, max } =>
                defmt::write!(fmt, "Baseline {} = {} outside [{}, {}]", field, value, min, max),
            Self::BaselineAlreadyCommissioned =>
                defmt::write!(fmt, "Baseline already commissioned"),
            Self::CapacityExceeded { capacity } =>
                defmt::write!(fmt, "Capacity {} exceeded", capacity),
            Self::MalformedConfig { line, column } =>
                defmt::write!(fmt, "Malformed config {}:{}", line, column),
        }
    }
}
