//! Shared error types for valuation operations.
//!
//! ## Purpose
//!
//! This module defines the unified [`ValuationError`] enum covering every
//! failure mode of the engine: boundary validation of contractually-integer
//! inputs, adjustment-source resolution, and regression preconditions.
//!
//! ## Design notes
//!
//! * All variants are input-validation failures, not transient faults; no
//!   retry logic exists anywhere in the crate.
//! * Variants carry the offending value or index context so callers can
//!   produce actionable messages without re-inspecting their inputs.
//! * Errors are `Clone + PartialEq` so tests can match on them directly.
//!
//! ## Key concepts
//!
//! ### Integer Contracts
//!
//! Cost, the fixed adjustment coefficient, and the royalty object value are
//! contractually integers. They travel through the engine as floats, and
//! integer-ness is checked only at the boundary: [`ValuationError::InvalidCost`]
//! for the cost input, [`ValuationError::InvalidValue`] elsewhere.
//!
//! ### Defensive Guards
//!
//! [`ValuationError::DegenerateFit`] covers a zero-variance regression input.
//! The positional-index design makes it unreachable once the point count is
//! validated, but the guard is checked rather than assumed.
//!
//! ## Visibility
//!
//! Part of the public API; every fallible operation in the crate returns
//! this type.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use thiserror::Error;

// ============================================================================
// Error Enum
// ============================================================================

/// Unified error type for all valuation engine operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    /// Cost input is not representable as an integer (non-finite or fractional).
    #[error("cost must be a finite integer value, got {0}")]
    InvalidCost(f64),

    /// A numeric input violated its contract; the payload names the input
    /// and its offending value.
    #[error("invalid numeric value: {0}")]
    InvalidValue(String),

    /// Neither a fixed adjustment coefficient nor any data point was supplied.
    #[error("either a fixed adjustment coefficient or at least one data point is required")]
    MissingAdjustmentSource,

    /// Too few data points for a regression fit.
    #[error("insufficient data for regression: got {got} point(s), need at least {min}")]
    InsufficientData { got: usize, min: usize },

    /// Zero variance in the independent variable.
    #[error("degenerate fit: zero variance in the independent variable")]
    DegenerateFit,
}
