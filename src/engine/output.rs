//! Output types for valuation operations.
//!
//! ## Purpose
//!
//! This module defines [`LineFit`], the immutable coefficients of a fitted
//! trend line, and [`ValuationResult`], the container returned by value
//! estimation.
//!
//! ## Design notes
//!
//! * The trend line inside a valuation result is optional: it exists only
//!   when the request was data-driven with enough points for a fit. It is a
//!   secondary, presentation-only output; the headline value never depends
//!   on it.
//! * Results are generic over `Float` types to support f32 and f64.
//! * Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * Coefficients are immutable once produced.
//! * `value` is always populated; a request that cannot produce a value
//!   fails with an error instead of returning a placeholder.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not round or format currency; presentation concerns
//!   stay with the caller.
//!
//! ## Visibility
//!
//! Part of the public API; these are the primary result types returned by
//! the engine.

use core::fmt;

use num_traits::Float;

// ============================================================================
// Line Fit
// ============================================================================

/// Coefficients of a fitted trend line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit<T> {
    /// Value of the line at x = 0.
    pub intercept: T,

    /// Change in y per unit of x.
    pub slope: T,
}

impl<T: Float> LineFit<T> {
    /// Evaluate the line at `x`, e.g. for rendering its endpoints.
    pub fn y_at(&self, x: T) -> T {
        self.intercept + self.slope * x
    }
}

impl<T: Float + fmt::Display> fmt::Display for LineFit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Y = {} + {}*X", self.intercept, self.slope)
    }
}

// ============================================================================
// Valuation Result
// ============================================================================

/// Result of a value estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationResult<T> {
    /// Estimated monetary value.
    pub value: T,

    /// Trend line fitted over the supplied data points, when the request
    /// was data-driven with at least 2 points.
    pub trend: Option<LineFit<T>>,
}

impl<T: Float> ValuationResult<T> {
    /// Check whether a trend line accompanies the value.
    pub fn has_trend(&self) -> bool {
        self.trend.is_some()
    }
}

impl<T: Float + fmt::Display> fmt::Display for ValuationResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.trend {
            Some(fit) => write!(f, "value = {} ({})", self.value, fit),
            None => write!(f, "value = {}", self.value),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
