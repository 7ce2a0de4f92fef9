//! Trend fitting over an ordered sequence of data points.
//!
//! ## Purpose
//!
//! This module maps a sequence of data points onto (index, value) pairs and
//! fits an ordinary-least-squares line through them, producing the
//! [`LineFit`] coefficients used to draw a trend line.
//!
//! ## Design notes
//!
//! * The independent variable is the zero-based position of each point in
//!   the sequence, not any value stored on the point. Reordering the input
//!   therefore changes the fit; this is the intended trend-over-sequence
//!   semantics and must be preserved.
//! * All arithmetic runs in the caller's float type with no rounding.
//! * The zero-variance guard cannot trigger once the point count is
//!   validated (indices 0..n-1 with n >= 2 always vary), but it is checked
//!   rather than assumed.
//!
//! ## Invariants
//!
//! * Identical input sequences produce bit-identical coefficients.
//! * Input points are never mutated.
//!
//! ## Non-goals
//!
//! * No multi-variable regression.
//! * No goodness-of-fit statistics.
//!
//! ## Visibility
//!
//! Part of the public API through [`crate::api::fit_regression`]; direct use
//! of [`RegressionEngine`] is also supported.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::engine::output::LineFit;
use crate::engine::validator::Validator;
use crate::math::ols;
use crate::primitives::errors::ValuationError;
use crate::primitives::point::DataPoint;

// ============================================================================
// Regression Engine
// ============================================================================

/// Ordinary-least-squares trend fitting over positional indices.
pub struct RegressionEngine;

impl RegressionEngine {
    /// Fit a line through `points`, using each point's position as x and its
    /// value as y.
    ///
    /// Fails with [`ValuationError::InsufficientData`] for fewer than 2
    /// points and [`ValuationError::DegenerateFit`] if the independent
    /// variable has zero variance.
    pub fn fit<T: Float>(points: &[DataPoint<T>]) -> Result<LineFit<T>, ValuationError> {
        Validator::validate_fit_points(points)?;

        let xs: Vec<T> = (0..points.len())
            .map(|i| T::from(i).unwrap_or_else(T::nan))
            .collect();
        let ys: Vec<T> = points.iter().map(|p| p.value).collect();

        let (intercept, slope) =
            ols::least_squares(&xs, &ys).ok_or(ValuationError::DegenerateFit)?;
        Ok(LineFit { intercept, slope })
    }
}

// ============================================================================
// Tests
// ============================================================================
