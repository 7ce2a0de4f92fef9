//! Value estimation from cost plus an adjustment source.
//!
//! ## Purpose
//!
//! This module defines [`ValuationRequest`], which pairs a cost with exactly
//! one adjustment source, and [`ValueEstimator`], which turns a request into
//! a [`ValuationResult`].
//!
//! ## Design notes
//!
//! * The two adjustment sources are mutually exclusive by construction:
//!   [`AdjustmentMode`] is an enum, so a request can never carry both a
//!   fixed coefficient and data points, and no runtime flag-checking exists.
//! * In data-driven mode the adjustment scalar is the arithmetic mean of
//!   the point values. It is defined for a single point and does not depend
//!   on whether a full regression is computable; the trend line is a
//!   secondary output attached only when at least 2 points are present.
//! * Estimation is a pure function: inputs are borrowed immutably, every
//!   call returns a fresh result, and nothing is cached.
//!
//! ## Key concepts
//!
//! ### Integer Contracts
//!
//! Cost and the fixed coefficient are contractually integers carried as
//! floats; both are boundary-validated before any arithmetic.
//!
//! ### Headline Value vs. Trend
//!
//! The headline value is `cost + adjustment` in both modes. The trend line
//! exists purely for presentation (e.g. chart rendering) and its absence is
//! not an error on the value path.
//!
//! ## Invariants
//!
//! * Identical requests produce bit-identical results.
//! * A request that cannot produce a well-defined value fails explicitly;
//!   no placeholder value is ever returned.
//!
//! ## Visibility
//!
//! Part of the public API through [`crate::api::estimate_value`]; direct
//! construction of requests is also supported.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::engine::output::ValuationResult;
use crate::engine::regression::RegressionEngine;
use crate::engine::validator::{Validator, MIN_FIT_POINTS};
use crate::math::ols;
use crate::primitives::errors::ValuationError;
use crate::primitives::point::DataPoint;

// ============================================================================
// Request Types
// ============================================================================

/// Source of the adjustment added to cost. Exactly one per request.
#[derive(Debug, Clone, PartialEq)]
pub enum AdjustmentMode<T> {
    /// A caller-fixed integral coefficient.
    Fixed(T),

    /// An ordered sequence of data points the adjustment is derived from.
    DataDriven(Vec<DataPoint<T>>),
}

/// A single value-estimation request.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationRequest<T> {
    /// Acquisition or production cost; contractually an integer.
    pub cost: T,

    /// The active adjustment source.
    pub mode: AdjustmentMode<T>,
}

// ============================================================================
// Value Estimator
// ============================================================================

/// Produces a value estimate from a cost and an adjustment source.
pub struct ValueEstimator;

impl ValueEstimator {
    /// Estimate a value for `request`.
    ///
    /// Fails with [`ValuationError::InvalidCost`] for a non-integral cost,
    /// [`ValuationError::InvalidValue`] for a non-integral coefficient or a
    /// non-finite point value, and [`ValuationError::MissingAdjustmentSource`]
    /// for a data-driven request with no points.
    pub fn estimate<T: Float>(
        request: &ValuationRequest<T>,
    ) -> Result<ValuationResult<T>, ValuationError> {
        Validator::validate_cost(request.cost)?;

        match &request.mode {
            AdjustmentMode::Fixed(coefficient) => {
                Validator::validate_coefficient(*coefficient)?;
                Ok(ValuationResult {
                    value: request.cost + *coefficient,
                    trend: None,
                })
            }
            AdjustmentMode::DataDriven(points) => {
                if points.is_empty() {
                    return Err(ValuationError::MissingAdjustmentSource);
                }
                Validator::validate_points(points)?;

                let values: Vec<T> = points.iter().map(|p| p.value).collect();
                // Non-empty by the guard above, so the mean is defined.
                let adjustment = ols::mean(&values).ok_or(ValuationError::MissingAdjustmentSource)?;

                let trend = if points.len() >= MIN_FIT_POINTS {
                    Some(RegressionEngine::fit(points)?)
                } else {
                    None
                };

                Ok(ValuationResult {
                    value: request.cost + adjustment,
                    trend,
                })
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
