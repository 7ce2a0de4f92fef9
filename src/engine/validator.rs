//! Input validation for valuation requests and regression data.
//!
//! ## Purpose
//!
//! This module provides validation for every input the engine accepts. All
//! checks run upfront before any computation begins, providing a specific
//! error with the offending value when validation fails.
//!
//! ## Design notes
//!
//! * Validation is fail-fast: returns on the first violation encountered.
//! * Checks are ordered from cheap to expensive.
//! * Error messages include the offending index and value for debugging.
//! * Validation is generic over `Float` types to support f32 and f64.
//! * Integer-ness of contractually-integer inputs is checked here, at the
//!   boundary, while the values themselves stay in floating point.
//!
//! ## Validated inputs
//!
//! * **Cost**: Finite and integral
//! * **Adjustment coefficient**: Finite and integral
//! * **Royalty object value**: Finite and integral
//! * **Data points**: Every value finite
//! * **Fit data**: At least 2 points, every value finite
//!
//! ## Key concepts
//!
//! ### Regression Requirements
//!
//! A least-squares line needs at least 2 points. The value-estimation path
//! does not share this requirement: a single data point is a valid
//! adjustment source, so point-count validation is applied only where a fit
//! is actually requested.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * A passing input satisfies every contract the downstream computation
//!   relies on.
//!
//! ## Non-goals
//!
//! * This module does not correct, clamp, or reorder inputs.
//! * This module does not perform any fitting or estimation itself.
//!
//! ## Visibility
//!
//! Internal implementation detail used by the engine components. Not part
//! of the public API.

#[cfg(not(feature = "std"))]
use alloc::format;

use num_traits::Float;

use crate::primitives::errors::ValuationError;
use crate::primitives::point::DataPoint;

/// Minimum number of points for a least-squares fit.
pub const MIN_FIT_POINTS: usize = 2;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for valuation inputs.
///
/// Provides static methods returning `Result<(), ValuationError>`, failing
/// fast on the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Integer Contracts
    // ========================================================================

    /// Validate the cost input: finite and representable as an integer.
    pub fn validate_cost<T: Float>(cost: T) -> Result<(), ValuationError> {
        if !cost.is_finite() || cost.fract() != T::zero() {
            return Err(ValuationError::InvalidCost(
                cost.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the fixed adjustment coefficient: finite and integral.
    pub fn validate_coefficient<T: Float>(coefficient: T) -> Result<(), ValuationError> {
        if !coefficient.is_finite() || coefficient.fract() != T::zero() {
            return Err(ValuationError::InvalidValue(format!(
                "coefficient={}",
                coefficient.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate the royalty object value: finite and integral.
    pub fn validate_object_value<T: Float>(object_value: T) -> Result<(), ValuationError> {
        if !object_value.is_finite() || object_value.fract() != T::zero() {
            return Err(ValuationError::InvalidValue(format!(
                "object value={}",
                object_value.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Data Point Validation
    // ========================================================================

    /// Validate that every data point value is finite.
    pub fn validate_points<T: Float>(points: &[DataPoint<T>]) -> Result<(), ValuationError> {
        for (i, point) in points.iter().enumerate() {
            if !point.value.is_finite() {
                return Err(ValuationError::InvalidValue(format!(
                    "points[{}]={}",
                    i,
                    point.value.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate data destined for a regression fit.
    pub fn validate_fit_points<T: Float>(points: &[DataPoint<T>]) -> Result<(), ValuationError> {
        // Check 1: Sufficient points for a line
        if points.len() < MIN_FIT_POINTS {
            return Err(ValuationError::InsufficientData {
                got: points.len(),
                min: MIN_FIT_POINTS,
            });
        }

        // Check 2: All values finite
        Self::validate_points(points)
    }
}

// ============================================================================
// Tests
// ============================================================================
