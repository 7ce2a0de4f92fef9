//! High-level API for the valuation engine.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points of the crate: three
//! boundary functions mirroring the engine's call interface, and a fluent
//! [`Valuation`] builder for assembling a request incrementally.
//!
//! ## Design notes
//!
//! * **Boundary resolution**: `estimate_value` accepts both optional
//!   adjustment sources and resolves them into the internal enum; supplying
//!   neither is a caller error. A supplied fixed coefficient takes
//!   precedence over data points.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//! * **Pure**: Every function returns a fresh result computed solely from
//!   its arguments.
//!
//! ## Visibility
//!
//! This is the primary public API. Types re-exported here are considered
//! stable.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::result;
use num_traits::Float;

// Publicly re-exported types
pub use crate::engine::estimator::{AdjustmentMode, ValuationRequest, ValueEstimator};
pub use crate::engine::regression::RegressionEngine;
pub use crate::engine::royalty::RoyaltyCalculator;
pub use crate::engine::output::{LineFit, ValuationResult};
pub use crate::primitives::errors::ValuationError;
pub use crate::primitives::point::{DataPoint, PointId};

/// Result type alias for valuation operations.
pub type Result<T> = result::Result<T, ValuationError>;

// ============================================================================
// Boundary Functions
// ============================================================================

/// Estimate a value from `cost` and exactly one adjustment source.
///
/// Supplying a `coefficient` selects fixed-adjustment mode; otherwise
/// non-empty `points` select data-driven mode. Supplying neither, or empty
/// points without a coefficient, fails with
/// [`ValuationError::MissingAdjustmentSource`].
pub fn estimate_value<T: Float>(
    cost: T,
    coefficient: Option<T>,
    points: Option<&[DataPoint<T>]>,
) -> Result<ValuationResult<T>> {
    let mode = match (coefficient, points) {
        (Some(k), _) => AdjustmentMode::Fixed(k),
        (None, Some(p)) if !p.is_empty() => AdjustmentMode::DataDriven(p.to_vec()),
        _ => return Err(ValuationError::MissingAdjustmentSource),
    };
    ValueEstimator::estimate(&ValuationRequest { cost, mode })
}

/// Fit a trend line through `points` by ordinary least squares.
///
/// Each point's zero-based position is its independent variable. Requires
/// at least 2 points.
pub fn fit_regression<T: Float>(points: &[DataPoint<T>]) -> Result<LineFit<T>> {
    RegressionEngine::fit(points)
}

/// Compute the basic royalty (25%, truncated toward zero) for an integral
/// `object_value`.
pub fn compute_royalty<T: Float>(object_value: T) -> Result<i64> {
    RoyaltyCalculator::compute_basic(object_value)
}

// ============================================================================
// Valuation Builder
// ============================================================================

/// Fluent builder for a value estimation.
///
/// ```
/// use ipbones::api::Valuation;
///
/// let result = Valuation::new(1000.0).coefficient(500.0).estimate()?;
/// assert_eq!(result.value, 1500.0);
/// # Ok::<(), ipbones::ValuationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Valuation<T> {
    cost: T,
    coefficient: Option<T>,
    points: Vec<DataPoint<T>>,
}

impl<T: Float> Valuation<T> {
    /// Start a valuation for the given cost.
    pub fn new(cost: T) -> Self {
        Self {
            cost,
            coefficient: None,
            points: Vec::new(),
        }
    }

    /// Use a fixed adjustment coefficient. Takes precedence over any data
    /// points also supplied.
    pub fn coefficient(mut self, coefficient: T) -> Self {
        self.coefficient = Some(coefficient);
        self
    }

    /// Append a single data point.
    pub fn point(mut self, name: impl Into<String>, value: T) -> Self {
        self.points.push(DataPoint::new(name, value));
        self
    }

    /// Append a sequence of data points, preserving order.
    pub fn points(mut self, points: impl IntoIterator<Item = DataPoint<T>>) -> Self {
        self.points.extend(points);
        self
    }

    /// Run the estimation.
    pub fn estimate(self) -> Result<ValuationResult<T>> {
        estimate_value(self.cost, self.coefficient, Some(&self.points))
    }
}

// ============================================================================
// Tests
// ============================================================================
