//! Royalty computation at a fixed rate.
//!
//! ## Purpose
//!
//! This module derives a royalty amount as a fixed 25% share of an object
//! value, using integer arithmetic with truncation toward zero.
//!
//! ## Design notes
//!
//! * The rate is expressed as the integer ratio 25/100 and the product is
//!   taken in i128, so no intermediate overflows for any i64 object value.
//! * Truncation toward zero matches integer-division semantics; the result
//!   is never rounded.
//! * Single fixed rate: no tiering, no negotiation logic.
//!
//! ## Invariants
//!
//! * `|royalty| <= |object_value|`, so the result always fits back in i64.
//! * The computation is pure and deterministic.
//!
//! ## Visibility
//!
//! Part of the public API through [`crate::api::compute_royalty`]; direct
//! use of [`RoyaltyCalculator`] is also supported.

#[cfg(not(feature = "std"))]
use alloc::format;

use num_traits::Float;

use crate::engine::validator::Validator;
use crate::primitives::errors::ValuationError;

/// Royalty rate as an integer ratio (25%).
pub const ROYALTY_RATE_NUMER: i128 = 25;
pub const ROYALTY_RATE_DENOM: i128 = 100;

// ============================================================================
// Royalty Calculator
// ============================================================================

/// Fixed-rate royalty computation over integral object values.
pub struct RoyaltyCalculator;

impl RoyaltyCalculator {
    /// Compute the basic royalty for `object_value`.
    ///
    /// Fails with [`ValuationError::InvalidValue`] when the input is
    /// non-finite, non-integral, or outside the i64 range.
    pub fn compute_basic<T: Float>(object_value: T) -> Result<i64, ValuationError> {
        Validator::validate_object_value(object_value)?;

        let value = object_value.to_i64().ok_or_else(|| {
            ValuationError::InvalidValue(format!(
                "object value={} exceeds the integer range",
                object_value.to_f64().unwrap_or(f64::NAN)
            ))
        })?;

        // Truncates toward zero, matching integer division.
        let royalty = (i128::from(value) * ROYALTY_RATE_NUMER) / ROYALTY_RATE_DENOM;
        Ok(royalty as i64)
    }
}

// ============================================================================
// Tests
// ============================================================================
