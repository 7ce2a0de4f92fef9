//! Caller-supplied data points for trend fitting.
//!
//! ## Purpose
//!
//! This module defines [`DataPoint`], the labelled numeric observation the
//! caller assembles into an ordered sequence, and [`PointId`], the opaque
//! identity that stays stable while the caller edits a point in place.
//!
//! ## Design notes
//!
//! * Identity is separate from content: editing `name` or `value` never
//!   changes `id`, so presentation layers can key rows by identity.
//! * Ids come from a process-wide relaxed atomic counter and are never
//!   reused within a process.
//! * The engine only ever reads data points; every operation borrows them
//!   immutably.
//! * Generic over `Float` value types to support f32 and f64.
//!
//! ## Invariants
//!
//! * `id` is assigned once at construction.
//! * Two points constructed separately never share an id, even across
//!   threads.
//!
//! ## Visibility
//!
//! Part of the public API; data points are the primary input to regression
//! and data-driven valuation.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::sync::atomic::{AtomicU64, Ordering};

// ============================================================================
// Point Identity
// ============================================================================

static NEXT_POINT_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque, stable identity of a data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(u64);

// ============================================================================
// Data Point
// ============================================================================

/// A labelled numeric observation.
///
/// The position of a point inside the sequence handed to the engine acts as
/// its independent variable; the point itself carries no x-coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint<T> {
    id: PointId,

    /// Caller-facing text label; not interpreted by the engine.
    pub name: String,

    /// Numeric observation.
    pub value: T,
}

impl<T> DataPoint<T> {
    /// Create a data point with a fresh, never-reused identity.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            id: PointId(NEXT_POINT_ID.fetch_add(1, Ordering::Relaxed)),
            name: name.into(),
            value,
        }
    }

    /// Stable identity assigned at construction.
    pub fn id(&self) -> PointId {
        self.id
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_stable() {
        let a = DataPoint::new("a", 1.0);
        let b = DataPoint::new("b", 2.0);
        assert_ne!(a.id(), b.id());

        let mut edited = a.clone();
        edited.name = String::from("renamed");
        edited.value = 42.0;
        assert_eq!(edited.id(), a.id());
    }

    #[test]
    fn clone_preserves_identity() {
        let a = DataPoint::new("a", 1.5f32);
        assert_eq!(a.clone().id(), a.id());
    }
}
