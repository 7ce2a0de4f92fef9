//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the primitive types used throughout the crate. It has
//! zero internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error types (ValuationError)
//! - **point**: Caller-supplied data point model
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine (regression, estimator, royalty, validator, output)
//!   ↓
//! Layer 2: Math (ols)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `ValuationError` enum
/// - Specific error variants for every failure mode
pub mod errors;

/// Data point model.
///
/// Provides:
/// - The `DataPoint` observation type
/// - Opaque, stable point identities
pub mod point;
