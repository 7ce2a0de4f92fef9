//! Layer 2: Math
//!
//! Pure mathematical functions.
//!
//! This layer provides the mathematical building blocks used by the engine:
//! an arithmetic mean and a closed-form least-squares line fit. These are
//! reusable routines with no domain-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine (regression, estimator, royalty, validator, output)
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives (errors, point)
//! ```

/// Ordinary least squares fitting.
///
/// Provides:
/// - Closed-form line fit over paired slices
/// - Arithmetic mean
pub mod ols;
