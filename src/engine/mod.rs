//! Layer 3: Engine
//!
//! Core valuation logic.
//!
//! This layer implements the three computational components of the crate:
//! trend fitting, value estimation, and royalty computation, together with
//! the shared input validation and output types they rely on. Every
//! operation is a single-shot pure function; no component holds state
//! across calls.
//!
//! # Module Organization
//!
//! - **regression**: OLS trend fitting over positional indices
//! - **estimator**: Value estimation from cost plus an adjustment source
//! - **royalty**: Fixed-rate royalty computation
//! - **validator**: Input and contract validation rules
//! - **output**: Structured results (line fits, valuation results)
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math (ols)
//!   ↓
//! Layer 1: Primitives (errors, point)
//! ```

/// Trend fitting over data point sequences.
///
/// Provides:
/// - The `RegressionEngine` component
/// - Position-as-independent-variable mapping
pub mod regression;

/// Value estimation.
///
/// Provides:
/// - Request types with mutually exclusive adjustment modes
/// - The `ValueEstimator` component
pub mod estimator;

/// Royalty computation.
///
/// Provides:
/// - The `RoyaltyCalculator` component
/// - Fixed-rate integer arithmetic with truncation
pub mod royalty;

/// Validation utilities.
///
/// Provides:
/// - Integer-contract checks for boundary inputs
/// - Data point finiteness and count validation
pub mod validator;

/// Output types for valuation operations.
///
/// Provides:
/// - The `LineFit` coefficients struct
/// - The `ValuationResult` container struct
pub mod output;
