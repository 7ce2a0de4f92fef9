//! Valuation engine for intangible assets.
//!
//! `ipbones` estimates a monetary value for an intangible asset from a cost
//! plus an adjustment, and derives a royalty figure from a value. The
//! adjustment comes from one of two mutually exclusive sources: a fixed
//! integral coefficient, or an ordered sequence of historical data points.
//! With enough data points the engine additionally fits an
//! ordinary-least-squares trend line over their positions, intended for
//! chart rendering by the caller.
//!
//! Every operation is a synchronous pure function over borrowed input:
//! nothing is persisted, cached, or mutated, so concurrent use needs no
//! locking.
//!
//! # Quick start
//!
//! ```
//! use ipbones::prelude::*;
//!
//! // Fixed adjustment: value = cost + coefficient.
//! let fixed = Valuation::new(1000.0).coefficient(500.0).estimate()?;
//! assert_eq!(fixed.value, 1500.0);
//!
//! // Data-driven: the adjustment is derived from the points, and a trend
//! // line over their positions comes along for presentation.
//! let data = Valuation::<f64>::new(1000.0)
//!     .point("Q1", 120.0)
//!     .point("Q2", 180.0)
//!     .point("Q3", 240.0)
//!     .estimate()?;
//! let trend = data.trend.unwrap();
//! assert!((trend.slope - 60.0).abs() < 1e-9);
//!
//! // Royalty: 25% of an integral object value, truncated toward zero.
//! assert_eq!(compute_royalty(10001.0)?, 2500);
//! # Ok::<(), ipbones::ValuationError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API        (boundary functions, fluent builder)
//!   ↓
//! Layer 3: Engine     (regression, estimator, royalty, validator, output)
//!   ↓
//! Layer 2: Math       (closed-form OLS)
//!   ↓
//! Layer 1: Primitives (errors, data-point model)
//! ```
//!
//! # Out of scope
//!
//! Presentation (forms, charts, navigation), persistence, multi-variable
//! regression, statistical inference, and currency formatting all live with
//! the caller.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Layer 1: Primitives (errors, data-point model).
pub mod primitives;

/// Layer 2: Math (closed-form OLS).
pub mod math;

/// Layer 3: Engine (regression, estimator, royalty, validator, output).
pub mod engine;

/// Layer 4: API (boundary functions, fluent builder).
pub mod api;

pub use api::{
    compute_royalty, estimate_value, fit_regression, AdjustmentMode, DataPoint, LineFit, PointId,
    Result, Valuation, ValuationError, ValuationRequest, ValuationResult,
};

/// Convenience re-exports of the stable API surface.
pub mod prelude {
    pub use crate::api::{
        compute_royalty, estimate_value, fit_regression, AdjustmentMode, DataPoint, LineFit,
        PointId, RegressionEngine, Result, RoyaltyCalculator, Valuation, ValuationError,
        ValuationRequest, ValuationResult, ValueEstimator,
    };
}
