//! Closed-form ordinary least squares over paired slices.
//!
//! ## Purpose
//!
//! This module provides the pure mathematical core of the crate: a
//! single-pass arithmetic mean and a closed-form OLS line fit minimizing
//! squared vertical residuals. It knows nothing about data points, costs,
//! or royalties.
//!
//! ## Design notes
//!
//! * Uses the centered formulation (deviations from the means) rather than
//!   raw power sums; better conditioned for inputs with large offsets.
//! * All arithmetic stays in the caller's `Float` type; no rounding is
//!   applied here.
//! * Degenerate inputs (zero variance in x, empty slices) yield `None`;
//!   mapping that onto an error is the engine layer's job.
//!
//! ## Invariants
//!
//! * `least_squares` returns `Some` only when both slices are non-empty,
//!   equal-length, and x has non-zero variance.
//! * The fit is deterministic: identical inputs produce bit-identical
//!   outputs.
//!
//! ## Non-goals
//!
//! * No multi-variable regression.
//! * No statistical inference (standard errors, R^2, intervals).
//!
//! ## Visibility
//!
//! Internal implementation detail consumed by the engine layer.

use num_traits::Float;

// ============================================================================
// Mean
// ============================================================================

/// Arithmetic mean of a slice, or `None` when empty.
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let n = T::from(values.len()).unwrap_or_else(T::nan);
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / n)
}

// ============================================================================
// Least Squares
// ============================================================================

/// Fit `y = intercept + slope * x` by ordinary least squares.
///
/// Returns `(intercept, slope)`, or `None` when fewer than two pairs are
/// supplied, the slices differ in length, or x has zero variance.
pub fn least_squares<T: Float>(xs: &[T], ys: &[T]) -> Option<(T, T)> {
    let n = xs.len();
    if n < 2 || n != ys.len() {
        return None;
    }

    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;

    let mut sxy = T::zero();
    let mut sxx = T::zero();
    for i in 0..n {
        let dx = xs[i] - mean_x;
        let dy = ys[i] - mean_y;
        sxy = sxy + dx * dy;
        sxx = sxx + dx * dx;
    }

    if sxx == T::zero() {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    Some((intercept, slope))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_perfect_line() {
        // y = 2x + 1
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 5.0, 7.0];
        let (intercept, slope) = least_squares(&xs, &ys).unwrap();
        assert!((slope - 2.0).abs() < 1e-10);
        assert!((intercept - 1.0).abs() < 1e-10);
    }

    #[test]
    fn horizontal_line_has_zero_slope() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [5.0, 5.0, 5.0, 5.0];
        let (intercept, slope) = least_squares(&xs, &ys).unwrap();
        assert!(slope.abs() < 1e-10);
        assert!((intercept - 5.0).abs() < 1e-10);
    }

    #[test]
    fn two_points_interpolate_exactly() {
        let (intercept, slope) = least_squares(&[0.0, 1.0], &[10.0, 30.0]).unwrap();
        assert!((intercept - 10.0).abs() < 1e-10);
        assert!((slope - 20.0).abs() < 1e-10);
    }

    #[test]
    fn zero_variance_x_is_degenerate() {
        assert!(least_squares(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn too_few_or_mismatched_pairs() {
        assert!(least_squares::<f64>(&[], &[]).is_none());
        assert!(least_squares(&[1.0], &[2.0]).is_none());
        assert!(least_squares(&[0.0, 1.0], &[2.0]).is_none());
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert!(mean::<f64>(&[]).is_none());
        assert_eq!(mean(&[4.0]), Some(4.0));
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    }
}
