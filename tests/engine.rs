//! End-to-end behavior of the valuation engine through its public API.

use approx::assert_relative_eq;
use proptest::prelude::*;

use ipbones::prelude::*;

fn points(values: &[f64]) -> Vec<DataPoint<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| DataPoint::new(format!("p{}", i), v))
        .collect()
}

// ============================================================================
// Regression
// ============================================================================

#[test]
fn exact_line_is_recovered() {
    // y = 3 + 7x over positions 0..5.
    let pts = points(&[3.0, 10.0, 17.0, 24.0, 31.0, 38.0]);
    let fit = fit_regression(&pts).unwrap();
    assert_relative_eq!(fit.intercept, 3.0, epsilon = 1e-9);
    assert_relative_eq!(fit.slope, 7.0, epsilon = 1e-9);
}

#[test]
fn fewer_than_two_points_never_fit() {
    assert_eq!(
        fit_regression::<f64>(&[]),
        Err(ValuationError::InsufficientData { got: 0, min: 2 })
    );
    assert_eq!(
        fit_regression(&points(&[42.0])),
        Err(ValuationError::InsufficientData { got: 1, min: 2 })
    );
}

#[test]
fn position_is_the_independent_variable() {
    // The same multiset of values in a different order yields a different
    // fit: position encodes x.
    let ascending = points(&[10.0, 20.0, 40.0]);
    let shuffled = points(&[40.0, 10.0, 20.0]);

    let a = fit_regression(&ascending).unwrap();
    let b = fit_regression(&shuffled).unwrap();
    assert_ne!(a, b);
    assert!(a.slope > 0.0);
    assert!(b.slope < 0.0);
}

#[test]
fn trend_line_endpoints_for_rendering() {
    let pts = points(&[100.0, 150.0, 200.0]);
    let fit = fit_regression(&pts).unwrap();
    assert_relative_eq!(fit.y_at(0.0), 100.0, epsilon = 1e-9);
    assert_relative_eq!(fit.y_at(2.0), 200.0, epsilon = 1e-9);
}

// ============================================================================
// Value Estimation
// ============================================================================

#[test]
fn fixed_coefficient_mode() {
    let result = estimate_value(1000.0, Some(500.0), None).unwrap();
    assert_eq!(result.value, 1500.0);
    assert!(result.trend.is_none());
}

#[test]
fn single_data_point_still_produces_a_value() {
    let pts = points(&[200.0]);
    let result = estimate_value(1000.0, None, Some(&pts)).unwrap();
    assert!(result.value.is_finite());
    assert_eq!(result.value, 1200.0);
    assert!(!result.has_trend());
}

#[test]
fn data_driven_mode_attaches_a_trend() {
    let pts = points(&[100.0, 200.0, 300.0]);
    let result = estimate_value(1000.0, None, Some(&pts)).unwrap();
    assert_eq!(result.value, 1200.0);
    let fit = result.trend.unwrap();
    assert_relative_eq!(fit.slope, 100.0, epsilon = 1e-9);
    assert_relative_eq!(fit.intercept, 100.0, epsilon = 1e-9);
}

#[test]
fn neither_source_is_a_caller_error() {
    assert_eq!(
        estimate_value::<f64>(1000.0, None, None),
        Err(ValuationError::MissingAdjustmentSource)
    );
    let empty: Vec<DataPoint<f64>> = Vec::new();
    assert_eq!(
        estimate_value(1000.0, None, Some(&empty)),
        Err(ValuationError::MissingAdjustmentSource)
    );
}

#[test]
fn fractional_cost_is_invalid() {
    assert_eq!(
        estimate_value(1000.25, Some(500.0), None),
        Err(ValuationError::InvalidCost(1000.25))
    );
}

// ============================================================================
// Royalty
// ============================================================================

#[test]
fn royalty_truncates_not_rounds() {
    assert_eq!(compute_royalty(10000.0), Ok(2500));
    assert_eq!(compute_royalty(10001.0), Ok(2500));
    assert_eq!(compute_royalty(10002.0), Ok(2500));
    assert_eq!(compute_royalty(10004.0), Ok(2501));
}

#[test]
fn royalty_rejects_non_integral_values() {
    assert!(matches!(
        compute_royalty(10000.5),
        Err(ValuationError::InvalidValue(_))
    ));
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn identical_inputs_yield_bit_identical_results() {
    let pts = points(&[0.3, 0.7, 1.9, 4.2]);

    let fit_a = fit_regression(&pts).unwrap();
    let fit_b = fit_regression(&pts).unwrap();
    assert_eq!(fit_a.intercept.to_bits(), fit_b.intercept.to_bits());
    assert_eq!(fit_a.slope.to_bits(), fit_b.slope.to_bits());

    let est_a = estimate_value(1000.0, None, Some(&pts)).unwrap();
    let est_b = estimate_value(1000.0, None, Some(&pts)).unwrap();
    assert_eq!(est_a.value.to_bits(), est_b.value.to_bits());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn fit_recovers_any_exact_line(
        a in -1e6f64..1e6,
        b in -1e3f64..1e3,
        n in 2usize..40,
    ) {
        let values: Vec<f64> = (0..n).map(|i| a + b * i as f64).collect();
        let fit = fit_regression(&points(&values)).unwrap();
        prop_assert!((fit.intercept - a).abs() < 1e-6 * (1.0 + a.abs()));
        prop_assert!((fit.slope - b).abs() < 1e-6 * (1.0 + b.abs()));
    }

    #[test]
    fn royalty_matches_integer_division(v in -(1i64 << 52)..(1i64 << 52)) {
        // 25/100 reduces to 1/4, and i64 division truncates toward zero.
        prop_assert_eq!(compute_royalty(v as f64), Ok(v / 4));
    }

    #[test]
    fn estimation_is_idempotent(
        cost in -1_000_000i64..1_000_000,
        values in proptest::collection::vec(-1e6f64..1e6, 1..20),
    ) {
        let pts = points(&values);
        let first = estimate_value(cost as f64, None, Some(&pts)).unwrap();
        let second = estimate_value(cost as f64, None, Some(&pts)).unwrap();
        prop_assert_eq!(first.value.to_bits(), second.value.to_bits());
        prop_assert_eq!(first.trend, second.trend);
    }

    #[test]
    fn reversal_negates_a_strict_trend(
        start in -1e4f64..1e4,
        step in 1f64..1e3,
        n in 2usize..20,
    ) {
        let values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
        let forward = fit_regression(&points(&values)).unwrap();
        let mut reversed = values;
        reversed.reverse();
        let backward = fit_regression(&points(&reversed)).unwrap();
        prop_assert!((forward.slope + backward.slope).abs() < 1e-6 * (1.0 + step));
    }
}
