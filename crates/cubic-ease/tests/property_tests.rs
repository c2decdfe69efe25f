//! Property-based tests for easing evaluation.
//!
//! These tests verify properties that should hold for every valid curve.

use approx::assert_abs_diff_eq;
use cubic_ease::{BezierParams, BezierSolver, EasingFunction, cubic_ease, linear};
use proptest::prelude::*;
use quickcheck_macros::quickcheck;

fn sanitize_f64(v: f64) -> f64 {
    if v.is_nan() {
        0.5
    } else if v.is_infinite() {
        if v > 0.0 { 1.0 } else { 0.0 }
    } else {
        v
    }
}

/// Map an arbitrary value into `[0,1]` without piling up on the bounds.
fn unit(v: f64) -> f64 {
    sanitize_f64(v).abs().fract()
}

#[quickcheck]
fn prop_endpoints_are_exact(x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    let easing = match EasingFunction::new(unit(x1), sanitize_f64(y1), unit(x2), sanitize_f64(y2))
    {
        Ok(e) => e,
        Err(_) => return false,
    };
    easing.evaluate(0.0) == 0.0 && easing.evaluate(1.0) == 1.0
}

#[quickcheck]
fn prop_identity_curve_returns_input(a: f64, b: f64, input: f64) -> bool {
    let (a, b) = (unit(a), unit(b));
    let easing = match EasingFunction::new(a, a, b, b) {
        Ok(e) => e,
        Err(_) => return false,
    };
    let input = unit(input);
    easing.evaluate(input) == input
}

#[quickcheck]
fn prop_linear_cubic_ease_is_identity(input: f64) -> bool {
    let input = unit(input);
    matches!(cubic_ease(input, 0.0, 1.0, 0.0, 1.0, [0.0, 0.0, 1.0, 1.0]), Ok(v) if v == input)
}

#[quickcheck]
fn prop_out_of_range_x_is_rejected(x1: f64) -> bool {
    let x1 = sanitize_f64(x1);
    let result = EasingFunction::new(x1, 0.0, 0.5, 1.0);
    (0.0..=1.0).contains(&x1) == result.is_ok()
}

#[quickcheck]
fn prop_empty_range_is_rejected(bound: f64, value: f64) -> bool {
    let bound = sanitize_f64(bound);
    linear::map(sanitize_f64(value), bound, bound, 0.0, 1.0).is_err()
}

proptest! {
    #[test]
    fn test_solver_inverts_x(
        x1 in 0.05f64..=0.5,
        x2 in 0.5f64..=0.95,
        x in 0.01f64..0.99,
    ) {
        let solver = BezierSolver::new(x1, x2);
        let t = solver.t_for_x(x);
        prop_assert!((solver.x_axis().position(t) - x).abs() < 1e-4);
    }

    #[test]
    fn test_monotonic_curves_evaluate_monotonically(
        x1 in 0.0f64..=0.9,
        y1 in 0.0f64..=1.0,
        x2 in 0.1f64..=1.0,
        y2 in 0.0f64..=1.0,
    ) {
        let easing = EasingFunction::new(x1, y1, x2, y2)?;
        // y control values in [0,1] keep y(t) non-decreasing, so only
        // solver error can make a step go backwards.
        let mut previous = easing.evaluate(0.0);
        for i in 1..=200 {
            let current = easing.evaluate(f64::from(i) / 200.0);
            prop_assert!(current >= previous - 1e-5, "step {}: {} < {}", i, current, previous);
            previous = current;
        }
    }

    #[test]
    fn test_output_bounded_by_control_hull(
        x1 in 0.0f64..=1.0,
        y1 in -2.0f64..=2.0,
        x2 in 0.0f64..=1.0,
        y2 in -2.0f64..=2.0,
        x in 0.0f64..=1.0,
    ) {
        let easing = EasingFunction::new(x1, y1, x2, y2)?;
        let low = y1.min(y2).min(0.0);
        let high = y1.max(y2).max(1.0);
        let y = easing.evaluate(x);
        prop_assert!(y.is_finite());
        prop_assert!(y >= low - 1e-6 && y <= high + 1e-6, "y = {} outside [{}, {}]", y, low, high);
    }

    #[test]
    fn test_cubic_ease_hits_output_bounds(
        start in -1000.0f64..1000.0,
        span in 1.0f64..1000.0,
        new_start in -1000.0f64..1000.0,
        new_end in -1000.0f64..1000.0,
    ) {
        let end = start + span;
        let bezier = BezierParams::EASE.to_array();
        let at_start = cubic_ease(start, start, end, new_start, new_end, bezier)?;
        let at_end = cubic_ease(end, start, end, new_start, new_end, bezier)?;
        prop_assert!((at_start - new_start).abs() < 1e-9);
        prop_assert!((at_end - new_end).abs() < 1e-6);
    }
}

#[test]
fn test_known_reference_values() {
    let ease_in_out = EasingFunction::from(BezierParams::EASE_IN_OUT);
    assert_abs_diff_eq!(ease_in_out.evaluate(0.5), 0.5, epsilon = 1e-4);

    let ease = EasingFunction::from(BezierParams::EASE);
    assert_abs_diff_eq!(ease.evaluate(0.5), 0.802_4, epsilon = 1e-3);

    let ease_in = EasingFunction::from(BezierParams::EASE_IN);
    assert_abs_diff_eq!(ease_in.evaluate(0.5), 0.315_4, epsilon = 1e-3);

    let ease_out = EasingFunction::from(BezierParams::EASE_OUT);
    assert_abs_diff_eq!(ease_out.evaluate(0.5), 0.684_6, epsilon = 1e-3);
}
