//! Numerical inversion of `x(t)`.
//!
//! An easing curve is only defined parametrically, so evaluating `y` for a
//! given `x` first needs the `t` with `x(t) = x`. The solver narrows the
//! search with a [`SampleTable`], then refines the interpolated guess with
//! Newton-Raphson when the slope is well conditioned and falls back to
//! bisection when it is not. Every path does a bounded amount of work.

use crate::bezier::BezierAxis;
use crate::sample_table::SampleTable;

/// Fixed number of Newton-Raphson refinement steps.
pub const NEWTON_ITERATIONS: usize = 4;

/// Smallest initial slope for which Newton-Raphson is trusted.
pub const NEWTON_MIN_SLOPE: f64 = 0.001;

/// Bisection stops once `|x(t) - x|` is at most this.
pub const SUBDIVISION_PRECISION: f64 = 0.000_000_1;

/// Upper bound on bisection steps.
pub const SUBDIVISION_MAX_ITERATIONS: usize = 10;

/// Which strategy produced a solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveMethod {
    /// Newton-Raphson refinement of the table guess.
    NewtonRaphson,
    /// The table guess itself (slope exactly zero at the guess).
    InitialGuess,
    /// Bisection inside the bracketing table interval.
    Bisection,
}

/// Inverts the `x` projection of a curve.
///
/// Owns the `x` axis polynomial and its [`SampleTable`].
///
/// # Example
///
/// ```
/// use cubic_ease::{BezierSolver, SolveMethod};
///
/// let solver = BezierSolver::new(0.42, 0.58);
/// let (t, method) = solver.solve(0.5);
/// assert!((t - 0.5).abs() < 1e-9);
/// assert_eq!(method, SolveMethod::NewtonRaphson);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BezierSolver {
    x_axis: BezierAxis,
    table: SampleTable,
}

impl BezierSolver {
    /// Build a solver for the `x` control values `x1`, `x2`.
    pub fn new(x1: f64, x2: f64) -> Self {
        let x_axis = BezierAxis::new(x1, x2);
        let table = SampleTable::build(&x_axis);
        Self { x_axis, table }
    }

    /// The sample table backing this solver.
    pub fn table(&self) -> &SampleTable {
        &self.table
    }

    /// The `x` axis polynomial.
    pub fn x_axis(&self) -> &BezierAxis {
        &self.x_axis
    }

    /// Parameter `t` with `x(t) ≈ x`.
    #[inline]
    pub fn t_for_x(&self, x: f64) -> f64 {
        self.solve(x).0
    }

    /// Parameter `t` with `x(t) ≈ x`, along with the strategy that produced it.
    pub fn solve(&self, x: f64) -> (f64, SolveMethod) {
        let (interval, guess) = self.table.initial_guess(x);

        let initial_slope = self.x_axis.slope(guess);
        if initial_slope >= NEWTON_MIN_SLOPE {
            (self.newton_raphson(x, guess), SolveMethod::NewtonRaphson)
        } else if initial_slope == 0.0 {
            (guess, SolveMethod::InitialGuess)
        } else {
            let start = interval as f64 * SampleTable::STEP;
            (
                self.bisect(x, start, start + SampleTable::STEP),
                SolveMethod::Bisection,
            )
        }
    }

    fn newton_raphson(&self, x: f64, mut t: f64) -> f64 {
        for _ in 0..NEWTON_ITERATIONS {
            let slope = self.x_axis.slope(t);
            if slope == 0.0 {
                return t;
            }
            let error = self.x_axis.position(t) - x;
            t -= error / slope;
        }
        t
    }

    fn bisect(&self, x: f64, mut low: f64, mut high: f64) -> f64 {
        let mut iterations = 0;
        loop {
            let t = low + (high - low) / 2.0;
            let error = self.x_axis.position(t) - x;
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            iterations += 1;
            if error.abs() <= SUBDIVISION_PRECISION || iterations >= SUBDIVISION_MAX_ITERATIONS {
                return t;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newton_on_symmetric_curve() {
        let solver = BezierSolver::new(0.42, 0.58);
        for i in 1..10 {
            let x = f64::from(i) / 10.0;
            let (t, method) = solver.solve(x);
            assert_eq!(method, SolveMethod::NewtonRaphson, "x = {x}");
            assert!((solver.x_axis().position(t) - x).abs() < 1e-9, "x = {x}");
        }
    }

    #[test]
    fn test_newton_accuracy_on_ease() {
        let solver = BezierSolver::new(0.25, 0.25);
        for i in 1..100 {
            let x = f64::from(i) / 100.0;
            let t = solver.t_for_x(x);
            assert!((solver.x_axis().position(t) - x).abs() < 1e-7, "x = {x}");
        }
    }

    #[test]
    fn test_bisection_for_flat_start() {
        // x(t) = t^3 is nearly flat near zero.
        let solver = BezierSolver::new(0.0, 0.0);
        let x = 1e-6;
        let (t, method) = solver.solve(x);
        assert_eq!(method, SolveMethod::Bisection);
        assert!((0.0..=0.1).contains(&t));
        assert!((solver.x_axis().position(t) - x).abs() < 1e-6);
    }

    #[test]
    fn test_initial_guess_at_stationary_point() {
        // x(t) = 4t^3 - 6t^2 + 3t has zero slope at t = 0.5.
        let solver = BezierSolver::new(1.0, 0.0);
        let (t, method) = solver.solve(0.5);
        assert_eq!(method, SolveMethod::InitialGuess);
        assert!((t - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_newton_stops_on_zero_slope() {
        // Slope of 4t^3 - 6t^2 + 3t vanishes at t = 0.5; the step must not divide by it.
        let solver = BezierSolver::new(1.0, 0.0);
        assert_eq!(solver.x_axis().slope(0.5), 0.0);
        let t = solver.newton_raphson(0.6, 0.5);
        assert_eq!(t, 0.5);
    }

    #[test]
    fn test_initial_guess_at_zero_slope_origin() {
        let solver = BezierSolver::new(0.0, 0.5);
        let (t, method) = solver.solve(0.0);
        assert_eq!(method, SolveMethod::InitialGuess);
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_bisection_is_bounded() {
        let solver = BezierSolver::new(0.0, 0.0);
        for x in [1e-12, 1e-9, 1e-7, 1e-5] {
            let (t, _) = solver.solve(x);
            assert!(t.is_finite());
            assert!((0.0..=0.1).contains(&t), "x = {x}, t = {t}");
        }
    }

    #[test]
    fn test_table_is_built_from_x_axis() {
        let solver = BezierSolver::new(0.3, 0.7);
        let axis = BezierAxis::new(0.3, 0.7);
        assert_eq!(solver.table(), &SampleTable::build(&axis));
        assert_eq!(solver.x_axis(), &axis);
    }
}
