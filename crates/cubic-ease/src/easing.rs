//! Cubic Bezier easing functions.

use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, trace, warn};

use crate::bezier::BezierAxis;
use crate::error::EasingError;
use crate::params::{BezierParams, ControlPoint};
use crate::sample_table::SampleTable;
use crate::solver::BezierSolver;

/// An easing function following a cubic Bezier timing curve.
///
/// Maps normalized progress `x` in `[0,1]` to eased output `y(t)` where `t`
/// solves `x(t) = x`. This is the model behind CSS `cubic-bezier()`.
///
/// The sample table is built on first use (or by [`precompute`]) and reused
/// afterwards. The one-time build is guarded by a [`OnceLock`], so a single
/// instance can be shared between threads.
///
/// # Example
///
/// ```
/// use cubic_ease::EasingFunction;
///
/// let ease_in_out = EasingFunction::new(0.42, 0.0, 0.58, 1.0)?;
///
/// assert_eq!(ease_in_out.evaluate(0.0), 0.0);
/// assert!((ease_in_out.evaluate(0.5) - 0.5).abs() < 1e-4);
/// assert_eq!(ease_in_out.evaluate(1.0), 1.0);
/// assert_eq!(ease_in_out.css_string(), "cubic-bezier(0.42,0,0.58,1)");
/// # Ok::<(), cubic_ease::EasingError>(())
/// ```
///
/// [`precompute`]: EasingFunction::precompute
#[derive(Clone, Debug)]
pub struct EasingFunction {
    params: BezierParams,
    y_axis: BezierAxis,
    /// `Some(None)` once precomputed for the identity curve, which needs no table.
    solver: OnceLock<Option<BezierSolver>>,
}

impl EasingFunction {
    /// Create an easing function from `(x1, y1, x2, y2)`.
    ///
    /// # Errors
    ///
    /// - [`EasingError::ArgumentType`] if any value is NaN or infinite.
    /// - [`EasingError::ArgumentRange`] if `x1` or `x2` is outside `[0,1]`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, EasingError> {
        BezierParams::new(x1, y1, x2, y2).map(Self::from_params)
    }

    /// Create an easing function and build its sample table immediately.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn eager(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, EasingError> {
        let easing = Self::new(x1, y1, x2, y2)?;
        easing.precompute();
        Ok(easing)
    }

    /// Create an easing function from already validated parameters.
    pub fn from_params(params: BezierParams) -> Self {
        Self {
            params,
            y_axis: BezierAxis::new(params.y1(), params.y2()),
            solver: OnceLock::new(),
        }
    }

    /// Build the sample table if it has not been built yet.
    ///
    /// Idempotent. The identity curve never builds a table.
    pub fn precompute(&self) {
        self.solver();
    }

    /// `true` once the sample table has been built (or skipped for the identity curve).
    pub fn is_precomputed(&self) -> bool {
        self.solver.get().is_some()
    }

    fn solver(&self) -> Option<&BezierSolver> {
        self.solver
            .get_or_init(|| {
                let params = &self.params;
                if params.is_identity() {
                    debug!(curve = %params, "identity curve, skipping sample table");
                    return None;
                }

                let solver = BezierSolver::new(params.x1(), params.x2());
                trace!(
                    curve = %params,
                    samples = ?solver.table().samples(),
                    "built sample table"
                );
                if !solver.table().is_monotonic() {
                    warn!(curve = %params, "x projection is not monotonic, results are unreliable");
                }
                Some(solver)
            })
            .as_ref()
    }

    /// Eased output for progress `x`.
    ///
    /// `0` and `1` map to exactly `0` and `1`. The identity curve returns `x`
    /// unchanged. Inputs are not clamped.
    #[expect(clippy::float_cmp, reason = "endpoints are snapped on exact match")]
    pub fn evaluate(&self, x: f64) -> f64 {
        let Some(solver) = self.solver() else {
            return x;
        };
        if x == 0.0 {
            return 0.0;
        }
        if x == 1.0 {
            return 1.0;
        }
        self.y_axis.position(solver.t_for_x(x))
    }

    /// The validated curve parameters.
    pub fn params(&self) -> &BezierParams {
        &self.params
    }

    /// Parameters in source order `[x1, y1, x2, y2]`.
    pub fn args(&self) -> [f64; 4] {
        self.params.to_array()
    }

    /// The interior control points `[P1, P2]`.
    pub fn control_points(&self) -> [ControlPoint; 2] {
        self.params.control_points()
    }

    /// `true` when the curve is the line `y = x`.
    pub fn is_identity(&self) -> bool {
        self.params.is_identity()
    }

    /// The sample table, if it has been built.
    ///
    /// Always `None` for the identity curve.
    pub fn sample_table(&self) -> Option<&SampleTable> {
        self.solver.get().and_then(Option::as_ref).map(BezierSolver::table)
    }

    /// Canonical form `BezierEasing(x1,y1,x2,y2)`.
    pub fn debug_string(&self) -> String {
        self.params.debug_string()
    }

    /// CSS form `cubic-bezier(x1,y1,x2,y2)`.
    pub fn css_string(&self) -> String {
        self.params.css_string()
    }
}

impl PartialEq for EasingFunction {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl Default for EasingFunction {
    fn default() -> Self {
        Self::from_params(BezierParams::default())
    }
}

impl From<BezierParams> for EasingFunction {
    fn from(params: BezierParams) -> Self {
        Self::from_params(params)
    }
}

impl TryFrom<&[f64]> for EasingFunction {
    type Error = EasingError;

    /// Build from a list of parameters, rejecting anything but exactly four.
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        BezierParams::from_slice(values).map(Self::from_params)
    }
}

impl TryFrom<[f64; 4]> for EasingFunction {
    type Error = EasingError;

    fn try_from(values: [f64; 4]) -> Result<Self, Self::Error> {
        BezierParams::try_from(values).map(Self::from_params)
    }
}

impl fmt::Display for EasingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}
