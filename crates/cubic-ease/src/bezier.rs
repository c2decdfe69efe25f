//! Single-axis cubic Bezier polynomial.

/// One axis of a cubic Bezier curve anchored at 0 and 1.
///
/// With endpoints fixed at `P0 = 0` and `P3 = 1`, a single coordinate of the
/// curve reduces to the polynomial `((a*t + b)*t + c)*t` where
///
/// - `a = 1 - 3*a2 + 3*a1`
/// - `b = 3*a2 - 6*a1`
/// - `c = 3*a1`
///
/// The same form serves the `x` axis (built from `x1, x2`) and the `y` axis
/// (built from `y1, y2`).
///
/// # Example
///
/// ```
/// use cubic_ease::BezierAxis;
///
/// let x = BezierAxis::new(0.42, 0.58);
/// assert!((x.position(0.5) - 0.5).abs() < 1e-12);
/// assert!(x.position(1.0) > 0.999_999);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierAxis {
    a: f64,
    b: f64,
    c: f64,
}

impl BezierAxis {
    /// Build the polynomial for an axis with interior control coordinates `a1`, `a2`.
    pub fn new(a1: f64, a2: f64) -> Self {
        Self {
            a: 1.0 - 3.0 * a2 + 3.0 * a1,
            b: 3.0 * a2 - 6.0 * a1,
            c: 3.0 * a1,
        }
    }

    /// Coordinate of the curve at parameter `t`.
    #[inline]
    pub fn position(&self, t: f64) -> f64 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    /// Derivative of [`position`](Self::position) with respect to `t`.
    #[inline]
    pub fn slope(&self, t: f64) -> f64 {
        3.0 * self.a * t * t + 2.0 * self.b * t + self.c
    }

    /// Polynomial coefficients `(a, b, c)`.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}
