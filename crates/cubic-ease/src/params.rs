//! Curve parameters, CSS presets and textual parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EasingError;

/// Number of parameters describing a cubic Bezier easing curve.
pub const PARAM_COUNT: usize = 4;

/// An interior control point of an easing curve.
///
/// `x` is constrained to `[0,1]` by [`BezierParams`]; `y` is unconstrained so
/// curves can overshoot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Horizontal (progress) coordinate.
    pub x: f64,
    /// Vertical (output) coordinate.
    pub y: f64,
}

/// Validated parameters `(x1, y1, x2, y2)` of a cubic Bezier easing curve.
///
/// The curve runs from `(0,0)` through control points `P1 = (x1, y1)` and
/// `P2 = (x2, y2)` to `(1,1)`. All four values are finite and both `x`
/// values are in `[0,1]`; a `BezierParams` cannot be built otherwise.
///
/// # Example
///
/// ```
/// use cubic_ease::BezierParams;
///
/// let params = BezierParams::new(0.25, 0.1, 0.25, 1.0)?;
/// assert_eq!(params, BezierParams::EASE);
///
/// let parsed: BezierParams = "cubic-bezier(0.42, 0, 0.58, 1)".parse()?;
/// assert_eq!(parsed, BezierParams::EASE_IN_OUT);
/// # Ok::<(), cubic_ease::EasingError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct BezierParams {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl BezierParams {
    /// CSS `linear`.
    pub const LINEAR: Self = Self::from_const(0.0, 0.0, 1.0, 1.0);
    /// CSS `ease`.
    pub const EASE: Self = Self::from_const(0.25, 0.1, 0.25, 1.0);
    /// CSS `ease-in`.
    pub const EASE_IN: Self = Self::from_const(0.42, 0.0, 1.0, 1.0);
    /// CSS `ease-out`.
    pub const EASE_OUT: Self = Self::from_const(0.0, 0.0, 0.58, 1.0);
    /// CSS `ease-in-out`.
    pub const EASE_IN_OUT: Self = Self::from_const(0.42, 0.0, 0.58, 1.0);

    /// Named presets, keyed by their CSS keyword.
    pub const KEYWORDS: [(&'static str, Self); 5] = [
        ("linear", Self::LINEAR),
        ("ease", Self::EASE),
        ("ease-in", Self::EASE_IN),
        ("ease-out", Self::EASE_OUT),
        ("ease-in-out", Self::EASE_IN_OUT),
    ];

    const fn from_const(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Validate and build curve parameters.
    ///
    /// # Errors
    ///
    /// - [`EasingError::ArgumentType`] if any value is NaN or infinite
    ///   (checked in `x1, y1, x2, y2` order).
    /// - [`EasingError::ArgumentRange`] if `x1` or `x2` is outside `[0,1]`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, EasingError> {
        for (index, value) in [x1, y1, x2, y2].into_iter().enumerate() {
            if !value.is_finite() {
                return Err(EasingError::ArgumentType { index, value });
            }
        }
        for (index, coordinate, value) in [(0, "x1", x1), (2, "x2", x2)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EasingError::ArgumentRange {
                    index,
                    coordinate,
                    value,
                });
            }
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Validate a dynamically sized list of parameters.
    ///
    /// # Errors
    ///
    /// [`EasingError::ArgumentCount`] unless exactly four values are given,
    /// then the same errors as [`new`](Self::new).
    pub fn from_slice(values: &[f64]) -> Result<Self, EasingError> {
        match *values {
            [x1, y1, x2, y2] => Self::new(x1, y1, x2, y2),
            _ => Err(EasingError::ArgumentCount {
                expected: PARAM_COUNT,
                actual: values.len(),
            }),
        }
    }

    /// Look up a CSS keyword preset.
    pub fn keyword(name: &str) -> Option<Self> {
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(name))
            .map(|&(_, params)| params)
    }

    /// Progress coordinate of the first control point.
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Output coordinate of the first control point.
    pub fn y1(&self) -> f64 {
        self.y1
    }

    /// Progress coordinate of the second control point.
    pub fn x2(&self) -> f64 {
        self.x2
    }

    /// Output coordinate of the second control point.
    pub fn y2(&self) -> f64 {
        self.y2
    }

    /// Parameters in source order `[x1, y1, x2, y2]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// The two interior control points `[P1, P2]`.
    pub fn control_points(&self) -> [ControlPoint; 2] {
        [
            ControlPoint {
                x: self.x1,
                y: self.y1,
            },
            ControlPoint {
                x: self.x2,
                y: self.y2,
            },
        ]
    }

    /// `true` when both control points lie on the diagonal, making the curve `y = x`.
    #[expect(clippy::float_cmp, reason = "identity requires exact equality")]
    pub fn is_identity(&self) -> bool {
        self.x1 == self.y1 && self.x2 == self.y2
    }

    /// Comma-joined parameter list, e.g. `0.42,0,0.58,1`.
    pub(crate) fn joined(&self) -> String {
        self.to_array()
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// `cubic-bezier(x1,y1,x2,y2)`.
    pub fn css_string(&self) -> String {
        format!("cubic-bezier({})", self.joined())
    }

    /// `BezierEasing(x1,y1,x2,y2)`.
    pub fn debug_string(&self) -> String {
        format!("BezierEasing({})", self.joined())
    }
}

impl Default for BezierParams {
    fn default() -> Self {
        Self::LINEAR
    }
}

impl TryFrom<[f64; 4]> for BezierParams {
    type Error = EasingError;

    fn try_from([x1, y1, x2, y2]: [f64; 4]) -> Result<Self, Self::Error> {
        Self::new(x1, y1, x2, y2)
    }
}

impl TryFrom<&[f64]> for BezierParams {
    type Error = EasingError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl From<BezierParams> for [f64; 4] {
    fn from(params: BezierParams) -> Self {
        params.to_array()
    }
}

impl fmt::Display for BezierParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cubic-bezier({})", self.joined())
    }
}

impl FromStr for BezierParams {
    type Err = EasingError;

    /// Parse a curve description.
    ///
    /// Accepts a CSS keyword (`ease-in-out`), a functional form
    /// (`cubic-bezier(0.42,0,0.58,1)` or `BezierEasing(0.42,0,0.58,1)`) or a
    /// bare list `0.42,0,0.58,1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EasingError::Parse("empty curve description".to_string()));
        }
        if let Some(params) = Self::keyword(s) {
            return Ok(params);
        }

        let body = match s.split_once('(') {
            Some((name, rest)) => {
                let name = name.trim();
                if !(name.eq_ignore_ascii_case("cubic-bezier")
                    || name.eq_ignore_ascii_case("BezierEasing"))
                {
                    return Err(EasingError::Parse(format!("unknown curve function '{name}'")));
                }
                rest.trim_end()
                    .strip_suffix(')')
                    .ok_or_else(|| EasingError::Parse(format!("missing ')' in '{s}'")))?
            }
            None => s,
        };

        let values = body
            .split(',')
            .map(|token| {
                let token = token.trim();
                token
                    .parse::<f64>()
                    .map_err(|e| EasingError::Parse(format!("'{token}': {e}")))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        Self::from_slice(&values)
    }
}
