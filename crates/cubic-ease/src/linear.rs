//! Linear range remapping.

use serde::{Deserialize, Serialize};

use crate::error::EasingError;

/// Map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// The mapping is not clamped: values outside the input range extrapolate
/// linearly. Reversed ranges (`in_min > in_max` or `out_min > out_max`) are
/// allowed and flip the direction of the mapping.
///
/// # Errors
///
/// Returns [`EasingError::DivideByZero`] when `in_min == in_max`, instead of
/// producing `NaN` or an infinity.
///
/// # Example
///
/// ```
/// use cubic_ease::linear;
///
/// let mapped = linear::map(5.0, 0.0, 10.0, 0.0, 100.0)?;
/// assert!((mapped - 50.0).abs() < 1e-12);
/// # Ok::<(), cubic_ease::EasingError>(())
/// ```
pub fn map(
    value: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
) -> Result<f64, EasingError> {
    let span = in_max - in_min;
    if span == 0.0 {
        return Err(EasingError::DivideByZero { bound: in_min });
    }
    Ok(out_min + (value - in_min) * (out_max - out_min) / span)
}

/// A validated, reusable linear mapping between two ranges.
///
/// Holds the same arithmetic as [`map`] but checks the input range once,
/// so [`apply`](LinearMap::apply) is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLinearMap", into = "RawLinearMap")]
pub struct LinearMap {
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
}

impl LinearMap {
    /// Create a mapping from `[in_min, in_max]` onto `[out_min, out_max]`.
    ///
    /// # Errors
    ///
    /// Returns [`EasingError::DivideByZero`] when `in_min == in_max`.
    pub fn new(in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> Result<Self, EasingError> {
        if in_max - in_min == 0.0 {
            return Err(EasingError::DivideByZero { bound: in_min });
        }
        Ok(Self {
            in_min,
            in_max,
            out_min,
            out_max,
        })
    }

    /// Mapping from `[start, end]` onto the unit interval.
    ///
    /// # Errors
    ///
    /// Returns [`EasingError::DivideByZero`] when `start == end`.
    pub fn to_unit(start: f64, end: f64) -> Result<Self, EasingError> {
        Self::new(start, end, 0.0, 1.0)
    }

    /// Mapping from the unit interval onto `[start, end]`. Never fails.
    pub fn from_unit(start: f64, end: f64) -> Self {
        Self {
            in_min: 0.0,
            in_max: 1.0,
            out_min: start,
            out_max: end,
        }
    }

    /// Remap `value`.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        self.out_min
            + (value - self.in_min) * (self.out_max - self.out_min) / (self.in_max - self.in_min)
    }

    /// Input range as `(min, max)`.
    pub fn input(&self) -> (f64, f64) {
        (self.in_min, self.in_max)
    }

    /// Output range as `(min, max)`.
    pub fn output(&self) -> (f64, f64) {
        (self.out_min, self.out_max)
    }
}

/// Unvalidated serde shape of [`LinearMap`].
#[derive(Serialize, Deserialize)]
struct RawLinearMap {
    input: [f64; 2],
    output: [f64; 2],
}

impl TryFrom<RawLinearMap> for LinearMap {
    type Error = EasingError;

    fn try_from(raw: RawLinearMap) -> Result<Self, Self::Error> {
        let [in_min, in_max] = raw.input;
        let [out_min, out_max] = raw.output;
        Self::new(in_min, in_max, out_min, out_max)
    }
}

impl From<LinearMap> for RawLinearMap {
    fn from(map: LinearMap) -> Self {
        Self {
            input: [map.in_min, map.in_max],
            output: [map.out_min, map.out_max],
        }
    }
}
