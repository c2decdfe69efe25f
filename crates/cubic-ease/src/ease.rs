//! Eased interpolation between two ranges.

use serde::{Deserialize, Serialize};

use crate::easing::EasingFunction;
use crate::error::EasingError;
use crate::linear::{self, LinearMap};
use crate::params::BezierParams;

/// Ease `value` from `[start, end]` into `[new_start, new_end]` along a
/// cubic Bezier timing curve.
///
/// `value` is first mapped onto the unit interval, eased by
/// [`EasingFunction::evaluate`], and mapped onto the output range. A new
/// easing function is built on every call; reuse a [`CubicEase`] to keep the
/// sample table between calls.
///
/// # Errors
///
/// - Any construction error of [`EasingFunction::try_from`] for `bezier`.
/// - [`EasingError::DivideByZero`] when `start == end`.
///
/// # Example
///
/// ```
/// use cubic_ease::cubic_ease;
///
/// let halfway = cubic_ease(0.5, 0.0, 1.0, 0.0, 100.0, [0.0, 0.0, 1.0, 1.0])?;
/// assert_eq!(halfway, 50.0);
/// # Ok::<(), cubic_ease::EasingError>(())
/// ```
pub fn cubic_ease(
    value: f64,
    start: f64,
    end: f64,
    new_start: f64,
    new_end: f64,
    bezier: [f64; 4],
) -> Result<f64, EasingError> {
    let easing = EasingFunction::try_from(bezier)?;
    let progress = linear::map(value, start, end, 0.0, 1.0)?;
    let eased = easing.evaluate(progress);
    linear::map(eased, 0.0, 1.0, new_start, new_end)
}

/// Serializable description of an eased range mapping.
///
/// # Example
///
/// ```
/// use cubic_ease::{CubicEase, EaseConfig};
///
/// let config: EaseConfig = serde_json::from_str(
///     r#"{ "input": [0, 200], "output": [1, 0], "curve": "ease-out" }"#,
/// )?;
/// let ease = CubicEase::try_from(config)?;
/// assert_eq!(ease.apply(200.0), 0.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EaseConfig {
    /// Input range `[start, end]`.
    pub input: [f64; 2],
    /// Output range `[new_start, new_end]`.
    pub output: [f64; 2],
    /// Timing curve.
    #[serde(with = "curve_serde")]
    pub curve: BezierParams,
}

/// A reusable eased mapping from one range to another.
///
/// Validates both ranges and the curve once; [`apply`](CubicEase::apply) is
/// then infallible and reuses the curve's sample table.
#[derive(Clone, Debug, PartialEq)]
pub struct CubicEase {
    to_progress: LinearMap,
    easing: EasingFunction,
    from_progress: LinearMap,
}

impl CubicEase {
    /// Build an eased mapping from `[start, end]` to `[new_start, new_end]`.
    ///
    /// # Errors
    ///
    /// [`EasingError::DivideByZero`] when `start == end`.
    pub fn new(
        start: f64,
        end: f64,
        new_start: f64,
        new_end: f64,
        easing: EasingFunction,
    ) -> Result<Self, EasingError> {
        Ok(Self {
            to_progress: LinearMap::to_unit(start, end)?,
            easing,
            from_progress: LinearMap::from_unit(new_start, new_end),
        })
    }

    /// Eased value for `value`.
    pub fn apply(&self, value: f64) -> f64 {
        let progress = self.to_progress.apply(value);
        self.from_progress.apply(self.easing.evaluate(progress))
    }

    /// The underlying easing function.
    pub fn easing(&self) -> &EasingFunction {
        &self.easing
    }

    /// Input range `(start, end)`.
    pub fn input(&self) -> (f64, f64) {
        self.to_progress.input()
    }

    /// Output range `(new_start, new_end)`.
    pub fn output(&self) -> (f64, f64) {
        self.from_progress.output()
    }

    /// The configuration that rebuilds this mapping.
    pub fn config(&self) -> EaseConfig {
        let (start, end) = self.input();
        let (new_start, new_end) = self.output();
        EaseConfig {
            input: [start, end],
            output: [new_start, new_end],
            curve: *self.easing.params(),
        }
    }
}

impl TryFrom<EaseConfig> for CubicEase {
    type Error = EasingError;

    fn try_from(config: EaseConfig) -> Result<Self, Self::Error> {
        let [start, end] = config.input;
        let [new_start, new_end] = config.output;
        Self::new(
            start,
            end,
            new_start,
            new_end,
            EasingFunction::from_params(config.curve),
        )
    }
}

/// Accepts a curve either as `[x1, y1, x2, y2]` or as a textual description
/// (`"ease-in"`, `"cubic-bezier(...)"`); always writes the array form.
mod curve_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::params::BezierParams;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CurveRepr {
        Params(BezierParams),
        Text(String),
    }

    pub fn serialize<S>(params: &BezierParams, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        params.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BezierParams, D::Error>
    where
        D: Deserializer<'de>,
    {
        match CurveRepr::deserialize(deserializer)? {
            CurveRepr::Params(params) => Ok(params),
            CurveRepr::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}
