//! Pre-computed `x(t)` samples used to bracket the solver's search.

use serde::{Deserialize, Serialize};

use crate::bezier::BezierAxis;

const TABLE_SIZE: usize = 11;

/// Evenly spaced samples of a curve's `x` projection.
///
/// `samples[i] = x(i / 10)` for `i` in `0..=10`. The table narrows the search
/// for `t` to a single tenth of the domain and supplies a linearly
/// interpolated first guess.
///
/// The table is only meaningful when `x(t)` is non-decreasing, which holds
/// for every curve whose `x` control values lie in `[0,1]`.
///
/// # Example
///
/// ```
/// use cubic_ease::{BezierAxis, SampleTable};
///
/// let table = SampleTable::build(&BezierAxis::new(0.42, 0.58));
/// assert_eq!(table.samples()[0], 0.0);
/// assert!(table.is_monotonic());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SampleTable {
    pub(crate) samples: [f64; TABLE_SIZE],
}

impl SampleTable {
    /// Number of samples.
    pub const SIZE: usize = TABLE_SIZE;

    /// Parameter distance between neighbouring samples.
    pub const STEP: f64 = 1.0 / (Self::SIZE as f64 - 1.0);

    /// Sample the `x` axis of a curve.
    pub fn build(x_axis: &BezierAxis) -> Self {
        let mut samples = [0.0f64; Self::SIZE];

        for (i, entry) in samples.iter_mut().enumerate() {
            *entry = x_axis.position(i as f64 * Self::STEP);
        }

        Self { samples }
    }

    /// Find the interval `[samples[i], samples[i + 1]]` that brackets `x`.
    ///
    /// Returns the largest `i` with `samples[i] <= x`, never past the
    /// second-to-last index, so targets beyond the table edges reuse the
    /// outermost interval.
    pub fn interval(&self, x: f64) -> usize {
        let last = Self::SIZE - 1;
        let mut current = 1;
        while current != last && self.samples[current] <= x {
            current += 1;
        }
        current - 1
    }

    /// Linearly interpolated estimate of the `t` whose `x(t)` equals `x`,
    /// together with the interval index it was derived from.
    pub fn initial_guess(&self, x: f64) -> (usize, f64) {
        let i = self.interval(x);
        let low = self.samples[i];
        let high = self.samples[i + 1];
        let dist = (x - low) / (high - low);
        let interval_start = i as f64 * Self::STEP;
        (i, interval_start + dist * Self::STEP)
    }

    /// Raw samples.
    pub fn samples(&self) -> &[f64; Self::SIZE] {
        &self.samples
    }

    /// `true` when the samples never decrease.
    pub fn is_monotonic(&self) -> bool {
        self.samples.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

impl Serialize for SampleTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.samples.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SampleTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec: Vec<f64> = Vec::deserialize(deserializer)?;
        let samples: [f64; Self::SIZE] = vec.as_slice().try_into().map_err(|err| {
            serde::de::Error::custom(format!(
                "Expected {} entries in SampleTable, got {}: {err}",
                Self::SIZE,
                vec.len()
            ))
        })?;
        Ok(Self { samples })
    }
}
