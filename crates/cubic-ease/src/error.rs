//! Error types for easing operations.

use thiserror::Error;

/// Error type for easing construction and range remapping.
///
/// Every variant is raised synchronously by the call that received the bad
/// input. Nothing is recovered internally and no partially built value is
/// ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EasingError {
    /// A curve was described with the wrong number of parameters.
    #[error("Bezier easing requires {expected} arguments, got {actual}")]
    ArgumentCount {
        /// Number of parameters a cubic Bezier curve needs (always 4).
        expected: usize,
        /// Number of parameters that were supplied.
        actual: usize,
    },

    /// A curve parameter is NaN or infinite.
    #[error("Bezier easing argument {index} must be a finite number, got {value}")]
    ArgumentType {
        /// Position of the parameter in `(x1, y1, x2, y2)` order.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// An `x` coordinate lies outside `[0,1]`.
    #[error("Bezier easing {coordinate} value {value} is outside the [0, 1] range")]
    ArgumentRange {
        /// Position of the parameter in `(x1, y1, x2, y2)` order.
        index: usize,
        /// Name of the coordinate (`"x1"` or `"x2"`).
        coordinate: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A linear remap was asked to use an empty input range.
    #[error("Cannot map from an empty range: input bounds are both {bound}")]
    DivideByZero {
        /// The shared value of both input bounds.
        bound: f64,
    },

    /// A textual curve description could not be parsed.
    #[error("Invalid curve description: {0}")]
    Parse(String),
}

impl EasingError {
    /// Returns `true` for errors caused by invalid curve parameters.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::ArgumentCount { .. } | Self::ArgumentType { .. } | Self::ArgumentRange { .. }
        )
    }
}
