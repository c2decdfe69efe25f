//! Commonly used items.
//!
//! ```
//! use cubic_ease::prelude::*;
//!
//! let easing = EasingFunction::from(BezierParams::EASE_IN);
//! assert_eq!(easing.evaluate(1.0), 1.0);
//! ```

pub use crate::ease::{CubicEase, EaseConfig, cubic_ease};
pub use crate::easing::EasingFunction;
pub use crate::error::EasingError;
pub use crate::linear::LinearMap;
pub use crate::params::{BezierParams, ControlPoint};
