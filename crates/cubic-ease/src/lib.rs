//! Cubic Bezier Easing
//!
//! This crate computes eased interpolation between two ranges along a cubic
//! Bezier timing curve, the model used by CSS `cubic-bezier()` and animation
//! engines.
//!
//! # Overview
//!
//! A timing curve runs from `(0,0)` to `(1,1)` through two interior control
//! points `(x1, y1)` and `(x2, y2)`. The curve is parametric, so evaluating
//! `y` for a progress value `x` means inverting `x(t)` numerically:
//!
//! - **[`SampleTable`]**: 11 pre-computed samples of `x(t)` bracket the search
//! - **Newton-Raphson**: 4 fixed refinement steps when the slope is well conditioned
//! - **Bisection**: at most 10 halvings when it is not
//!
//! Everything else is linear range remapping.
//!
//! # Guarantees
//!
//! - `evaluate(0) == 0` and `evaluate(1) == 1` exactly for every valid curve
//! - curves with `x1 == y1` and `x2 == y2` are evaluated as the identity
//! - every evaluation does a bounded amount of work and never allocates
//!
//! # Example
//!
//! ```
//! use cubic_ease::{cubic_ease, BezierParams, CubicEase, EasingFunction};
//!
//! // One-shot: ease 30 in [0, 60] into [0, 1] with ease-in-out
//! let value = cubic_ease(30.0, 0.0, 60.0, 0.0, 1.0, [0.42, 0.0, 0.58, 1.0])?;
//! assert!((value - 0.5).abs() < 1e-4);
//!
//! // Reusable: the sample table is built once
//! let fade = CubicEase::new(0.0, 1000.0, 1.0, 0.0, EasingFunction::from(BezierParams::EASE))?;
//! assert_eq!(fade.apply(0.0), 1.0);
//! assert_eq!(fade.apply(1000.0), 0.0);
//! # Ok::<(), cubic_ease::EasingError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bezier;
pub mod ease;
pub mod easing;
pub mod error;
pub mod linear;
pub mod params;
pub mod prelude;
pub mod sample_table;
pub mod solver;

pub use bezier::BezierAxis;
pub use ease::{CubicEase, EaseConfig, cubic_ease};
pub use easing::EasingFunction;
pub use error::EasingError;
pub use linear::LinearMap;
pub use params::{BezierParams, ControlPoint};
pub use sample_table::SampleTable;
pub use solver::{BezierSolver, SolveMethod};
