//! Evaluate an easing curve at progress values

use anyhow::Result;
use cubic_ease::{BezierParams, EasingFunction};
use tracing::debug;

use crate::output;

/// Execute eval command
pub fn execute(curve: BezierParams, inputs: &[f64], json: bool) -> Result<()> {
    let easing = EasingFunction::from(curve);
    debug!(curve = %easing, count = inputs.len(), "evaluating");

    let points: Vec<(f64, f64)> = inputs.iter().map(|&x| (x, easing.evaluate(x))).collect();
    output::print_evaluations(&easing, &points, json)
}
