//! Describe an easing curve

use anyhow::Result;
use cubic_ease::{BezierParams, ControlPoint, EasingFunction, SampleTable};
use serde::Serialize;

use crate::output;

/// Everything easectl reports about a curve.
#[derive(Debug, Serialize)]
pub struct Inspection {
    pub params: BezierParams,
    pub css: String,
    pub canonical: String,
    pub control_points: [ControlPoint; 2],
    pub identity: bool,
    pub sample_table: Option<SampleTable>,
}

impl Inspection {
    pub fn new(curve: BezierParams) -> Self {
        let easing = EasingFunction::from(curve);
        easing.precompute();
        Self {
            params: curve,
            css: easing.css_string(),
            canonical: easing.debug_string(),
            control_points: easing.control_points(),
            identity: easing.is_identity(),
            sample_table: easing.sample_table().cloned(),
        }
    }
}

/// Execute inspect command
pub fn execute(curve: BezierParams, json: bool) -> Result<()> {
    output::print_inspection(&Inspection::new(curve), json)
}
