//! Command implementations for easectl CLI

pub mod ease;
pub mod eval;
pub mod inspect;

use std::path::PathBuf;

use clap::Args;
use cubic_ease::BezierParams;

/// Arguments of the `ease` command.
#[derive(Args, Debug)]
pub struct EaseArgs {
    /// Values to ease
    #[arg(required = true, allow_negative_numbers = true, value_parser = finite_f64)]
    pub values: Vec<f64>,

    /// Timing curve: CSS keyword, cubic-bezier(x1,y1,x2,y2) or x1,y1,x2,y2
    /// (default: ease, or the curve of --config)
    #[arg(short, long)]
    pub curve: Option<BezierParams>,

    /// Input range
    #[arg(
        long,
        num_args = 2,
        value_names = ["START", "END"],
        allow_negative_numbers = true,
        value_parser = finite_f64,
        required_unless_present = "config",
        requires = "to"
    )]
    pub from: Option<Vec<f64>>,

    /// Output range
    #[arg(
        long,
        num_args = 2,
        value_names = ["NEW_START", "NEW_END"],
        allow_negative_numbers = true,
        value_parser = finite_f64,
        required_unless_present = "config",
        requires = "from"
    )]
    pub to: Option<Vec<f64>>,

    /// JSON file describing input range, output range and curve.
    /// Ignored when --from and --to are given
    #[arg(long, value_name = "FILE", env = "EASECTL_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Parse a command-line number, rejecting NaN and infinities.
pub fn finite_f64(s: &str) -> Result<f64, String> {
    let value: f64 = s.trim().parse().map_err(|e| format!("'{s}': {e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}
