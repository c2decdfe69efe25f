//! Ease values from one range into another

use std::fs;
use std::path::Path;

use anyhow::Result;
use cubic_ease::{BezierParams, CubicEase, EaseConfig};
use tracing::{debug, info};

use crate::commands::EaseArgs;
use crate::error::CliError;
use crate::output;

/// Execute ease command
pub fn execute(args: &EaseArgs, json: bool) -> Result<()> {
    let config = match &args.config {
        Some(path) if args.from.is_none() && args.to.is_none() => {
            let mut config = load_config(path)?;
            if let Some(curve) = args.curve {
                config.curve = curve;
            }
            config
        }
        _ => config_from_args(args)?,
    };
    debug!(?config, "resolved ease configuration");

    let ease = CubicEase::try_from(config).map_err(CliError::from)?;
    let results: Vec<(f64, f64)> = args.values.iter().map(|&v| (v, ease.apply(v))).collect();

    output::print_eased(&ease.config(), &results, json)
}

fn load_config(path: &Path) -> Result<EaseConfig, CliError> {
    info!(path = %path.display(), "loading ease configuration");
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn config_from_args(args: &EaseArgs) -> Result<EaseConfig, CliError> {
    let input = range(args.from.as_deref(), "--from")?;
    let output = range(args.to.as_deref(), "--to")?;
    Ok(EaseConfig {
        input,
        output,
        curve: args.curve.unwrap_or(BezierParams::EASE),
    })
}

fn range(values: Option<&[f64]>, flag: &str) -> Result<[f64; 2], CliError> {
    match values {
        Some(&[start, end]) => Ok([start, end]),
        _ => Err(CliError::InvalidConfiguration(format!(
            "{flag} requires exactly two values"
        ))),
    }
}
