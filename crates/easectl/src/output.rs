//! Output formatting for CLI responses

use anyhow::{Error, Result};
use colored::*;
use cubic_ease::{EaseConfig, EasingFunction, SampleTable};
use serde_json::json;

use crate::commands::inspect::Inspection;
use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format error as JSON: {}", e),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(cli_error) => cli_error.kind(),
        None => "Error",
    }
}

/// Print `(x, y)` evaluations of an easing function
pub fn print_evaluations(easing: &EasingFunction, points: &[(f64, f64)], json: bool) -> Result<()> {
    if json {
        let results: Vec<_> = points
            .iter()
            .map(|&(x, y)| json!({ "x": x, "y": y }))
            .collect();
        let output = json!({
            "success": true,
            "curve": easing.css_string(),
            "results": results
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", easing.css_string().bold());
        for (x, y) in points {
            println!("  {:>10} -> {}", x, y);
        }
    }
    Ok(())
}

/// Print `(value, eased)` pairs of a range mapping
pub fn print_eased(config: &EaseConfig, results: &[(f64, f64)], json: bool) -> Result<()> {
    if json {
        let values: Vec<_> = results
            .iter()
            .map(|&(value, eased)| json!({ "value": value, "eased": eased }))
            .collect();
        let output = json!({
            "success": true,
            "config": config,
            "results": values
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let [start, end] = config.input;
        let [new_start, new_end] = config.output;
        println!(
            "{} [{}, {}] -> [{}, {}]",
            config.curve.to_string().bold(),
            start,
            end,
            new_start,
            new_end
        );
        for (value, eased) in results {
            println!("  {:>10} -> {}", value, eased);
        }
    }
    Ok(())
}

/// Print a curve description
pub fn print_inspection(inspection: &Inspection, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "curve": inspection
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", inspection.canonical.bold());
    println!("  CSS:            {}", inspection.css);
    let [p1, p2] = inspection.control_points;
    println!("  Control points: P1=({}, {}) P2=({}, {})", p1.x, p1.y, p2.x, p2.y);
    println!(
        "  Identity:       {}",
        if inspection.identity {
            "yes".green()
        } else {
            "no".normal()
        }
    );
    match &inspection.sample_table {
        Some(table) => {
            println!("  Sample table:");
            for (i, sample) in (0u32..).zip(table.samples()) {
                println!("    x({:.1}) = {:.6}", f64::from(i) * SampleTable::STEP, sample);
            }
        }
        None => println!("  Sample table:   {}", "not needed".dimmed()),
    }
    Ok(())
}
