//! easectl - Cubic Bezier Easing CLI
//!
//! Evaluates, applies and inspects cubic Bezier timing curves from the
//! command line.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cubic_ease::BezierParams;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::EaseArgs;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "easectl")]
#[command(about = "Evaluate and inspect cubic Bezier easing curves")]
#[command(version)]
#[command(long_about = "
easectl evaluates cubic Bezier timing curves (CSS cubic-bezier()) and uses
them to ease values from one range into another.

Curves are given as a CSS keyword (linear, ease, ease-in, ease-out,
ease-in-out), as cubic-bezier(x1,y1,x2,y2), or as four comma-separated
numbers. Use --json for machine-readable output.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a curve at progress values in [0, 1]
    Eval {
        /// Timing curve
        curve: BezierParams,
        /// Progress values
        #[arg(
            required = true,
            allow_negative_numbers = true,
            value_parser = commands::finite_f64
        )]
        inputs: Vec<f64>,
    },

    /// Ease values from one range into another
    Ease(EaseArgs),

    /// Show control points, string forms and the sample table of a curve
    Inspect {
        /// Timing curve
        curve: BezierParams,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("easectl={log_level},cubic_ease={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(exit_code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Eval { curve, inputs } => commands::eval::execute(*curve, inputs, cli.json),
        Commands::Ease(args) => commands::ease::execute(args, cli.json),
        Commands::Inspect { curve } => commands::inspect::execute(*curve, cli.json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}
