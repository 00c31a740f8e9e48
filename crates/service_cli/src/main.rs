//! probdist - Command Line Host for Probability Distributions
//!
//! Evaluates distributions the way a spreadsheet host would: a call name,
//! positional parameters and a trailing mode token.
//!
//! # Commands
//!
//! - `probdist eval Norm F 1.96 0 1` - Evaluate with separate arguments
//! - `probdist call "Norm(1.96,0,1,F)"` - Evaluate a host call expression
//! - `probdist describe Norm [--html]` - Print the help text
//! - `probdist check` - Print the resolved configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate owns the I/O concerns the
//! numerical layers leave out: argument parsing, configuration, logging and
//! the uniform draws used for sampling.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{CliArgs, CliConfig, LogLevel};

/// Probability distribution evaluator
#[derive(Parser)]
#[command(name = "probdist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./probdist.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Seed for the uniform draw used by sample mode
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format (plain, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Decimal places in plain output
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a distribution: NAME MODE PARAMS...
    Eval {
        /// Distribution name (e.g. Norm)
        name: String,

        /// Mode token: ~ f F Q E V
        mode: String,

        /// Positional parameters, e.g. `x μ σ` or `μ σ`
        #[arg(allow_hyphen_values = true, num_args = 0..)]
        params: Vec<String>,
    },

    /// Evaluate a host call expression such as "Norm(1.96,0,1,F)"
    Call {
        /// Call expression
        expression: String,
    },

    /// Print the help text of a distribution
    Describe {
        /// Distribution name (e.g. Norm)
        name: String,

        /// Render as HTML
        #[arg(long)]
        html: bool,
    },

    /// Print the resolved configuration and known distributions
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let log_level = match (&self.log_level, self.verbose) {
            (Some(level), _) => Some(level.clone()),
            (None, true) => Some(LogLevel::Debug.to_string()),
            (None, false) => None,
        };
        CliArgs {
            config_file: self.config.clone(),
            log_level,
            seed: self.seed,
            format: self.format.clone(),
            precision: self.precision,
        }
    }
}

/// Initialise tracing; `RUST_LOG` wins over the configured level.
fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// Line printed to stderr when a command fails.
fn error_message(err: &CliError) -> String {
    format!("Error: {}", err)
}

fn run(cli: Cli) -> Result<()> {
    let config: CliConfig = config::build_config(&cli.config_args())?;

    init_tracing(config.log_level);
    debug!(?config, "Resolved configuration");

    match cli.command {
        Commands::Eval { name, mode, params } => {
            info!("Evaluating {} in mode {}", name, mode);
            commands::eval::run(&name, &mode, &params, &config)
        }
        Commands::Call { expression } => {
            info!("Evaluating call {}", expression);
            commands::call::run(&expression, &config)
        }
        Commands::Describe { name, html } => commands::describe::run(&name, html),
        Commands::Check => commands::check::run(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dist_core::types::Numeric;
    use dist_models::distributions::normal;

    #[test]
    fn test_error_message_uses_display_text() {
        let err: CliError = normal::mean(&[Numeric::Real(0.0), Numeric::Real(-1.0)])
            .unwrap_err()
            .into();
        assert_eq!(error_message(&err), "Error: Norm: σ should be >0");
    }

    #[test]
    fn test_run_reports_invalid_parameters() {
        let cli = Cli::parse_from(["probdist", "eval", "Norm", "E", "0", "0"]);
        let err = run(cli).unwrap_err();
        assert!(matches!(err, CliError::Distribution(_)));
        assert_eq!(error_message(&err), "Error: Norm: σ should be >0");
    }
}
