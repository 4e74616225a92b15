//! # gdpr-registry CLI entry point
//!
//! Parses command-line arguments, installs the log subscriber, resolves
//! configuration and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gdpr_cli::config::RegistryConfig;
use gdpr_cli::hints::{run_hints, HintsArgs};
use gdpr_cli::populate::{run_populate, PopulateArgs};
use gdpr_cli::report::{run_report, ReportArgs};
use gdpr_cli::validate::{run_validate, ValidateArgs};

/// GDPR Registry of Processing Activities
///
/// Checks the registry for compliance gaps, renders the PDF report of an
/// organization, validates snapshot files and loads predefined reference
/// lists.
#[derive(Parser, Debug)]
#[command(name = "gdpr-registry", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Registry snapshot file (.json, .yaml or .yml).
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the hints of an organization, or the registry status.
    Hints(HintsArgs),

    /// Render the PDF report of an organization.
    Report(ReportArgs),

    /// Check a snapshot against every write-time rule.
    Validate(ValidateArgs),

    /// Load predefined reference list entries into the snapshot.
    Populate(PopulateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    tracing::debug!("gdpr-registry v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = match RegistryConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };
    if let Some(path) = cli.snapshot {
        config.snapshot = Some(path);
    }

    let result = match cli.command {
        Commands::Hints(args) => run_hints(&args, &config),
        Commands::Report(args) => run_report(&args, &config),
        Commands::Validate(args) => run_validate(&args, &config),
        Commands::Populate(args) => run_populate(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
