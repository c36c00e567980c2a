//! Main entry point for the timeline replay tool.
//!
//! This binary replays a recorded sequence of feed fetches against a timeline
//! and prints what each merge reported.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use timeline_gap::replay::{
    ReplayError, ReplayScript, ReplaySession, StepReport, ensure_well_formed,
};

/// Replay feed fetches against a gap-aware timeline
#[derive(Parser, Debug)]
#[command(name = "timeline-gap", version, about)]
struct Cli {
    /// Script to replay; reads stdin when absent or `-`
    script: Option<PathBuf>,

    /// Pretty-print the step reports
    #[arg(long)]
    pretty: bool,

    /// Log filter, overrides RUST_LOG
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Stop at the first step that leaves the timeline malformed
    #[arg(long)]
    fail_fast: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Replay failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ReplayError> {
    let text = read_script(cli.script.as_ref())?;
    let script = ReplayScript::from_json(&text)?;

    let mut session = ReplaySession::new(cli.fail_fast);
    let reports = session.run(script)?;
    print_reports(&reports, cli.pretty)?;

    ensure_well_formed(&reports)
}

fn read_script(path: Option<&PathBuf>) -> Result<String, ReplayError> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            info!("Reading script from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_reports(reports: &[StepReport], pretty: bool) -> Result<(), ReplayError> {
    for report in reports {
        let line = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        println!("{}", line);
    }
    Ok(())
}
