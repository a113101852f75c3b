mod commands;
mod config;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use crate::config::{GateConfig, DEFAULT_SUMMARY_FILE};

#[derive(Parser)]
#[command(name = "quality-gate")]
#[command(about = "Aggregate SAST, SCA and DAST results and enforce zero-tolerance thresholds")]
#[command(version)]
struct Cli {
    /// Directory the scanner result paths are resolved against
    #[arg(short = 'C', long, default_value = ".")]
    root: PathBuf,

    /// Where to write the JSON summary (relative paths are resolved against the root)
    #[arg(short, long, default_value = DEFAULT_SUMMARY_FILE)]
    output: PathBuf,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log input resolution details
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for GateConfig {
    fn from(cli: Cli) -> Self {
        GateConfig {
            root: cli.root,
            output: cli.output,
            color: !cli.no_color,
            verbose: cli.verbose,
        }
    }
}

fn main() -> ExitCode {
    let config = GateConfig::from(Cli::parse());

    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match commands::check::run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Fatal error in quality gate: {e}");
            eprintln!("{e:?}");
            ExitCode::FAILURE
        }
    }
}
