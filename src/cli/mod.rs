//! DS-009: CLI — flags, version banner, logging, dispatch.

use crate::core::error::Result;
use crate::core::executor::{self, RunConfig};
use crate::core::types::RunSummary;
use crate::loader::Evaluator;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line flags.
#[derive(Parser, Debug)]
#[command(
    name = "dhall-to-ds",
    about = "Split an evaluated Dhall record into one YAML file per resource",
    disable_version_flag = true
)]
pub struct Cli {
    /// (required) record file
    #[arg(short, long, value_name = "FILE", required_unless_present = "version")]
    pub record: Option<PathBuf>,

    /// (required) directory to output
    #[arg(short, long, value_name = "DIR", required_unless_present = "version")]
    pub output: Option<PathBuf>,

    /// Print version information
    #[arg(long)]
    pub version: bool,
}

/// What a parsed command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Version,
    Split { record: PathBuf, output: PathBuf },
}

impl Cli {
    /// Resolve flags into an action. `--version` wins over everything else.
    pub fn action(self) -> std::result::Result<Action, clap::Error> {
        if self.version {
            return Ok(Action::Version);
        }
        match (self.record, self.output) {
            (Some(record), Some(output)) => Ok(Action::Split { record, output }),
            _ => Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "--record and --output are required",
            )),
        }
    }
}

/// Exit code for a flag-parsing outcome: help goes to stdout and is a
/// success, every real usage error is a failure.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

/// Build identity, baked in at compile time.
pub fn version_string(version: &str, commit: &str, date: &str) -> String {
    let rows = [("version:", version), ("commit:", commit), ("build date:", date)];
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
    rows.iter()
        .map(|(label, value)| format!("{:<width$}{}", label, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn current_version() -> String {
    version_string(
        env!("CARGO_PKG_VERSION"),
        option_env!("DHALL_TO_DS_COMMIT").unwrap_or("unknown"),
        option_env!("DHALL_TO_DS_BUILD_DATE").unwrap_or("unknown"),
    )
}

/// Install the stdout log subscriber. Safe to call more than once.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .try_init();
}

/// Carry out an action. `Version` yields no summary.
pub fn dispatch(action: Action) -> Result<Option<RunSummary>> {
    match action {
        Action::Version => {
            eprintln!("{}", current_version());
            Ok(None)
        }
        Action::Split { record, output } => {
            let evaluator = Evaluator::default();
            let cfg = RunConfig {
                record: &record,
                output: &output,
                evaluator: &evaluator,
            };
            executor::run(&cfg).map(Some)
        }
    }
}
