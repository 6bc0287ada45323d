//! dhall-to-ds CLI — split an evaluated record into per-resource YAML files.

use clap::Parser;
use dhall_to_ds::cli::{self, Cli};

fn main() {
    let action = match Cli::try_parse().and_then(Cli::action) {
        Ok(action) => action,
        Err(e) => {
            let _ = e.print();
            std::process::exit(cli::usage_exit_code(&e));
        }
    };

    cli::init_logging();
    if let Err(e) = cli::dispatch(action) {
        tracing::error!(error = %e, "run failed");
        std::process::exit(1);
    }
}
