//! stubgen command-line entry point.
//!
//! Logging is controlled with `RUST_LOG` and defaults to `info`.

use clap::Parser;
use std::process::ExitCode;
use stubgen::cli::{Cli, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(written) => {
            tracing::info!("Done: {} files written", written.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("stubgen: {err:#}");
            ExitCode::FAILURE
        }
    }
}
