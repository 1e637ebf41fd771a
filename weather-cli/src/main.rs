//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Turning errors into one message and an exit status
//! - Printing the styled weather line

use clap::Parser;
use std::process::ExitCode;

mod cli;
mod logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();

    if let Err(err) = logging::init_logging() {
        eprintln!("warning: {err}");
    }

    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "weather lookup failed");
            eprintln!("Exit: {err}");
            ExitCode::FAILURE
        }
    }
}
