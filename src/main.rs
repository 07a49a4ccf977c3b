//! Pracfile: generates lab-report practical files.
//!
//! This is the main entry point for the `pracfile` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
mod config;
mod document;
mod error;
mod events;
mod exit_codes;
mod fs;
mod llm;
mod logging;
mod pipeline;
mod prompt;
mod report;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
