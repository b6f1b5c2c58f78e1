//! CLI module for taproom
//!
//! Provides the command-line interface:
//! - serve: bind the HTTP server and run until stopped

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { config, port } => commands::serve(config, port),
    }
}
