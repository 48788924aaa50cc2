//! Entry point for the `guestform` binary.
//!
//! Parses the CLI, reads input through [`io`], and dispatches to the
//! command modules. All failures funnel through [`error::CliError`] so
//! exit codes stay stable: 0 ok, 1 logical failure, 2 input failure.
use std::process;

use clap::Parser as _;

mod cli;
mod cmd;
mod error;
mod format;
mod io;

use cli::{Cli, Command};
use error::CliError;

/// Largest accepted input, in bytes. A submission is a few hundred bytes;
/// anything near this limit is not a form.
const MAX_INPUT_BYTES: u64 = 1024 * 1024;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        // ValidationErrors has already printed its diagnostics; repeating
        // the generic message would drown them.
        if !matches!(err, CliError::ValidationErrors) {
            eprintln!("{}", err.message());
        }
        process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Validate {
            file,
            format,
            no_color,
        } => {
            let content = io::read_input(&file, MAX_INPUT_BYTES)?;
            cmd::validate::run(&content, &format, no_color)
        }
        Command::Submit {
            file,
            format,
            no_color,
        } => {
            let content = io::read_input(&file, MAX_INPUT_BYTES)?;
            cmd::submit::run(&content, &format, no_color)
        }
        Command::Greet { name, store } => cmd::greet::run(name.as_deref(), &store),
        Command::Version => {
            println!("{}", guestform_core::version());
            Ok(())
        }
    }
}
