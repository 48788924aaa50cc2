//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};


/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].  This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits plain, optionally colored text. `Json` emits structured
/// JSON: NDJSON for diagnostics on stderr, a single object for data on
/// stdout.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON / NDJSON output.
    Json,
}

/// All top-level subcommands exposed by the `guestform` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Validate a submission file against the form rules.
    Validate {
        /// Path to a JSON submission file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Output format: human (default) or json.
        #[arg(long, default_value = "human", value_enum)]
        format: OutputFormat,
        /// Disable ANSI colors in human output.
        #[arg(long)]
        no_color: bool,
    },

    /// Run the full submission pipeline: validate, then print the
    /// display-ready output on success.
    Submit {
        /// Path to a JSON submission file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Output format: human (default) or json.
        #[arg(long, default_value = "human", value_enum)]
        format: OutputFormat,
        /// Disable ANSI colors in human output.
        #[arg(long)]
        no_color: bool,
    },

    /// Print the greeting, optionally remembering a new name first.
    Greet {
        /// The name to remember before greeting.
        #[arg(value_name = "NAME")]
        name: Option<String>,
        /// Path to the JSON key-value store file (created on first write).
        #[arg(long, value_name = "PATH")]
        store: PathBuf,
    },

    /// Print the guestform-core library version.
    Version,
}

/// Root CLI parser for the `guestform` binary.
#[derive(Parser)]
#[command(name = "guestform", about = "Contact-form validation pipeline CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}
