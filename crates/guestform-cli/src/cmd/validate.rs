//! Implementation of `guestform validate <file>`.
//!
//! Parses a JSON submission and runs the validation engine against
//! today's local date, emitting diagnostics to stderr.
//!
//! Exit codes:
//! - 0 = valid (no errors)
//! - 1 = validation errors
//! - 2 = parse failure (not valid JSON)
use guestform_core::validate;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::FormatterConfig;

use super::{emit_diagnostics, mode_for, parse_submission};

/// Runs the `validate` command.
///
/// Parses `content` as a JSON submission, validates it against the local
/// calendar date, and emits diagnostics plus a summary line to stderr.
/// Nothing is written to stdout.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] when content is not a valid submission.
/// - [`CliError::ValidationErrors`] when one or more fields failed.
/// - [`CliError::IoError`] when stderr could not be written.
pub fn run(content: &str, format: &OutputFormat, no_color: bool) -> Result<(), CliError> {
    let submission = parse_submission(content)?;

    let today = chrono::Local::now().date_naive();
    let result = validate(&submission, today);

    let mode = mode_for(format);
    let config = FormatterConfig::from_flags(no_color);
    emit_diagnostics(&result, mode, &config)?;

    if result.is_valid() {
        Ok(())
    } else {
        Err(CliError::ValidationErrors)
    }
}
