/// Command modules for the `guestform` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments and returns `Ok(())` on success or
/// a [`crate::error::CliError`] on failure.
pub mod greet;
pub mod submit;
pub mod validate;

use guestform_core::{Submission, ValidationResult};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig, write_diagnostic, write_summary};

/// Maps the CLI `--format` flag to a formatter mode.
pub(crate) fn mode_for(format: &OutputFormat) -> FormatMode {
    match format {
        OutputFormat::Human => FormatMode::Human,
        OutputFormat::Json => FormatMode::Json,
    }
}

/// Parses CLI input content as a JSON [`Submission`].
///
/// # Errors
///
/// [`CliError::ParseFailed`] (exit code 2) with the line/column of the
/// first JSON error.
pub(crate) fn parse_submission(content: &str) -> Result<Submission, CliError> {
    serde_json::from_str(content).map_err(|e| CliError::ParseFailed {
        detail: format!("line {}, column {}: {e}", e.line(), e.column()),
    })
}

/// Emits every diagnostic plus the summary line to stderr.
///
/// # Errors
///
/// [`CliError::IoError`] when stderr cannot be written.
pub(crate) fn emit_diagnostics(
    result: &ValidationResult,
    mode: FormatMode,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let stderr = std::io::stderr();
    let mut err_out = stderr.lock();

    for diag in &result.diagnostics {
        write_diagnostic(&mut err_out, diag, mode, config).map_err(|e| CliError::IoError {
            source: "stderr".to_owned(),
            detail: e.to_string(),
        })?;
    }

    write_summary(&mut err_out, result.len(), mode, config).map_err(|e| CliError::IoError {
        source: "stderr".to_owned(),
        detail: e.to_string(),
    })
}
