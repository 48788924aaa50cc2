//! Implementation of `guestform submit <file>`.
//!
//! Runs the full submission pipeline: validate, and on success print the
//! display-ready output model to stdout with the success notice on
//! stderr. On failure behaves like `validate` (diagnostics to stderr,
//! exit 1).
use guestform_core::{
    ErrorSink, FieldId, InputSurface, Notifier, OutputModel, SubmitOutcome, Submission, submit,
};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig};

use super::{emit_diagnostics, mode_for, parse_submission};

// ---------------------------------------------------------------------------
// Pipeline adapters
// ---------------------------------------------------------------------------

/// One-shot input surface over a parsed submission.
///
/// `read` returns the parsed values; `reset` empties them, mirroring a
/// form reset even though this process exits right after.
struct OneShotSurface {
    current: Submission,
}

impl InputSurface for OneShotSurface {
    fn read(&self) -> Submission {
        self.current.clone()
    }

    fn reset(&mut self) {
        self.current = Submission::default();
    }
}

/// Error sink that drops messages.
///
/// The CLI renders diagnostics from the returned [`SubmitOutcome`] (which
/// carries rule codes the JSON mode needs), not from the sink, so inline
/// rendering is a no-op here.
struct DiscardSink;

impl ErrorSink for DiscardSink {
    fn set_message(&mut self, _field: FieldId, _message: &str) {}

    fn clear(&mut self, _field: FieldId) {}
}

/// Notifier that records the last success notice for printing after the
/// pipeline returns.
#[derive(Default)]
struct LastNotice {
    message: Option<String>,
}

impl Notifier for LastNotice {
    fn success(&mut self, message: &str) {
        self.message = Some(message.to_owned());
    }
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the `submit` command.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] when content is not a valid submission.
/// - [`CliError::ValidationErrors`] when the submission was rejected.
/// - [`CliError::Internal`] when a valid submission failed to produce an
///   output model (a bug, not user input).
/// - [`CliError::IoError`] when stderr could not be written.
pub fn run(content: &str, format: &OutputFormat, no_color: bool) -> Result<(), CliError> {
    let submission = parse_submission(content)?;

    let mut surface = OneShotSurface {
        current: submission,
    };
    let mut sink = DiscardSink;
    let mut notice = LastNotice::default();
    let today = chrono::Local::now().date_naive();

    let outcome = submit(&mut surface, &mut sink, &mut notice, today).map_err(|e| {
        CliError::Internal {
            detail: e.to_string(),
        }
    })?;

    let mode = mode_for(format);
    let config = FormatterConfig::from_flags(no_color);

    match outcome {
        SubmitOutcome::Rejected(result) => {
            emit_diagnostics(&result, mode, &config)?;
            Err(CliError::ValidationErrors)
        }
        SubmitOutcome::Accepted(output) => {
            if let Some(message) = notice.message {
                eprintln!("{message}");
            }
            print_output(&output, mode)
        }
    }
}

/// Prints the accepted output model to stdout.
fn print_output(output: &OutputModel, mode: FormatMode) -> Result<(), CliError> {
    match mode {
        FormatMode::Human => {
            println!("name:       {}", output.name);
            println!("birth date: {}", output.birth_date);
            println!("gender:     {}", output.gender);
            println!("message:    {}", output.message);
            Ok(())
        }
        FormatMode::Json => {
            let text =
                serde_json::to_string_pretty(output).map_err(|e| CliError::Internal {
                    detail: e.to_string(),
                })?;
            println!("{text}");
            Ok(())
        }
    }
}
