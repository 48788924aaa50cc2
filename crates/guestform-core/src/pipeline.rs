/// The submission pipeline: clear stale errors, read fresh input,
/// validate, then either render errors inline or accept and reset.
///
/// The pipeline is decoupled from any rendering surface through three
/// small traits. [`submit`] runs synchronously to completion, with no
/// suspension points and no state carried between attempts. The error
/// sink is fully cleared and repopulated on every call, so messages from
/// a prior attempt never remain visible.
use chrono::NaiveDate;

use crate::form::{FieldId, Submission};
use crate::output::{OutputError, OutputModel};
use crate::validation::{ValidationResult, validate};

// ---------------------------------------------------------------------------
// Collaborator seams
// ---------------------------------------------------------------------------

/// Read/reset capability over the form's input fields.
///
/// [`read`][InputSurface::read] must return the fields' **current** values
/// on every call; the pipeline never caches a submission across calls.
pub trait InputSurface {
    /// Reads the current value of every field.
    fn read(&self) -> Submission;

    /// Resets every field to its empty/default value.
    fn reset(&mut self);
}

/// Write-only sink for per-field inline error messages, keyed by field id.
pub trait ErrorSink {
    /// Shows `message` for `field`, replacing any previous message.
    fn set_message(&mut self, field: FieldId, message: &str);

    /// Clears the message shown for `field`, if any.
    fn clear(&mut self, field: FieldId);

    /// Clears every field's message.
    fn clear_all(&mut self) {
        for field in FieldId::ALL {
            self.clear(field);
        }
    }
}

/// Receiver for the transient success notification.
pub trait Notifier {
    /// Presents a transient success notice to the user.
    fn success(&mut self, message: &str);
}

/// The notice shown after an accepted submission.
pub const SUCCESS_NOTICE: &str = "Message sent successfully";

// ---------------------------------------------------------------------------
// SubmitOutcome
// ---------------------------------------------------------------------------

/// The result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors were rendered to the sink. The input
    /// surface is left untouched so the user can correct and resubmit.
    Rejected(ValidationResult),
    /// Validation passed; the surface was reset and the sink cleared.
    Accepted(OutputModel),
}

// ---------------------------------------------------------------------------
// submit
// ---------------------------------------------------------------------------

/// Runs one full submission attempt.
///
/// 1. Clears all previously shown error messages.
/// 2. Reads the fields fresh from `surface`.
/// 3. Validates against `today`.
/// 4. On failure, renders each diagnostic through `sink` and returns
///    [`SubmitOutcome::Rejected`] without resetting the form.
/// 5. On success, builds the [`OutputModel`], notifies `notifier` with
///    [`SUCCESS_NOTICE`], resets `surface`, clears `sink` again, and
///    returns [`SubmitOutcome::Accepted`].
///
/// # Errors
///
/// [`OutputError`] only when the output model cannot be built from a
/// result that just passed validation; an internal inconsistency, not a
/// user-input failure.
pub fn submit(
    surface: &mut dyn InputSurface,
    sink: &mut dyn ErrorSink,
    notifier: &mut dyn Notifier,
    today: NaiveDate,
) -> Result<SubmitOutcome, OutputError> {
    sink.clear_all();

    let submission = surface.read();
    let result = validate(&submission, today);

    if !result.is_valid() {
        for diag in &result.diagnostics {
            sink.set_message(diag.field, &diag.message);
        }
        return Ok(SubmitOutcome::Rejected(result));
    }

    let output = OutputModel::from_valid(&submission, &result)?;
    notifier.success(SUCCESS_NOTICE);
    surface.reset();
    sink.clear_all();
    Ok(SubmitOutcome::Accepted(output))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
