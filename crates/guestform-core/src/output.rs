/// Display-ready output model for an accepted submission.
///
/// [`OutputModel`] is the presentation transform that runs only after a
/// valid [`ValidationResult`]: trimmed text fields pass through, the
/// gender becomes its display label, and the birth date is reformatted
/// from `YYYY-MM-DD` to `DD/MM/YYYY`.
use std::fmt;

use serde::Serialize;

use crate::date::{format_display, parse_birth_date};
use crate::form::Submission;
use crate::validation::ValidationResult;

// ---------------------------------------------------------------------------
// OutputError
// ---------------------------------------------------------------------------

/// Failure to build an [`OutputModel`].
///
/// Constructing the output model from an invalid submission is a caller
/// bug, not a user-input problem. The workspace bans panics, so the bug
/// surfaces as this explicit error instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputError {
    /// The validation result carried one or more diagnostics.
    InvalidSubmission,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSubmission => {
                f.write_str("output model requires a submission that passed validation")
            }
        }
    }
}

impl std::error::Error for OutputError {}

// ---------------------------------------------------------------------------
// OutputModel
// ---------------------------------------------------------------------------

/// The presentation-formatted values of an accepted submission.
///
/// Serialises to a flat JSON object; the CLI prints it either as JSON or
/// as a small human-readable table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputModel {
    /// The trimmed name, unchanged otherwise.
    pub name: String,
    /// The birth date reformatted to `DD/MM/YYYY`, zero-padded.
    pub birth_date: String,
    /// The selected gender's display label.
    pub gender: String,
    /// The trimmed message body, unchanged otherwise.
    pub message: String,
}

impl OutputModel {
    /// Builds the output model from a submission and its validation result.
    ///
    /// The submission's values are re-read here, not cached from the
    /// validation pass; callers must pass the same submission the result
    /// was produced from.
    ///
    /// # Errors
    ///
    /// [`OutputError::InvalidSubmission`] when `result` carries any
    /// diagnostic. A valid result guarantees the gender is selected and
    /// the birth date parses, so those re-checks also route to the same
    /// error rather than panicking.
    pub fn from_valid(form: &Submission, result: &ValidationResult) -> Result<Self, OutputError> {
        if !result.is_valid() {
            return Err(OutputError::InvalidSubmission);
        }
        let birth = parse_birth_date(&form.birth_date).map_err(|_| OutputError::InvalidSubmission)?;
        let gender = form.gender.ok_or(OutputError::InvalidSubmission)?;
        Ok(Self {
            name: form.trimmed_name().to_owned(),
            birth_date: format_display(birth),
            gender: gender.label().to_owned(),
            message: form.trimmed_message().to_owned(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
