/// Diagnostic types and rule dispatch for the form validation engine.
///
/// This module defines [`Diagnostic`], [`RuleId`], [`ValidationResult`],
/// the [`FieldCheck`] trait, [`build_registry`], and the top-level
/// [`validate`] dispatch function.
///
/// The engine evaluates each field's rules in declared order and records
/// only the **first** failing rule per field. Fields are independent of
/// one another and every field is always evaluated; there is no fail-fast
/// across fields. A single pass is synchronous and stateless: two calls
/// with the same input produce identical results.
pub mod checks;

use std::fmt;

use chrono::NaiveDate;

use crate::form::{FieldId, Submission};

#[cfg(test)]
mod tests;

// ---------------------------------------------------------------------------
// RuleId
// ---------------------------------------------------------------------------

/// Machine-readable identifier for a validation rule.
///
/// [`RuleId::code`] returns the stable hyphenated form used in serialised
/// output (e.g. `"too-short"`). All rules describe user-input problems;
/// there are no system-fault severities in this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    /// The field is empty (after trimming, for free-text fields) or no
    /// option is selected.
    Required,
    /// The trimmed value is shorter than the field's minimum length.
    TooShort,
    /// The trimmed value is longer than the field's maximum length.
    TooLong,
    /// The birth date is strictly later than the current date.
    Future,
    /// The birth date is more than 150 calendar years in the past.
    Implausible,
    /// The birth date is not a well-formed `YYYY-MM-DD` calendar date.
    InvalidFormat,
}

impl RuleId {
    /// Returns the stable hyphenated rule code string.
    pub fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooShort => "too-short",
            Self::TooLong => "too-long",
            Self::Future => "future",
            Self::Implausible => "implausible",
            Self::InvalidFormat => "invalid-format",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Diagnostic
// ---------------------------------------------------------------------------

/// A single validation finding: one field, the first rule it failed, and
/// the user-facing message for that rule.
///
/// A field that fails produces exactly one diagnostic per validation pass;
/// later rules for that field are never evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The field that failed.
    pub field: FieldId,
    /// The first rule the field failed.
    pub rule: RuleId,
    /// A human-readable explanation, suitable for inline display.
    pub message: String,
}

impl Diagnostic {
    /// Constructs a new [`Diagnostic`].
    pub fn new(field: FieldId, rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[E] {}: {}", self.field, self.message)
    }
}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// The collected output of one validation pass over a [`Submission`].
///
/// Created fresh on each pass and intended to be consumed immediately:
/// rendered as inline errors, or handed to
/// [`OutputModel::from_valid`][crate::output::OutputModel::from_valid].
/// Diagnostics appear in declared field order, at most one per field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// All diagnostics produced during the pass.
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Creates an empty [`ValidationResult`] with no diagnostics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a [`ValidationResult`] from a pre-built list of diagnostics.
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Returns `true` iff no field produced an error.
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns the error message recorded for `field`, if any.
    pub fn message_for(&self, field: FieldId) -> Option<&str> {
        self.diagnostics
            .iter()
            .find(|d| d.field == field)
            .map(|d| d.message.as_str())
    }

    /// Returns an iterator over all diagnostics produced by the given rule.
    pub fn by_rule(&self, rule: RuleId) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.rule == rule)
    }

    /// Returns the total number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ---------------------------------------------------------------------------
// FieldCheck
// ---------------------------------------------------------------------------

/// A stateless check covering all rules of a single form field.
///
/// Each implementor evaluates its field's rules **in order** and returns
/// the first failure, or `None` when every rule passes. The dispatch loop
/// in [`validate`] calls each check exactly once per pass.
///
/// `today` carries the current date so date rules stay deterministic;
/// checks with no date logic ignore it.
///
/// # Object safety
///
/// The trait is object-safe; the registry stores checks as
/// `Vec<Box<dyn FieldCheck>>`.
pub trait FieldCheck {
    /// The field this check covers.
    fn field(&self) -> FieldId;

    /// Evaluate this field's rules in order against `form`.
    ///
    /// Returns the first failing rule's diagnostic, or `None` when the
    /// field is valid. Must not inspect any other field's value.
    fn check(&self, form: &Submission, today: NaiveDate) -> Option<Diagnostic>;
}

// ---------------------------------------------------------------------------
// Registry and dispatch
// ---------------------------------------------------------------------------

/// Builds the ordered field-check registry.
///
/// The order matches [`FieldId::ALL`]: name, birth date, gender, message.
/// Checks are compiled into `guestform-core`; this is not a plugin system.
pub fn build_registry() -> Vec<Box<dyn FieldCheck>> {
    use checks::{BirthDateCheck, GenderCheck, MessageCheck, NameCheck};

    vec![
        Box::new(NameCheck),
        Box::new(BirthDateCheck),
        Box::new(GenderCheck),
        Box::new(MessageCheck),
    ]
}

/// Run the full validation pass over a submission.
///
/// Walks the registry linearly and collects at most one diagnostic per
/// field. All fields are evaluated regardless of earlier failures; within
/// a field, the first failing rule wins and later rules are skipped.
///
/// `today` is the date that `Future` and `Implausible` compare against.
/// Injecting it keeps the function pure: the caller decides what "now"
/// means (the CLI passes the local calendar date).
pub fn validate(form: &Submission, today: NaiveDate) -> ValidationResult {
    let registry = build_registry();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    for check in &registry {
        if let Some(diag) = check.check(form, today) {
            // A check may only report on the field it is registered for.
            debug_assert_eq!(diag.field, check.field());
            diagnostics.push(diag);
        }
    }
    ValidationResult::from_diagnostics(diagnostics)
}
