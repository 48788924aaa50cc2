/// Per-field rule implementations for the form validation engine.
///
/// Each check is a stateless struct implementing
/// [`crate::validation::FieldCheck`]. A check evaluates its field's rules
/// in declared order and reports only the first failure; it never looks at
/// any other field. Checks are registered in
/// [`crate::validation::build_registry`].
use chrono::{Datelike as _, NaiveDate};

use crate::date::parse_birth_date;
use crate::form::{FieldId, Submission};

use super::{Diagnostic, FieldCheck, RuleId};

// ---------------------------------------------------------------------------
// Rule thresholds
// ---------------------------------------------------------------------------

/// Minimum length of a trimmed name, in characters.
pub const MIN_NAME_CHARS: usize = 2;

/// Minimum length of a trimmed message, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Maximum length of a trimmed message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Largest plausible gap between the current year and the birth year.
pub const MAX_PLAUSIBLE_YEARS: i32 = 150;

// ---------------------------------------------------------------------------
// Name: Required, then TooShort
// ---------------------------------------------------------------------------

/// Name rules: `Required` if empty after trimming, else `TooShort` if
/// shorter than [`MIN_NAME_CHARS`] characters.
pub struct NameCheck;

impl FieldCheck for NameCheck {
    fn field(&self) -> FieldId {
        FieldId::Name
    }

    fn check(&self, form: &Submission, _today: NaiveDate) -> Option<Diagnostic> {
        let name = form.trimmed_name();
        if name.is_empty() {
            return Some(Diagnostic::new(
                FieldId::Name,
                RuleId::Required,
                "name must not be empty",
            ));
        }
        if name.chars().count() < MIN_NAME_CHARS {
            return Some(Diagnostic::new(
                FieldId::Name,
                RuleId::TooShort,
                format!("name must be at least {MIN_NAME_CHARS} characters"),
            ));
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Birth date: Required, InvalidFormat, Future, Implausible
// ---------------------------------------------------------------------------

/// Birth-date rules: `Required` if empty, else `InvalidFormat` if the
/// string is not a real `YYYY-MM-DD` date, else `Future` if strictly later
/// than today, else `Implausible` if the year gap exceeds
/// [`MAX_PLAUSIBLE_YEARS`].
///
/// The year gap deliberately compares calendar years only, not exact ages:
/// someone born in December 150 years ago still passes in January.
pub struct BirthDateCheck;

impl FieldCheck for BirthDateCheck {
    fn field(&self) -> FieldId {
        FieldId::BirthDate
    }

    fn check(&self, form: &Submission, today: NaiveDate) -> Option<Diagnostic> {
        let raw = form.birth_date.as_str();
        if raw.is_empty() {
            return Some(Diagnostic::new(
                FieldId::BirthDate,
                RuleId::Required,
                "birth date must not be empty",
            ));
        }
        let birth = match parse_birth_date(raw) {
            Ok(date) => date,
            Err(err) => {
                return Some(Diagnostic::new(
                    FieldId::BirthDate,
                    RuleId::InvalidFormat,
                    format!("birth date is invalid: {err}"),
                ));
            }
        };
        if birth > today {
            return Some(Diagnostic::new(
                FieldId::BirthDate,
                RuleId::Future,
                "birth date must not be in the future",
            ));
        }
        if today.year() - birth.year() > MAX_PLAUSIBLE_YEARS {
            return Some(Diagnostic::new(
                FieldId::BirthDate,
                RuleId::Implausible,
                format!("birth date must be within the last {MAX_PLAUSIBLE_YEARS} years"),
            ));
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Gender: Required
// ---------------------------------------------------------------------------

/// Gender rule: `Required` when no option is selected.
pub struct GenderCheck;

impl FieldCheck for GenderCheck {
    fn field(&self) -> FieldId {
        FieldId::Gender
    }

    fn check(&self, form: &Submission, _today: NaiveDate) -> Option<Diagnostic> {
        if form.gender.is_none() {
            return Some(Diagnostic::new(
                FieldId::Gender,
                RuleId::Required,
                "a gender must be selected",
            ));
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Message: Required, TooShort, TooLong
// ---------------------------------------------------------------------------

/// Message rules: `Required` if empty after trimming, else `TooShort`
/// below [`MIN_MESSAGE_CHARS`], else `TooLong` above
/// [`MAX_MESSAGE_CHARS`] characters.
pub struct MessageCheck;

impl FieldCheck for MessageCheck {
    fn field(&self) -> FieldId {
        FieldId::Message
    }

    fn check(&self, form: &Submission, _today: NaiveDate) -> Option<Diagnostic> {
        let message = form.trimmed_message();
        if message.is_empty() {
            return Some(Diagnostic::new(
                FieldId::Message,
                RuleId::Required,
                "message must not be empty",
            ));
        }
        let count = message.chars().count();
        if count < MIN_MESSAGE_CHARS {
            return Some(Diagnostic::new(
                FieldId::Message,
                RuleId::TooShort,
                format!("message must be at least {MIN_MESSAGE_CHARS} characters"),
            ));
        }
        if count > MAX_MESSAGE_CHARS {
            return Some(Diagnostic::new(
                FieldId::Message,
                RuleId::TooLong,
                format!("message must be at most {MAX_MESSAGE_CHARS} characters"),
            ));
        }
        None
    }
}
