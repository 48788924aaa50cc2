/// The raw contact-form submission model.
///
/// [`Submission`] is the root type for one submission attempt: the field
/// values exactly as read from the input surface, before any rule has run.
/// The validation engine never mutates a submission; trimming happens at
/// rule-evaluation and output-building time so the raw input survives
/// untouched for re-reads.
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FieldId
// ---------------------------------------------------------------------------

/// Identifier for one validated form field.
///
/// The variant order here is load-bearing: fields are validated in this
/// declared order, and diagnostics are emitted in the same order. Use
/// [`FieldId::code`] for the stable string form used in serialized
/// diagnostics and error-sink keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// The sender's name.
    Name,
    /// The sender's birth date (`YYYY-MM-DD` string).
    BirthDate,
    /// The single-select gender choice.
    Gender,
    /// The free-text message body.
    Message,
}

impl FieldId {
    /// Returns the stable identifier string for this field.
    pub fn code(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::BirthDate => "birth_date",
            Self::Gender => "gender",
            Self::Message => "message",
        }
    }

    /// All fields in declared validation order.
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::BirthDate,
        FieldId::Gender,
        FieldId::Message,
    ];
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// The single-select gender choice.
///
/// `None` at the [`Submission`] level means no option was selected; this
/// type only represents an actual selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the presentation label used in the output model.
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// One submission attempt's raw field values.
///
/// Deserialise from JSON with `serde_json::from_str`; the CLI feeds files
/// and stdin through exactly that path. All string fields carry the input
/// verbatim, leading and trailing whitespace included, so validation always
/// sees what the user actually typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Submission {
    /// The sender's name. Trimmed before rule evaluation.
    #[serde(default)]
    pub name: String,

    /// The birth date as a raw `YYYY-MM-DD` string. Never trimmed; the
    /// shape check rejects stray whitespace along with everything else.
    #[serde(default)]
    pub birth_date: String,

    /// The selected gender, or `None` when nothing was selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// The free-text message body. Trimmed before rule evaluation.
    #[serde(default)]
    pub message: String,
}

impl Submission {
    /// Returns the trimmed name.
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    /// Returns the trimmed message body.
    pub fn trimmed_message(&self) -> &str {
        self.message.trim()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
