#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::{Datelike as _, Duration, NaiveDate};
use proptest::prelude::*;

use crate::form::{FieldId, Gender, Submission};

use super::checks::{MAX_MESSAGE_CHARS, MAX_PLAUSIBLE_YEARS};
use super::{RuleId, build_registry, validate};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A fixed "today" so tests are deterministic regardless of wall clock.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 25).expect("fixed date")
}

/// A submission that passes every rule.
fn valid_submission() -> Submission {
    Submission {
        name: "Budi".to_owned(),
        birth_date: "2006-08-25".to_owned(),
        gender: Some(Gender::Male),
        message: "Fifteen chars!!".to_owned(),
    }
}

// ---------------------------------------------------------------------------
// All rules pass
// ---------------------------------------------------------------------------

#[test]
fn valid_submission_produces_no_diagnostics() {
    let result = validate(&valid_submission(), today());
    assert!(result.is_valid(), "diagnostics: {:?}", result.diagnostics);
    assert!(result.is_empty());
    assert_eq!(result.len(), 0);
}

#[test]
fn registry_covers_every_field_in_declared_order() {
    let fields: Vec<FieldId> = build_registry().iter().map(|c| c.field()).collect();
    assert_eq!(fields, FieldId::ALL.to_vec());
}

#[test]
fn checks_report_on_their_own_field() {
    let all_failing = Submission {
        name: String::new(),
        birth_date: "soon".to_owned(),
        gender: None,
        message: "hi".to_owned(),
    };
    for check in build_registry() {
        let diag = check.check(&all_failing, today()).expect("every field fails");
        assert_eq!(diag.field, check.field());
    }
}

#[test]
fn validate_is_idempotent_on_valid_input() {
    let form = valid_submission();
    assert_eq!(validate(&form, today()), validate(&form, today()));
}

// ---------------------------------------------------------------------------
// Name rules
// ---------------------------------------------------------------------------

#[test]
fn empty_name_is_required() {
    let form = Submission {
        name: String::new(),
        ..valid_submission()
    };
    let result = validate(&form, today());
    assert_eq!(
        result.diagnostics.first().map(|d| d.rule),
        Some(RuleId::Required)
    );
    assert_eq!(result.len(), 1, "only the name field should fail");
}

#[test]
fn whitespace_only_name_is_required_not_too_short() {
    let form = Submission {
        name: "   ".to_owned(),
        ..valid_submission()
    };
    let result = validate(&form, today());
    assert_eq!(result.by_rule(RuleId::Required).count(), 1);
    assert_eq!(result.by_rule(RuleId::TooShort).count(), 0);
}

#[test]
fn one_char_name_is_too_short_only() {
    let form = Submission {
        name: "A".to_owned(),
        ..valid_submission()
    };
    let result = validate(&form, today());
    assert_eq!(result.len(), 1);
    let diag = result.diagnostics.first().expect("one diagnostic");
    assert_eq!(diag.field, FieldId::Name);
    assert_eq!(diag.rule, RuleId::TooShort);
}

#[test]
fn two_char_name_passes() {
    let form = Submission {
        name: "Bo".to_owned(),
        ..valid_submission()
    };
    assert!(validate(&form, today()).is_valid());
}

#[test]
fn multibyte_name_counts_characters_not_bytes() {
    // "Bü" is 3 bytes but 2 characters; it must pass.
    let form = Submission {
        name: "Bü".to_owned(),
        ..valid_submission()
    };
    assert!(validate(&form, today()).is_valid());
}

// ---------------------------------------------------------------------------
// Birth-date rules
// ---------------------------------------------------------------------------

#[test]
fn empty_birth_date_is_required() {
    let form = Submission {
        birth_date: String::new(),
        ..valid_submission()
    };
    let result = validate(&form, today());
    assert!(
        result.message_for(FieldId::BirthDate).is_some(),
        "birth date should carry a message"
    );
    assert_eq!(result.by_rule(RuleId::Required).count(), 1);
}

#[test]
fn tomorrow_is_future() {
    let tomorrow = today() + Duration::days(1);
    let form = Submission {
        birth_date: tomorrow.format("%Y-%m-%d").to_string(),
        ..valid_submission()
    };
    let result = validate(&form, today());
    assert_eq!(result.len(), 1);
    assert_eq!(
        result.diagnostics.first().map(|d| d.rule),
        Some(RuleId::Future)
    );
}

#[test]
fn today_itself_is_not_future() {
    let form = Submission {
        birth_date: today().format("%Y-%m-%d").to_string(),
        ..valid_submission()
    };
    assert!(validate(&form, today()).is_valid());
}

#[test]
fn two_hundred_years_ago_is_implausible() {
    let form = Submission {
        birth_date: "1826-08-25".to_owned(),
        ..valid_submission()
    };
    let result = validate(&form, today());
    assert_eq!(
        result.diagnostics.first().map(|d| d.rule),
        Some(RuleId::Implausible)
    );
}

#[test]
fn exactly_at_the_plausibility_bound_passes() {
    // Year gap of exactly MAX_PLAUSIBLE_YEARS is allowed; only a strictly
    // larger gap fails.
    let year = today().year() - MAX_PLAUSIBLE_YEARS;
    let form = Submission {
        birth_date: format!("{year}-01-01"),
        ..valid_submission()
    };
    assert!(validate(&form, today()).is_valid());
}

#[test]
fn garbage_birth_date_is_invalid_format() {
    let form = Submission {
        birth_date: "not-a-date".to_owned(),
        ..valid_submission()
    };
    let result = validate(&form, today());
    assert_eq!(
        result.diagnostics.first().map(|d| d.rule),
        Some(RuleId::InvalidFormat)
    );
}

#[test]
fn impossible_calendar_day_is_invalid_format() {
    let form = Submission {
        birth_date: "2001-02-30".to_owned(),
        ..valid_submission()
    };
    let result = validate(&form, today());
    assert_eq!(
        result.diagnostics.first().map(|d| d.rule),
        Some(RuleId::InvalidFormat)
    );
}

// ---------------------------------------------------------------------------
// Gender rule
// ---------------------------------------------------------------------------

#[test]
fn missing_gender_is_required() {
    let form = Submission {
        gender: None,
        ..valid_submission()
    };
    let result = validate(&form, today());
    assert_eq!(result.len(), 1);
    let diag = result.diagnostics.first().expect("one diagnostic");
    assert_eq!(diag.field, FieldId::Gender);
    assert_eq!(diag.rule, RuleId::Required);
}

// ---------------------------------------------------------------------------
// Message rules
// ---------------------------------------------------------------------------

#[test]
fn two_char_message_is_too_short() {
    let form = Submission {
        message: "hi".to_owned(),
        ..valid_submission()
    };
    let result = validate(&form, today());
    assert_eq!(
        result.diagnostics.first().map(|d| d.rule),
        Some(RuleId::TooShort)
    );
}

#[test]
fn message_of_501_chars_is_too_long() {
    let form = Submission {
        message: "x".repeat(MAX_MESSAGE_CHARS + 1),
        ..valid_submission()
    };
    let result = validate(&form, today());
    assert_eq!(
        result.diagnostics.first().map(|d| d.rule),
        Some(RuleId::TooLong)
    );
}

#[test]
fn message_of_exactly_500_chars_passes() {
    let form = Submission {
        message: "x".repeat(MAX_MESSAGE_CHARS),
        ..valid_submission()
    };
    assert!(validate(&form, today()).is_valid());
}

#[test]
fn message_of_exactly_10_chars_passes() {
    let form = Submission {
        message: "x".repeat(10),
        ..valid_submission()
    };
    assert!(validate(&form, today()).is_valid());
}

// ---------------------------------------------------------------------------
// First-failure-wins and field independence
// ---------------------------------------------------------------------------

#[test]
fn empty_message_reports_required_not_too_short() {
    let form = Submission {
        message: "  ".to_owned(),
        ..valid_submission()
    };
    let result = validate(&form, today());
    assert_eq!(
        result.message_for(FieldId::Message),
        Some("message must not be empty")
    );
}

#[test]
fn every_field_failing_yields_one_diagnostic_each_in_order() {
    let form = Submission {
        name: String::new(),
        birth_date: "soon".to_owned(),
        gender: None,
        message: "hi".to_owned(),
    };
    let result = validate(&form, today());
    let fields: Vec<FieldId> = result.diagnostics.iter().map(|d| d.field).collect();
    assert_eq!(
        fields,
        vec![
            FieldId::Name,
            FieldId::BirthDate,
            FieldId::Gender,
            FieldId::Message
        ]
    );
}

#[test]
fn one_field_failing_does_not_affect_others() {
    let form = Submission {
        name: "A".to_owned(),
        ..valid_submission()
    };
    let result = validate(&form, today());
    assert!(result.message_for(FieldId::BirthDate).is_none());
    assert!(result.message_for(FieldId::Gender).is_none());
    assert!(result.message_for(FieldId::Message).is_none());
}

#[test]
fn diagnostic_display_includes_field_code() {
    let form = Submission {
        name: "A".to_owned(),
        ..valid_submission()
    };
    let result = validate(&form, today());
    let line = result.diagnostics.first().expect("one diagnostic").to_string();
    assert!(line.starts_with("[E] name:"), "line: {line}");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

prop_compose! {
    fn arb_submission()(
        name in ".{0,12}",
        birth_date in prop_oneof![
            Just(String::new()),
            Just("2006-08-25".to_owned()),
            Just("2999-01-01".to_owned()),
            Just("1700-01-01".to_owned()),
            ".{0,12}",
        ],
        gender in prop_oneof![
            Just(None),
            Just(Some(Gender::Male)),
            Just(Some(Gender::Female)),
        ],
        message in ".{0,24}",
    ) -> Submission {
        Submission { name, birth_date, gender, message }
    }
}

proptest! {
    /// Unchanged input always produces an identical result.
    #[test]
    fn validate_twice_is_identical(form in arb_submission()) {
        prop_assert_eq!(validate(&form, today()), validate(&form, today()));
    }

    /// Each field records at most one diagnostic per pass.
    #[test]
    fn at_most_one_diagnostic_per_field(form in arb_submission()) {
        let result = validate(&form, today());
        for field in FieldId::ALL {
            let count = result.diagnostics.iter().filter(|d| d.field == field).count();
            prop_assert!(count <= 1, "field {field} produced {count} diagnostics");
        }
    }

    /// Diagnostics always appear in declared field order.
    #[test]
    fn diagnostics_follow_declared_field_order(form in arb_submission()) {
        let result = validate(&form, today());
        let positions: Vec<usize> = result
            .diagnostics
            .iter()
            .map(|d| FieldId::ALL.iter().position(|f| *f == d.field).unwrap_or(usize::MAX))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
