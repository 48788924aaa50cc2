/// Diagnostic formatting: human-readable and JSON (NDJSON) modes.
///
/// This module implements two output strategies for
/// [`guestform_core::Diagnostic`] values:
///
/// - **Human mode** (default): one line per diagnostic, colored red on
///   stderr. Colors are disabled when `--no-color` is set, the `NO_COLOR`
///   environment variable is present (per <https://no-color.org>), or
///   stderr is not a TTY.
/// - **JSON mode**: each diagnostic is serialized as a single-line JSON
///   object (NDJSON) to stderr.
use std::io::{IsTerminal as _, Write};

use guestform_core::Diagnostic;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
///
/// Colors are disabled when any of the following conditions hold:
/// - `no_color_flag` is `true` (the `--no-color` CLI flag was passed).
/// - The `NO_COLOR` environment variable is present (any value).
/// - stderr is not a TTY (e.g. the output is piped to a file).
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

// ---------------------------------------------------------------------------
// ANSI escape sequences
// ---------------------------------------------------------------------------

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatMode and FormatterConfig
// ---------------------------------------------------------------------------

/// Output strategy selected by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// One colored line per diagnostic.
    Human,
    /// One NDJSON object per diagnostic.
    Json,
}

/// Configuration for the diagnostic formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    ///
    /// `no_color_flag` is the `--no-color` boolean. Color detection also
    /// checks the `NO_COLOR` env var and the stderr TTY state.
    pub fn from_flags(no_color_flag: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
        }
    }
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// Writes one diagnostic to `out` in the selected mode.
///
/// # Errors
///
/// Propagates any `std::io::Error` from the underlying writer.
pub fn write_diagnostic(
    out: &mut dyn Write,
    diag: &Diagnostic,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => {
            if config.colors {
                writeln!(out, "{ANSI_RED}{diag}{ANSI_RESET}")
            } else {
                writeln!(out, "{diag}")
            }
        }
        FormatMode::Json => {
            let obj = serde_json::json!({
                "field": diag.field.code(),
                "rule": diag.rule.code(),
                "message": diag.message,
            });
            writeln!(out, "{obj}")
        }
    }
}

/// Writes the end-of-pass summary line to `out`.
///
/// # Errors
///
/// Propagates any `std::io::Error` from the underlying writer.
pub fn write_summary(
    out: &mut dyn Write,
    error_count: usize,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => {
            let noun = if error_count == 1 { "error" } else { "errors" };
            if config.colors && error_count == 0 {
                writeln!(out, "{ANSI_GREEN}{error_count} {noun}{ANSI_RESET}")
            } else if config.colors {
                writeln!(out, "{ANSI_RED}{error_count} {noun}{ANSI_RESET}")
            } else {
                writeln!(out, "{error_count} {noun}")
            }
        }
        FormatMode::Json => {
            let obj = serde_json::json!({ "errors": error_count });
            writeln!(out, "{obj}")
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use guestform_core::{FieldId, RuleId};

    use super::*;

    fn no_colors() -> FormatterConfig {
        FormatterConfig { colors: false }
    }

    fn sample() -> Diagnostic {
        Diagnostic::new(FieldId::Name, RuleId::TooShort, "name must be at least 2 characters")
    }

    #[test]
    fn human_line_is_the_display_form() {
        let mut buf: Vec<u8> = Vec::new();
        write_diagnostic(&mut buf, &sample(), FormatMode::Human, &no_colors()).expect("write");
        let line = String::from_utf8(buf).expect("utf8");
        assert_eq!(line, "[E] name: name must be at least 2 characters\n");
    }

    #[test]
    fn human_colored_line_wraps_in_red() {
        let config = FormatterConfig { colors: true };
        let mut buf: Vec<u8> = Vec::new();
        write_diagnostic(&mut buf, &sample(), FormatMode::Human, &config).expect("write");
        let line = String::from_utf8(buf).expect("utf8");
        assert!(line.starts_with("\x1b[31m"), "line: {line:?}");
        assert!(line.contains("\x1b[0m"), "line: {line:?}");
    }

    #[test]
    fn json_line_carries_field_rule_message() {
        let mut buf: Vec<u8> = Vec::new();
        write_diagnostic(&mut buf, &sample(), FormatMode::Json, &no_colors()).expect("write");
        let value: serde_json::Value =
            serde_json::from_slice(&buf).expect("one NDJSON object");
        assert_eq!(value["field"], "name");
        assert_eq!(value["rule"], "too-short");
        assert_eq!(value["message"], "name must be at least 2 characters");
    }

    #[test]
    fn human_summary_pluralizes() {
        let mut buf: Vec<u8> = Vec::new();
        write_summary(&mut buf, 1, FormatMode::Human, &no_colors()).expect("write");
        write_summary(&mut buf, 3, FormatMode::Human, &no_colors()).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert_eq!(text, "1 error\n3 errors\n");
    }

    #[test]
    fn json_summary_is_an_object() {
        let mut buf: Vec<u8> = Vec::new();
        write_summary(&mut buf, 2, FormatMode::Json, &no_colors()).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("object");
        assert_eq!(value["errors"], 2);
    }

    #[test]
    fn no_color_flag_disables_colors() {
        assert!(!colors_enabled(true));
    }
}
