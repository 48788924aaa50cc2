#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod date;
pub mod form;
pub mod greeting;
pub mod output;
pub mod pipeline;
pub mod validation;

pub use date::{DateError, format_display, parse_birth_date};
pub use form::{FieldId, Gender, Submission};
pub use greeting::{DEFAULT_NAME, Greeter, KeyValueStore, MemoryStore, NAME_KEY, StoreError};
pub use output::{OutputError, OutputModel};
pub use pipeline::{ErrorSink, InputSurface, Notifier, SUCCESS_NOTICE, SubmitOutcome, submit};
pub use validation::{
    Diagnostic, FieldCheck, RuleId, ValidationResult, build_registry, validate,
};

/// Returns the current version of the guestform-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
