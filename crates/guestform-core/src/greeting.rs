/// The greeting widget's persisted name, behind an explicit key-value
/// capability.
///
/// This is the only durable state in the system: a single string under
/// the key `"userName"`, read once at startup, written on every edit,
/// never deleted. It is unrelated to the validation pipeline. The store
/// is injected so the component never reaches for ad-hoc global state.
use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// A write failure in a [`KeyValueStore`] backend.
///
/// In-memory stores never fail; file-backed stores surface I/O problems
/// through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    /// Human-readable description of the failure.
    pub message: String,
}

impl StoreError {
    /// Constructs a [`StoreError`] from a message string.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store error: {}", self.message)
    }
}

impl std::error::Error for StoreError {}

// ---------------------------------------------------------------------------
// KeyValueStore
// ---------------------------------------------------------------------------

/// Minimal get/set capability over string keys and values.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// [`StoreError`] when the backend cannot persist the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process [`KeyValueStore`] backed by a `HashMap`. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Greeter
// ---------------------------------------------------------------------------

/// The store key holding the greeting name.
pub const NAME_KEY: &str = "userName";

/// The name used when nothing has been stored yet.
pub const DEFAULT_NAME: &str = "Harfi";

/// Renders and remembers the greeting name through an injected store.
#[derive(Debug)]
pub struct Greeter<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Greeter<S> {
    /// Wraps a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the stored name, or [`DEFAULT_NAME`] when absent or blank.
    pub fn name(&self) -> String {
        match self.store.get(NAME_KEY) {
            Some(name) if !name.trim().is_empty() => name,
            Some(_) | None => DEFAULT_NAME.to_owned(),
        }
    }

    /// Remembers a new name.
    ///
    /// Blank input is ignored rather than stored, so the greeting never
    /// addresses nobody; the previously stored name stays in effect.
    ///
    /// # Errors
    ///
    /// [`StoreError`] when the backend cannot persist the write.
    pub fn remember(&mut self, name: &str) -> Result<(), StoreError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        self.store.set(NAME_KEY, trimmed)
    }

    /// Renders the greeting line for the current name.
    pub fn greeting(&self) -> String {
        format!("Hi {}, Welcome To Website", self.name())
    }

    /// Consumes the greeter and returns the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
