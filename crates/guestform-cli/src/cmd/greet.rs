//! Implementation of `guestform greet [NAME] --store <path>`.
//!
//! The greeting name lives in a JSON object on disk, read through the
//! core's key-value capability. A missing store file means defaults; the
//! file is created on the first write.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use guestform_core::{Greeter, KeyValueStore, StoreError};

use crate::error::CliError;

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

/// A [`KeyValueStore`] persisted as a flat JSON object on disk.
///
/// The whole object is loaded at open and rewritten on every `set`; the
/// store holds exactly one small entry, so this is not a throughput
/// concern. `BTreeMap` keeps the serialized key order stable.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`, treating a missing file as empty.
    ///
    /// # Errors
    ///
    /// - [`CliError::ParseFailed`] when the file exists but is not a JSON
    ///   object of strings.
    /// - [`CliError::IoError`] when the file exists but cannot be read.
    pub fn open(path: &Path) -> Result<Self, CliError> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let entries = serde_json::from_str(&text).map_err(|e| CliError::ParseFailed {
                    detail: format!(
                        "{}: line {}, column {}: {e}",
                        path.display(),
                        e.line(),
                        e.column()
                    ),
                })?;
                Ok(Self {
                    path: path.to_path_buf(),
                    entries,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self {
                path: path.to_path_buf(),
                entries: BTreeMap::new(),
            }),
            Err(e) => Err(CliError::IoError {
                source: path.display().to_string(),
                detail: e.to_string(),
            }),
        }
    }

    /// Rewrites the store file from the in-memory entries.
    fn persist(&self) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StoreError::new(e.to_string()))?;
        std::fs::write(&self.path, text).map_err(|e| StoreError::new(e.to_string()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.persist()
    }
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the `greet` command.
///
/// With a `name` argument the name is remembered first; either way the
/// greeting for the current name is printed to stdout.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] / [`CliError::IoError`] when the store
///   file exists but cannot be read or parsed.
/// - [`CliError::StoreWriteFailed`] when the store cannot be written.
pub fn run(name: Option<&str>, store_path: &Path) -> Result<(), CliError> {
    let store = JsonFileStore::open(store_path)?;
    let mut greeter = Greeter::new(store);

    if let Some(name) = name {
        greeter
            .remember(name)
            .map_err(|e| CliError::StoreWriteFailed {
                path: store_path.to_path_buf(),
                detail: e.message,
            })?;
    }

    println!("{}", greeter.greeting());
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
