/// Input reading for the `guestform` binary: disk files and stdin, with a
/// size cap and UTF-8 validation.
///
/// `guestform-core` never touches the filesystem; every byte the tool
/// consumes arrives through [`read_input`]. A submission is a few hundred
/// bytes of JSON, so the reader stays simple: whole-file reads with an
/// up-front metadata size check, and a single capped read for stdin that
/// detects overflow one byte past the limit.
use std::io::Read as _;
use std::path::Path;

use crate::cli::PathOrStdin;
use crate::error::CliError;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// All failures map to [`CliError`] variants with exit code 2:
/// - file not found / permission denied
/// - file or stdin stream exceeds `max_size`
/// - invalid UTF-8 (with the byte offset of the first bad sequence)
/// - any other I/O error
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }
}

// ---------------------------------------------------------------------------
// Disk files
// ---------------------------------------------------------------------------

/// Reads a disk file, rejecting it on size before any bytes are read.
fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let meta = std::fs::metadata(path).map_err(|e| io_error_to_cli(&e, path))?;
    if meta.len() > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(meta.len()),
        });
    }
    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    bytes_to_string(bytes, &path.display().to_string())
}

/// Maps a `std::io::Error` arising from a disk-file operation to a [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    if e.kind() == std::io::ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if e.kind() == std::io::ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Stdin
// ---------------------------------------------------------------------------

/// Reads stdin to the end, holding the lock once for the whole read.
///
/// The cap is `max_size + 1` bytes: receiving that extra byte proves the
/// stream is over the limit without buffering past the cap, and without a
/// second read that would need the lock again.
fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let mut buf: Vec<u8> = Vec::new();
    std::io::stdin()
        .lock()
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 > max_size {
        return Err(CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: max_size,
            actual: None,
        });
    }

    bytes_to_string(buf, "-")
}

// ---------------------------------------------------------------------------
// UTF-8 conversion
// ---------------------------------------------------------------------------

/// Converts a byte buffer to a `String` in place, reporting the byte offset
/// of the first invalid sequence on failure.
fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
