//! Whole-file text reads relative to a base directory.
//!
//! `read_file_from_dir` is the legacy surface: it joins without any check and turns
//! every failure into an empty string, so a missing file, an unreadable file and an
//! empty file are indistinguishable. `try_read_file_from_dir` performs the same join
//! and read but reports what went wrong.
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::paths::join_unchecked;
use crate::types::errors::ReadError;

/// Map an I/O failure on `path` to a `ReadError`.
pub(crate) fn classify(path: &Path, e: io::Error) -> ReadError {
    match e.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => ReadError::PermissionDenied(path.to_path_buf()),
        io::ErrorKind::InvalidData => ReadError::Decode(path.to_path_buf()),
        io::ErrorKind::InvalidInput => ReadError::InvalidPath(format!("{}: {e}", path.display())),
        _ if path.is_dir() => ReadError::IsDirectory(path.to_path_buf()),
        _ => ReadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    }
}

/// Read the full contents of `path` as UTF-8 text.
///
/// The handle is dropped before returning on every path.
///
/// # Errors
///
/// Returns the classified `ReadError` for open or read failures.
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let f = File::open(path).map_err(|e| classify(path, e))?;
    read_handle(path, f)
}

/// Read the rest of an already-open file as UTF-8 text. `path` is only used to
/// classify failures.
///
/// # Errors
///
/// Returns the classified `ReadError` for read or decode failures.
pub fn read_handle(path: &Path, mut f: File) -> Result<String, ReadError> {
    let mut s = String::new();
    f.read_to_string(&mut s).map_err(|e| classify(path, e))?;
    Ok(s)
}

/// Join `filename` onto `dir_path` without validation and read the result.
///
/// # Errors
///
/// Returns the classified `ReadError` for any failure.
pub fn try_read_file_from_dir(filename: &str, dir_path: &str) -> Result<String, ReadError> {
    read_text(&join_unchecked(dir_path, filename))
}

/// Join `filename` onto `dir_path` without validation and read the result, returning
/// `""` on any failure.
///
/// `filename` may contain `..` or be absolute, so the read can land outside
/// `dir_path` (CWE-22). Use `api::Reader` with a confining policy to prevent that.
#[must_use]
pub fn read_file_from_dir(filename: &str, dir_path: &str) -> String {
    try_read_file_from_dir(filename, dir_path).unwrap_or_default()
}
