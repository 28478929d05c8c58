//! Error types produced while validating paths against a base directory.
use std::path::PathBuf;

use thiserror::Error;

/// Why a candidate path was refused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PathErrorKind {
    /// The root or candidate cannot be interpreted (relative root, prefix component).
    #[error("invalid path")]
    InvalidPath,
    /// The candidate contains a `..` component.
    #[error("parent traversal")]
    Traversal,
    /// The candidate resolves outside the root.
    #[error("path escapes root")]
    Escape,
}

/// Structured error with a kind and human message.
#[derive(Debug, Error)]
#[error("{kind}: {msg}")]
pub struct PathError {
    pub kind: PathErrorKind,
    pub msg: String,
}

impl PathError {
    pub(crate) fn new(kind: PathErrorKind, msg: impl Into<String>) -> Self {
        Self { kind, msg: msg.into() }
    }

    /// True when the refusal is a confinement decision rather than a malformed input.
    #[must_use]
    pub const fn is_policy(&self) -> bool {
        matches!(self.kind, PathErrorKind::Traversal | PathErrorKind::Escape)
    }
}

/// Convenient alias for results returning a `PathError`.
pub type Result<T> = std::result::Result<T, PathError>;

/// Typed outcome of a failed read. Each variant names the path it concerns.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("is a directory: {}", .0.display())]
    IsDirectory(PathBuf),
    #[error("contents are not valid UTF-8: {}", .0.display())]
    Decode(PathBuf),
    #[error("invalid path: {0}")]
    InvalidPath(String),
    /// A symlink below `base` stood on the way to `path`.
    #[error("{} is not confined to {}", .path.display(), .base.display())]
    Escape { base: PathBuf, path: PathBuf },
    /// The filename text was refused before any lookup below the base.
    #[error("policy violation: {0}")]
    Policy(String),
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<PathError> for ReadError {
    fn from(e: PathError) -> Self {
        if e.is_policy() {
            ReadError::Policy(e.to_string())
        } else {
            ReadError::InvalidPath(e.msg)
        }
    }
}
