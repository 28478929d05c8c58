//! Path construction for reads.

use std::path::{Path, PathBuf};

/// Join `filename` onto `dir` with the platform's normal join rules.
///
/// Nothing is validated: `..` segments are kept and an absolute `filename` replaces
/// `dir` entirely, so the result may point anywhere on the filesystem.
#[must_use]
pub fn join_unchecked(dir: impl AsRef<Path>, filename: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(filename)
}
