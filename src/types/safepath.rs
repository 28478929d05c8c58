use std::path::{Component, Path, PathBuf};

use super::errors::{PathError, PathErrorKind, Result};

/// A path proven, lexically, to live under `root`.
///
/// Construction rejects `..` components, absolute candidates outside the root and
/// platform prefixes. Symlinks are not inspected; `Confinement::Canonical` refuses them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SafePath {
    root: PathBuf,
    rel: PathBuf,
}

impl SafePath {
    /// Build a `SafePath` from an absolute `root` and a `candidate` filename.
    ///
    /// `candidate` may be relative (taken as relative to `root`) or absolute, in which
    /// case it must already start with `root`. `.` components are dropped.
    ///
    /// # Errors
    ///
    /// * `InvalidPath` when `root` is relative or `candidate` carries a root/prefix
    ///   component after stripping.
    /// * `Traversal` when `candidate` contains `..`.
    /// * `Escape` when an absolute `candidate` is outside `root`.
    pub fn from_rooted(root: &Path, candidate: &Path) -> Result<Self> {
        if !root.is_absolute() {
            return Err(PathError::new(
                PathErrorKind::InvalidPath,
                format!("root must be absolute: {}", root.display()),
            ));
        }
        let effective = if candidate.is_absolute() {
            candidate.strip_prefix(root).map_err(|_| {
                PathError::new(
                    PathErrorKind::Escape,
                    format!("{} is outside {}", candidate.display(), root.display()),
                )
            })?
        } else {
            candidate
        };

        let mut rel = PathBuf::new();
        for seg in effective.components() {
            match seg {
                Component::CurDir => {}
                Component::Normal(p) => rel.push(p),
                Component::ParentDir => {
                    return Err(PathError::new(
                        PathErrorKind::Traversal,
                        format!("dotdot in {}", candidate.display()),
                    ));
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(PathError::new(
                        PathErrorKind::InvalidPath,
                        format!("unsupported component in {}", candidate.display()),
                    ));
                }
            }
        }
        Ok(SafePath {
            root: root.to_path_buf(),
            rel,
        })
    }

    /// Full path: root joined with the relative part.
    #[must_use]
    pub fn as_path(&self) -> PathBuf {
        self.root.join(&self.rel)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn rel(&self) -> &Path {
        &self.rel
    }
}
