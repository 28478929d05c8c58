//! Open a file beneath a directory handle without following symlinks.
//!
//! The base directory is opened once with `O_DIRECTORY | O_NOFOLLOW`. Each
//! intermediate component is then opened relative to the previous handle with the
//! same flags, and the final component with `O_NOFOLLOW`. The confinement check and
//! the open are the same sequence of syscalls, so swapping a component for a symlink
//! mid-read cannot redirect it.
use std::ffi::OsStr;
use std::fs::File;
use std::path::{Component, Path};

use rustix::fd::OwnedFd;
use rustix::fs::{openat, statat, AtFlags, FileType, Mode, OFlags, CWD};
use rustix::io::Errno;

use super::read::classify;
use crate::types::errors::ReadError;

fn errno_to_io(e: Errno) -> std::io::Error {
    std::io::Error::from_raw_os_error(e.raw_os_error())
}

/// Open a directory with `O_DIRECTORY | O_NOFOLLOW`.
///
/// # Errors
///
/// Returns an IO error if the directory cannot be opened.
pub fn open_dir_nofollow(dir: &Path) -> std::io::Result<OwnedFd> {
    openat(
        CWD,
        dir,
        OFlags::RDONLY | OFlags::DIRECTORY | OFlags::CLOEXEC | OFlags::NOFOLLOW,
        Mode::empty(),
    )
    .map_err(errno_to_io)
}

/// Open `rel` beneath `root`. `rel` must consist of normal components only.
///
/// # Errors
///
/// * `Escape` when any component below `root` is a symlink.
/// * `IsDirectory` when `rel` is empty.
/// * The classified open error otherwise (for example `NotFound`).
pub fn open_file_beneath(root: &Path, rel: &Path) -> Result<File, ReadError> {
    let full = root.join(rel);
    let segs = rel
        .components()
        .map(|c| match c {
            Component::Normal(s) => Ok(s),
            _ => Err(ReadError::InvalidPath(format!(
                "unsupported component in {}",
                rel.display()
            ))),
        })
        .collect::<Result<Vec<&OsStr>, ReadError>>()?;
    let Some((last, dirs)) = segs.split_last() else {
        return Err(ReadError::IsDirectory(full));
    };

    let mut dirfd = open_dir_nofollow(root).map_err(|e| classify(root, e))?;
    for seg in dirs {
        let next = openat(
            &dirfd,
            *seg,
            OFlags::RDONLY | OFlags::DIRECTORY | OFlags::CLOEXEC | OFlags::NOFOLLOW,
            Mode::empty(),
        )
        .map_err(|e| refuse_or_classify(&dirfd, seg, root, &full, e))?;
        dirfd = next;
    }
    let fd = openat(
        &dirfd,
        *last,
        OFlags::RDONLY | OFlags::CLOEXEC | OFlags::NOFOLLOW,
        Mode::empty(),
    )
    .map_err(|e| refuse_or_classify(&dirfd, last, root, &full, e))?;
    Ok(File::from(fd))
}

// A NOFOLLOW open of a symlink fails with ELOOP or ENOTDIR depending on flags; look
// at the entry itself to tell a refused symlink from an ordinary failure.
fn refuse_or_classify(dirfd: &OwnedFd, seg: &OsStr, root: &Path, full: &Path, e: Errno) -> ReadError {
    let is_link = statat(dirfd, seg, AtFlags::SYMLINK_NOFOLLOW)
        .map(|st| FileType::from_raw_mode(st.st_mode) == FileType::Symlink)
        .unwrap_or(false);
    if is_link {
        ReadError::Escape {
            base: root.to_path_buf(),
            path: full.to_path_buf(),
        }
    } else {
        classify(full, errno_to_io(e))
    }
}
