//! SafePath construction against real temporary roots.

use std::path::Path;

use dirread::types::errors::PathErrorKind;
use dirread::types::safepath::SafePath;

#[test]
fn relative_candidate_joins_root() {
    let root = tempfile::tempdir().unwrap();
    let sp = SafePath::from_rooted(root.path(), Path::new("usr/share/doc")).expect("ok");
    assert_eq!(sp.rel(), Path::new("usr/share/doc"));
    assert_eq!(sp.as_path(), root.path().join("usr/share/doc"));
}

#[test]
fn authorized_keys_climb_is_traversal() {
    let root = tempfile::tempdir().unwrap();
    let err = SafePath::from_rooted(root.path(), Path::new("../../.ssh/authorized_keys"))
        .expect_err("must refuse");
    assert_eq!(err.kind, PathErrorKind::Traversal);
}

#[test]
fn empty_candidate_is_the_root() {
    let root = tempfile::tempdir().unwrap();
    let sp = SafePath::from_rooted(root.path(), Path::new("")).expect("empty path ok");
    assert_eq!(sp.rel(), Path::new(""));
}

#[test]
fn filesystem_root_as_candidate_is_refused() {
    let root = tempfile::tempdir().unwrap();
    assert!(SafePath::from_rooted(root.path(), Path::new("/")).is_err());
}

#[test]
fn unicode_segments_ok() {
    let root = tempfile::tempdir().unwrap();
    let sp = SafePath::from_rooted(root.path(), Path::new("notes/日本/ü.txt")).expect("unicode ok");
    assert_eq!(sp.rel(), Path::new("notes/日本/ü.txt"));
}
