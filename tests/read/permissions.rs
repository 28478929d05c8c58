//! Permission-denied handling. Skipped when running as root.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;

use dirread::{read_file_from_dir, try_read_file_from_dir, ErrorId, ReadError};

use crate::helpers::testroot::{running_as_root, TestRoot};

#[test]
fn unreadable_file_is_permission_denied() {
    if running_as_root() {
        return;
    }
    let root = TestRoot::new();
    let p = root.write_in_base("locked", b"no peeking");
    std::fs::set_permissions(&p, std::fs::Permissions::from_mode(0o000)).unwrap();

    let err = try_read_file_from_dir("locked", &root.base_str()).unwrap_err();
    assert!(matches!(err, ReadError::PermissionDenied(_)), "got {err:?}");
    assert_eq!(err.id(), ErrorId::E_PERMISSION);
    assert_eq!(read_file_from_dir("locked", &root.base_str()), "");

    std::fs::set_permissions(&p, std::fs::Permissions::from_mode(0o600)).unwrap();
}
