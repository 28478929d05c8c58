//! `ErrorMode::Suppress` versus `ErrorMode::Propagate`.

use dirread::logging::JsonlSink;
use dirread::policy::{Confinement, ErrorMode, Policy};
use dirread::{ErrorId, Reader};

use crate::helpers::testroot::TestRoot;

#[test]
fn default_policy_behaves_like_legacy() {
    let root = TestRoot::new();
    root.write_in_base("f", b"hello");
    root.write_outside("secret.txt", b"leaked");
    let r = Reader::new(JsonlSink, JsonlSink, Policy::default());
    let base = root.base_str();
    assert_eq!(r.read("f", &base).unwrap(), "hello");
    assert_eq!(r.read("missing", &base).unwrap(), "");
    assert_eq!(r.read("../secret.txt", &base).unwrap(), "leaked");
    assert_eq!(
        r.read("f", &base).unwrap(),
        dirread::read_file_from_dir("f", &base)
    );
}

#[test]
fn suppress_hides_policy_refusals() {
    let root = TestRoot::new();
    root.write_outside("secret.txt", b"leaked");
    let mut policy = Policy::default();
    policy.confinement = Confinement::Canonical;
    let r = Reader::new(JsonlSink, JsonlSink, policy);
    assert_eq!(r.read("../secret.txt", &root.base_str()).unwrap(), "");
}

#[test]
fn propagate_reports_missing() {
    let root = TestRoot::new();
    let mut policy = Policy::default();
    policy.errors = ErrorMode::Propagate;
    let r = Reader::new(JsonlSink, JsonlSink, policy);
    assert_eq!(r.policy().errors, ErrorMode::Propagate);
    let err = r.read("missing", &root.base_str()).unwrap_err();
    assert_eq!(err.id(), ErrorId::E_NOT_FOUND);
}
