//! Facts emitted by `Reader::read`.

use serde_json::json;

use dirread::logging::TS_ZERO;
use dirread::policy::{Confinement, ErrorMode, Policy};
use dirread::types::ids::read_id;
use dirread::Reader;

use crate::helpers::emitter::{TestAudit, TestEmitter};
use crate::helpers::testroot::TestRoot;

#[test]
fn success_emits_attempt_and_result() {
    let root = TestRoot::new();
    root.write_in_base("f", b"hello");
    let facts = TestEmitter::default();
    let r = Reader::new(facts.clone(), TestAudit::default(), Policy::default());
    let base = root.base_str();
    r.read("f", &base).unwrap();

    let events = facts.events.lock().unwrap().clone();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].0, "dirread");
    assert_eq!(events[0].1, "read.attempt");
    assert_eq!(events[1].1, "read.result");
    assert_eq!(events[1].2, "success");

    let result = &events[1].3;
    assert_eq!(result["bytes"], json!(5));
    assert_eq!(result["schema_version"], json!(1));
    assert_eq!(result["read_id"], json!(read_id(&base, "f").to_string()));
    assert!(result.get("content_hash").is_none());

    let attempt = &events[0].3;
    assert_eq!(attempt["filename"], json!("f"));
    assert_eq!(attempt["base_dir"], json!(base));
    assert_eq!(attempt["confinement"], json!("Unchecked"));
}

#[test]
fn failure_carries_error_id_and_exit_code() {
    let root = TestRoot::new();
    let facts = TestEmitter::default();
    let r = Reader::new(facts.clone(), TestAudit::default(), Policy::default());
    assert_eq!(r.read("missing", &root.base_str()).unwrap(), "");

    let results = facts.fields_for("read.result");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["decision"], json!("failure"));
    assert_eq!(results[0]["error_id"], json!("E_NOT_FOUND"));
    assert_eq!(results[0]["exit_code"], json!(10));
}

#[test]
fn hash_content_records_sha256() {
    let root = TestRoot::new();
    root.write_in_base("f", b"hello");
    let facts = TestEmitter::default();
    let mut policy = Policy::default();
    policy.audit.hash_content = true;
    let r = Reader::new(facts.clone(), TestAudit::default(), policy);
    r.read("f", &root.base_str()).unwrap();

    let results = facts.fields_for("read.result");
    assert_eq!(
        results[0]["content_hash"],
        json!("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824")
    );
    assert_eq!(results[0]["hash_alg"], json!("sha256"));
}

#[test]
fn redaction_is_stable_across_runs() {
    let root = TestRoot::new();
    root.write_in_base("f", b"hello");
    let mut policy = Policy::hardened_preset();
    policy.audit.redact = true;

    let run = || {
        let facts = TestEmitter::default();
        let r = Reader::new(facts.clone(), TestAudit::default(), policy);
        r.read("f", &root.base_str()).unwrap();
        facts.fields_for("read.result")
    };
    let a = run();
    let b = run();
    assert_eq!(a, b);
    assert_eq!(a[0]["ts"], json!(TS_ZERO));
    assert_eq!(a[0]["content_hash"], json!("***"));
    assert!(a[0].get("duration_ms").is_none());
}

#[test]
fn refused_read_reports_requested_path() {
    let root = TestRoot::new();
    let facts = TestEmitter::default();
    let mut policy = Policy::default();
    policy.confinement = Confinement::Lexical;
    policy.errors = ErrorMode::Propagate;
    let r = Reader::new(facts.clone(), TestAudit::default(), policy);
    assert!(r.read("../x", &root.base_str()).is_err());

    let results = facts.fields_for("read.result");
    assert_eq!(results[0]["error_id"], json!("E_POLICY"));
    assert_eq!(results[0]["decision"], json!("warn"));
    let events = facts.events.lock().unwrap();
    assert_eq!(events.last().unwrap().2, "warn");
    drop(events);
    let path = results[0]["path"].as_str().unwrap();
    assert!(path.ends_with("../x"), "{path}");
}
