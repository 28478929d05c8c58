//! Deterministic UUIDv5 identifiers for read requests.
//!
//! The same `(dir, filename)` pair always yields the same `read_id`, so facts from
//! repeated reads of one request can be correlated across runs.
use uuid::Uuid;

use crate::constants::NS_TAG;

fn namespace() -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, NS_TAG.as_bytes())
}

/// Compute the read ID for a request. Inputs are taken verbatim, before any join.
#[must_use]
pub fn read_id(dir: &str, filename: &str) -> Uuid {
    // NUL cannot appear in either side of a successful read, so it separates them unambiguously.
    let s = format!("{dir}\0{filename}");
    Uuid::new_v5(&namespace(), s.as_bytes())
}
