//! Shared crate-wide constants for dirread.
//!
//! Centralizes fixed values used by the demonstration entry point and the audit layer.

/// Base directory used by the demonstration entry point in `main.rs`.
pub const DEMO_DIR: &str = "hide0/hide1";

/// Filename used by the demonstration entry point. The two `..` segments climb out of
/// `DEMO_DIR` and reach a file in the parent of the working directory.
pub const DEMO_FILENAME: &str = "../../.ssh/authorized_keys";

/// UUIDv5 namespace tag for deterministic read IDs.
pub const NS_TAG: &str = "https://dirread/read";

/// Subsystem name attached to every emitted fact.
pub const SUBSYSTEM: &str = "dirread";

/// Hash algorithm label recorded next to `content_hash`.
pub const HASH_ALG: &str = "sha256";
