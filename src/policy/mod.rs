//! Read policy configuration.
//!
//! Consumers construct a [`Policy`](crate::policy::Policy) via `Default` (legacy,
//! unchecked behavior) or `hardened_preset`, adjust fields, and hand it to
//! [`Reader`](crate::Reader).
//!
//! Submodules:
//! - `config`: policy struct and presets
//! - `types`: the individual knobs

pub mod config;
pub mod types;

pub use config::Policy;
pub use types::{AuditPolicy, Confinement, ErrorMode};
