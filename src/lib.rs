#![forbid(unsafe_code)]
//! dirread: read a text file relative to a base directory.
//!
//! Two surfaces:
//! - [`read_file_from_dir`] joins the filename onto the directory without any check and
//!   returns `""` on every failure. A filename such as `../../.ssh/authorized_keys`
//!   escapes the directory (CWE-22 path traversal). It never logs.
//! - [`Reader`] applies a [`policy::Policy`]: lexical or canonical confinement, typed
//!   [`ReadError`]s or suppression, and structured facts through
//!   [`logging::FactsEmitter`].

pub mod api;
pub mod constants;
pub mod fs;
pub mod logging;
pub mod policy;
pub mod types;

pub use api::errors::{exit_code_for, exit_code_for_id_str, id_str, ErrorId};
pub use api::Reader;
pub use fs::{read_file_from_dir, try_read_file_from_dir};
pub use types::errors::ReadError;
