// Facade for reads governed by a `Policy`, with facts emitted per stage.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::Level;
use serde_json::json;
use sha2::{Digest, Sha256};

use crate::constants::HASH_ALG;
use crate::fs::paths::join_unchecked;
use crate::fs::beneath::open_file_beneath;
use crate::fs::read::{classify, read_handle};
use crate::logging::audit::AuditCtx;
use crate::logging::{AuditSink, FactsEmitter, StageLogger};
use crate::policy::{Confinement, ErrorMode, Policy};
use crate::types::errors::ReadError;
use crate::types::ids::read_id;
use crate::types::safepath::SafePath;

#[path = "api/errors.rs"]
pub mod errors;

pub struct Reader<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
}

impl<E: FactsEmitter, A: AuditSink> Reader<E, A> {
    pub fn new(facts: E, audit: A, policy: Policy) -> Self {
        Self {
            facts,
            audit,
            policy,
        }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Build the path that `read` would open, applying the policy's confinement.
    ///
    /// Under `Canonical` the returned path is informational: `read` does not reopen
    /// it by name but walks it through directory handles.
    ///
    /// # Errors
    ///
    /// * `Policy` when confinement refuses the filename text (`..`, absolute path
    ///   outside the base).
    /// * `InvalidPath` when the base cannot be made absolute.
    /// * Under `Canonical`, the classified error when the base cannot be
    ///   canonicalized (for example `NotFound`).
    pub fn resolve(&self, filename: &str, dir: &str) -> Result<PathBuf, ReadError> {
        match self.policy.confinement {
            Confinement::Unchecked => Ok(join_unchecked(dir, filename)),
            Confinement::Lexical | Confinement::Canonical => {
                Ok(self.confine(filename, dir)?.as_path())
            }
        }
    }

    // The filename text is judged before anything below the base is touched, so a
    // refusal never depends on what exists outside the base.
    fn confine(&self, filename: &str, dir: &str) -> Result<SafePath, ReadError> {
        // An empty base means the working directory, as with a plain join.
        let base = Path::new(if dir.is_empty() { "." } else { dir });
        let root = match self.policy.confinement {
            Confinement::Canonical => {
                std::fs::canonicalize(base).map_err(|e| classify(base, e))?
            }
            _ => absolute_base(base)?,
        };
        Ok(SafePath::from_rooted(&root, Path::new(filename))?)
    }

    fn open(&self, filename: &str, dir: &str) -> Result<(PathBuf, File), ReadError> {
        match self.policy.confinement {
            Confinement::Canonical => {
                let sp = self.confine(filename, dir)?;
                let f = open_file_beneath(sp.root(), sp.rel())?;
                Ok((sp.as_path(), f))
            }
            _ => {
                let p = self.resolve(filename, dir)?;
                let f = File::open(&p).map_err(|e| classify(&p, e))?;
                Ok((p, f))
            }
        }
    }

    /// Read `filename` under `dir` according to the policy.
    ///
    /// Emits `read.attempt` before resolving and `read.result` after. Confinement
    /// refusals are recorded as a `warn` result and reported to the audit sink.
    ///
    /// # Errors
    ///
    /// Under `ErrorMode::Propagate`, any `ReadError` from `resolve` or the read itself.
    /// Under `ErrorMode::Suppress` this never fails; failures yield `""`.
    pub fn read(&self, filename: &str, dir: &str) -> Result<String, ReadError> {
        let ctx = AuditCtx::new(
            &self.facts,
            read_id(dir, filename).to_string(),
            self.policy.audit.redact,
        );
        let slog = StageLogger::new(&ctx);
        let raw = join_unchecked(dir, filename);
        slog.read_attempt()
            .path(raw.display().to_string())
            .field("base_dir", json!(dir))
            .field("filename", json!(filename))
            .field("confinement", json!(format!("{:?}", self.policy.confinement)))
            .emit_success();

        let t0 = Instant::now();
        let (path, outcome) = match self.open(filename, dir) {
            Ok((p, f)) => {
                let r = read_handle(&p, f);
                (p, r)
            }
            Err(e) => (raw, Err(e)),
        };
        let duration_ms = u64::try_from(t0.elapsed().as_millis()).unwrap_or(u64::MAX);

        match outcome {
            Ok(contents) => {
                let mut ev = slog
                    .read_result()
                    .path(path.display().to_string())
                    .field("bytes", json!(contents.len()))
                    .field("duration_ms", json!(duration_ms));
                if self.policy.audit.hash_content {
                    let digest = Sha256::digest(contents.as_bytes());
                    ev = ev
                        .field("content_hash", json!(hex::encode(digest)))
                        .field("hash_alg", json!(HASH_ALG));
                }
                ev.emit_success();
                Ok(contents)
            }
            Err(e) => {
                let id = e.id();
                let refused = id == errors::ErrorId::E_POLICY;
                if refused {
                    self.audit
                        .log(Level::Warn, &format!("refused read of {filename:?} under {dir:?}: {e}"));
                }
                let ev = slog
                    .read_result()
                    .path(path.display().to_string())
                    .field("error_id", json!(errors::id_str(id)))
                    .field("exit_code", json!(errors::exit_code_for(id)))
                    .field("error", json!(e.to_string()))
                    .field("duration_ms", json!(duration_ms));
                if refused {
                    ev.emit_warn();
                } else {
                    ev.emit_failure();
                }
                match self.policy.errors {
                    ErrorMode::Suppress => Ok(String::new()),
                    ErrorMode::Propagate => Err(e),
                }
            }
        }
    }
}

fn absolute_base(base: &Path) -> Result<PathBuf, ReadError> {
    if base.is_absolute() {
        return Ok(base.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| ReadError::InvalidPath(format!("cannot resolve {}: {e}", base.display())))?;
    Ok(cwd.join(base))
}
