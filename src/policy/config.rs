use super::types::{AuditPolicy, Confinement, ErrorMode};

/// Policy governs path confinement, failure handling and audit detail for a `Reader`.
///
/// `Policy::default()` matches `read_file_from_dir`: unchecked join, failures
/// suppressed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Policy {
    pub confinement: Confinement,
    pub errors: ErrorMode,
    pub audit: AuditPolicy,
}

impl Policy {
    /// Construct a Policy with the recommended **hardened defaults**.
    ///
    /// Enables:
    /// - `confinement = Canonical` (symlink-aware containment check)
    /// - `errors = Propagate`
    /// - `audit.hash_content = true`
    ///
    /// # Example
    /// ```rust
    /// use dirread::policy::Policy;
    /// use dirread::{logging::JsonlSink, Reader};
    ///
    /// let reader = Reader::new(JsonlSink, JsonlSink, Policy::hardened_preset());
    /// assert!(reader.read("../../etc/passwd", "/srv/www").is_err());
    /// ```
    #[must_use]
    pub fn hardened_preset() -> Self {
        let mut p = Self::default();
        p.apply_hardened_preset();
        p
    }

    /// Mutate this Policy to apply the hardened defaults; see `hardened_preset()`.
    pub fn apply_hardened_preset(&mut self) -> &mut Self {
        self.confinement = Confinement::Canonical;
        self.errors = ErrorMode::Propagate;
        self.audit.hash_content = true;
        self
    }
}
