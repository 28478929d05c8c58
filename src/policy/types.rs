/// How the joined path is checked against the base directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Confinement {
    /// Plain join; `..` and absolute filenames pass through.
    #[default]
    Unchecked,
    /// Lexical check via `SafePath`, then an ordinary open by path.
    ///
    /// Symlinks below the base are neither inspected nor prevented. The base is not
    /// normalized either: with base `/srv/a/../b`, the absolute filename `/srv/b/f`
    /// does not share the base's textual prefix and is refused.
    Lexical,
    /// Canonicalize the base, apply the `Lexical` text check, then open every
    /// component below the base through directory handles with `O_NOFOLLOW`.
    ///
    /// Any symlink below the base is refused, including one that points back inside.
    Canonical,
}

/// What the reader does with a failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Every failure becomes an empty string.
    #[default]
    Suppress,
    Propagate,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AuditPolicy {
    /// Zero timestamps and mask hashes in emitted facts.
    pub redact: bool,
    /// Record a SHA-256 of the contents on successful reads.
    pub hash_content: bool,
}
