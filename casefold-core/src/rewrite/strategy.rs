use crate::canonical::FilesystemCanonicalizer;
use crate::casing::CaseStrategy;

/// The concrete transformation a rewriter applies, fixed at configuration time.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Lowercase or case-fold the whole path.
    Case(CaseStrategy),

    /// Recover the on-disk casing under a root directory.
    Filesystem(FilesystemCanonicalizer),

    /// Never rewrite. Used when filesystem mode has no root to resolve against.
    Passthrough,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Case(c) => c.name(),
            Strategy::Filesystem(_) => "fs",
            Strategy::Passthrough => "passthrough",
        }
    }
}
