use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration problems that degrade behavior instead of failing the load.
#[derive(Clone, Debug, Error, Diagnostic)]
pub enum ConfigWarning {
    #[error("unknown casefold mode '{mode}'; defaulting to lower")]
    #[diagnostic(severity(Warning), help("supported modes are \"lower\", \"fold\" and \"fs\""))]
    UnknownMode { mode: String },

    #[error("fs mode enabled but root not set; skipping canonicalization")]
    #[diagnostic(
        severity(Warning),
        help("set `root` to the directory request paths should be resolved against")
    )]
    MissingRoot,

    #[error("casefold root {} is not a readable directory", .root.display())]
    #[diagnostic(
        severity(Warning),
        help("requests will be served under their original casing until the directory exists")
    )]
    RootNotDirectory { root: PathBuf },

    #[error("invalid exclude pattern '{pattern}': {reason}")]
    #[diagnostic(severity(Warning), help("the pattern is ignored and never matches"))]
    InvalidExcludePattern { pattern: String, reason: String },

    #[error("root is only used in fs mode; ignoring it for mode '{mode}'")]
    #[diagnostic(severity(Warning))]
    UnusedRoot { mode: String },
}
