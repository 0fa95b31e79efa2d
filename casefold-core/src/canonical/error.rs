use std::path::PathBuf;
use thiserror::Error;

/// Why a request path could not be mapped onto on-disk casing.
///
/// None of these reach the request pipeline; the rewriter falls back to the
/// original path.
#[derive(Debug, Error)]
pub enum CanonicalizeError {
    #[error("no canonical root configured")]
    NoRoot,

    #[error("empty request path")]
    EmptyPath,

    #[error("path contains a '..' segment")]
    Traversal,

    #[error("cleaned path '{cleaned}' is not absolute")]
    NotAbsolute { cleaned: String },

    #[error("path resolves to the root")]
    Root,

    #[error("failed to list directory {dir}: {source}")]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no entry matching '{segment}' in {dir}")]
    NoMatch { segment: String, dir: PathBuf },

    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },
}
