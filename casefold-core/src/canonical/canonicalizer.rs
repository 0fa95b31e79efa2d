use crate::canonical::{CanonicalizeError, DirectoryReader, StdDirectoryReader, clean_path};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Rewrites a request path to the casing of the matching entries under a root
/// directory.
///
/// Each segment costs one directory listing. Nothing is cached between calls.
#[derive(Clone)]
pub struct FilesystemCanonicalizer {
    root: PathBuf,
    reader: Arc<dyn DirectoryReader>,
}

impl fmt::Debug for FilesystemCanonicalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilesystemCanonicalizer")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl FilesystemCanonicalizer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_reader(root, Arc::new(StdDirectoryReader))
    }

    pub fn with_reader(root: impl Into<PathBuf>, reader: Arc<dyn DirectoryReader>) -> Self {
        Self {
            root: root.into(),
            reader,
        }
    }

    /// Returns `(canonical, true)` when every segment resolved, otherwise
    /// `(path, false)` with the input untouched.
    pub fn canonicalize(&self, path: &str) -> (String, bool) {
        match self.try_canonicalize(path) {
            Ok(canonical) => (canonical, true),
            Err(err) => {
                debug!(path, reason = %err, "filesystem canonicalization skipped");
                (path.to_owned(), false)
            }
        }
    }

    pub fn try_canonicalize(&self, path: &str) -> Result<String, CanonicalizeError> {
        if self.root.as_os_str().is_empty() {
            return Err(CanonicalizeError::NoRoot);
        }
        if path.is_empty() {
            return Err(CanonicalizeError::EmptyPath);
        }

        // Checked on the raw segments, before cleaning and before any listing.
        if path.split('/').any(|segment| segment == "..") {
            return Err(CanonicalizeError::Traversal);
        }

        let cleaned = clean_path(path);
        let Some(body) = cleaned.strip_prefix('/') else {
            return Err(CanonicalizeError::NotAbsolute { cleaned });
        };
        if body.is_empty() {
            return Err(CanonicalizeError::Root);
        }

        let segments: Vec<&str> = body.split('/').collect();
        let mut built: Vec<String> = Vec::with_capacity(segments.len());
        let mut current = self.root.clone();

        for (i, segment) in segments.iter().enumerate() {
            let names = self
                .reader
                .read_dir_names(&current)
                .map_err(|source| CanonicalizeError::ReadDir {
                    dir: current.clone(),
                    source,
                })?;

            let matched = find_entry(names, segment).ok_or_else(|| CanonicalizeError::NoMatch {
                segment: (*segment).to_owned(),
                dir: current.clone(),
            })?;

            if i + 1 < segments.len() {
                current.push(&matched);
                if !self.reader.is_dir(&current) {
                    return Err(CanonicalizeError::NotADirectory { path: current });
                }
            }

            built.push(matched);
        }

        Ok(format!("/{}", built.join("/")))
    }
}

/// Picks the entry named exactly `segment`, else the first entry (in listing
/// order) equal to it ignoring case.
fn find_entry(names: Vec<String>, segment: &str) -> Option<String> {
    if names.iter().any(|name| name == segment) {
        return Some(segment.to_owned());
    }

    let wanted = segment.to_lowercase();
    names.into_iter().find(|name| name.to_lowercase() == wanted)
}
