use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a configuration value came from, for diagnostics.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Origin {
    pub(crate) file: PathBuf,
    pub(crate) section: String,
}

impl Origin {
    pub fn new(file: &Path, section: &str) -> Self {
        Self {
            file: file.to_path_buf(),
            section: section.to_owned(),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} block", self.file.display(), self.section)
    }
}
