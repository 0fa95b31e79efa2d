use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

/// A temporary directory tree used as a canonical root.
pub struct FixtureTree {
    dir: TempDir,
}

impl FixtureTree {
    /// Creates each `/`-separated file path, with its parent directories.
    pub fn with_files(files: &[&str]) -> Self {
        let dir = tempdir().unwrap();
        for file in files {
            let path = dir.path().join(file.trim_start_matches('/'));
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, file.as_bytes()).unwrap();
        }
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}
