use std::fs;
use std::io;
use std::path::Path;

/// Directory access used by the canonicalizer.
///
/// Reads are blocking. Each call must release its directory handle before
/// returning.
pub trait DirectoryReader: Send + Sync {
    /// Lists the names of the entries directly inside `dir`, in listing order.
    ///
    /// Names that are not valid UTF-8 are skipped; they can never equal a
    /// segment of a decoded request path.
    fn read_dir_names(&self, dir: &Path) -> io::Result<Vec<String>>;

    fn is_dir(&self, path: &Path) -> bool;
}

/// [`DirectoryReader`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDirectoryReader;

impl DirectoryReader for StdDirectoryReader {
    fn read_dir_names(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
