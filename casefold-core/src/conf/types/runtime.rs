use crate::exclude::ExclusionMatcher;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Lower,
    Fold,
    #[serde(rename = "fs")]
    FilesystemCanonical,
}

impl Mode {
    /// Parses an operator-supplied mode, ignoring case and surrounding space.
    ///
    /// An empty string selects the default. Unknown values return `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "" | "lower" => Some(Mode::Lower),
            "fold" => Some(Mode::Fold),
            "fs" => Some(Mode::FilesystemCanonical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Lower => "lower",
            Mode::Fold => "fold",
            Mode::FilesystemCanonical => "fs",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved casefold configuration. Read-only once built.
#[derive(Debug, Clone)]
pub struct CasefoldConfig {
    pub enable: bool,
    pub mode: Mode,
    /// Absolute root for [`Mode::FilesystemCanonical`]. `None` turns that mode
    /// into a passthrough.
    pub root: Option<PathBuf>,
    pub exclude: ExclusionMatcher,
}

impl Default for CasefoldConfig {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl CasefoldConfig {
    pub fn new(mode: Mode) -> Self {
        Self {
            enable: true,
            mode,
            root: None,
            exclude: ExclusionMatcher::default(),
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude = ExclusionMatcher::new(patterns);
        self
    }
}
