/// Result of a rewrite decision for a single request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// Leave the request alone; no header is emitted.
    Unchanged,

    /// Route the request under this path instead.
    ///
    /// Always starts with `/` and always differs from the original.
    Rewritten(String),
}

impl RewriteOutcome {
    pub fn is_rewritten(&self) -> bool {
        matches!(self, RewriteOutcome::Rewritten(_))
    }

    /// Whether the original path should be surfaced through `X-Original-URI`.
    pub fn emits_original_header(&self) -> bool {
        self.is_rewritten()
    }

    /// The path the request ends up routed under.
    pub fn final_path<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            RewriteOutcome::Unchanged => original,
            RewriteOutcome::Rewritten(path) => path,
        }
    }

    pub(crate) fn from_candidate(original: &str, candidate: String) -> Self {
        if candidate == original || !candidate.starts_with('/') {
            RewriteOutcome::Unchanged
        } else {
            RewriteOutcome::Rewritten(candidate)
        }
    }
}
