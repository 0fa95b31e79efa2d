mod fold;
mod lower;
#[cfg(test)]
mod tests;

pub use fold::FoldCaser;
pub use lower::LowerCaser;

/// A pure string-to-string case transformation applied to a request path.
///
/// Implementations must be total and deterministic. The `/` separator is never
/// changed by any casing rule, so segment boundaries survive the transform.
pub trait Caser: Send + Sync {
    fn transform(&self, path: &str) -> String;
}

/// The casing strategies selectable from configuration.
///
/// Resolved once when the rewriter is built, so the request path never
/// compares mode strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStrategy {
    Lower(LowerCaser),
    Fold(FoldCaser),
}

impl CaseStrategy {
    pub fn lower() -> Self {
        CaseStrategy::Lower(LowerCaser)
    }

    pub fn fold() -> Self {
        CaseStrategy::Fold(FoldCaser)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CaseStrategy::Lower(_) => "lower",
            CaseStrategy::Fold(_) => "fold",
        }
    }
}

impl Caser for CaseStrategy {
    fn transform(&self, path: &str) -> String {
        match self {
            CaseStrategy::Lower(c) => c.transform(path),
            CaseStrategy::Fold(c) => c.transform(path),
        }
    }
}
