use crate::canonical::FilesystemCanonicalizer;
use crate::casing::{CaseStrategy, Caser};
use crate::conf::types::{CasefoldConfig, Mode};
use crate::exclude::ExclusionMatcher;
use crate::rewrite::{RewriteOutcome, Strategy};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Decides, per request, whether and how a path gets rewritten.
///
/// Holds only read-only configuration; share it between requests with an `Arc`.
#[derive(Debug, Clone)]
pub struct PathRewriter {
    strategy: Strategy,
    exclusions: ExclusionMatcher,
}

impl PathRewriter {
    pub fn new(strategy: Strategy, exclusions: ExclusionMatcher) -> Self {
        Self {
            strategy,
            exclusions,
        }
    }

    pub fn from_config(cfg: &CasefoldConfig) -> Self {
        let strategy = match (&cfg.mode, &cfg.root) {
            (Mode::Lower, _) => Strategy::Case(CaseStrategy::lower()),
            (Mode::Fold, _) => Strategy::Case(CaseStrategy::fold()),
            (Mode::FilesystemCanonical, Some(root)) => {
                Strategy::Filesystem(FilesystemCanonicalizer::new(root))
            }
            (Mode::FilesystemCanonical, None) => Strategy::Passthrough,
        };

        Self::new(strategy, cfg.exclude.clone())
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Decision order:
    /// 1. Empty and root paths are left alone
    /// 2. Excluded paths are left alone
    /// 3. The configured strategy runs; any failure leaves the path alone
    pub fn decide(&self, original: &str) -> RewriteOutcome {
        if original.is_empty() || original == "/" {
            return RewriteOutcome::Unchanged;
        }

        if self.exclusions.matches(original) {
            trace!(path = original, "path excluded from casefold");
            return RewriteOutcome::Unchanged;
        }

        let outcome = match &self.strategy {
            Strategy::Case(caser) => {
                RewriteOutcome::from_candidate(original, caser.transform(original))
            }
            Strategy::Filesystem(canon) => match canon.canonicalize(original) {
                (canonical, true) => RewriteOutcome::from_candidate(original, canonical),
                (_, false) => RewriteOutcome::Unchanged,
            },
            Strategy::Passthrough => RewriteOutcome::Unchanged,
        };

        if let RewriteOutcome::Rewritten(rewritten) = &outcome {
            debug!(
                original,
                rewritten = rewritten.as_str(),
                strategy = self.strategy.name(),
                "path rewritten"
            );
        }

        outcome
    }

    /// Runs [`PathRewriter::decide`] on the blocking pool.
    ///
    /// Filesystem mode lists one directory per segment; async callers should go
    /// through here so those reads don't stall the executor. A failed join
    /// leaves the path unchanged.
    pub async fn decide_offloaded(self: Arc<Self>, original: String) -> RewriteOutcome {
        match tokio::task::spawn_blocking(move || self.decide(&original)).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "casefold decision task failed");
                RewriteOutcome::Unchanged
            }
        }
    }
}
