use crate::conf::types::CasefoldConfig;
use crate::ctx::{RequestCtx, ResponseCtx, encode_path};
use crate::device::core::{Device, DeviceResult};
use crate::rewrite::{PathRewriter, RewriteOutcome};
use http::{HeaderName, HeaderValue};
use std::sync::Arc;
use tracing::warn;

#[cfg(test)]
#[path = "tests/casefold_tests.rs"]
mod tests;

pub const X_ORIGINAL_URI: HeaderName = HeaderName::from_static("x-original-uri");

/// Original path of a rewritten request, kept for the response phase.
#[derive(Debug, Clone)]
pub struct OriginalUri(pub HeaderValue);

/// Rewrites request paths so downstream route and file matchers behave
/// case-insensitively.
///
/// When a path is rewritten, the pre-rewrite path is exposed as
/// `X-Original-URI` on both the request and the response.
#[derive(Debug, Clone)]
pub struct CasefoldDevice {
    rewriter: Arc<PathRewriter>,
}

impl CasefoldDevice {
    pub fn new(rewriter: Arc<PathRewriter>) -> Self {
        Self { rewriter }
    }

    pub fn from_config(cfg: &CasefoldConfig) -> Self {
        Self::new(Arc::new(PathRewriter::from_config(cfg)))
    }

    /// Applies a decision to the request.
    ///
    /// Split from [`Device::on_request`] so async servers can compute the
    /// outcome with [`PathRewriter::decide_offloaded`] and apply it afterwards.
    pub fn apply(&self, ctx: &mut RequestCtx, outcome: RewriteOutcome) {
        if outcome.emits_original_header() {
            match original_uri_value(ctx.path()) {
                Some(value) => {
                    ctx.insert_header(X_ORIGINAL_URI, value.clone());
                    ctx.extensions.insert(OriginalUri(value));
                }
                None => warn!(
                    method = %ctx.method(),
                    path = ctx.path(),
                    "original path cannot be sent as a header value"
                ),
            }
        }

        if let RewriteOutcome::Rewritten(rewritten) = outcome {
            ctx.set_path(rewritten);
        }
    }
}

impl Device for CasefoldDevice {
    fn on_request(&self, ctx: &mut RequestCtx) -> DeviceResult {
        let outcome = self.rewriter.decide(ctx.path());
        self.apply(ctx, outcome);
        DeviceResult::Continue
    }

    fn on_response(&self, req: &RequestCtx, ctx: &mut ResponseCtx) -> DeviceResult {
        if let Some(OriginalUri(value)) = req.extensions.get::<OriginalUri>() {
            ctx.headers.insert(X_ORIGINAL_URI, value.clone());
        }
        DeviceResult::Continue
    }
}

/// Decoded paths are sent as-is when they form a valid header value, otherwise
/// percent-encoded.
fn original_uri_value(path: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(path)
        .or_else(|_| HeaderValue::from_str(&encode_path(path)))
        .ok()
}
