use crate::conf::types::Origin;
use serde::{Deserialize, Serialize};

/// The `casefold` block as written by the operator.
#[derive(Default, Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CasefoldSpec {
    #[serde(skip)]
    pub origin: Origin,

    /// Whether the casefold device is installed at all.
    #[serde(default = "default_enable")]
    pub enable: bool,

    /// "lower" (default), "fold" or "fs".
    #[serde(default)]
    pub mode: String,

    /// Directory that request paths are resolved against in "fs" mode.
    #[serde(default)]
    pub root: Option<String>,

    /// Glob patterns matched against the original path; a match skips rewriting.
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_enable() -> bool {
    true
}
