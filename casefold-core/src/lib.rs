pub mod canonical;
pub mod casing;
pub mod cli;
pub mod conf;
pub mod ctx;
pub mod device;
pub mod exclude;
pub mod logging;
pub mod rewrite;

pub use conf::types::{CasefoldConfig, Mode};
pub use device::builtin::casefold::{CasefoldDevice, X_ORIGINAL_URI};
pub use rewrite::{PathRewriter, RewriteOutcome};
