mod error;
mod loader;
mod lower;
mod parse;
mod report;
#[cfg(test)]
mod tests;
pub mod types;
mod warning;

pub use error::ConfigError;
pub use loader::{ValidatedConfig, load_config, load_config_str};
pub use lower::lower_casefold;
pub use parse::{parse_casefold, parse_casefold_str};
pub use report::{ValidationIssue, ValidationReport};
pub use types::{CasefoldConfig, CasefoldSpec, Mode, Origin};
pub use warning::ConfigWarning;
