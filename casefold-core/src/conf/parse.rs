use crate::conf::ConfigError;
use crate::conf::types::{CasefoldSpec, Origin};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct CasefoldFile {
    casefold: Option<CasefoldSpec>,
}

pub fn parse_casefold(path: &Path) -> Result<CasefoldSpec, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_casefold_str(&s, path)
}

/// Parses HCL source; `path` is only used for diagnostics.
pub fn parse_casefold_str(src: &str, path: &Path) -> Result<CasefoldSpec, ConfigError> {
    let parsed: CasefoldFile = hcl::from_str(src).map_err(|e| ConfigError::parse(path, e))?;

    let mut spec = parsed.casefold.ok_or_else(|| ConfigError::MissingBlock {
        path: path.to_path_buf(),
    })?;

    spec.origin = Origin::new(path, "casefold");
    Ok(spec)
}
