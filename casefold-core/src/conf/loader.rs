use crate::conf::types::CasefoldConfig;
use crate::conf::{ConfigError, ValidationReport, lower_casefold, parse_casefold, parse_casefold_str};
use std::path::Path;

pub struct ValidatedConfig {
    pub config: CasefoldConfig,
    pub report: ValidationReport,
}

pub fn load_config(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let spec = parse_casefold(path)?;

    //--------------------------------------------------------------------------
    // Soft fail: everything else degrades with a warning
    //--------------------------------------------------------------------------
    let mut report = ValidationReport::default();
    let config = lower_casefold(spec, &mut report);

    Ok(ValidatedConfig { config, report })
}

pub fn load_config_str(src: &str, path: &Path) -> Result<ValidatedConfig, ConfigError> {
    let spec = parse_casefold_str(src, path)?;

    let mut report = ValidationReport::default();
    let config = lower_casefold(spec, &mut report);

    Ok(ValidatedConfig { config, report })
}
