use crate::cli::OutputFormat;
use crate::conf::{ConfigError, ValidatedConfig, load_config};
use miette::Report;
use std::path::Path;

/// Loads a config file and prints what the casefold device would run with.
///
/// Returns `Ok(false)` when the file loads but carries warnings.
pub fn check(path: &Path, format: OutputFormat) -> anyhow::Result<bool> {
    match load_config(path) {
        Ok(validated) => {
            print_summary(&validated, format)?;
            Ok(!validated.report.has_violations())
        }
        Err(err) => {
            print_config_error(err, format);
            anyhow::bail!("configuration check failed");
        }
    }
}

fn print_summary(validated: &ValidatedConfig, format: OutputFormat) -> anyhow::Result<()> {
    let cfg = &validated.config;

    match format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "enable": cfg.enable,
                "mode": cfg.mode,
                "root": cfg.root,
                "exclude": cfg.exclude.patterns().collect::<Vec<_>>(),
                "warnings": validated.report.warnings,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain | OutputFormat::Pretty => {
            let (ok, sep) = match format {
                OutputFormat::Pretty => ("✔", ""),
                _ => ("ok", ":"),
            };
            println!("{ok}{sep} Config loaded successfully");
            println!("{ok}{sep} casefold {}", if cfg.enable { "enabled" } else { "disabled" });
            println!("{ok}{sep} mode {}", cfg.mode);
            if let Some(root) = &cfg.root {
                println!("{ok}{sep} root {}", root.display());
            }
            println!("{ok}{sep} {} exclude patterns", cfg.exclude.len());

            let rendered = match format {
                OutputFormat::Pretty => validated.report.render_pretty(),
                _ => validated.report.render_plain(),
            };
            if !rendered.is_empty() {
                println!();
                print!("{rendered}");
            }
        }
    }

    Ok(())
}

fn print_config_error(err: ConfigError, format: OutputFormat) {
    let hint = config_error_hint(&err);
    match format {
        OutputFormat::Pretty => {
            eprintln!();
            eprintln!("{:?}", Report::new(err));
        }
        _ => eprintln!("{}", err),
    }
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::MissingBlock { .. } => Some(
            "A casefold config file holds a single casefold block.\n\
             \n\
             Example:\n\
             \n\
             casefold = {\n\
             \x20 mode    = \"fs\"\n\
             \x20 root    = \"/var/www\"\n\
             \x20 exclude = [\"/api/*\"]\n\
             }",
        ),
        ConfigError::Parse { .. } => Some(
            "Supported keys are `enable`, `mode`, `root` and `exclude`.",
        ),
        ConfigError::ReadFile { .. } => None,
    }
}
