use crate::cli::OutputFormat;
use crate::conf::load_config;
use crate::rewrite::{PathRewriter, RewriteOutcome};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct RewriteReport {
    pub original: String,
    pub rewritten: bool,
    pub path: String,
}

/// Runs each path through the rewriter built from `config`.
pub fn rewrite(config: &Path, paths: &[String], format: OutputFormat) -> anyhow::Result<()> {
    let validated = load_config(config)?;
    let rewriter = PathRewriter::from_config(&validated.config);

    let reports = evaluate(&rewriter, paths);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Plain | OutputFormat::Pretty => {
            for r in &reports {
                if r.rewritten {
                    println!("{} -> {}", r.original, r.path);
                } else {
                    println!("{} (unchanged)", r.original);
                }
            }
        }
    }

    Ok(())
}

pub fn evaluate(rewriter: &PathRewriter, paths: &[String]) -> Vec<RewriteReport> {
    paths
        .iter()
        .map(|original| {
            let outcome = rewriter.decide(original);
            RewriteReport {
                original: original.clone(),
                rewritten: outcome.is_rewritten(),
                path: outcome.final_path(original).to_owned(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::types::{CasefoldConfig, Mode};
    use pretty_assertions::assert_eq;

    #[test]
    fn evaluate_reports_each_path() {
        let rewriter = PathRewriter::from_config(
            &CasefoldConfig::new(Mode::Lower).with_exclude(["/Keep/*"]),
        );
        let paths = vec!["/A/B".to_string(), "/Keep/Me".to_string()];

        let reports = evaluate(&rewriter, &paths);

        assert_eq!(reports.len(), 2);
        assert!(reports[0].rewritten);
        assert_eq!(reports[0].path, "/a/b");
        assert!(!reports[1].rewritten);
        assert_eq!(reports[1].path, "/Keep/Me");
        assert_eq!(rewriter.decide("/Keep/Me"), RewriteOutcome::Unchanged);
    }
}
