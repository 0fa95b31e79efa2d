use crate::conf::ConfigWarning;
use crate::conf::types::Origin;
use miette::Diagnostic;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub message: String,
    pub origin: Origin,
    pub help: Option<String>,
}

/// Non-fatal findings collected while resolving a configuration.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Serialize)]
struct ValidationReportJson<'a> {
    warnings: &'a [ValidationIssue],
}

impl ValidationReport {
    pub fn has_violations(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub(crate) fn warning(&mut self, warning: &ConfigWarning, origin: &Origin) {
        tracing::warn!(origin = %origin, "{}", warning);

        self.warnings.push(ValidationIssue {
            message: warning.to_string(),
            origin: origin.clone(),
            help: warning.help().map(|h| h.to_string()),
        });
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ValidationReportJson {
            warnings: &self.warnings,
        })
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for issue in &self.warnings {
            out.push_str(&format!(
                "{}:warning: {}\n",
                issue.origin.file.display(),
                issue.message
            ));
            if let Some(help) = &issue.help {
                out.push_str(&format!("  help: {}\n", help));
            }
        }
        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();
        if self.warnings.is_empty() {
            return out;
        }

        out.push_str(&format!(
            "{} ({} warnings)\n\n",
            "configuration loaded with warnings".yellow().bold(),
            self.warnings.len()
        ));

        for issue in &self.warnings {
            out.push_str(&format!(
                "  {} {}\n    {} {}\n",
                "warning:".yellow().bold(),
                issue.message,
                "-->".blue(),
                issue.origin
            ));
            if let Some(help) = &issue.help {
                out.push_str(&format!("    {} {}\n", "help:".cyan(), help));
            }
            out.push('\n');
        }
        out
    }
}
