use crate::conf::types::{CasefoldConfig, CasefoldSpec, Mode};
use crate::conf::{ConfigWarning, ValidationReport};
use crate::exclude::ExclusionMatcher;
use std::path::{Path, PathBuf};

/// Resolves an operator spec into runtime configuration.
///
/// Never fails: ambiguous or incomplete settings fall back to safe behavior and
/// are recorded as warnings.
pub fn lower_casefold(spec: CasefoldSpec, report: &mut ValidationReport) -> CasefoldConfig {
    let origin = &spec.origin;

    let mode = Mode::parse(&spec.mode).unwrap_or_else(|| {
        report.warning(
            &ConfigWarning::UnknownMode {
                mode: spec.mode.clone(),
            },
            origin,
        );
        Mode::Lower
    });

    let root = spec
        .root
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(absolute_root);

    let root = match (mode, root) {
        (Mode::FilesystemCanonical, None) => {
            report.warning(&ConfigWarning::MissingRoot, origin);
            None
        }
        (Mode::FilesystemCanonical, Some(root)) => {
            if !root.is_dir() {
                report.warning(&ConfigWarning::RootNotDirectory { root: root.clone() }, origin);
            }
            Some(root)
        }
        (_, Some(_)) => {
            report.warning(
                &ConfigWarning::UnusedRoot {
                    mode: mode.to_string(),
                },
                origin,
            );
            None
        }
        (_, None) => None,
    };

    let exclude = ExclusionMatcher::new(&spec.exclude);
    for rejected in exclude.rejected() {
        report.warning(
            &ConfigWarning::InvalidExcludePattern {
                pattern: rejected.pattern.clone(),
                reason: rejected.reason.clone(),
            },
            origin,
        );
    }

    CasefoldConfig {
        enable: spec.enable,
        mode,
        root,
        exclude,
    }
}

/// Relative roots are taken from the working directory.
fn absolute_root(raw: &str) -> PathBuf {
    let path = Path::new(raw);
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
