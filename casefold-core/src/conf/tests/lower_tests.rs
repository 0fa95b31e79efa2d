use crate::conf::types::{CasefoldSpec, Mode, Origin};
use crate::conf::{ValidationReport, lower_casefold};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::tempdir;

fn spec(mode: &str) -> CasefoldSpec {
    CasefoldSpec {
        origin: Origin::new(Path::new("/test/casefold.hcl"), "casefold"),
        enable: true,
        mode: mode.to_string(),
        root: None,
        exclude: Vec::new(),
    }
}

#[test]
fn mode_names_are_trimmed_and_case_insensitive() {
    assert_eq!(Mode::parse(""), Some(Mode::Lower));
    assert_eq!(Mode::parse(" LOWER "), Some(Mode::Lower));
    assert_eq!(Mode::parse("Fold"), Some(Mode::Fold));
    assert_eq!(Mode::parse("fs"), Some(Mode::FilesystemCanonical));
    assert_eq!(Mode::parse("upper"), None);
}

#[test]
fn unknown_mode_falls_back_to_lower_with_warning() {
    // Arrange
    let mut report = ValidationReport::default();

    // Act
    let cfg = lower_casefold(spec("shout"), &mut report);

    // Assert
    assert_eq!(cfg.mode, Mode::Lower);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].message.contains("shout"));
}

#[test]
fn fs_mode_without_root_is_passthrough_with_warning() {
    let mut report = ValidationReport::default();
    let mut s = spec("fs");
    s.root = Some("   ".to_string());

    let cfg = lower_casefold(s, &mut report);

    assert_eq!(cfg.mode, Mode::FilesystemCanonical);
    assert_eq!(cfg.root, None);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].message.contains("root not set"));
}

#[test]
fn fs_mode_keeps_existing_root_without_warning() {
    let dir = tempdir().unwrap();
    let mut report = ValidationReport::default();
    let mut s = spec("fs");
    s.root = Some(dir.path().display().to_string());

    let cfg = lower_casefold(s, &mut report);

    assert_eq!(cfg.root.as_deref(), Some(dir.path()));
    assert!(!report.has_violations());
}

#[test]
fn relative_root_becomes_absolute() {
    let mut report = ValidationReport::default();
    let mut s = spec("fs");
    s.root = Some("public".to_string());

    let cfg = lower_casefold(s, &mut report);

    let root = cfg.root.unwrap();
    assert!(root.is_absolute());
    assert!(root.ends_with("public"));
}

#[test]
fn missing_root_directory_warns_but_stays_configured() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone");
    let mut report = ValidationReport::default();
    let mut s = spec("fs");
    s.root = Some(missing.display().to_string());

    let cfg = lower_casefold(s, &mut report);

    assert_eq!(cfg.root, Some(missing));
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn root_outside_fs_mode_is_ignored() {
    let mut report = ValidationReport::default();
    let mut s = spec("fold");
    s.root = Some("/srv".to_string());

    let cfg = lower_casefold(s, &mut report);

    assert_eq!(cfg.mode, Mode::Fold);
    assert_eq!(cfg.root, None);
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn invalid_exclude_patterns_are_reported_and_dropped() {
    let mut report = ValidationReport::default();
    let mut s = spec("lower");
    s.exclude = vec!["/ok/*".to_string(), "/bad[".to_string(), String::new()];

    let cfg = lower_casefold(s, &mut report);

    assert_eq!(cfg.exclude.len(), 1);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].message.contains("/bad["));
    assert!(report.warnings[0].help.is_some());
}

#[test]
fn reports_render_every_format() {
    let mut report = ValidationReport::default();
    lower_casefold(spec("bogus"), &mut report);

    let plain = report.render_plain();
    let pretty = report.render_pretty();
    let json: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();

    assert!(plain.starts_with("/test/casefold.hcl:warning: unknown casefold mode 'bogus'"));
    assert!(pretty.contains("bogus"));
    assert_eq!(json["warnings"].as_array().unwrap().len(), 1);
}
