use std::io::Write;

use clap::Parser;
use curriplan::cli::{CliArgs, StatusAssignment};
use curriplan::status_store::{FileStatusStore, StatusStore};
use curriplan::types::CourseStatus;
use tempfile::NamedTempFile;

const CATALOG: &str = r#"
[planner]
credit_cap = 8

[course.A]
credits = 4
prerequisites = []

[course.B]
credits = 4
prerequisites = ["A"]

[course.C]
credits = 4
prerequisites = ["A"]
"#;

#[test]
fn test_set_flags_parse() {
    let args = CliArgs::try_parse_from([
        "curriplan",
        "--catalog",
        "c.toml",
        "--set",
        "A=approved",
        "--set",
        "B = failed",
        "--credit-cap",
        "12",
        "--retake-failed",
        "--dry-run",
    ])
    .unwrap();

    assert_eq!(args.catalog, "c.toml");
    assert!(args.retake_failed);
    assert_eq!(args.credit_cap, Some(12));
    assert!(args.dry_run);
    assert_eq!(
        args.set,
        vec![
            StatusAssignment {
                course: "A".into(),
                status: CourseStatus::Approved,
            },
            StatusAssignment {
                course: "B".into(),
                status: CourseStatus::Failed,
            },
        ]
    );
}

#[test]
fn test_malformed_set_flag_is_rejected() {
    assert!(CliArgs::try_parse_from(["curriplan", "--set", "A"]).is_err());
    assert!(CliArgs::try_parse_from(["curriplan", "--set", "A=done"]).is_err());
}

#[test]
fn test_run_applies_sets_and_saves_status() {
    let mut catalog = NamedTempFile::new().unwrap();
    write!(catalog, "{}", CATALOG).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let status_path = dir.path().join("status.toml");

    let args = CliArgs::try_parse_from([
        "curriplan",
        "--catalog",
        catalog.path().to_str().unwrap(),
        "--set",
        "A=approved",
        "--save-status",
        status_path.to_str().unwrap(),
    ])
    .unwrap();

    curriplan::run(args).unwrap();

    let saved = FileStatusStore::new(&status_path).load().unwrap();
    assert_eq!(saved.get("A"), Some(&CourseStatus::Approved));
    assert_eq!(saved.get("B"), Some(&CourseStatus::NotTaken));
}

#[test]
fn test_run_fails_on_missing_prerequisites() {
    let mut catalog = NamedTempFile::new().unwrap();
    write!(catalog, "{}", CATALOG).unwrap();

    let args = CliArgs::try_parse_from([
        "curriplan",
        "--catalog",
        catalog.path().to_str().unwrap(),
        "--set",
        "B=approved",
        "--dry-run",
    ])
    .unwrap();

    let err = curriplan::run(args).unwrap_err();
    assert!(err.to_string().contains("missing prerequisites"));
}

#[test]
fn test_catalog_defaults_to_curriculum_file() {
    let args = CliArgs::try_parse_from(["curriplan"]).unwrap();
    assert_eq!(args.catalog, curriplan::config::DEFAULT_CATALOG_FILE);
    assert!(!args.retake_failed);
}
