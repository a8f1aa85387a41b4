use anyhow::Result;
use sprint_sync::utils::validation::Validate;
use sprint_sync::{generate_milestones, Manifest, SprintError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_manifest_file_to_milestones() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"
[sprint]
title_format = "Sprint {sid} ({start_on} - {due_on})"
duration = "168h"

[[sprint.terms]]
start_on = "2021/01/01"
due_on = "2021/01/21"

[sprint.ignore]
weekdays = ["Sunday"]

[[repos]]
name = "octocat/hello-world"
"#,
    )?;

    let manifest = Manifest::from_file(file.path())?;
    manifest.validate()?;

    let milestones = generate_milestones(&manifest.sprint)?;
    assert_eq!(milestones.len(), 3);
    assert_eq!(milestones[0].title, "Sprint 1 (2021/01/01 - 2021/01/07)");
    Ok(())
}

#[test]
fn test_missing_manifest_file_is_io_error() {
    let err = Manifest::from_file("does-not-exist.toml").unwrap_err();
    assert!(matches!(err, SprintError::IoError(_)));
}

#[test]
fn test_malformed_toml_reports_parse_error() {
    let err = Manifest::from_toml_str("[sprint\n").unwrap_err();
    assert!(matches!(err, SprintError::ConfigError { .. }));
}

#[test]
fn test_malformed_ignore_date_fails_generation_with_raw_value() {
    let manifest = Manifest::from_toml_str(
        r#"
[sprint]
title_format = "Sprint {sid}"
duration = "168h"

[[sprint.terms]]
start_on = "2021/01/01"
due_on = "2021/01/21"

[[sprint.ignore.terms]]
start_on = "Feb 1"
due_on = "2021/02/07"
"#,
    )
    .unwrap();

    let err = generate_milestones(&manifest.sprint).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("sprint.ignore.terms"));
    assert!(message.contains("Feb 1"));
}

#[test]
fn test_unknown_weekday_fails_generation() {
    let manifest = Manifest::from_toml_str(
        r#"
[sprint]
title_format = "Sprint {sid}"
duration = "168h"

[[sprint.terms]]
start_on = "2021/01/01"
due_on = "2021/01/21"

[sprint.ignore]
weekdays = ["Funday"]
"#,
    )
    .unwrap();

    let err = generate_milestones(&manifest.sprint).unwrap_err();
    assert!(err.to_string().contains("Funday"));
}
