use std::fs;

use predicates::prelude::*;
use serde_json::json;

use crate::common::{fixture, freeze_scope, seeded_form, stdout_of};

#[test]
fn unedited_form_reproduces_the_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let form = dir.path().join("form.json");
    fs::write(&form, seeded_form().to_string()).expect("write form");

    let stdout =
        stdout_of(freeze_scope().arg("apply").arg("--document").arg(fixture("freeze.yaml")).arg("--form").arg(&form));

    assert!(stdout.contains("filterType: NotEquals"));
    assert!(stdout.contains("- svc_2"));
    assert!(stdout.contains("- env_1"));
    assert!(stdout.contains("- Production"));
    assert!(stdout.contains("status: Enabled"));
    assert!(stdout.contains("timeZone: UTC"));
}

#[test]
fn edited_row_is_written_to_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let form = dir.path().join("form.json");
    let output = dir.path().join("out.yaml");
    let mut paths = seeded_form();
    paths["entity[0].Pipeline"] = json!([{ "label": "Deploy", "value": "deploy" }]);
    fs::write(&form, paths.to_string()).expect("write form");

    freeze_scope()
        .arg("apply")
        .arg("--document")
        .arg(fixture("freeze.yaml"))
        .arg("--form")
        .arg(&form)
        .args(["--row", "0"])
        .arg("--resources")
        .arg(fixture("resources.json"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).expect("output written");
    assert!(written.contains("- deploy"));
    assert!(written.contains("description: Block prod deploys during the launch"));
}

#[test]
fn invalid_forms_are_not_applied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let form = dir.path().join("form.json");
    let output = dir.path().join("out.yaml");
    fs::write(&form, r#"{ "entity[0].name": "blank" }"#).expect("write form");

    freeze_scope()
        .arg("apply")
        .arg("--document")
        .arg(fixture("freeze.yaml"))
        .arg("--form")
        .arg(&form)
        .arg("--output")
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is required"));

    assert!(!output.exists());
}

#[test]
fn row_outside_the_form_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let form = dir.path().join("form.json");
    fs::write(&form, seeded_form().to_string()).expect("write form");

    freeze_scope()
        .arg("apply")
        .arg("--document")
        .arg(fixture("freeze.yaml"))
        .arg("--form")
        .arg(&form)
        .args(["--row", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--row"));
}
