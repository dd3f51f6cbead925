use predicates::prelude::*;
use serde_json::{Value, json};

use crate::common::{fixture, freeze_scope, seeded_form, stdout_of};

#[test]
fn shows_help() {
    freeze_scope()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("freeze-scope"))
        .stdout(predicate::str::contains("visibility"));
}

#[test]
fn visibility_of_project_level() {
    let stdout = stdout_of(freeze_scope().args(["visibility", "--level", "PROJECT"]));
    let json: Value = serde_json::from_str(&stdout).expect("JSON output");

    assert_eq!(json["freezeWindowLevel"], "PROJECT");
    assert_eq!(json["showOrgField"], false);
    assert_eq!(json["showProjectField"], false);
    assert_eq!(json["showPipelineField"], true);
}

#[test]
fn template_lists_all_entries_without_refs() {
    freeze_scope()
        .args(["template", "--level", "org", "--name", "new rule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: new rule"))
        .stdout(predicate::str::contains("type: Proj"))
        .stdout(predicate::str::contains("type: Org").not())
        .stdout(predicate::str::contains("entityRefs").not());
}

#[test]
fn form_resolves_labels_from_resources() {
    let json = seeded_form();

    assert_eq!(json["entity[0].name"], "production");
    assert_eq!(json["entity[0].Service"], json!([{ "label": "All Services", "value": "All" }]));
    assert_eq!(json["entity[0].ExcludeServiceCheckbox"], true);
    assert_eq!(json["entity[0].ExcludeService"], json!([{ "label": "Billing", "value": "svc_2" }]));
    assert_eq!(json["entity[0].Environment"], json!([{ "label": "QA", "value": "env_1" }]));
    assert_eq!(json["entity[0].EnvType"], "Production");
}

#[test]
fn summary_renders_every_row() {
    freeze_scope()
        .arg("summary")
        .arg("--document")
        .arg(fixture("freeze.yaml"))
        .arg("--resources")
        .arg(fixture("resources.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] production"))
        .stdout(predicate::str::contains("Service: All except Billing"))
        .stdout(predicate::str::contains("Environment: QA"))
        .stdout(predicate::str::contains("Pipeline: All Pipelines"));
}

#[test]
fn validate_reports_missing_leaf_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let form = dir.path().join("form.json");
    std::fs::write(&form, r#"{ "entity[0].name": "empty" }"#).expect("write form");

    freeze_scope()
        .arg("validate")
        .arg("--form")
        .arg(&form)
        .args(["--level", "project"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("entity[0].Service: Service is required"))
        .stdout(predicate::str::contains("entity[0].Environment: Environment is required"))
        .stdout(predicate::str::contains("entity[0].Pipeline: Pipeline is required"));
}

#[test]
fn validate_accepts_a_single_leaf() {
    let dir = tempfile::tempdir().expect("tempdir");
    let form = dir.path().join("form.json");
    std::fs::write(&form, r#"{ "entity[0].Pipeline": [{ "label": "Deploy", "value": "deploy" }] }"#)
        .expect("write form");

    freeze_scope().arg("validate").arg("--form").arg(&form).args(["--level", "project"]).assert().success();
}

#[test]
fn missing_document_is_an_error() {
    freeze_scope()
        .args(["summary", "--document", "does-not-exist.yaml", "--resources"])
        .arg(fixture("resources.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does-not-exist.yaml"));
}
