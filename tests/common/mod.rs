// tests/common/mod.rs
//! Shared helpers for the CLI tests.

use std::path::PathBuf;

use assert_cmd::Command;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

pub fn freeze_scope() -> Command {
    Command::new(env!("CARGO_BIN_EXE_freeze-scope"))
}

/// Runs `cmd`, asserts success and returns its stdout.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is UTF-8")
}

/// `form` output for the bundled fixtures.
pub fn seeded_form() -> serde_json::Value {
    let stdout = stdout_of(
        freeze_scope()
            .arg("form")
            .arg("--document")
            .arg(fixture("freeze.yaml"))
            .arg("--resources")
            .arg(fixture("resources.json")),
    );
    serde_json::from_str(&stdout).expect("JSON output")
}
