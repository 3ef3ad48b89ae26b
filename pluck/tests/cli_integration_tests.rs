// pluck/tests/cli_integration_tests.rs
//! End-to-end tests for the pluck binary: stdin and file input, category
//! filtering, JSON export, and the sample/patterns commands.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

/// Constructs a `Command` for the `pluck` binary with a clean environment.
fn pluck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("pluck"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn extract_from_stdin_prints_report() {
    pluck_cmd()
        .arg("extract")
        .write_stdin("Contact user@example.com or visit https://www.example.com now")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extraction Results:"))
        .stdout(predicate::str::contains("Emails:\n  - user@example.com"))
        .stdout(predicate::str::contains("Urls:\n  - https://www.example.com"));
}

#[test]
fn extract_from_file_input() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("input.txt");
    fs::write(&input_path, "Tagged #rust at 14:30")?;

    pluck_cmd()
        .arg("extract")
        .arg("-i")
        .arg(&input_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hashtags:\n  - #rust"))
        .stdout(predicate::str::contains("Times:\n  - 14:30"));
    Ok(())
}

#[test]
fn empty_input_succeeds_with_no_matches_notice() {
    pluck_cmd()
        .arg("extract")
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("No matches found."));
}

#[test]
fn category_filter_limits_report() {
    pluck_cmd()
        .arg("extract")
        .arg("--category")
        .arg("emails")
        .write_stdin("user@example.com and https://www.example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("Emails:"))
        .stdout(predicate::str::contains("Urls:").not());
}

#[test]
fn unknown_category_is_rejected() {
    pluck_cmd()
        .arg("extract")
        .arg("--category")
        .arg("ssn")
        .write_stdin("anything")
        .assert()
        .failure();
}

#[test]
fn json_stdout_has_all_eight_keys_in_order() {
    let assert = pluck_cmd()
        .arg("extract")
        .arg("--json-stdout")
        .write_stdin("user@example.com")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: Value = serde_json::from_str(&stdout).expect("stdout must be valid JSON");
    let object = value.as_object().unwrap();
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "emails",
            "urls",
            "phone_numbers",
            "times",
            "html_tags",
            "currency",
            "credit_cards",
            "hashtags"
        ]
    );
    assert_eq!(object["emails"][0], "user@example.com");
    assert_eq!(object["urls"].as_array().unwrap().len(), 0);
}

#[test]
fn json_file_export_writes_report() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let json_path = dir.path().join("report.json");

    pluck_cmd()
        .arg("extract")
        .arg("--json-file")
        .arg(&json_path)
        .write_stdin("Price was $19.99 yesterday")
        .assert()
        .success();

    let value: Value = serde_json::from_str(&fs::read_to_string(&json_path)?)?;
    assert_eq!(value["currency"][0], "$19.99");
    Ok(())
}

#[test]
fn json_stdout_conflicts_with_json_file() {
    pluck_cmd()
        .arg("extract")
        .arg("--json-stdout")
        .arg("--json-file")
        .arg("report.json")
        .write_stdin("anything")
        .assert()
        .failure();
}

#[test]
fn sample_command_reports_fixed_sample_matches() {
    pluck_cmd()
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("user@example.com"))
        .stdout(predicate::str::contains("firstname.lastname@company.co.uk"))
        .stdout(predicate::str::contains("(123) 456-7890"))
        .stdout(predicate::str::contains("2:30 PM"))
        .stdout(predicate::str::contains("$1,234.56"));
}

#[test]
fn patterns_command_lists_builtin_definitions() {
    pluck_cmd()
        .arg("patterns")
        .assert()
        .success()
        .stdout(predicate::str::contains("Built-in patterns (8):"))
        .stdout(predicate::str::contains("credit_card"))
        .stdout(predicate::str::contains("pattern:"));
}
