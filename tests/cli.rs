//! Pipe-mode integration tests: a serialized secret on stdin, the decoded
//! document on stdout.

use assert_cmd::Command;
use predicates::prelude::*;

fn ksd() -> Command {
    Command::cargo_bin("ksd").unwrap()
}

#[test]
fn test_pipe_json_secret() {
    let assert = ksd()
        .write_stdin(r#"{"data":{"password":"c2VjcmV0"},"kind":"Secret"}"#)
        .assert()
        .success();

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["kind"], "Secret");
    assert_eq!(value["stringData"]["password"], "secret");
    assert!(value.get("data").is_none());
}

#[test]
fn test_pipe_json_output_is_indented() {
    ksd()
        .write_stdin(r#"{"data":{"password":"c2VjcmV0"},"kind":"Secret"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("    \"kind\": \"Secret\""));
}

#[test]
fn test_pipe_yaml_secret() {
    let assert = ksd()
        .write_stdin("data:\n  user: YWRtaW4=\nkind: Secret\n")
        .assert()
        .success();

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!out.contains("YWRtaW4="));
    let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
    assert_eq!(value["kind"], "Secret");
    assert_eq!(value["stringData"]["user"], "admin");
    assert!(value.get("data").is_none());
}

#[test]
fn test_pipe_preserves_other_fields() {
    let assert = ksd()
        .write_stdin(
            r#"{"apiVersion":"v1","kind":"Secret","metadata":{"name":"creds","namespace":"prod"},"type":"Opaque","data":{"token":"aHVudGVyMg=="}}"#,
        )
        .assert()
        .success();

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["apiVersion"], "v1");
    assert_eq!(value["metadata"]["namespace"], "prod");
    assert_eq!(value["type"], "Opaque");
    assert_eq!(value["stringData"]["token"], "hunter2");
}

#[test]
fn test_pipe_secret_without_data_gains_empty_string_data() {
    let assert = ksd()
        .write_stdin(r#"{"kind":"Secret","metadata":{"name":"s"}}"#)
        .assert()
        .success();

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["stringData"], serde_json::json!({}));
}

#[test]
fn test_pipe_empty_stdin_is_usage_error() {
    ksd()
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no input"));
}

#[test]
fn test_pipe_invalid_base64_fails_with_key() {
    ksd()
        .write_stdin(r#"{"data":{"password":"not-base64!!"},"kind":"Secret"}"#)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("base64").and(predicate::str::contains("password")));
}

#[test]
fn test_pipe_malformed_input_fails() {
    // Not valid JSON, and the YAML fallback cannot parse it either.
    ksd()
        .write_stdin("{broken")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_help_flag() {
    ksd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_version_flag() {
    ksd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ksd"));
}
