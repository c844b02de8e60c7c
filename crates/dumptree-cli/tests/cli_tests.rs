//! Integration tests for the `dumptree` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the parse and
//! stats subcommands through the actual binary, including stdin/stdout piping,
//! file I/O, output formats and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the call_context.txt fixture.
fn call_context_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/call_context.txt")
}

fn dumptree() -> Command {
    Command::cargo_bin("dumptree").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Parse subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_stdin_to_stdout() {
    let output = dumptree()
        .arg("parse")
        .write_stdin("User(id=1, name=Bob)")
        .output()
        .expect("parse should run");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout must be JSON");
    assert_eq!(json, serde_json::json!({"User": {"id": 1, "name": "Bob"}}));
}

#[test]
fn parse_is_pretty_by_default() {
    dumptree()
        .arg("parse")
        .write_stdin("A(b=1)")
        .assert()
        .success()
        .stdout(predicate::str::contains("{\n"));
}

#[test]
fn parse_compact() {
    dumptree()
        .args(["parse", "--compact"])
        .write_stdin("A(b=[1, 2])")
        .assert()
        .success()
        .stdout("{\"A\":{\"b\":[1,2]}}\n");
}

#[test]
fn parse_file_to_stdout() {
    let output = dumptree()
        .args(["parse", "-i", call_context_path()])
        .output()
        .expect("parse should run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ctx = &json["CallContext"];
    assert_eq!(ctx["user"]["User"]["login"], "j.doe@corp");
    assert_eq!(ctx["user"]["User"]["roles"], serde_json::json!(["ADMIN", "USER"]));
    assert_eq!(ctx["started"], "Tue Jan 06 10:15:00 UTC 2026");
    assert_eq!(ctx["attempts"], 3);
    // A null field value is shown as an empty string.
    assert_eq!(ctx["parent"], "");
}

#[test]
fn parse_file_to_file() {
    let output_path = "/tmp/dumptree-test-parse-output.json";
    let _ = std::fs::remove_file(output_path);

    dumptree()
        .args(["parse", "-i", call_context_path(), "-o", output_path])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(content.contains("CallContext"));
    assert!(content.contains("j.doe@corp"));

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn parse_empty_input_prints_null() {
    dumptree()
        .arg("parse")
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn parse_malformed_input_still_succeeds() {
    dumptree()
        .args(["parse", "--compact"])
        .write_stdin("A(b=[1, 2")
        .assert()
        .success()
        .stdout("{\"A\":{\"b\":[1,2]}}\n");
}

#[test]
fn parse_dump_format_normalizes() {
    dumptree()
        .args(["parse", "--format", "dump"])
        .write_stdin("User( id=1,tags=[a,b] )")
        .assert()
        .success()
        .stdout("User(id=1, tags=[a, b])\n");
}

#[test]
fn parse_max_depth_keeps_deep_text() {
    dumptree()
        .args(["parse", "--compact", "--max-depth", "1"])
        .write_stdin("A(b=B(c=1))")
        .assert()
        .success()
        .stdout("{\"A\":{\"b\":\"B(c=1\"}}\n");
}

#[test]
fn parse_missing_file_fails() {
    dumptree()
        .args(["parse", "-i", "/tmp/dumptree-no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn parse_rejects_unknown_format() {
    dumptree()
        .args(["parse", "--format", "yaml"])
        .write_stdin("A()")
        .assert()
        .failure();
}

#[test]
fn verbose_logs_go_to_stderr() {
    dumptree()
        .args(["-v", "parse", "--compact"])
        .write_stdin("A()")
        .assert()
        .success()
        .stdout("{\"A\":{}}\n")
        .stderr(predicate::str::contains("parsed object root"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Stats subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stats_from_file() {
    dumptree()
        .args(["stats", "-i", call_context_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Root:       object"))
        .stdout(predicate::str::contains("Objects:    2"))
        .stdout(predicate::str::contains("Lists:      1"))
        .stdout(predicate::str::contains("Max depth:  3"));
}

#[test]
fn stats_from_stdin() {
    dumptree()
        .arg("stats")
        .write_stdin("[1, 2, 3]")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scalars:    3"));
}

// ─────────────────────────────────────────────────────────────────────────────
// General
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn no_subcommand_shows_help() {
    dumptree()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag() {
    dumptree()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dumptree"));
}
