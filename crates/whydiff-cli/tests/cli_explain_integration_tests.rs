//! CLI explain integration tests
//!
//! These tests run the `whydiff` binary against JSON documents on disk and on
//! stdin, and check the rendered trace and the failure paths.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn write_doc(dir: &TempDir, file: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(file);
    fs::write(&path, contents).unwrap();
    path
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn whydiff(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_whydiff"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_cli_shallow_equal_documents_short_circuit() {
    let dir = TempDir::new().unwrap();
    let before = write_doc(&dir, "before.json", r#"{"a": 1, "b": "x"}"#);
    let after = write_doc(&dir, "after.json", r#"{"b": "x", "a": 1}"#);

    let output = whydiff(&["explain", arg(&before), arg(&after), "--name", "props"]);

    assert_eq!(
        stdout_of(&output),
        "props: 🍾 shallow equals (but not ref equals)\n"
    );
}

#[test]
fn test_cli_nested_trace_is_grouped_and_indented() {
    let dir = TempDir::new().unwrap();
    let before = write_doc(&dir, "before.json", r#"{"user": {"id": 1}}"#);
    let after = write_doc(&dir, "after.json", r#"{"user": {"id": 1}}"#);

    let output = whydiff(&[
        "explain",
        arg(&before),
        arg(&after),
        "--name",
        "props",
        "--no-shallow-top-level",
    ]);

    assert_eq!(
        stdout_of(&output),
        "▼ props\n  props: 🤷 entire tree is deep equal\n  props.user: 🤷 shallow equals, but not ref equals\n"
    );
}

#[test]
fn test_cli_json_format_emits_event_array() {
    let dir = TempDir::new().unwrap();
    let before = write_doc(&dir, "before.json", r#"{"count": 1}"#);
    let after = write_doc(&dir, "after.json", r#"{"count": null}"#);

    let output = whydiff(&["explain", arg(&before), arg(&after), "--format", "json"]);
    let events: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let events = events.as_array().unwrap();

    assert_eq!(events.first().unwrap()["kind"], "group_open");
    assert_eq!(events.first().unwrap()["label"], "value");
    assert_eq!(events.last().unwrap()["kind"], "group_close");

    let line = events
        .iter()
        .find(|e| e["kind"] == "line")
        .expect("one line event");
    assert_eq!(line["label"], "value.count");
    assert_eq!(line["finding"], "after_empty");
    assert_eq!(line["message"], "after is empty");
}

#[test]
fn test_cli_reads_one_side_from_stdin() {
    let dir = TempDir::new().unwrap();
    let after = write_doc(&dir, "after.json", "[1, 2]");

    let mut child = Command::new(env!("CARGO_BIN_EXE_whydiff"))
        .args(["explain", "-", arg(&after), "--name", "items"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");
    child.stdin.take().unwrap().write_all(b"[1, 2]").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(
        stdout_of(&output),
        "items: 🍾 shallow equals (but not ref equals)\n"
    );
}

#[test]
fn test_cli_rejects_stdin_for_both_sides() {
    let output = whydiff(&["explain", "-", "-"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: Invalid input"), "stderr: {stderr}");
}

#[test]
fn test_cli_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let before = write_doc(&dir, "before.json", r#"{"a": {"b": 1}}"#);
    let after = write_doc(&dir, "after.json", r#"{"a": {"b": 2}}"#);
    let config = write_doc(
        &dir,
        "whydiff.toml",
        "max_depth = 0\ntreat_top_level_as_shallow_comparable = false\n",
    );

    let from_file = whydiff(&[
        "explain",
        arg(&before),
        arg(&after),
        "--config",
        arg(&config),
    ]);
    assert_eq!(
        stdout_of(&from_file),
        "▼ value\n  value: ⚡ aborting: depth limit reached\n"
    );

    // One more level reaches `a` before the ceiling stops the traversal
    let overridden = whydiff(&[
        "explain",
        arg(&before),
        arg(&after),
        "--config",
        arg(&config),
        "--max-depth",
        "1",
    ]);
    assert_eq!(
        stdout_of(&overridden),
        "▼ value\n  value.a: ⚡ aborting: depth limit reached\n"
    );
}

#[test]
fn test_cli_negative_max_depth_is_accepted() {
    let dir = TempDir::new().unwrap();
    let before = write_doc(&dir, "before.json", r#"{"a": 1}"#);
    let after = write_doc(&dir, "after.json", r#"{"a": 2}"#);

    let output = whydiff(&[
        "explain",
        arg(&before),
        arg(&after),
        "--max-depth",
        "-1",
    ]);

    assert_eq!(
        stdout_of(&output),
        "▼ value\n  value: ⚡ aborting: depth limit reached\n"
    );
}

#[test]
fn test_cli_exclude_flag_replaces_default_set() {
    let dir = TempDir::new().unwrap();
    let before = write_doc(&dir, "before.json", r#"{"ref": {"x": 1}, "n": 1}"#);
    let after = write_doc(&dir, "after.json", r#"{"ref": {"x": 2}, "n": 1}"#);

    let output = whydiff(&[
        "explain",
        arg(&before),
        arg(&after),
        "--exclude",
        "ref",
    ]);

    assert_eq!(
        stdout_of(&output),
        "▼ value\n  value.ref: skipping excluded field\n"
    );
}

#[test]
fn test_cli_invalid_json_fails_with_source_name() {
    let dir = TempDir::new().unwrap();
    let before = write_doc(&dir, "before.json", "{}");
    let after = write_doc(&dir, "after.json", "{not json");

    let output = whydiff(&["explain", arg(&before), arg(&after)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid JSON"), "stderr: {stderr}");
    assert!(stderr.contains("after.json"), "stderr: {stderr}");
}

#[test]
fn test_cli_unknown_config_key_fails() {
    let dir = TempDir::new().unwrap();
    let before = write_doc(&dir, "before.json", "{}");
    let after = write_doc(&dir, "after.json", "{}");
    let config = write_doc(&dir, "whydiff.toml", "max_dept = 3\n");

    let output = whydiff(&[
        "explain",
        arg(&before),
        arg(&after),
        "--config",
        arg(&config),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid options"), "stderr: {stderr}");
}

#[test]
fn test_cli_missing_file_is_read_error() {
    let output = whydiff(&["explain", "/definitely/not/here.json", "-"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read"), "stderr: {stderr}");
}
