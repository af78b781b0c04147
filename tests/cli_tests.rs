//! Runs the built binary the way a user would.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn jsonexplorer(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_jsonexplorer"))
        .args(args)
        .env("HOME", env!("CARGO_TARGET_TMPDIR"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[test]
fn test_console_help() {
    let output = jsonexplorer(&["--help"], None);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_console_input() {
    let output = jsonexplorer(
        &[
            "--input",
            r#"{"object": "res_object", "object2": "res_object2"}"#,
            "object",
        ],
        None,
    );
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["res_object"]);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_console_input_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.json");
    fs::write(
        &path,
        r#"{"object": [{"name": "alpha"}, {"name": "beta"}, {"name": "charlie"}]}"#,
    )
    .unwrap();

    let output = jsonexplorer(&["--input-file", path.to_str().unwrap(), "object.*.name"], None);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["alpha", "beta", "charlie"]);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_console_table_columns() {
    let output = jsonexplorer(
        &[
            "--input",
            r#"{"object": [{"name": "a", "last_name": "alast"}, {"name": "bob", "last_name": "blast"}]}"#,
            "object.*.{name,last_name}",
        ],
        None,
    );
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "a    alast\nbob  blast\n"
    );
}

#[test]
fn test_console_stdin() {
    let output = jsonexplorer(&["1"], Some(r#"["a", "b"]"#));
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["b"]);
}

#[test]
fn test_console_floats_print_like_json() {
    let output = jsonexplorer(&["--input", r#"{"v": 2.0, "w": 1e20}"#, "{v,w}"], None);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["2.0", "1e20"]);
}

#[test]
fn test_console_raw_output() {
    let output = jsonexplorer(&["--raw", "--input", r#"{"o": {"k": [1, 2]}}"#, "o"], None);
    assert!(output.status.success());
    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed, serde_json::json!({"k": [1, 2]}));
}

#[test]
fn test_console_empty_result() {
    let output = jsonexplorer(&["--input", r#"{"o": []}"#, "o.*"], None);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["0 result"]);
}

#[test]
fn test_console_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "empty_message = \"nothing\"\n").unwrap();

    let output = jsonexplorer(
        &["--config", path.to_str().unwrap(), "--input", "[]", "*"],
        None,
    );
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["nothing"]);
}

#[test]
fn test_console_bad_query_fails() {
    let output = jsonexplorer(&["--input", "{}", "object."], None);
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Invalid query"));
}

#[test]
fn test_console_lookup_error_fails() {
    let output = jsonexplorer(&["--input", r#"{"object": 5}"#, "object.bad"], None);
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Cannot apply 'bad' to a number value"));
}

#[test]
fn test_console_inputs_are_exclusive() {
    let output = jsonexplorer(&["--input", "{}", "--input-file", "x.json", "a"], None);
    assert!(!output.status.success());
}
