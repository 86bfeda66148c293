//! Command-line integration tests
//!
//! Runs the built `intcode` binary inside a scratch directory.

use std::path::Path;
use std::process::{Command, Output};

fn intcode(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_intcode"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("INTCODE_PROFILE")
        .env_remove("INTCODE_FORMAT")
        .env_remove("INTCODE_LOGLEVEL")
        .env_remove("INTCODE_CONFIG")
        .output()
        .expect("Failed to run intcode")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_eval_text_listing() {
    let dir = tempfile::tempdir().unwrap();
    let output = intcode(dir.path(), &["-e", "if (i > 8) { b = 3 }"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "BGT L0, i, .%8\nBR L1\nLAB L0\nCOPY b, .%3\nLAB L1\n"
    );
}

#[test]
fn test_file_json_listing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("prog.js"), "var a = 3; var b = a;").unwrap();
    let output = intcode(dir.path(), &["prog.js", "--format", "json"]);
    assert!(output.status.success());
    let rows: Vec<Vec<String>> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(rows, vec![vec!["COPY", "a", ".%3"], vec!["COPY", "b", "a"]]);
}

#[test]
fn test_project_config_selects_profile() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("intcode.toml"), "profile = \"machine\"\n").unwrap();
    let output = intcode(dir.path(), &["-e", "var s = msg.sender"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "CALLER @t0\nCOPY s, @t0\n");

    let output = intcode(dir.path(), &["-e", "var s = msg.sender", "-p", "branch"]);
    assert_eq!(stdout(&output), "UNP @t0, msg, sender\nCOPY s, @t0\n");
}

#[test]
fn test_errors_exit_non_zero() {
    let dir = tempfile::tempdir().unwrap();

    let output = intcode(dir.path(), &["-e", "f()"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported expression: call expression"), "{stderr}");

    let output = intcode(dir.path(), &["missing.js"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));

    let output = intcode(dir.path(), &["-e", "var = 1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to parse"));
}

#[test]
fn test_unknown_config_key_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("intcode.toml"), "colour = true\n").unwrap();
    let output = intcode(dir.path(), &["-e", "var a = 1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load configuration"));
}

#[test]
fn test_verbose_reports_loaded_config_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("intcode.toml"), "format = \"text\"\n").unwrap();

    let output = intcode(dir.path(), &["-e", "var a = 1", "-v"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Loaded configuration from intcode.toml"), "{stderr}");

    let output = intcode(dir.path(), &["-e", "var a = 1"]);
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Loaded configuration"));
}
